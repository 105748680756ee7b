//! Routed layout hosting the four tabs behind the login gate.

use dioxus::prelude::*;
use ui::use_session;
use ui::views::{Tab, TabLayoutView};

use crate::Route;

#[component]
pub fn TabLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Everything under the tabs requires a login.
    if !session().loading && session().user.is_none() {
        nav.replace(Route::Login {});
    }

    let route = use_route::<Route>();
    let active = match route {
        Route::Write {} => Tab::Write,
        Route::Map {} => Tab::Map,
        Route::My {} => Tab::My,
        _ => Tab::Records,
    };

    let on_navigate = move |tab: Tab| {
        let target = match tab {
            Tab::Records => Route::Records {},
            Tab::Write => Route::Write {},
            Tab::Map => Route::Map {},
            Tab::My => Route::My {},
        };
        nav.push(target);
    };

    rsx! {
        TabLayoutView {
            active,
            on_navigate,
            Outlet::<Route> {}
        }
    }
}
