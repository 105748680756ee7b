use dioxus::prelude::*;
use views::{Map, My, Records, TabLayout, Write};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(TabLayout)]
        #[route("/records")]
        Records {},
        #[route("/write")]
        Write {},
        #[route("/map")]
        Map {},
        #[route("/my")]
        My {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Records {});
    rsx! {}
}
