use dioxus::prelude::*;
use ui::views::MapView;

#[component]
pub fn Map() -> Element {
    rsx! {
        MapView {}
    }
}
