use dioxus::prelude::*;
use ui::views::MyView;

#[component]
pub fn My() -> Element {
    rsx! {
        MyView {}
    }
}
