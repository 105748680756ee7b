use dioxus::prelude::*;
use ui::views::WriteView;

#[component]
pub fn Write() -> Element {
    rsx! {
        WriteView {}
    }
}
