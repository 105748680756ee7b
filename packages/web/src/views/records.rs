use dioxus::prelude::*;
use ui::views::RecordsView;

#[component]
pub fn Records() -> Element {
    rsx! {
        RecordsView {}
    }
}
