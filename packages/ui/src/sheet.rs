//! Overlay primitives: modal card, bottom sheet, confirm dialog.

use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "overlay-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// A titled sheet pinned to the bottom edge. Clicking the backdrop closes it.
#[component]
pub fn BottomSheet(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "overlay overlay-bottom",
            onclick: move |_| on_close.call(()),
            div {
                class: "bottom-sheet",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div { class: "bottom-sheet-title", "{title}" }
                {children}
            }
        }
    }
}

/// Modal yes/no question with a destructive confirm button.
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "확인".to_string())] confirm_label: String,
    #[props(default = "취소".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div { class: "confirm-body",
                p { class: "confirm-text", "{message}" }
                div { class: "confirm-actions",
                    button {
                        class: "confirm-cancel",
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    button {
                        class: "confirm-destructive",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
