//! Bottom-sheet selectors and the visit date/time picker.

use chrono::NaiveDateTime;
use dioxus::prelude::*;
use model::format::{format_datetime_local, min_visited_at, parse_datetime_local};
use model::CATEGORIES;

use crate::sheet::{BottomSheet, ModalOverlay};

/// Category chooser. Picking a row reports the category; the parent closes
/// the sheet in response.
#[component]
pub fn CategorySheet(
    current: String,
    on_pick: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        BottomSheet {
            title: "카테고리",
            on_close: move |_| on_close.call(()),
            div { class: "sheet-options",
                for category in CATEGORIES {
                    button {
                        key: "{category}",
                        class: if category == current { "sheet-option selected" } else { "sheet-option" },
                        onclick: move |_| on_pick.call(category.to_string()),
                        "{category}"
                    }
                }
            }
        }
    }
}

/// Satisfaction score chooser, 1 to 5 stars. Picking the current score again
/// is how a rating is cleared; [`model::RecordDraft::pick_score`] applies
/// that rule on the parent's draft.
#[component]
pub fn ScoreSheet(current: u8, on_pick: EventHandler<u8>, on_close: EventHandler<()>) -> Element {
    rsx! {
        BottomSheet {
            title: "만족도",
            on_close: move |_| on_close.call(()),
            div { class: "sheet-options",
                for score in 1..=5u8 {
                    button {
                        key: "{score}",
                        class: if score == current { "sheet-option selected" } else { "sheet-option" },
                        onclick: move |_| on_pick.call(score),
                        span { class: "score-stars", {"★".repeat(score as usize)} }
                        span { class: "score-count", "{score}점" }
                    }
                }
            }
        }
    }
}

/// What the picker does with a confirmed input value. Unparseable input and
/// anything before the 2010-01-01 floor are rejected.
fn accept_picked(value: &str) -> Option<NaiveDateTime> {
    parse_datetime_local(value).filter(|at| *at >= min_visited_at())
}

/// Modal date/time picker for the visit timestamp.
///
/// Cancel leaves the caller's value untouched; confirm reports exactly the
/// chosen time. The browser enforces the minimum through the input's `min`
/// attribute and [`accept_picked`] re-checks it on confirm.
#[component]
pub fn DateTimePicker(
    initial: NaiveDateTime,
    on_confirm: EventHandler<NaiveDateTime>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut value = use_signal(|| format_datetime_local(initial));
    let acceptable = accept_picked(&value()).is_some();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div { class: "picker-body",
                div { class: "picker-title", "언제 다녀오셨나요?" }
                input {
                    class: "picker-input",
                    r#type: "datetime-local",
                    min: format_datetime_local(min_visited_at()),
                    value: value(),
                    oninput: move |evt| value.set(evt.value()),
                }
                div { class: "picker-actions",
                    button {
                        class: "picker-cancel",
                        onclick: move |_| on_cancel.call(()),
                        "취소"
                    }
                    button {
                        class: "picker-confirm",
                        disabled: !acceptable,
                        onclick: move |_| {
                            if let Some(at) = accept_picked(&value()) {
                                on_confirm.call(at);
                            }
                        },
                        "확인"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_accepts_dates_from_2010() {
        let picked = accept_picked("2020-03-14T19:30").unwrap();
        let expected = NaiveDate::from_ymd_opt(2020, 3, 14)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        assert_eq!(picked, expected);

        // The floor itself is allowed
        assert_eq!(accept_picked("2010-01-01T00:00"), Some(min_visited_at()));
    }

    #[test]
    fn test_rejects_before_2010() {
        assert_eq!(accept_picked("2009-12-31T23:59"), None);
        assert_eq!(accept_picked("1999-06-01T12:00"), None);
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(accept_picked(""), None);
        assert_eq!(accept_picked("next tuesday"), None);
    }
}
