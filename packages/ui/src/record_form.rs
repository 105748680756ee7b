//! The record write form: a controlled draft editor.
//!
//! Every field edits a [`RecordDraft`] held in a signal; nothing is checked
//! until the submit button runs [`RecordDraft::validate`]. Category, score,
//! and the visit time go through their own pickers, the place name can be
//! resolved against the place directory, and the text fields color their
//! underline while focused.

use dioxus::prelude::*;
use model::format::{format_amount, format_form_date, parse_amount};
use model::RecordDraft;

use crate::pickers::{CategorySheet, DateTimePicker, ScoreSheet};
use crate::place_search::PlaceSearchModal;

/// Text fields that track focus for the underline cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Amount,
    Place,
    Detail,
}

fn field_class(focus: Option<Field>, field: Field) -> &'static str {
    if focus == Some(field) {
        "form-field focused"
    } else {
        "form-field"
    }
}

/// Draft editor for a new or existing record. The caller owns persistence;
/// a valid draft is reported through `on_submit` untouched.
#[component]
pub fn RecordForm(
    initial: RecordDraft,
    #[props(default = "기록하기".to_string())] submit_label: String,
    on_submit: EventHandler<RecordDraft>,
) -> Element {
    let mut draft = use_signal(|| initial.clone());
    let mut focus = use_signal(|| Option::<Field>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let mut show_category = use_signal(|| false);
    let mut show_score = use_signal(|| false);
    let mut show_picker = use_signal(|| false);
    let mut show_place_search = use_signal(|| false);

    let current = draft();
    let amount_text = if current.amount > 0 {
        format_amount(current.amount)
    } else {
        String::new()
    };
    let score_text = if current.score == 0 {
        "미평가".to_string()
    } else {
        format!("{}점", current.score)
    };
    let place_placeholder = if current.is_dutch {
        "데이트한 장소를 입력해주세요"
    } else {
        "지출한 장소를 입력해주세요"
    };
    let can_search_place = !current.place_name.trim().is_empty();

    let handle_submit = move |_| {
        let current = draft();
        match current.validate() {
            Ok(()) => {
                error.set(None);
                on_submit.call(current);
            }
            Err(issue) => error.set(Some(issue.to_string())),
        }
    };

    rsx! {
        div { class: "record-form",
            // 개인지출 / 데이트 segmented toggle
            div { class: "form-segment",
                button {
                    class: if !current.is_dutch { "segment-button selected" } else { "segment-button" },
                    onclick: move |_| draft.with_mut(|d| d.is_dutch = false),
                    "개인지출"
                }
                button {
                    class: if current.is_dutch { "segment-button selected" } else { "segment-button" },
                    onclick: move |_| draft.with_mut(|d| d.is_dutch = true),
                    "데이트"
                }
            }

            div { class: field_class(focus(), Field::Amount),
                label { class: "form-label", "금액" }
                div { class: "amount-row",
                    input {
                        class: "form-input",
                        r#type: "text",
                        inputmode: "numeric",
                        placeholder: "금액을 입력해주세요",
                        value: amount_text,
                        onfocus: move |_| focus.set(Some(Field::Amount)),
                        onblur: move |_| focus.set(None),
                        oninput: move |evt| {
                            draft.with_mut(|d| d.amount = parse_amount(&evt.value()));
                        },
                    }
                    span { class: "amount-suffix", "원" }
                }
            }

            div { class: "form-field",
                label { class: "form-label", "카테고리" }
                button {
                    class: "form-select",
                    onclick: move |_| show_category.set(true),
                    {current.category.clone()}
                }
            }

            div { class: "form-field",
                label { class: "form-label", "날짜" }
                button {
                    class: "form-select",
                    onclick: move |_| show_picker.set(true),
                    {format_form_date(current.visited_at)}
                }
            }

            div { class: "form-field",
                label { class: "form-label", "만족도" }
                button {
                    class: "form-select",
                    onclick: move |_| show_score.set(true),
                    "{score_text}"
                }
            }

            div { class: field_class(focus(), Field::Place),
                label { class: "form-label", "장소" }
                div { class: "place-input-row",
                    input {
                        class: "form-input",
                        r#type: "text",
                        placeholder: place_placeholder,
                        value: current.place_name.clone(),
                        onfocus: move |_| focus.set(Some(Field::Place)),
                        onblur: move |_| focus.set(None),
                        oninput: move |evt| {
                            draft.with_mut(|d| d.place_name = evt.value());
                        },
                    }
                    button {
                        class: "place-search-button",
                        disabled: !can_search_place,
                        onclick: move |_| show_place_search.set(true),
                        "지도 검색"
                    }
                }
            }

            div { class: field_class(focus(), Field::Detail),
                label { class: "form-label", "상세 내역" }
                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "먹은 것, 산 것 (쉼표로 구분)",
                    value: current.menu_text.clone(),
                    onfocus: move |_| focus.set(Some(Field::Detail)),
                    onblur: move |_| focus.set(None),
                    oninput: move |evt| {
                        draft.with_mut(|d| d.menu_text = evt.value());
                    },
                }
            }

            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }

            button {
                class: "form-submit",
                onclick: handle_submit,
                "{submit_label}"
            }
        }

        if show_category() {
            CategorySheet {
                current: current.category.clone(),
                on_pick: move |category| {
                    draft.with_mut(|d| d.category = category);
                    show_category.set(false);
                },
                on_close: move |_| show_category.set(false),
            }
        }

        if show_score() {
            ScoreSheet {
                current: current.score,
                on_pick: move |picked| {
                    draft.with_mut(|d| d.pick_score(picked));
                    show_score.set(false);
                },
                on_close: move |_| show_score.set(false),
            }
        }

        if show_picker() {
            DateTimePicker {
                initial: current.visited_at,
                on_confirm: move |at| {
                    draft.with_mut(|d| d.visited_at = at);
                    show_picker.set(false);
                },
                on_cancel: move |_| show_picker.set(false),
            }
        }

        if show_place_search() {
            PlaceSearchModal {
                initial: current.place_name.clone(),
                near: None,
                on_pick: move |place: model::Place| {
                    draft.with_mut(|d| d.place_name = place.name);
                    show_place_search.set(false);
                },
                on_close: move |_| show_place_search.set(false),
            }
        }
    }
}
