//! Keyword search for a couple or friend to pair with.
//!
//! Two text states: the live input and the committed keyword. Only submit
//! and the clear button touch the committed keyword, and only the committed
//! keyword reaches the server. Each search holds a generation id from
//! [`RequestSequence`]; a response whose id is no longer current is thrown
//! away, so overlapping searches resolve last-issued-wins.

use dioxus::prelude::*;
use model::search::{visible_candidates, CandidateRow, RelationKind, RequestSequence};

use crate::time::sleep_ms;

/// Quiet window between committing a keyword and querying the server.
const SEARCH_DEBOUNCE_MS: u64 = 250;

#[component]
pub fn UserSearchForm(
    relation: RelationKind,
    on_select: EventHandler<(String, String)>,
    on_close: EventHandler<()>,
) -> Element {
    let mut input_text = use_signal(String::new);
    let mut keyword = use_signal(String::new);
    let mut sequence = use_signal(RequestSequence::default);
    // None while a search is in flight.
    let mut outcome = use_signal(|| Option::<Result<Vec<CandidateRow>, String>>::None);

    let _query = use_resource(move || {
        let keyword = keyword();
        async move {
            let id = sequence.write().begin();
            outcome.set(None);
            sleep_ms(SEARCH_DEBOUNCE_MS).await;
            if !sequence.peek().is_current(id) {
                return;
            }
            let result = api::search_users(keyword, relation).await;
            if !sequence.write().try_commit(id) {
                return;
            }
            match result {
                Ok(found) => outcome.set(Some(Ok(visible_candidates(
                    found.candidates,
                    &found.pending,
                    relation,
                )))),
                Err(e) => outcome.set(Some(Err(e.to_string()))),
            }
        }
    });

    rsx! {
        div { class: "user-search",
            div { class: "fullscreen-header",
                button {
                    class: "fullscreen-close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                span { class: "fullscreen-title", {format!("{} 찾기", relation.label())} }
            }
            form {
                class: "search-bar",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    keyword.set(input_text().trim().to_string());
                },
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "닉네임으로 검색",
                    value: input_text(),
                    oninput: move |evt| input_text.set(evt.value()),
                }
                button {
                    class: "search-clear",
                    r#type: "button",
                    onclick: move |_| {
                        input_text.set(String::new());
                        keyword.set(String::new());
                    },
                    "지우기"
                }
                button { class: "search-submit", r#type: "submit", "검색" }
            }
            {match outcome() {
                None => rsx! {
                    p { class: "search-status", "유저 검색 중 ..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "search-status error", "유저 찾다가 에러 발생!! {e}" }
                },
                Some(Ok(rows)) if rows.is_empty() => rsx! {
                    p { class: "search-status", "검색 결과가 없습니다." }
                },
                Some(Ok(rows)) => rsx! {
                    div { class: "user-results",
                        for row in rows {
                            div { key: "{row.candidate.user_id}", class: "user-row",
                                span { class: "user-nickname", "{row.candidate.nickname}" }
                                if row.waiting {
                                    span { class: "user-waiting", "요청 수락 대기중" }
                                } else {
                                    button {
                                        class: "user-request",
                                        onclick: {
                                            let id = row.candidate.user_id.clone();
                                            let nickname = row.candidate.nickname.clone();
                                            move |_| on_select.call((id.clone(), nickname.clone()))
                                        },
                                        {format!("{} 요청", relation.label())}
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
