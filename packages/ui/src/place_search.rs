//! Full-screen place search, opened from the write form's map button.

use dioxus::prelude::*;
use model::{GeoPoint, Place};

/// Searches the place directory for the typed name and hands the chosen hit
/// back. Opens with the write form's place text as the first query.
#[component]
pub fn PlaceSearchModal(
    initial: String,
    near: Option<GeoPoint>,
    on_pick: EventHandler<Place>,
    on_close: EventHandler<()>,
) -> Element {
    let mut input_text = use_signal(|| initial.clone());
    // Committed on submit only; the first search runs with the initial text.
    let mut keyword = use_signal(|| initial.clone());
    // None while a search is in flight.
    let mut results = use_signal(|| Option::<Result<Vec<Place>, String>>::None);

    let _loader = use_resource(move || {
        let keyword = keyword();
        async move {
            results.set(None);
            match api::search_places(keyword, near).await {
                Ok(places) => results.set(Some(Ok(places))),
                Err(e) => results.set(Some(Err(e.to_string()))),
            }
        }
    });

    rsx! {
        div { class: "fullscreen-modal",
            div { class: "fullscreen-header",
                button {
                    class: "fullscreen-close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                span { class: "fullscreen-title", "장소 검색" }
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
                    placeholder: "장소 이름이나 주소",
                    value: input_text(),
                    oninput: move |evt| input_text.set(evt.value()),
                }
                button { class: "search-submit", r#type: "submit", "검색" }
            }
            {match results() {
                None => rsx! {
                    p { class: "search-status", "장소 검색 중 ..." }
                },
                Some(Err(e)) => rsx! {
                    p { class: "search-status error", "장소 찾다가 에러 발생!! {e}" }
                },
                Some(Ok(places)) if places.is_empty() => rsx! {
                    p { class: "search-status", "검색 결과가 없습니다." }
                },
                Some(Ok(places)) => rsx! {
                    div { class: "place-results",
                        for place in places {
                            button {
                                key: "{place.id}",
                                class: "place-row",
                                onclick: {
                                    let place = place.clone();
                                    move |_| on_pick.call(place.clone())
                                },
                                div { class: "place-name", "{place.name}" }
                                div { class: "place-address", "{place.address}" }
                            }
                        }
                    }
                },
            }}
        }
    }
}
