//! Record list screen: paged history of saved records.

use api::RecordInput;
use dioxus::prelude::*;
use model::{rows, Record, RecordDraft};

use crate::record_form::RecordForm;
use crate::record_list::RecordList;
use crate::sheet::ModalOverlay;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn RecordsView() -> Element {
    let mut records = use_signal(Vec::<Record>::new);
    let mut has_more = use_signal(|| false);
    let mut loaded = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| Option::<Record>::None);
    let mut save_error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match api::list_records(None, None, PAGE_SIZE).await {
            Ok(page) => {
                records.set(page.records);
                has_more.set(page.has_more);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        loaded.set(true);
    });

    // Keyset cursor: the last row's visit time and id.
    let handle_load_more = move |_| {
        spawn(async move {
            let cursor = records
                .peek()
                .last()
                .map(|r| (r.visited_at, r.id.clone()));
            let Some((at, id)) = cursor else {
                return;
            };
            match api::list_records(Some(at), Some(id), PAGE_SIZE).await {
                Ok(page) => {
                    records.with_mut(|all| all.extend(page.records));
                    has_more.set(page.has_more);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            match api::delete_record(id.clone()).await {
                Ok(()) => records.with_mut(|all| all.retain(|r| r.id != id)),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div { class: "records-view",
            h1 { class: "view-title", "우리 기록" }
            if let Some(message) = error() {
                p { class: "view-error", "{message}" }
            }
            if !loaded() {
                p { class: "view-status", "기록 불러오는 중 ..." }
            } else if records().is_empty() && !has_more() {
                p { class: "view-empty", "아직 기록이 없습니다. 첫 기록을 남겨보세요." }
            } else {
                RecordList {
                    rows: rows(records(), has_more()),
                    on_edit: move |record| {
                        save_error.set(None);
                        editing.set(Some(record));
                    },
                    on_delete: handle_delete,
                    on_load_more: handle_load_more,
                }
            }
        }

        if let Some(record) = editing() {
            ModalOverlay {
                on_close: move |_| editing.set(None),
                div { class: "edit-modal",
                    RecordForm {
                        initial: RecordDraft::from_record(&record),
                        submit_label: "수정하기",
                        on_submit: {
                            let record_id = record.id.clone();
                            move |draft: RecordDraft| {
                                let record_id = record_id.clone();
                                spawn(async move {
                                    let input = RecordInput::from_draft(&draft);
                                    match api::update_record(record_id, input).await {
                                        Ok(updated) => {
                                            records.with_mut(|all| {
                                                if let Some(slot) =
                                                    all.iter_mut().find(|r| r.id == updated.id)
                                                {
                                                    *slot = updated.clone();
                                                }
                                            });
                                            editing.set(None);
                                        }
                                        Err(e) => save_error.set(Some(e.to_string())),
                                    }
                                });
                            }
                        },
                    }
                    if let Some(message) = save_error() {
                        p { class: "view-error", "{message}" }
                    }
                }
            }
        }
    }
}
