//! Write screen: compose and save a new record.

use api::RecordInput;
use dioxus::prelude::*;
use model::RecordDraft;

use crate::record_form::RecordForm;
use crate::time::now_local;

#[component]
pub fn WriteView() -> Element {
    // Bumping the epoch remounts the form, which resets the draft.
    let mut form_epoch = use_signal(|| 0u32);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);

    rsx! {
        div { class: "write-view",
            h1 { class: "view-title", "기록 작성" }
            {match status() {
                Some(Ok(message)) => rsx! {
                    p { class: "view-success", "{message}" }
                },
                Some(Err(message)) => rsx! {
                    p { class: "view-error", "{message}" }
                },
                None => rsx! {},
            }}
            RecordForm {
                key: "{form_epoch}",
                initial: RecordDraft::new(now_local()),
                on_submit: move |draft: RecordDraft| {
                    spawn(async move {
                        let input = RecordInput::from_draft(&draft);
                        match api::create_record(input).await {
                            Ok(_) => {
                                status.set(Some(Ok("기록을 저장했습니다.".to_string())));
                                form_epoch += 1;
                            }
                            Err(e) => status.set(Some(Err(e.to_string()))),
                        }
                    });
                },
            }
        }
    }
}
