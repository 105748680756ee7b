//! The my-page couple card.
//!
//! Rendering is driven by [`PartnerState`]: paired shows the partner and the
//! disconnect control, an open request shows the waiting caption, unpaired
//! shows the search prompt. Disconnecting always goes through the confirm
//! dialog; only its destructive button reaches `on_break_up`.

use dioxus::prelude::*;
use model::{PartnerInfo, PartnerState};

use crate::sheet::ConfirmDialog;

#[component]
pub fn PartnerCard(
    partner: Option<PartnerInfo>,
    requested_name: Option<String>,
    on_open_search: EventHandler<()>,
    on_break_up: EventHandler<()>,
) -> Element {
    // The server answer decides the base state; the confirm dialog is the
    // one transition owned locally.
    let mut confirming = use_signal(|| false);
    let base = PartnerState::from_status(partner.clone(), requested_name.clone());
    let state = if confirming() {
        base.begin_breakup()
    } else {
        base
    };
    // A refetch can drop the pairing while the dialog is up; clear the flag
    // so it cannot re-open against a later partner.
    if *confirming.peek() && !matches!(state, PartnerState::ConfirmingBreakup { .. }) {
        confirming.set(false);
    }

    rsx! {
        div { class: "partner-card",
            div { class: "partner-card-header",
                span { class: "partner-card-title", "커플" }
                if state.can_request() {
                    button {
                        class: "partner-add",
                        onclick: move |_| on_open_search.call(()),
                        "+"
                    }
                }
            }
            {match &state {
                PartnerState::Paired { partner } | PartnerState::ConfirmingBreakup { partner } => rsx! {
                    div { class: "partner-row",
                        span { class: "partner-heart", "♥" }
                        span { class: "partner-nickname", "{partner.nickname}" }
                        button {
                            class: "partner-disconnect",
                            onclick: move |_| confirming.set(true),
                            "연결 해제"
                        }
                    }
                },
                PartnerState::Requested { .. } | PartnerState::Unpaired => rsx! {
                    p { class: "partner-caption",
                        {state.caption().unwrap_or_default()}
                    }
                },
            }}
        }

        if matches!(state, PartnerState::ConfirmingBreakup { .. }) {
            ConfirmDialog {
                message: "정말 연결을 끊으시겠습니까?",
                confirm_label: "해제",
                on_confirm: move |_| {
                    confirming.set(false);
                    on_break_up.call(());
                },
                on_cancel: move |_| confirming.set(false),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The card renders whatever `PartnerState` derives from its props; the
    // derivation itself is covered in `model::partner`. These pin the two
    // couplings the card relies on.

    #[test]
    fn test_add_affordance_only_when_unpaired() {
        assert!(PartnerState::from_status(None, None).can_request());
        assert!(!PartnerState::from_status(None, Some("지은".to_string())).can_request());
        assert!(!PartnerState::from_status(
            Some(PartnerInfo {
                user_id: "u-1".to_string(),
                nickname: "지은".to_string(),
            }),
            None
        )
        .can_request());
    }

    #[test]
    fn test_confirming_keeps_partner_visible() {
        let paired = PartnerState::from_status(
            Some(PartnerInfo {
                user_id: "u-1".to_string(),
                nickname: "지은".to_string(),
            }),
            None,
        );
        match paired.begin_breakup() {
            PartnerState::ConfirmingBreakup { partner } => assert_eq!(partner.nickname, "지은"),
            other => panic!("expected confirm state, got {other:?}"),
        }
    }
}
