//! My screen: the couple card, incoming requests, friends, and the account.

use dioxus::prelude::*;
use model::{PairRequest, PartnerInfo, RelationKind};

use crate::partner_card::PartnerCard;
use crate::session::{use_session, LogoutButton};
use crate::user_search::UserSearchForm;

#[component]
pub fn MyView() -> Element {
    let session = use_session();

    let mut partner = use_signal(|| Option::<PartnerInfo>::None);
    let mut requested_name = use_signal(|| Option::<String>::None);
    let mut friends = use_signal(Vec::<PartnerInfo>::new);
    let mut incoming = use_signal(Vec::<PairRequest>::new);
    let mut error = use_signal(|| Option::<String>::None);
    // Which relation the search modal is open for, if any.
    let mut search_for = use_signal(|| Option::<RelationKind>::None);
    let mut refresh = use_signal(|| 0u32);

    let _loader = use_resource(move || async move {
        let _epoch = refresh();
        match api::get_partner_status().await {
            Ok(status) => {
                partner.set(status.partner);
                requested_name.set(status.requested_name);
                friends.set(status.friends);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
        match api::incoming_requests().await {
            Ok(requests) => incoming.set(requests),
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let respond = move |request_id: String, accept: bool| {
        spawn(async move {
            match api::respond_pair_request(request_id, accept).await {
                Ok(()) => refresh += 1,
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div { class: "my-view",
            h1 { class: "view-title", "마이" }
            if let Some(message) = error() {
                p { class: "view-error", "{message}" }
            }

            PartnerCard {
                partner: partner(),
                requested_name: requested_name(),
                on_open_search: move |_| search_for.set(Some(RelationKind::Couple)),
                on_break_up: move |_| {
                    spawn(async move {
                        match api::break_up().await {
                            Ok(()) => refresh += 1,
                            Err(e) => error.set(Some(e.to_string())),
                        }
                    });
                },
            }

            if !incoming().is_empty() {
                section { class: "request-section",
                    h2 { class: "section-title", "받은 요청" }
                    for request in incoming() {
                        div { key: "{request.id}", class: "request-row",
                            span { class: "request-text",
                                {format!("{}님의 {} 요청", request.requester_name, request.relation.label())}
                            }
                            button {
                                class: "request-accept",
                                onclick: {
                                    let id = request.id.clone();
                                    move |_| respond(id.clone(), true)
                                },
                                "수락"
                            }
                            button {
                                class: "request-decline",
                                onclick: {
                                    let id = request.id.clone();
                                    move |_| respond(id.clone(), false)
                                },
                                "거절"
                            }
                        }
                    }
                }
            }

            section { class: "friend-section",
                div { class: "section-head",
                    h2 { class: "section-title", "친구들" }
                    button {
                        class: "partner-add",
                        onclick: move |_| search_for.set(Some(RelationKind::Friend)),
                        "+"
                    }
                }
                if friends().is_empty() {
                    p { class: "view-empty", "아직 친구가 없습니다." }
                } else {
                    for friend in friends() {
                        div { key: "{friend.user_id}", class: "friend-row", "{friend.nickname}" }
                    }
                }
            }

            section { class: "account-section",
                if let Some(user) = session().user {
                    div { class: "account-card",
                        span { class: "account-nickname", "{user.nickname}" }
                        span { class: "account-email", "{user.email}" }
                    }
                }
                LogoutButton { class: "logout-button" }
            }
        }

        if let Some(relation) = search_for() {
            div { class: "fullscreen-modal",
                UserSearchForm {
                    relation,
                    on_select: move |(target_id, _nickname): (String, String)| {
                        spawn(async move {
                            match api::send_pair_request(target_id, relation).await {
                                Ok(_) => {
                                    search_for.set(None);
                                    refresh += 1;
                                }
                                Err(e) => error.set(Some(e.to_string())),
                            }
                        });
                    },
                    on_close: move |_| search_for.set(None),
                }
            }
        }
    }
}
