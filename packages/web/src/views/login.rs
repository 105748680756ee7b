//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{use_session, SessionState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to records
    if !session().loading && session().user.is_some() {
        nav.replace(Route::Records {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("이메일을 입력해주세요.".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("비밀번호를 입력해주세요.".to_string()));
                return;
            }

            loading.set(true);
            match api::login(e, p).await {
                Ok(user) => {
                    session.set(SessionState {
                        user: Some(user),
                        loading: false,
                    });
                    nav.replace(Route::Records {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            h1 { class: "auth-title", "duolog" }
            p { class: "auth-tagline", "둘이 쓰는 기록장" }

            form { class: "auth-form", onsubmit: handle_login,
                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                input {
                    class: "auth-input",
                    r#type: "email",
                    placeholder: "이메일",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }

                input {
                    class: "auth-input",
                    r#type: "password",
                    placeholder: "비밀번호",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "로그인 중..." } else { "로그인" }
                }
            }

            p { class: "auth-switch",
                "계정이 없으신가요? "
                Link { class: "auth-link", to: Route::Register {}, "회원가입" }
            }
        }
    }
}
