//! Registration page view with email/password form.

use dioxus::prelude::*;
use ui::{use_session, SessionState};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut nickname = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to records
    if !session().loading && session().user.is_some() {
        nav.replace(Route::Records {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = nickname().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if n.is_empty() {
                error.set(Some("닉네임을 입력해주세요.".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("올바른 이메일을 입력해주세요.".to_string()));
                return;
            }
            if p.len() < 8 {
                error.set(Some("비밀번호는 8자 이상이어야 합니다.".to_string()));
                return;
            }
            if p != cp {
                error.set(Some("비밀번호가 일치하지 않습니다.".to_string()));
                return;
            }

            loading.set(true);
            match api::register(e, p, n).await {
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
            h1 { class: "auth-title", "회원가입" }
            p { class: "auth-tagline", "duolog 계정을 만들어보세요" }

            form { class: "auth-form", onsubmit: handle_register,
                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                input {
                    class: "auth-input",
                    r#type: "text",
                    placeholder: "닉네임",
                    value: nickname(),
                    oninput: move |evt| nickname.set(evt.value()),
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
                    placeholder: "비밀번호 (8자 이상)",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                input {
                    class: "auth-input",
                    r#type: "password",
                    placeholder: "비밀번호 확인",
                    value: confirm_password(),
                    oninput: move |evt| confirm_password.set(evt.value()),
                }

                button {
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "가입 중..." } else { "가입하기" }
                }
            }

            p { class: "auth-switch",
                "이미 계정이 있으신가요? "
                Link { class: "auth-link", to: Route::Login {}, "로그인" }
            }
        }
    }
}
