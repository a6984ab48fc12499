use dioxus::prelude::*;

use crate::auth::use_auth_actions;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Username/password sign-in form.
#[component]
pub fn LoginView(on_switch_to_register: EventHandler<()>) -> Element {
    let actions = use_auth_actions();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let actions = actions.clone();
        spawn(async move {
            error.set(None);
            let u = username().trim().to_string();
            let p = password();
            if u.is_empty() || p.is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }

            loading.set(true);
            if let Err(e) = actions.login(&u, &p).await {
                error.set(Some(e.to_string()));
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div { class: "auth-card",
            h2 { "Sign In" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "primary-btn",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p { class: "auth-switch",
                "Don't have an account? "
                button {
                    class: "link-btn",
                    onclick: move |_| on_switch_to_register.call(()),
                    "Register"
                }
            }
        }
    }
}
