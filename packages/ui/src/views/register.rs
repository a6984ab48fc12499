use dioxus::prelude::*;

use crate::auth::use_auth_actions;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Local checks before the register call; the backend validates the rest.
pub fn check_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), &'static str> {
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required");
    }
    if !email.contains('@') {
        return Err("Please enter a valid email");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Account creation form.
#[component]
pub fn RegisterView(on_switch_to_login: EventHandler<()>) -> Element {
    let actions = use_auth_actions();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let actions = actions.clone();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            if let Err(msg) = check_registration(&u, &e, &p, &confirm_password()) {
                error.set(Some(msg.to_string()));
                return;
            }

            loading.set(true);
            if let Err(err) = actions.register(&u, &e, &p).await {
                error.set(Some(err.to_string()));
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div { class: "auth-card",
            h2 { "Create Account" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

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
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
                button {
                    class: "primary-btn",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Register" }
                }
            }

            p { class: "auth-switch",
                "Already have an account? "
                button {
                    class: "link-btn",
                    onclick: move |_| on_switch_to_login.call(()),
                    "Sign in"
                }
            }
        }
    }
}
