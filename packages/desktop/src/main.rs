use dioxus::prelude::*;
use ui::views::{DashboardView, LoginView, RegisterView};
use ui::AuthProvider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // EQUIPMENT_API_URL may come from a .env next to the binary
    dotenvy::dotenv().ok();
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = ui::load_client_config();
        tracing::info!("Using API at {}", config.base_url());
        config
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        AuthProvider { config: config,
            AuthGate {}
        }
    }
}

/// Dashboard when signed in, otherwise the login/register forms.
///
/// There is no URL to reload on desktop, so logout and session expiry both
/// come through here as an auth state change.
#[component]
fn AuthGate() -> Element {
    let auth = ui::use_auth();
    let mut show_register = use_signal(|| false);

    if auth().loading {
        return rsx! {};
    }
    if auth().is_authenticated() {
        return rsx! {
            DashboardView {}
        };
    }

    rsx! {
        div { class: "auth-page",
            h1 { class: "app-title", "Chemical Equipment Visualizer" }
            if show_register() {
                RegisterView { on_switch_to_login: move |_| show_register.set(false) }
            } else {
                LoginView { on_switch_to_register: move |_| show_register.set(true) }
            }
        }
    }
}
