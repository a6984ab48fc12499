use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Dashboard, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Web builds only see the compile-time EQUIPMENT_API_URL.
    let config = use_hook(|| {
        let config = ui::load_client_config();
        tracing::info!("Using API at {}", config.base_url());
        config
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        AuthProvider { config: config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the dashboard or the login page.
///
/// Session expiry hard-navigates here, so this is also where a 401 lands.
#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().loading {
        if auth().is_authenticated() {
            nav.replace(Route::Dashboard {});
        } else {
            nav.replace(Route::Login {});
        }
    }

    rsx! {}
}
