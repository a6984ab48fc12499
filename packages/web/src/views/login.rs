use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // Signed in (or just signed in): go to the dashboard
    if !auth().loading && auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    rsx! {
        div { class: "auth-page",
            h1 { class: "app-title", "Chemical Equipment Visualizer" }
            LoginView {
                on_switch_to_register: move |_| {
                    nav.push(Route::Register {});
                },
            }
        }
    }
}
