use dioxus::prelude::*;
use ui::views::RegisterView;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if !auth().loading && auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    rsx! {
        div { class: "auth-page",
            h1 { class: "app-title", "Chemical Equipment Visualizer" }
            RegisterView {
                on_switch_to_login: move |_| {
                    nav.push(Route::Login {});
                },
            }
        }
    }
}
