use dioxus::prelude::*;
use ui::views::DashboardView;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    if auth().loading {
        return rsx! {};
    }
    if !auth().is_authenticated() {
        // Logout lands here; a 401 reloads from `/` instead.
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        DashboardView {}
    }
}
