use dioxus::prelude::*;

use crate::auth::{use_api, use_auth, LogoutButton};
use crate::dashboard::DashboardState;
use crate::dataset_list::DatasetList;
use crate::upload::CsvUpload;
use crate::views::DatasetDetailView;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Signed-in shell: upload and dataset list on the left, details on the right.
#[component]
pub fn DashboardView() -> Element {
    let api = use_api();
    let auth = use_auth();
    let mut dashboard = use_signal(DashboardState::default);
    let mut refresh = use_signal(|| 0u32);

    let _datasets = use_resource(move || {
        let _ = refresh();
        let api = api.clone();
        async move {
            let result = api.list_datasets().await.map_err(|e| {
                tracing::error!("Failed to fetch datasets: {}", e);
                e.to_string()
            });
            dashboard.write().apply_list(result);
        }
    });

    let username = auth()
        .user()
        .map(|u| u.username.clone())
        .unwrap_or_default();
    let state = dashboard();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div { class: "dashboard",
            header { class: "dashboard-header",
                h1 { "Chemical Equipment Visualizer" }
                div { class: "user-info",
                    span { "Welcome, {username}" }
                    LogoutButton { class: "logout-btn" }
                }
            }

            div { class: "dashboard-content",
                aside { class: "sidebar",
                    CsvUpload {
                        on_uploaded: move |id: i64| {
                            dashboard.write().apply_upload(id);
                            *refresh.write() += 1;
                        },
                    }

                    if let Some(message) = state.error() {
                        div { class: "form-error",
                            p { "Failed to load datasets: {message}" }
                            button {
                                class: "link-btn",
                                onclick: move |_| *refresh.write() += 1,
                                "Retry"
                            }
                        }
                    }

                    if state.is_loading() {
                        p { class: "muted", "Loading..." }
                    } else {
                        DatasetList {
                            datasets: state.datasets.clone(),
                            selected: state.selected,
                            on_select: move |id: i64| dashboard.write().select(id),
                        }
                    }
                }

                main { class: "main-content",
                    if let Some(id) = state.selected {
                        DatasetDetailView {
                            dataset_id: id,
                            on_deleted: move |id: i64| {
                                dashboard.write().apply_delete(id);
                                *refresh.write() += 1;
                            },
                        }
                    } else {
                        div { class: "no-selection",
                            p { "Upload a CSV file or select a dataset to view details" }
                        }
                    }
                }
            }
        }
    }
}
