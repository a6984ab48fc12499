use api::{report_filename, ApiClient, ApiError, Dataset, Summary};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::charts::{ParameterChart, TypeDistributionChart};
use crate::download::save_report;
use crate::format::fixed2;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded { dataset: Dataset, summary: Summary },
    Failed(String),
}

impl DetailState {
    /// State for a fetch issued for `requested` while `current` is selected.
    /// `None` means the selection moved on and the result is dropped.
    pub fn from_fetch(
        requested: i64,
        current: i64,
        result: Result<(Dataset, Summary), ApiError>,
    ) -> Option<Self> {
        if requested != current {
            tracing::debug!("Discarding dataset {} response, {} is selected", requested, current);
            return None;
        }
        Some(match result {
            Ok((dataset, summary)) => DetailState::Loaded { dataset, summary },
            Err(e) => {
                tracing::error!("Failed to fetch dataset {}: {}", requested, e);
                DetailState::Failed(e.to_string())
            }
        })
    }
}

/// Dataset and summary, requested concurrently. Either failing fails both.
pub async fn fetch_detail(api: &ApiClient, id: i64) -> Result<(Dataset, Summary), ApiError> {
    futures::try_join!(api.dataset(id), api.dataset_summary(id))
}

/// Summary cards, charts and equipment table for one dataset.
///
/// Changing `dataset_id` refetches; a response for an id that is no longer
/// shown is dropped.
#[component]
pub fn DatasetDetailView(
    dataset_id: i64,
    /// Called with the id after the dataset was deleted on the backend.
    on_deleted: EventHandler<i64>,
) -> Element {
    // Track the id in a signal so use_resource re-runs when the prop changes
    let mut id_signal = use_signal(|| dataset_id);
    if *id_signal.peek() != dataset_id {
        id_signal.set(dataset_id);
    }

    let api = use_api();
    let mut detail = use_signal(|| DetailState::Loading);
    let mut busy = use_signal(|| false);
    let mut action_error = use_signal(|| Option::<String>::None);

    let fetch_api = api.clone();
    let _loader = use_resource(move || {
        let requested = id_signal();
        let api = fetch_api.clone();
        async move {
            detail.set(DetailState::Loading);
            action_error.set(None);
            let result = fetch_detail(&api, requested).await;
            let current = *id_signal.peek();
            if let Some(state) = DetailState::from_fetch(requested, current, result) {
                detail.set(state);
            }
        }
    });

    let download_api = api.clone();
    let handle_download = move |_| {
        let (id, filename) = match &*detail.read() {
            DetailState::Loaded { dataset, .. } => (dataset.id, report_filename(&dataset.name)),
            _ => return,
        };
        let api = download_api.clone();
        spawn(async move {
            busy.set(true);
            action_error.set(None);
            let saved = match api.download_report(id).await {
                Ok(bytes) => save_report(&filename, &bytes).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            if let Err(message) = saved {
                tracing::error!("Failed to download report for dataset {}: {}", id, message);
                action_error.set(Some(message));
            }
            busy.set(false);
        });
    };

    let delete_api = api.clone();
    let handle_delete = move |_| {
        let id = *id_signal.peek();
        let api = delete_api.clone();
        spawn(async move {
            busy.set(true);
            action_error.set(None);
            match api.delete_dataset(id).await {
                Ok(()) => {
                    tracing::info!("Deleted dataset {}", id);
                    on_deleted.call(id);
                }
                Err(e) => {
                    tracing::error!("Failed to delete dataset {}: {}", id, e);
                    action_error.set(Some(e.to_string()));
                }
            }
            busy.set(false);
        });
    };

    let (dataset, summary) = match detail() {
        DetailState::Loading => {
            return rsx! {
                document::Link { rel: "stylesheet", href: VIEWS_CSS }
                div { class: "loading", "Loading..." }
            }
        }
        DetailState::Failed(message) => {
            return rsx! {
                document::Link { rel: "stylesheet", href: VIEWS_CSS }
                div { class: "error",
                    p { "Failed to load dataset" }
                    p { class: "muted", "{message}" }
                }
            }
        }
        DetailState::Loaded { dataset, summary } => (dataset, summary),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div { class: "dataset-detail",
            div { class: "detail-header",
                h2 { "{dataset.name}" }
                div { class: "detail-actions",
                    button {
                        class: "pdf-btn",
                        disabled: busy(),
                        onclick: handle_download,
                        if busy() { "Working..." } else { "Download PDF" }
                    }
                    button {
                        class: "delete-btn",
                        disabled: busy(),
                        onclick: handle_delete,
                        "Delete"
                    }
                }
            }

            if let Some(message) = action_error() {
                p { class: "form-error", "{message}" }
            }

            div { class: "summary-cards",
                SummaryCard { label: "Total Equipment", value: "{summary.total_count}" }
                SummaryCard { label: "Avg Flowrate", value: fixed2(summary.avg_flowrate) }
                SummaryCard { label: "Avg Pressure", value: fixed2(summary.avg_pressure) }
                SummaryCard { label: "Avg Temperature", value: fixed2(summary.avg_temperature) }
            }

            div { class: "charts-container",
                div { class: "chart-wrapper",
                    TypeDistributionChart { distribution: summary.type_distribution.clone() }
                }
                div { class: "chart-wrapper",
                    ParameterChart { equipment: dataset.equipment.clone() }
                }
            }

            div { class: "data-table-container",
                h3 { "Equipment Data" }
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Type" }
                            th { "Flowrate" }
                            th { "Pressure" }
                            th { "Temperature" }
                        }
                    }
                    tbody {
                        for eq in dataset.equipment.iter() {
                            tr { key: "{eq.id}",
                                td { "{eq.equipment_name}" }
                                td { "{eq.equipment_type}" }
                                td { "{fixed2(eq.flowrate)}" }
                                td { "{fixed2(eq.pressure)}" }
                                td { "{fixed2(eq.temperature)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryCard(label: String, value: String) -> Element {
    rsx! {
        div { class: "summary-card",
            span { class: "card-label", "{label}" }
            span { class: "card-value", "{value}" }
        }
    }
}
