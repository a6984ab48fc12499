use api::{DatasetListItem, RETAINED_DATASETS};
use dioxus::prelude::*;

use crate::format::upload_date;

/// Secondary line under a dataset name: `3 items | 2024-05-01`.
pub fn dataset_caption(item: &DatasetListItem) -> String {
    format!(
        "{} items | {}",
        item.equipment_count,
        upload_date(&item.uploaded_at)
    )
}

#[component]
pub fn DatasetList(
    datasets: Vec<DatasetListItem>,
    selected: Option<i64>,
    on_select: EventHandler<i64>,
) -> Element {
    rsx! {
        div {
            class: "dataset-list",
            h3 { class: "section-title", "Recent Datasets" }
            if datasets.is_empty() {
                p { class: "muted", "No datasets uploaded yet" }
            } else {
                ul {
                    for item in datasets {
                        li {
                            key: "{item.id}",
                            class: if selected == Some(item.id) { "dataset-item active" } else { "dataset-item" },
                            onclick: move |_| on_select.call(item.id),
                            span { class: "dataset-name", "{item.name}" }
                            span { class: "dataset-meta", "{dataset_caption(&item)}" }
                        }
                    }
                }
                p { class: "muted small", "Only the {RETAINED_DATASETS} most recent uploads are kept" }
            }
        }
    }
}
