//! CSV upload widget.
//!
//! Dropping a file and picking one through the hidden `<input type=file>`
//! both end up in the same handler, which validates the extension, sends
//! the upload and reports the new dataset id to the parent.

use api::{validate_csv_filename, ApiError};
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

use crate::auth::use_api;
use crate::icons;
use crate::Icon;

const GENERIC_UPLOAD_ERROR: &str = "Upload failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Dragging,
    Uploading,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadState {
    pub phase: UploadPhase,
    pub error: Option<String>,
}

impl UploadState {
    pub fn drag_over(&mut self) {
        if self.phase == UploadPhase::Idle {
            self.phase = UploadPhase::Dragging;
        }
    }

    pub fn drag_leave(&mut self) {
        if self.phase == UploadPhase::Dragging {
            self.phase = UploadPhase::Idle;
        }
    }

    /// Start uploading `filename`. Returns false when the file is rejected
    /// locally or another upload is still running.
    pub fn begin(&mut self, filename: &str) -> bool {
        if self.phase == UploadPhase::Uploading {
            return false;
        }
        self.phase = UploadPhase::Idle;
        if let Err(e) = validate_csv_filename(filename) {
            self.error = Some(e.to_string());
            return false;
        }
        self.phase = UploadPhase::Uploading;
        self.error = None;
        true
    }

    /// Back to idle. Returns the new dataset id on success.
    pub fn finish(&mut self, result: Result<i64, String>) -> Option<i64> {
        self.phase = UploadPhase::Idle;
        match result {
            Ok(id) => Some(id),
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.phase == UploadPhase::Uploading
    }
}

/// The backend's own message when it sent one, otherwise a generic failure.
pub fn upload_error_message(err: &ApiError) -> String {
    match err {
        ApiError::InvalidFileType { .. } => err.to_string(),
        other => other
            .backend_message()
            .unwrap_or(GENERIC_UPLOAD_ERROR)
            .to_string(),
    }
}

#[component]
pub fn CsvUpload(on_uploaded: EventHandler<i64>) -> Element {
    let api = use_api();
    let mut state = use_signal(UploadState::default);

    let handle_file = use_callback(move |file: FileData| {
        let filename = file.name();
        if !state.write().begin(&filename) {
            return;
        }
        let api = api.clone();
        spawn(async move {
            let result = match file.read_bytes().await {
                Ok(bytes) => api
                    .upload(&filename, bytes.to_vec())
                    .await
                    .map(|dataset| dataset.id)
                    .map_err(|e| {
                        tracing::error!("Upload of {} failed: {}", filename, e);
                        upload_error_message(&e)
                    }),
                Err(e) => {
                    tracing::error!("Could not read {}: {}", filename, e);
                    Err(GENERIC_UPLOAD_ERROR.to_string())
                }
            };
            if let Some(id) = state.write().finish(result) {
                tracing::info!("Uploaded {} as dataset {}", filename, id);
                on_uploaded.call(id);
            }
        });
    });

    let current = state();
    let zone_class = match current.phase {
        UploadPhase::Dragging => "upload-zone dragging",
        UploadPhase::Uploading => "upload-zone uploading",
        UploadPhase::Idle => "upload-zone",
    };

    rsx! {
        div { class: "upload",
            h3 { class: "section-title", "Upload Dataset" }
            label {
                class: "{zone_class}",
                r#for: "csv-file-input",
                ondragover: move |evt: DragEvent| {
                    evt.prevent_default();
                    state.write().drag_over();
                },
                ondragleave: move |_| state.write().drag_leave(),
                ondrop: move |evt: DragEvent| {
                    evt.prevent_default();
                    state.write().drag_leave();
                    if let Some(file) = evt.files().into_iter().next() {
                        handle_file.call(file);
                    }
                },
                Icon { icon: icons::FaFileCsv, width: 28, height: 28 }
                if current.is_uploading() {
                    p { "Uploading..." }
                } else {
                    p { "Drag and drop a CSV file here, or click to browse" }
                }
            }
            input {
                id: "csv-file-input",
                r#type: "file",
                accept: ".csv",
                class: "hidden",
                disabled: current.is_uploading(),
                onchange: move |evt: FormEvent| {
                    if let Some(file) = evt.files().into_iter().next() {
                        handle_file.call(file);
                    }
                },
            }
            if let Some(error) = current.error.clone() {
                p { class: "form-error", "{error}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_cycle() {
        let mut state = UploadState::default();
        state.drag_over();
        assert_eq!(state.phase, UploadPhase::Dragging);
        state.drag_leave();
        assert_eq!(state.phase, UploadPhase::Idle);
    }

    #[test]
    fn test_non_csv_rejected_without_upload() {
        let mut state = UploadState::default();
        assert!(!state.begin("readings.xlsx"));
        assert_eq!(state.phase, UploadPhase::Idle);
        assert_eq!(state.error.as_deref(), Some("Please upload a CSV file"));
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        let mut state = UploadState::default();
        assert!(!state.begin("READINGS.CSV"));
    }

    #[test]
    fn test_drop_while_dragging_starts_upload() {
        let mut state = UploadState::default();
        state.drag_over();
        state.drag_leave();
        assert!(state.begin("plant.csv"));
        assert!(state.is_uploading());
        // A second file is ignored until the first finishes.
        assert!(!state.begin("other.csv"));
        state.drag_over();
        assert_eq!(state.phase, UploadPhase::Uploading);
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut state = UploadState::default();
        state.begin("bad.txt");
        assert!(state.begin("good.csv"));
        assert_eq!(state.error, None);
        assert_eq!(state.finish(Ok(12)), Some(12));
        assert_eq!(state.phase, UploadPhase::Idle);
    }

    #[test]
    fn test_failure_surfaces_message() {
        let mut state = UploadState::default();
        state.begin("plant.csv");
        assert_eq!(state.finish(Err("Missing column: Type".to_string())), None);
        assert_eq!(state.error.as_deref(), Some("Missing column: Type"));
        assert!(!state.is_uploading());
    }

    #[test]
    fn test_error_message_prefers_backend_text() {
        let err = ApiError::Backend {
            status: 400,
            message: Some("Missing required columns".to_string()),
        };
        assert_eq!(upload_error_message(&err), "Missing required columns");

        let bare = ApiError::Backend {
            status: 500,
            message: None,
        };
        assert_eq!(upload_error_message(&bare), "Upload failed");

        let invalid = ApiError::InvalidFileType {
            filename: "x.txt".to_string(),
        };
        assert_eq!(upload_error_message(&invalid), "Please upload a CSV file");
    }
}
