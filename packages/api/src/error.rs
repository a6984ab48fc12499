//! Client error taxonomy.

use serde_json::Value;

/// Message shown when a file without the `.csv` extension is picked.
pub const INVALID_FILE_MESSAGE: &str = "Please upload a CSV file";

/// Every way a call through [`crate::ApiClient`] can fail.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Rejected locally; no request was sent.
    #[error("Please upload a CSV file")]
    InvalidFileType { filename: String },

    /// The backend answered 401. The stored session has already been cleared.
    #[error("{}", .message.as_deref().unwrap_or("Your session has expired, please sign in again"))]
    Unauthorized { message: Option<String> },

    /// Any other non-success status.
    #[error("{}", backend_display(.status, .message))]
    Backend { status: u16, message: Option<String> },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Storage(#[from] store::StorageError),
}

fn backend_display(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => format!("Request failed with status {status}"),
    }
}

impl ApiError {
    /// The message the backend put in its error body, if it sent one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Backend { message, .. } | ApiError::Unauthorized { message } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// HTTP status for errors that came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Understands the shapes the backend produces: `{"error": "..."}`,
/// `{"detail": "..."}`, and field validation maps such as
/// `{"username": ["A user with that username already exists."]}`.
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let obj = value.as_object()?;

    for key in ["error", "detail"] {
        if let Some(msg) = obj.get(key).and_then(Value::as_str) {
            return Some(msg.to_string());
        }
    }
    if let Some(msg) = obj.get("non_field_errors").and_then(first_string) {
        return Some(msg);
    }
    obj.iter()
        .find_map(|(field, v)| first_string(v).map(|msg| format!("{field}: {msg}")))
}

fn first_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(|v| v.as_str().map(str::to_string)),
        _ => None,
    }
}
