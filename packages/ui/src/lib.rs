//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::{load_client_config, make_session_storage};

mod auth;
pub use auth::{use_api, use_auth, use_auth_actions, AuthActions, AuthProvider, AuthState, LogoutButton};

pub mod charts;
pub use charts::{ParameterChart, TypeDistributionChart};

pub mod dashboard;
pub use dashboard::{DashboardState, ListPhase};

mod dataset_list;
pub use dataset_list::{dataset_caption, DatasetList};

pub mod download;
pub use download::save_report;

pub mod format;

pub mod upload;
pub use upload::CsvUpload;

pub mod views;
