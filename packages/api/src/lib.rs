//! # API crate: REST client for the equipment backend
//!
//! Everything the web and desktop frontends need to talk to the backend:
//! the shared HTTP pipeline, the typed endpoint facade, the wire models, and
//! the session lifecycle built on top of them.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, `Authorization: Token` injection, global 401 handling |
//! | [`auth`] | `register`, `login`, `logout` endpoints |
//! | [`datasets`] | `upload`, `list_datasets`, `dataset`, `dataset_summary`, `download_report`, `delete_dataset` |
//! | [`session`] | [`SessionManager`]: persists the session around the auth endpoints |
//! | [`models`] | Request/response bodies (`AuthResponse`, `Dataset`, `Summary`, ...) |
//! | [`error`] | [`ApiError`], the single error type every call returns |
//!
//! ## Endpoints
//!
//! | Method | Path | Client method |
//! |--------|------|---------------|
//! | POST | `/auth/register/` | [`ApiClient::register`] |
//! | POST | `/auth/login/` | [`ApiClient::login`] |
//! | POST | `/auth/logout/` | [`ApiClient::logout`] |
//! | POST | `/upload/` | [`ApiClient::upload`] |
//! | GET | `/datasets/` | [`ApiClient::list_datasets`] |
//! | GET | `/datasets/{id}/` | [`ApiClient::dataset`] |
//! | GET | `/datasets/{id}/summary/` | [`ApiClient::dataset_summary`] |
//! | GET | `/datasets/{id}/report/` | [`ApiClient::download_report`] |
//! | DELETE | `/datasets/{id}/` | [`ApiClient::delete_dataset`] |

pub mod auth;
pub mod client;
pub mod datasets;
pub mod error;
pub mod models;
pub mod session;

pub use client::ApiClient;
pub use datasets::{report_filename, validate_csv_filename, RETAINED_DATASETS};
pub use error::{ApiError, INVALID_FILE_MESSAGE};
pub use models::{AuthResponse, Dataset, DatasetListItem, Equipment, Summary, TypeDistribution};
pub use session::SessionManager;

pub use store::{ClientConfig, Session, User};
