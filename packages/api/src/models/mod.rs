//! Wire models exchanged with the REST backend.

mod auth;
mod dataset;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use dataset::{Dataset, DatasetListItem, Equipment, Summary, TypeDistribution};
