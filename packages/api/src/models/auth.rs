//! # Authentication payloads
//!
//! Bodies for `/auth/login/` and `/auth/register/`, and the token response
//! both endpoints return. [`AuthResponse::into_session`] turns the response
//! into the [`store::Session`] record the client persists.

use serde::{Deserialize, Serialize};
use store::Session;

/// Body of `POST /auth/login/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/register/`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub password_confirm: &'a str,
}

/// Token issued by login or register.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

impl AuthResponse {
    pub fn into_session(self) -> Session {
        Session::new(self.token, self.user_id, self.username)
    }
}
