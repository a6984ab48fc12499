//! # Session record
//!
//! The client keeps exactly one piece of durable state: the authenticated
//! [`Session`]. Token and user travel together in a single record so a
//! reader can never observe one without the other.
//!
//! Serialised form (JSON):
//!
//! ```json
//! { "token": "t1", "user": { "id": 1, "username": "bob" } }
//! ```

use serde::{Deserialize, Serialize};

/// The signed-in account as reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// Bearer token plus the user it was issued to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque token sent as `Authorization: Token <token>`.
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: i64, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: User {
                id: user_id,
                username: username.into(),
            },
        }
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Token {}", self.token)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
