//! # Session lifecycle
//!
//! [`SessionManager`] is the only writer of the persisted session record:
//!
//! | Method | Effect on storage |
//! |--------|-------------------|
//! | [`restore`](SessionManager::restore) | none (reads it; the token is not re-validated) |
//! | [`login`](SessionManager::login) / [`register`](SessionManager::register) | replaced with the new session |
//! | [`logout`](SessionManager::logout) | cleared, even when the backend call fails |
//!
//! The 401 path in [`crate::ApiClient`] also clears storage; that is the one
//! writer outside this module.

use store::Session;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Persists the session around the auth endpoints.
#[derive(Clone, Debug)]
pub struct SessionManager {
    client: ApiClient,
}

impl SessionManager {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Session left over from a previous run. Unreadable storage counts as
    /// signed out.
    pub fn restore(&self) -> Option<Session> {
        match self.client.storage().load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Ignoring unreadable stored session: {}", e);
                None
            }
        }
    }

    /// Sign in and persist the issued session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let response = self.client.login(username, password).await?;
        self.establish(response.into_session())
    }

    /// Create an account and persist the issued session.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, ApiError> {
        let response = self.client.register(username, email, password).await?;
        self.establish(response.into_session())
    }

    /// End the session. The invalidation request may fail (offline, token
    /// already expired); the local session is cleared either way.
    pub async fn logout(&self) -> Result<(), ApiError> {
        if let Err(e) = self.client.logout().await {
            tracing::warn!("Logout request failed, clearing local session anyway: {}", e);
        }
        self.client.storage().clear()?;
        tracing::info!("Signed out");
        Ok(())
    }

    fn establish(&self, session: Session) -> Result<Session, ApiError> {
        self.client.storage().save(&session)?;
        tracing::info!(user = %session.user.username, "Signed in");
        Ok(session)
    }
}
