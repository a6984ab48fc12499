//! Authentication endpoints. These only talk to the backend; persisting the
//! resulting session is [`crate::SessionManager`]'s job.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

impl ApiClient {
    /// `POST /auth/register/`. The password is sent twice, as the backend
    /// expects a `password_confirm` field.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let body = RegisterRequest {
            username,
            email,
            password,
            password_confirm: password,
        };
        self.send_json(self.request(Method::POST, "/auth/register/").json(&body))
            .await
    }

    /// `POST /auth/login/`.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest { username, password };
        self.send_json(self.request(Method::POST, "/auth/login/").json(&body))
            .await
    }

    /// `POST /auth/logout/`, invalidating the current token server-side.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "/auth/logout/")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use httpmock::prelude::*;
    use serde_json::json;
    use store::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn test_register_sends_password_confirm() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/register/").json_body(json!({
                    "username": "bob",
                    "email": "bob@example.com",
                    "password": "secret1",
                    "password_confirm": "secret1"
                }));
                then.status(201)
                    .json_body(json!({"token": "t1", "user_id": 1, "username": "bob"}));
            })
            .await;

        let client = ApiClient::with_base_url(&server.base_url(), Rc::new(MemoryStore::new()));
        let response = client.register("bob", "bob@example.com", "secret1").await.unwrap();
        assert_eq!(response.token, "t1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_register_validation_error_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/auth/register/");
                then.status(400).json_body(
                    json!({"username": ["A user with that username already exists."]}),
                );
            })
            .await;

        let client = ApiClient::with_base_url(&server.base_url(), Rc::new(MemoryStore::new()));
        let err = client.register("bob", "b@x.io", "secret1").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "username: A user with that username already exists."
        );
    }
}
