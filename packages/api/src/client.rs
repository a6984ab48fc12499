//! # HTTP client
//!
//! [`ApiClient`] is the single request pipeline every endpoint goes through.
//! It plays the part of a request and a response interceptor:
//!
//! - **Outgoing**: paths are joined onto the configured base URL and, when the
//!   [`SessionStorage`] holds a session, `Authorization: Token <token>` is
//!   attached.
//! - **Incoming**: a 401 from *any* endpoint clears the stored session and
//!   fires the unauthorized hook installed with
//!   [`on_unauthorized`](ApiClient::on_unauthorized). The caller still gets
//!   [`ApiError::Unauthorized`]. Other non-success statuses become
//!   [`ApiError::Backend`] with the body's message extracted.
//!
//! The client is cheap to clone (reference-counted internals) and is meant to
//! live in UI context, shared by every view. It is not `Send`: the UI runs on
//! a single-threaded event loop.

use std::fmt;
use std::rc::Rc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use store::{ClientConfig, SessionStorage};

use crate::error::{extract_message, ApiError};

/// Shared handle to the REST backend.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Rc<str>,
    storage: Rc<dyn SessionStorage>,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_unauthorized_hook", &self.on_unauthorized.is_some())
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: &ClientConfig, storage: Rc<dyn SessionStorage>) -> Self {
        Self::with_base_url(config.base_url(), storage)
    }

    pub fn with_base_url(base_url: &str, storage: Rc<dyn SessionStorage>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Rc::from(base_url.trim_end_matches('/')),
            storage,
            on_unauthorized: None,
        }
    }

    /// Install the hook run after a 401 has cleared the stored session.
    pub fn on_unauthorized(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The storage the token is read from.
    pub fn storage(&self) -> &Rc<dyn SessionStorage> {
        &self.storage
    }

    /// Absolute URL for a backend path such as `/datasets/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");
        let builder = self.http.request(method, url);
        match self.storage.token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Token {token}")),
            None => builder,
        }
    }

    /// Send a request and map every non-success status to an [`ApiError`].
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);
        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
            return Err(ApiError::Unauthorized { message });
        }
        tracing::debug!(status = status.as_u16(), ?message, "api error response");
        Err(ApiError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        Ok(self.send(request).await?.json::<T>().await?)
    }

    fn handle_unauthorized(&self) {
        tracing::warn!("backend answered 401, clearing stored session");
        if let Err(e) = self.storage.clear() {
            tracing::error!("Failed to clear session after 401: {}", e);
        }
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }
}
