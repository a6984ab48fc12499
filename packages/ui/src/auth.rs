//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the session lifecycle for everything below it:
//! it builds the [`ApiClient`], hydrates the session from platform storage
//! and resets the state when the backend answers 401.

use api::{ApiClient, ApiError, ClientConfig, Session, SessionManager, User};
use dioxus::prelude::*;

use crate::storage::make_session_storage;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the stored session has been read.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            session: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Drop the session after a 401. Returns true when a session was active,
    /// which is the only case that navigates away; a rejected sign-in stays
    /// on its form.
    pub fn expire(&mut self) -> bool {
        let was_signed_in = self.is_authenticated();
        *self = Self::signed_out();
        was_signed_in
    }
}

/// Get the current authentication state.
/// Returns a signal that updates on login, logout and session expiry.
pub fn use_auth() -> Signal<AuthState> {
    match try_use_context::<Signal<AuthState>>() {
        Some(state) => state,
        None => panic!("use_auth must be used within an AuthProvider"),
    }
}

/// Login, register and logout bound to the provider's state.
pub fn use_auth_actions() -> AuthActions {
    match try_use_context::<AuthActions>() {
        Some(actions) => actions,
        None => panic!("use_auth_actions must be used within an AuthProvider"),
    }
}

/// The shared API client.
pub fn use_api() -> ApiClient {
    use_auth_actions().manager.client().clone()
}

/// Session operations that keep the context state and storage in step.
#[derive(Clone, Debug)]
pub struct AuthActions {
    state: Signal<AuthState>,
    manager: SessionManager,
}

impl AuthActions {
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let session = self.manager.login(username, password).await?;
        let mut state = self.state;
        state.set(AuthState::signed_in(session));
        Ok(())
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let session = self.manager.register(username, email, password).await?;
        let mut state = self.state;
        state.set(AuthState::signed_in(session));
        Ok(())
    }

    /// Signs out locally even when storage could not be cleared; the error is
    /// still returned.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.manager.logout().await;
        let mut state = self.state;
        state.set(AuthState::signed_out());
        result
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);

    let manager = use_hook(|| {
        let client = ApiClient::new(&config, make_session_storage())
            .on_unauthorized(move || expire_session(auth_state));
        SessionManager::new(client)
    });

    use_context_provider(|| auth_state);
    use_context_provider(|| AuthActions {
        state: auth_state,
        manager: manager.clone(),
    });

    // Hydrate once; the token is trusted until a call comes back 401.
    use_effect(move || {
        let mut state = auth_state;
        state.set(AuthState {
            session: manager.restore(),
            loading: false,
        });
    });

    rsx! {
        {children}
    }
}

/// Unauthorized hook: storage is already cleared by the client.
fn expire_session(mut auth_state: Signal<AuthState>) {
    if auth_state.write().expire() {
        redirect_home();
    }
}

/// Hard navigation to the root on web. Desktop has no URL to reload; the
/// launcher switches views off the state change.
fn redirect_home() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href("/") {
                tracing::error!("Failed to redirect after session expiry: {:?}", e);
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let actions = use_auth_actions();
    let mut busy = use_signal(|| false);

    let onclick = move |_| {
        let actions = actions.clone();
        async move {
            busy.set(true);
            if let Err(e) = actions.logout().await {
                tracing::error!("Failed to clear session: {}", e);
            }
            busy.set(false);
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: busy(),
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_loading_and_signed_out() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
        assert_eq!(state.user(), None);
        assert_eq!(state.token(), None);
    }

    #[test]
    fn test_signed_in_exposes_user_and_token_together() {
        let state = AuthState::signed_in(Session::new("t1", 1, "bob"));
        assert!(state.is_authenticated());
        assert!(!state.loading);
        assert_eq!(state.token(), Some("t1"));
        assert_eq!(state.user().map(|u| u.username.as_str()), Some("bob"));
        assert_eq!(state.user().map(|u| u.id), Some(1));
    }

    #[test]
    fn test_signed_out_clears_both() {
        let state = AuthState::signed_out();
        assert!(!state.is_authenticated());
        assert!(!state.loading);
        assert_eq!(state.user(), None);
        assert_eq!(state.token(), None);
    }

    #[test]
    fn test_expire_active_session_redirects() {
        let mut state = AuthState::signed_in(Session::new("t1", 1, "bob"));
        assert!(state.expire());
        assert_eq!(state, AuthState::signed_out());
    }

    #[test]
    fn test_expire_without_session_stays_put() {
        let mut state = AuthState::signed_out();
        assert!(!state.expire());
        assert_eq!(state, AuthState::signed_out());

        // 401 before hydration finished
        let mut state = AuthState::default();
        assert!(!state.expire());
        assert!(!state.loading);
    }
}
