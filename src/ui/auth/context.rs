//! Auth context for managing user authentication state
//!
//! This module provides a reactive authentication context that:
//! - Tracks the current user derived from the stored access token
//! - Handles login, logout, registration, and token refresh flows
//! - Restores the session from localStorage after hydration

use leptos::prelude::*;
#[cfg(not(feature = "ssr"))]
use leptos::task::spawn_local;

pub use crate::core::auth::User;

/// Authentication state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    /// Initial state, restoring from localStorage
    #[default]
    Loading,
    /// User is not authenticated
    Unauthenticated,
    /// User is authenticated
    Authenticated(User),
}

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
    /// Loading state for auth operations
    pub loading: RwSignal<bool>,
    /// Error message from last operation
    pub error: RwSignal<Option<String>>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state.get(), AuthState::Authenticated(_))
    }

    /// Get current user (if authenticated)
    pub fn user(&self) -> Option<User> {
        match self.state.get() {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Session over browser localStorage.
///
/// Sessions are cheap: the user is re-derived from the stored access token
/// on construction, so state always reflects what storage currently holds.
#[cfg(not(feature = "ssr"))]
fn client_session() -> crate::core::auth::Session<crate::core::auth::BrowserStorage> {
    crate::core::auth::Session::new(crate::core::auth::BrowserStorage)
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start with Unauthenticated on both server and client to avoid hydration mismatch
    let state = RwSignal::new(AuthState::Unauthenticated);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let ctx = AuthContext {
        state,
        loading,
        error,
    };

    // Restore auth state from localStorage after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            state.set(AuthState::Loading);

            let session = client_session();
            if !session.is_logged_in() {
                // Absent or undecodable tokens: not logged in, never an error
                state.set(AuthState::Unauthenticated);
                return;
            }

            if session.is_token_expired(crate::core::auth::now_timestamp()) {
                // Access token ran out while the tab was closed; exchange the
                // refresh token for a new pair before declaring a user.
                spawn_local(async move {
                    match refresh_session().await {
                        Ok(user) => state.set(AuthState::Authenticated(user)),
                        Err(_) => {
                            client_session().sign_out();
                            state.set(AuthState::Unauthenticated);
                        }
                    }
                });
                return;
            }

            match session.user() {
                Some(user) => state.set(AuthState::Authenticated(user.clone())),
                None => state.set(AuthState::Unauthenticated),
            }
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Login with email and password.
///
/// On success the returned token pair is persisted and the in-memory user
/// re-derived from the access-token claims.
#[cfg(not(feature = "ssr"))]
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    use crate::core::auth::{SignInRequest, api};

    let ctx = use_auth_context();
    ctx.loading.set(true);
    ctx.error.set(None);

    let request = SignInRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let result = async {
        let tokens = api::sign_in(&request).await.map_err(|e| e.to_string())?;

        let mut session = client_session();
        session.store_tokens(&tokens);

        session
            .user()
            .cloned()
            .ok_or_else(|| "Received an unreadable access token".to_string())
    }
    .await;

    ctx.loading.set(false);

    match &result {
        Ok(user) => ctx.state.set(AuthState::Authenticated(user.clone())),
        Err(e) => ctx.error.set(Some(e.clone())),
    }

    result
}

#[cfg(feature = "ssr")]
pub async fn login(_email: &str, _password: &str) -> Result<User, String> {
    Err("Login not available on server".to_string())
}

/// Register a new user.
///
/// Registration does not issue tokens; the caller sends the user to the
/// login page on success.
#[cfg(not(feature = "ssr"))]
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), String> {
    use crate::core::auth::{SignUpRequest, api};

    let ctx = use_auth_context();
    ctx.loading.set(true);
    ctx.error.set(None);

    let request = SignUpRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
    };

    let result = api::sign_up(&request)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string());

    ctx.loading.set(false);

    if let Err(ref e) = result {
        ctx.error.set(Some(e.clone()));
    }

    result
}

#[cfg(feature = "ssr")]
pub async fn register(
    _username: &str,
    _email: &str,
    _password: &str,
    _confirm_password: &str,
) -> Result<(), String> {
    Err("Register not available on server".to_string())
}

/// Sign out the current user.
///
/// Clears both stored tokens and the in-memory user. Purely local; there is
/// no server-side invalidation endpoint.
#[cfg(not(feature = "ssr"))]
pub fn logout() {
    let ctx = use_auth_context();
    client_session().sign_out();
    ctx.state.set(AuthState::Unauthenticated);
}

#[cfg(feature = "ssr")]
pub fn logout() {}

/// Exchange the stored refresh token for a new token pair and persist it.
///
/// The refresh endpoint wants the current username alongside the refresh
/// token; the username is read out of the stored access token, which stays
/// decodable even after it expires.
#[cfg(not(feature = "ssr"))]
pub async fn refresh_session() -> Result<User, String> {
    use crate::core::auth::{RefreshRequest, api, decode_claims};

    let session = client_session();

    let refresh_token = session
        .refresh_token()
        .ok_or_else(|| "No refresh token stored".to_string())?;
    let access_token = session
        .access_token()
        .ok_or_else(|| "No access token stored".to_string())?;
    let claims = decode_claims(&access_token).map_err(|e| e.to_string())?;

    let request = RefreshRequest {
        refresh_token,
        username: claims.username,
    };

    let tokens = api::refresh(&request).await.map_err(|e| e.to_string())?;

    let mut session = client_session();
    session.store_tokens(&tokens);

    session
        .user()
        .cloned()
        .ok_or_else(|| "Received an unreadable access token".to_string())
}

#[cfg(feature = "ssr")]
pub async fn refresh_session() -> Result<User, String> {
    Err("Refresh not available on server".to_string())
}
