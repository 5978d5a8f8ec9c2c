//! Google OAuth return leg: exchange the `code` query parameter for a session.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use crate::net::api::ApiClient;
use crate::net::http::Transport;
use crate::routes::{self, AuthAction};
use crate::state::session::{KeyValueStore, SessionStore};

use super::auth::persist_auth;

pub const MISSING_CODE: &str = "Authentication failed. No authorization code received.";
pub const CALLBACK_FAILED: &str = "Failed to authenticate with Google";

/// Result of handling the callback page once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// Session stored; navigate here.
    Redirect(String),
    /// Terminal; the page shows the message and a link back to login.
    Failed(String),
}

/// Exchange `code` with the backend and persist the resulting session.
/// A missing or blank code fails without touching the network.
pub async fn complete_google_auth<T, S>(
    api: &ApiClient<T>,
    session: &SessionStore<S>,
    code: Option<&str>,
) -> CallbackOutcome
where
    T: Transport,
    S: KeyValueStore,
{
    let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
        return CallbackOutcome::Failed(MISSING_CODE.to_owned());
    };

    let response = match api.google_callback(code).await {
        Ok(response) => response,
        Err(e) => {
            leptos::logging::warn!("google callback failed: {e}");
            return CallbackOutcome::Failed(e.user_message(CALLBACK_FAILED));
        }
    };
    match persist_auth(session, &response) {
        Ok(()) => CallbackOutcome::Redirect(routes::auth_success(AuthAction::Google, None)),
        Err(message) => CallbackOutcome::Failed(message),
    }
}
