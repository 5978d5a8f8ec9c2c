//! Email/password login, signup, and the start of the Google OAuth flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages collect form input and hand it here. Each flow validates first,
//! so a rejected form never reaches the transport, then calls the backend
//! once. There is no retry; a failure is terminal for that submission and is
//! returned as field errors for the page to render.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiClient;
use crate::net::http::Transport;
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest};
use crate::routes::{self, AuthAction};
use crate::state::session::{KeyValueStore, SessionStore};

use super::validation::{FieldErrors, validate_login, validate_signup};

pub const LOGIN_FAILED: &str = "Invalid email or password";
pub const SIGNUP_FAILED: &str = "Failed to create account";
pub const GOOGLE_URL_FAILED: &str = "Failed to get Google authentication URL";
pub const GOOGLE_URL_MISSING: &str = "Invalid response from server";
pub const GOOGLE_CONNECT_FAILED: &str = "Failed to connect to Google";
pub const SESSION_SAVE_FAILED: &str = "Signed in, but this browser refused to store the session";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Forwarded from `?upgrade=` when the extension sent the user here.
    pub extension_upgrade_id: Option<String>,
    /// Plan picked on the home page, carried through to checkout.
    pub plan: Option<String>,
}

/// Persist the session from an auth response. A response without a token
/// leaves the store untouched.
pub(crate) fn persist_auth<S: KeyValueStore>(
    session: &SessionStore<S>,
    response: &AuthResponse,
) -> Result<(), String> {
    let Some(token) = response.token() else {
        leptos::logging::warn!("auth response carried no token");
        return Ok(());
    };
    session.establish(token, response.user()).map_err(|e| {
        leptos::logging::warn!("session persist failed: {e}");
        SESSION_SAVE_FAILED.to_owned()
    })
}

/// Validate and submit the login form. On success returns the route to
/// navigate to.
///
/// # Errors
///
/// Returns field errors from validation, or the backend failure message on
/// the password field.
pub async fn submit_login<T, S>(
    api: &ApiClient<T>,
    session: &SessionStore<S>,
    form: &LoginForm,
) -> Result<String, FieldErrors>
where
    T: Transport,
    S: KeyValueStore,
{
    validate_login(&form.email, &form.password)?;

    let body = LoginRequest { email: form.email.trim().to_owned(), password: form.password.clone() };
    let response = api
        .login(&body)
        .await
        .map_err(|e| FieldErrors::on_password(e.user_message(LOGIN_FAILED)))?;
    persist_auth(session, &response).map_err(FieldErrors::on_password)?;
    Ok(routes::auth_success(AuthAction::Login, None))
}

/// Validate and submit the signup form.
///
/// # Errors
///
/// Returns field errors from validation, or the backend failure message on
/// the email field.
pub async fn submit_signup<T, S>(
    api: &ApiClient<T>,
    session: &SessionStore<S>,
    form: &SignupForm,
) -> Result<String, FieldErrors>
where
    T: Transport,
    S: KeyValueStore,
{
    validate_signup(&form.email, &form.password, &form.confirm_password)?;

    let body = RegisterRequest {
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
        extension_upgrade_id: form.extension_upgrade_id.clone().filter(|id| !id.trim().is_empty()),
    };
    let response = api
        .register(&body)
        .await
        .map_err(|e| FieldErrors::on_email(e.user_message(SIGNUP_FAILED)))?;
    persist_auth(session, &response).map_err(FieldErrors::on_email)?;
    Ok(routes::auth_success(AuthAction::Signup, form.plan.as_deref()))
}

/// Ask the backend for the Google authorization URL. The caller redirects
/// the whole window there.
///
/// # Errors
///
/// Returns a message for the email field when the backend fails, the body
/// has no URL, or the request never completed.
pub async fn start_google_auth<T: Transport>(api: &ApiClient<T>) -> Result<String, FieldErrors> {
    match api.google_auth_url().await {
        Ok(body) => body
            .url
            .filter(|u| !u.is_empty())
            .ok_or_else(|| FieldErrors::on_email(GOOGLE_URL_MISSING)),
        Err(crate::net::error::ApiError::Network(e)) => {
            leptos::logging::warn!("google auth url request failed: {e}");
            Err(FieldErrors::on_email(GOOGLE_CONNECT_FAILED))
        }
        Err(e) => Err(FieldErrors::on_email(e.user_message(GOOGLE_URL_FAILED))),
    }
}

/// Drop the session. Returns the route to land on.
pub fn logout<S: KeyValueStore>(session: &SessionStore<S>) -> &'static str {
    session.clear();
    routes::HOME
}
