//! Typed failures for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every request resolves to `Result<T, ApiError>`. Pages never branch on raw
//! status codes; they ask for `user_message` with the fallback text that fits
//! the flow, which gives transport, decode, and backend failures the same
//! on-screen shape.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

use super::http::HttpResponse;
use super::types::ErrorBody;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 401. On protected endpoints this invalidates the session.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },
    /// Any other non-success status.
    #[error("backend returned {status}")]
    Backend { status: u16, message: Option<String> },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A success response whose body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success response to an error, keeping the backend message.
    pub fn from_response(response: &HttpResponse) -> Self {
        let message = backend_message(&response.body);
        if response.status == 401 {
            Self::Unauthorized { message }
        } else {
            Self::Backend { status: response.status, message }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Backend-provided message if any, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Unauthorized { message: Some(m) } | Self::Backend { message: Some(m), .. } => m.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Pull `message` out of an error body, ignoring blanks and non-JSON bodies.
fn backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}
