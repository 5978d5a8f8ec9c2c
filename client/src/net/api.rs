//! REST client for the account backend.
//!
//! DESIGN
//! ======
//! Every call funnels through `ApiClient::request`, which sends via the
//! `Transport`, maps non-success statuses to `ApiError`, and decodes success
//! bodies into a typed value. Callers get one `Result` shape for all six
//! endpoints instead of branching on `ok` at each call site.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::endpoints::Endpoints;
use super::error::ApiError;
use super::http::{HttpRequest, HttpResponse, Transport};
use super::types::{
    AuthResponse, GoogleAuthUrl, GoogleCallbackRequest, LoginRequest, MeResponse, PortalLinkResponse,
    RegisterRequest, UserProfile,
};

#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self { transport, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn request<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let response = self.transport.send(request).await.map_err(ApiError::Network)?;
        decode_response(&response)
    }

    /// `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection (typically 400/401 with a message) or a
    /// transport/decode failure.
    pub async fn login(&self, body: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.request(HttpRequest::post(self.endpoints.login()).json(to_json(body)?))
            .await
    }

    /// `POST /api/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection or a transport/decode failure.
    pub async fn register(&self, body: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.request(HttpRequest::post(self.endpoints.register()).json(to_json(body)?))
            .await
    }

    /// `GET /api/auth/google` — the provider authorization URL.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection or a transport/decode failure.
    pub async fn google_auth_url(&self) -> Result<GoogleAuthUrl, ApiError> {
        self.request(HttpRequest::get(self.endpoints.google_auth())).await
    }

    /// `POST /api/auth/google/callback` — exchange an authorization code.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection or a transport/decode failure.
    pub async fn google_callback(&self, code: &str) -> Result<AuthResponse, ApiError> {
        let body = GoogleCallbackRequest { code: code.to_owned() };
        self.request(HttpRequest::post(self.endpoints.google_callback()).json(to_json(&body)?))
            .await
    }

    /// `GET /api/auth/me` with the bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` when the token is rejected.
    pub async fn me(&self, token: &str) -> Result<UserProfile, ApiError> {
        let body: MeResponse = self
            .request(HttpRequest::get(self.endpoints.me()).bearer(token))
            .await?;
        Ok(body.data)
    }

    /// `POST /api/auth/customer-portal-link` with the bearer token.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection or a transport/decode failure.
    pub async fn customer_portal_link(&self, token: &str) -> Result<PortalLinkResponse, ApiError> {
        self.request(HttpRequest::post(self.endpoints.customer_portal_link()).bearer(token))
            .await
    }
}

fn to_json<B: serde::Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode_response<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    if !response.is_success() {
        return Err(ApiError::from_response(response));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
