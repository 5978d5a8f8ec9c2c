//! HTTP transport seam.
//!
//! Client-side (hydrate): requests go out through `gloo-net`.
//! Server-side (SSR) and native tests: `BrowserTransport` refuses every
//! request, and tests substitute their own `Transport`.

#![allow(clippy::unused_async)]

/// HTTP verbs the backend uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully resolved request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer: Option<String>,
    /// Serialized as a JSON body when present.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn get(url: String) -> Self {
        Self { method: Method::Get, url, bearer: None, body: None }
    }

    pub fn post(url: String) -> Self {
        Self { method: Method::Post, url, bearer: None, body: None }
    }

    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    #[must_use]
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status plus raw body text; decoding happens in `api`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the response, or a transport error string
/// when no response arrived.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            if let Some(token) = request.bearer.as_deref() {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let response = match request.body.as_ref() {
                Some(body) => builder.json(body).map_err(|e| e.to_string())?.send().await,
                None => builder.header("Content-Type", "application/json").send().await,
            }
            .map_err(|e| e.to_string())?;

            let status = response.status();
            let body = response.text().await.map_err(|e| e.to_string())?;
            Ok(HttpResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err("not available on server".to_owned())
        }
    }
}
