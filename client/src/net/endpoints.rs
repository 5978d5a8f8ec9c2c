//! Absolute backend endpoint URLs.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Resolves fixed API paths against a configurable base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self { base: base.trim().trim_end_matches('/').to_owned() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn join(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub fn login(&self) -> String {
        self.join("/api/auth/login")
    }

    pub fn register(&self) -> String {
        self.join("/api/auth/register")
    }

    pub fn google_auth(&self) -> String {
        self.join("/api/auth/google")
    }

    pub fn google_callback(&self) -> String {
        self.join("/api/auth/google/callback")
    }

    pub fn me(&self) -> String {
        self.join("/api/auth/me")
    }

    pub fn customer_portal_link(&self) -> String {
        self.join("/api/auth/customer-portal-link")
    }

    /// `POST /api/summary/generate`, called by the extension with the API key.
    pub fn generate_summary(&self) -> String {
        self.join("/api/summary/generate")
    }
}
