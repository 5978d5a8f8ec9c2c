//! Runtime settings for the SSR host, read from the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Overrides the Leptos `site-root` when serving `/pkg` and static files.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ServerError::InvalidEnv { name: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            site_root: var("SITE_ROOT").map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
