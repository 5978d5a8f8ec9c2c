//! Public build-time configuration for the browser bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Values are baked in with `option_env!` when the WASM bundle is compiled,
//! so nothing here may be secret. The SSR build reads the same values, which
//! keeps server-rendered markup and hydrated markup in agreement.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "https://news-summarizer-api-gbih.onrender.com";
pub const DEFAULT_PUSHER_CLUSTER: &str = "us2";
pub const DEFAULT_PUSHER_CHANNEL: &str = "user-subscription-channel";
pub const DEFAULT_PREMIUM_PRICE_ID: &str = "pri_01jq25xbe2b5qvqxfn7cc1zsq0";
pub const DEFAULT_PRO_PRICE_ID: &str = "pri_01jq26fd1bshzrn3zm4cjs6mwa";
pub const DEFAULT_SUPPORT_EMAIL: &str = "un.papelitoblanco@gmail.com";

/// Paddle environment selected at build time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaddleEnvironment {
    Sandbox,
    #[default]
    Production,
}

impl PaddleEnvironment {
    /// Map a build flag to an environment. `development` and `sandbox` select
    /// the sandbox; anything else (including unset) is production.
    pub fn from_flag(raw: Option<&str>) -> Self {
        match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("development" | "sandbox") => Self::Sandbox,
            _ => Self::Production,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }
}

/// Everything the browser needs to talk to the backend, Pusher, and Paddle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicConfig {
    pub api_url: String,
    pub pusher_key: String,
    pub pusher_cluster: String,
    pub pusher_channel: String,
    pub paddle_client_token: String,
    pub paddle_environment: PaddleEnvironment,
    pub premium_price_id: String,
    pub pro_price_id: String,
    pub chrome_store_url: Option<String>,
    pub support_email: String,
}

impl PublicConfig {
    /// Configuration compiled into this build.
    ///
    /// Recognized variables: `TLDR_API_URL`, `TLDR_PUSHER_KEY`,
    /// `TLDR_PUSHER_CLUSTER`, `TLDR_PUSHER_CHANNEL`,
    /// `TLDR_PADDLE_CLIENT_TOKEN`, `TLDR_PADDLE_ENV`,
    /// `TLDR_PADDLE_PRICE_PREMIUM`, `TLDR_PADDLE_PRICE_PRO`,
    /// `TLDR_CHROME_STORE_URL`, `TLDR_SUPPORT_EMAIL`.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                "TLDR_API_URL" => option_env!("TLDR_API_URL"),
                "TLDR_PUSHER_KEY" => option_env!("TLDR_PUSHER_KEY"),
                "TLDR_PUSHER_CLUSTER" => option_env!("TLDR_PUSHER_CLUSTER"),
                "TLDR_PUSHER_CHANNEL" => option_env!("TLDR_PUSHER_CHANNEL"),
                "TLDR_PADDLE_CLIENT_TOKEN" => option_env!("TLDR_PADDLE_CLIENT_TOKEN"),
                "TLDR_PADDLE_ENV" => option_env!("TLDR_PADDLE_ENV"),
                "TLDR_PADDLE_PRICE_PREMIUM" => option_env!("TLDR_PADDLE_PRICE_PREMIUM"),
                "TLDR_PADDLE_PRICE_PRO" => option_env!("TLDR_PADDLE_PRICE_PRO"),
                "TLDR_CHROME_STORE_URL" => option_env!("TLDR_CHROME_STORE_URL"),
                "TLDR_SUPPORT_EMAIL" => option_env!("TLDR_SUPPORT_EMAIL"),
                _ => None,
            }
            .map(str::to_owned)
        })
    }

    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_owned());

        Self {
            api_url: or("TLDR_API_URL", DEFAULT_API_URL).trim_end_matches('/').to_owned(),
            pusher_key: or("TLDR_PUSHER_KEY", ""),
            pusher_cluster: or("TLDR_PUSHER_CLUSTER", DEFAULT_PUSHER_CLUSTER),
            pusher_channel: or("TLDR_PUSHER_CHANNEL", DEFAULT_PUSHER_CHANNEL),
            paddle_client_token: or("TLDR_PADDLE_CLIENT_TOKEN", ""),
            paddle_environment: PaddleEnvironment::from_flag(get("TLDR_PADDLE_ENV").as_deref()),
            premium_price_id: or("TLDR_PADDLE_PRICE_PREMIUM", DEFAULT_PREMIUM_PRICE_ID),
            pro_price_id: or("TLDR_PADDLE_PRICE_PRO", DEFAULT_PRO_PRICE_ID),
            chrome_store_url: get("TLDR_CHROME_STORE_URL"),
            support_email: or("TLDR_SUPPORT_EMAIL", DEFAULT_SUPPORT_EMAIL),
        }
    }

    /// Realtime notifications are only wired up when a Pusher key was provided.
    pub fn realtime_enabled(&self) -> bool {
        !self.pusher_key.is_empty()
    }
}

impl Default for PublicConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
