//! Plan selection and Paddle checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Paddle.js is loaded on demand from its CDN and drives an overlay checkout.
//! This module builds the option objects handed to it and interprets the
//! events it emits; `util::paddle` does the JS calls. Failures are logged,
//! not surfaced: the page simply stays put.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::PublicConfig;
use crate::routes;
use crate::util::script::{OnLoad, ScriptHost, ScriptLoad, ensure_script};

pub const PADDLE_SCRIPT_URL: &str = "https://cdn.paddle.com/paddle/v2/paddle.js";
/// `window` property Paddle.js defines once loaded.
pub const PADDLE_GLOBAL: &str = "Paddle";
pub const CHECKOUT_COMPLETED: &str = "checkout.completed";

/// Paid plans offered in checkout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plan {
    Premium,
    Pro,
}

impl Plan {
    pub const ALL: [Self; 2] = [Self::Premium, Self::Pro];

    /// Parse `?plan=`. Unknown values select nothing.
    pub fn from_query(raw: Option<&str>) -> Option<Self> {
        match raw?.trim().to_ascii_lowercase().as_str() {
            "premium" => Some(Self::Premium),
            "pro" => Some(Self::Pro),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Pro => "pro",
        }
    }

    pub fn price_id(self, config: &PublicConfig) -> &str {
        match self {
            Self::Premium => &config.premium_price_id,
            Self::Pro => &config.pro_price_id,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Premium => "Premium Plan",
            Self::Pro => "Pro Plan",
        }
    }

    pub fn price(self) -> &'static str {
        match self {
            Self::Premium => "$1.99/month",
            Self::Pro => "$9.99/month",
        }
    }

    pub fn features(self) -> [&'static str; 2] {
        match self {
            Self::Premium => ["500 article summaries per month", "Email support"],
            Self::Pro => ["5000 article summaries per month", "Priority support"],
        }
    }
}

/// Options for `Paddle.Checkout.open`. The customer block is omitted when no
/// email is known so Paddle asks for one.
pub fn checkout_options(price_id: &str, email: Option<&str>) -> Value {
    let mut options = json!({
        "items": [{ "priceId": price_id, "quantity": 1 }],
        "settings": { "displayMode": "overlay", "theme": "light", "locale": "en" }
    });
    if let Some(email) = email.map(str::trim).filter(|e| !e.is_empty()) {
        options["customer"] = json!({ "email": email });
    }
    options
}

/// Options for `Paddle.Initialize`, minus the event callback.
pub fn init_options(client_token: &str) -> Value {
    json!({ "token": client_token })
}

/// An event delivered to the Paddle event callback.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CheckoutEvent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data: Value,
}

impl CheckoutEvent {
    /// Events without a name decode as an empty name.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Where to go after this event, if anywhere.
    pub fn completion_route(&self) -> Option<&'static str> {
        (self.name == CHECKOUT_COMPLETED).then_some(routes::DASHBOARD)
    }
}

/// Load Paddle.js at most once per document; `on_ready` runs when the
/// global is usable.
///
/// # Errors
///
/// Returns the host failure when the script tag cannot be created.
pub fn ensure_billing_script<H: ScriptHost>(host: &H, on_ready: OnLoad) -> Result<ScriptLoad, String> {
    ensure_script(host, PADDLE_SCRIPT_URL, on_ready)
}
