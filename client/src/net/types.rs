//! Wire DTOs for the account backend.
//!
//! DESIGN
//! ======
//! Bodies are decoded into these types at the network boundary so pages never
//! poke at untyped JSON. Decoding is lenient where the backend is known to be
//! loose (unknown tiers, float-encoded counters, `_id` vs `id`) and strict
//! everywhere else.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Subscription tier controlling usage limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Premium,
    Pro,
}

impl SubscriptionTier {
    /// Parse a tier name. Unknown names map to `Free`.
    pub fn from_name(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "premium" => Self::Premium,
            "pro" => Self::Pro,
            _ => Self::Free,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Premium => "Premium",
            Self::Pro => "Pro",
        }
    }

    /// Badge modifier class used by the dashboard stylesheet.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Free => "tier-badge tier-badge--free",
            Self::Premium => "tier-badge tier-badge--premium",
            Self::Pro => "tier-badge tier-badge--pro",
        }
    }

    pub fn is_paid(self) -> bool {
        !matches!(self, Self::Free)
    }
}

impl<'de> Deserialize<'de> for SubscriptionTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Self::Free, Self::from_name))
    }
}

/// The signed-in user as reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ProfileWire")]
pub struct UserProfile {
    /// Backend user identifier; also the subject of subscription notifications.
    pub id: String,
    pub email: String,
    /// Secret key the browser extension sends with summary requests.
    pub api_key: String,
    pub subscription_tier: SubscriptionTier,
    pub requests_remaining: u64,
    /// Paddle subscription id; present once a paid subscription exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_external_id: Option<String>,
}

/// Decoding shape for [`UserProfile`]. Document stores may send `_id`,
/// `id`, or both; `id` wins unless blank.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileWire {
    #[serde(default)]
    id: String,
    #[serde(default, rename = "_id")]
    legacy_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    api_key: String,
    #[serde(default)]
    subscription_tier: SubscriptionTier,
    #[serde(default, deserialize_with = "deserialize_count")]
    requests_remaining: u64,
    #[serde(default)]
    subscription_external_id: Option<String>,
}

impl From<ProfileWire> for UserProfile {
    fn from(wire: ProfileWire) -> Self {
        let id = if wire.id.trim().is_empty() { wire.legacy_id } else { wire.id };
        Self {
            id,
            email: wire.email,
            api_key: wire.api_key,
            subscription_tier: wire.subscription_tier,
            requests_remaining: wire.requests_remaining,
            subscription_external_id: wire.subscription_external_id,
        }
    }
}

impl UserProfile {
    /// Whether the self-service portal can manage this subscription.
    pub fn can_manage_subscription(&self) -> bool {
        self.subscription_tier.is_paid()
            && self
                .subscription_external_id
                .as_deref()
                .is_some_and(|id| !id.is_empty())
    }
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    /// Identifier handed over by the extension when a user upgrades from it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_upgrade_id: Option<String>,
}

/// `POST /api/auth/google/callback` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GoogleCallbackRequest {
    pub code: String,
}

/// Success body shared by login, register, and the OAuth exchange.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub data: Option<AuthData>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthData {
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl AuthResponse {
    /// Token, ignoring empty strings.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.data.as_ref().and_then(|d| d.user.as_ref())
    }
}

/// `GET /api/auth/me` success body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MeResponse {
    pub data: UserProfile,
}

/// `GET /api/auth/google` success body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GoogleAuthUrl {
    #[serde(default)]
    pub url: Option<String>,
}

/// `POST /api/auth/customer-portal-link` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PortalLinkResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl PortalLinkResponse {
    /// The portal URL, only when the backend reported success.
    pub fn success_url(&self) -> Option<&str> {
        if self.status.as_deref() != Some("success") {
            return None;
        }
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

/// Failure body; every backend error carries an optional `message`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Accept integers, integer-valued floats, or null. Negative values clamp to 0.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            if number.as_i64().is_some() {
                return Ok(0);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
            {
                if float <= 0.0 {
                    return Ok(0);
                }
                if float <= u64::MAX as f64 {
                    return Ok(float as u64);
                }
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
