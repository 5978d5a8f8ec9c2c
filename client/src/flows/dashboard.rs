//! Dashboard controller: profile load, notification refresh, portal link,
//! and the low-usage prompt.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the reactive signals; this module owns the decisions. Every
//! operation returns an outcome value the page applies (navigate, render an
//! error, show a toast) so the behavior is testable without a DOM.
//!
//! ```text
//! Loading --no token / 401--> redirect /auth/login
//! Loading --other failure--> Error("Failed to fetch user data")
//! Loading --ok--> Ready(profile) --matching notice--> Loading ...
//! ```

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::http::Transport;
use crate::net::pusher::SubscriptionNotice;
use crate::net::types::{SubscriptionTier, UserProfile};
use crate::routes;
use crate::state::session::{KeyValueStore, SessionStore};

pub const FETCH_FAILED: &str = "Failed to fetch user data";
pub const PORTAL_LINK_FAILED: &str = "Failed to get customer portal link.";
pub const PORTAL_OPEN_FAILED: &str = "Failed to open subscription management. Please try again.";
pub const SUBSCRIPTION_UPDATED: &str = "Subscription updated 🎉";

/// Free-tier remaining-request count at or below which the upgrade prompt
/// appears.
pub const LOW_USAGE_THRESHOLD: u64 = 5;
/// Session-storage key remembering that the prompt was dismissed this tab.
pub const LOW_USAGE_DISMISSED_KEY: &str = "lowUsageModalDismissed";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DashboardPhase {
    #[default]
    Loading,
    Error(String),
    Ready(UserProfile),
}

impl DashboardPhase {
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::Ready(profile) => Some(profile),
            _ => None,
        }
    }
}

/// Result of one profile fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No usable session; leave the dashboard.
    Redirect(&'static str),
    Error(String),
    Ready(UserProfile),
}

impl LoadOutcome {
    /// Phase to render, or `None` when the page is navigating away.
    pub fn into_phase(self) -> Option<DashboardPhase> {
        match self {
            Self::Redirect(_) => None,
            Self::Error(message) => Some(DashboardPhase::Error(message)),
            Self::Ready(profile) => Some(DashboardPhase::Ready(profile)),
        }
    }
}

/// Fetch the signed-in profile and cache it.
pub async fn load<T, S>(api: &ApiClient<T>, session: &SessionStore<S>) -> LoadOutcome
where
    T: Transport,
    S: KeyValueStore,
{
    let Some(token) = session.token() else {
        return LoadOutcome::Redirect(routes::LOGIN);
    };

    match api.me(&token).await {
        Ok(profile) => {
            if let Err(e) = session.store_profile(&profile) {
                leptos::logging::warn!("profile cache write failed: {e}");
            }
            LoadOutcome::Ready(profile)
        }
        Err(ApiError::Unauthorized { .. }) => {
            session.clear();
            LoadOutcome::Redirect(routes::LOGIN)
        }
        Err(e) => {
            leptos::logging::warn!("profile fetch failed: {e}");
            LoadOutcome::Error(FETCH_FAILED.to_owned())
        }
    }
}

/// A notice applies only to the profile currently on screen. Blank ids on
/// either side never match.
pub fn notification_matches(current: Option<&UserProfile>, notice: &SubscriptionNotice) -> bool {
    let Some(current) = current else {
        return false;
    };
    !notice.user_id.is_empty() && !current.id.is_empty() && current.id == notice.user_id
}

/// What the page does after a matching notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationRefresh {
    pub outcome: LoadOutcome,
    pub toast: &'static str,
}

/// Re-fetch the profile when `notice` is for the current user. Returns `None`
/// when the notice is ignored, without touching the network.
pub async fn handle_notification<T, S>(
    api: &ApiClient<T>,
    session: &SessionStore<S>,
    current: Option<&UserProfile>,
    notice: &SubscriptionNotice,
) -> Option<NotificationRefresh>
where
    T: Transport,
    S: KeyValueStore,
{
    if !notification_matches(current, notice) {
        return None;
    }
    let outcome = load(api, session).await;
    Some(NotificationRefresh { outcome, toast: SUBSCRIPTION_UPDATED })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortalOutcome {
    /// Open this URL in a new tab.
    Open(String),
    /// Show this message as an error toast.
    Failed(&'static str),
}

/// Request a self-service billing portal link.
pub async fn customer_portal<T, S>(api: &ApiClient<T>, session: &SessionStore<S>) -> PortalOutcome
where
    T: Transport,
    S: KeyValueStore,
{
    let Some(token) = session.token() else {
        return PortalOutcome::Failed(PORTAL_LINK_FAILED);
    };
    match api.customer_portal_link(&token).await {
        Ok(body) => body
            .success_url()
            .map_or(PortalOutcome::Failed(PORTAL_LINK_FAILED), |url| PortalOutcome::Open(url.to_owned())),
        Err(ApiError::Network(e)) => {
            leptos::logging::warn!("portal link request failed: {e}");
            PortalOutcome::Failed(PORTAL_OPEN_FAILED)
        }
        Err(e) => {
            leptos::logging::warn!("portal link rejected: {e}");
            PortalOutcome::Failed(PORTAL_LINK_FAILED)
        }
    }
}

/// Whether the portal button should be enabled.
pub fn portal_available(profile: &UserProfile, billing_ready: bool) -> bool {
    billing_ready && profile.can_manage_subscription()
}

pub fn show_upgrade_banner(profile: &UserProfile) -> bool {
    profile.subscription_tier == SubscriptionTier::Free
}

pub fn low_usage_modal_visible(profile: &UserProfile, dismissed: bool) -> bool {
    !dismissed
        && profile.subscription_tier == SubscriptionTier::Free
        && profile.requests_remaining <= LOW_USAGE_THRESHOLD
}

pub fn low_usage_dismissed<S: KeyValueStore>(store: &S) -> bool {
    store.get(LOW_USAGE_DISMISSED_KEY).as_deref() == Some("true")
}

pub fn dismiss_low_usage<S: KeyValueStore>(store: &S) {
    if let Err(e) = store.set(LOW_USAGE_DISMISSED_KEY, "true") {
        leptos::logging::warn!("low usage dismissal not saved: {e}");
    }
}

/// Bullets in place of every character, so the field width still hints at
/// the key length.
pub fn mask_api_key(key: &str) -> String {
    "•".repeat(key.chars().count())
}
