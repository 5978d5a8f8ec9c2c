//! Subscription tier pill.

use leptos::prelude::*;

use crate::net::types::SubscriptionTier;

#[component]
pub fn TierBadge(tier: SubscriptionTier) -> impl IntoView {
    view! { <span class=tier.badge_class()>{tier.label()}</span> }
}
