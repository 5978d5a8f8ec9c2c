//! Pricing card used on the home and checkout pages.

use leptos::prelude::*;

#[component]
pub fn PlanCard(
    #[prop(into)] name: String,
    #[prop(into)] price: String,
    #[prop(into)] tagline: String,
    features: Vec<&'static str>,
    #[prop(optional)] highlighted: bool,
    #[prop(optional, into)] badge: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = if highlighted { "plan-card plan-card--highlighted" } else { "plan-card" };

    view! {
        <div class=class>
            {badge.map(|b| view! { <span class="plan-card__badge">{b}</span> })}
            <h2 class="plan-card__name">{name}</h2>
            <div class="plan-card__price">{price}</div>
            <p class="plan-card__tagline">{tagline}</p>
            <ul class="plan-card__features">
                {features.into_iter().map(|f| view! { <li>"✓ " {f}</li> }).collect_view()}
            </ul>
            <div class="plan-card__action">{children()}</div>
        </div>
    }
}
