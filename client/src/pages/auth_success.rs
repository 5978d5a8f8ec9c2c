//! Post-authentication confirmation. Copy depends on `?action=`; a `?plan=`
//! from signup adds a checkout link for that plan.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::flows::checkout::Plan;
use crate::routes::{self, AuthAction};

#[component]
pub fn AuthSuccessPage() -> impl IntoView {
    let query = use_query_map();
    let action = move || AuthAction::from_query(query.get().get("action").as_deref());
    let plan = move || Plan::from_query(query.get().get("plan").as_deref());

    view! {
        <div class="auth-page">
            <SiteHeader/>
            <main class="auth-page__main auth-page__main--center">
                <div class="card card--center">
                    <div class="success-mark" aria-hidden="true">"✓"</div>
                    <h1>{move || action().title()}</h1>
                    <p>{move || action().message()}</p>
                    {move || {
                        plan()
                            .map(|plan| {
                                view! {
                                    <a class="btn btn--accent" href=routes::checkout(Some(plan.as_str()))>
                                        {format!("Continue to {}", plan.label())}
                                    </a>
                                }
                            })
                    }}
                    <a class="btn btn--primary" href=routes::DASHBOARD>"Go to Dashboard"</a>
                </div>
            </main>
            <SiteFooter compact=true/>
        </div>
    }
}
