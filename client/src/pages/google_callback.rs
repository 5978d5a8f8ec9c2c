//! Google OAuth return page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::{Api, BrowserSession};
use crate::components::site_header::SiteHeader;
use crate::components::spinner::Spinner;
use crate::flows::oauth::{CallbackOutcome, complete_google_auth};
use crate::routes;

#[component]
pub fn GoogleCallbackPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<BrowserSession>();
    let navigate = use_navigate();
    let query = use_query_map();
    let error = RwSignal::new(None::<String>);

    // Runs once after hydration; the exchange code is single-use.
    Effect::new(move |ran: Option<()>| {
        if ran.is_some() {
            return;
        }
        let code = query.with_untracked(|q| q.get("code"));
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match complete_google_auth(&api, &session, code.as_deref()).await {
                CallbackOutcome::Redirect(route) => navigate(&route, NavigateOptions::default()),
                CallbackOutcome::Failed(message) => error.set(Some(message)),
            }
        });
    });

    view! {
        <div class="auth-page">
            <SiteHeader/>
            <main class="auth-page__main auth-page__main--center">
                <Show
                    when=move || error.get().is_some()
                    fallback=|| view! { <Spinner label="Completing authentication..."/> }
                >
                    <div class="card card--center">
                        <div class="error-mark" aria-hidden="true">"✕"</div>
                        <h1>"Authentication Failed"</h1>
                        <p>{move || error.get().unwrap_or_default()}</p>
                        <a class="btn btn--primary" href=routes::LOGIN>"Back to Login"</a>
                    </div>
                </Show>
            </main>
        </div>
    }
}
