//! Dashboard page: account summary, API key, and subscription management.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the profile once on
//! mount, keeps a Pusher subscription open for subscription changes while
//! ready, and loads Paddle.js in the background so the portal button is only
//! enabled once billing is available. Decisions live in `flows::dashboard`;
//! this module applies their outcomes to signals.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{Api, BrowserSession};
use crate::components::api_key_panel::ApiKeyPanel;
use crate::components::low_usage_modal::LowUsageModal;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::spinner::Spinner;
use crate::components::tier_badge::TierBadge;
use crate::components::toast_host::show_toast;
use crate::config::PublicConfig;
use crate::flows::dashboard::{
    self, DashboardPhase, LoadOutcome, PortalOutcome, low_usage_dismissed, low_usage_modal_visible,
};
use crate::net::types::UserProfile;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::storage::SessionStorage;
use crate::{flows, routes};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<BrowserSession>();
    let config = expect_context::<PublicConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let phase = RwSignal::new(DashboardPhase::Loading);
    let billing_ready = RwSignal::new(false);
    let low_usage_hidden = RwSignal::new(true);

    // Apply a load outcome: navigate away, or render the new phase.
    let apply = {
        let navigate = navigate.clone();
        move |outcome: LoadOutcome| match outcome {
            LoadOutcome::Redirect(route) => navigate(route, NavigateOptions::default()),
            other => {
                if let Some(next) = other.into_phase() {
                    phase.set(next);
                }
            }
        }
    };

    let load_api = api.clone();
    let load_apply = apply.clone();
    Effect::new(move |ran: Option<()>| {
        if ran.is_some() {
            return;
        }
        low_usage_hidden.set(low_usage_dismissed(&SessionStorage));
        let api = load_api.clone();
        let apply = load_apply.clone();
        leptos::task::spawn_local(async move {
            apply(dashboard::load(&api, &session).await);
        });
    });

    #[cfg(feature = "hydrate")]
    {
        let subscription = config.realtime_enabled().then(|| {
            let api = api.clone();
            let apply = apply.clone();
            crate::net::realtime::subscribe(
                &config.pusher_key,
                &config.pusher_cluster,
                &config.pusher_channel,
                move |notice| {
                    let current = phase.get_untracked().profile().cloned();
                    let api = api.clone();
                    let apply = apply.clone();
                    leptos::task::spawn_local(async move {
                        let refresh =
                            dashboard::handle_notification(&api, &session, current.as_ref(), &notice).await;
                        if let Some(refresh) = refresh {
                            show_toast(toasts, ToastKind::Success, refresh.toast);
                            apply(refresh.outcome);
                        }
                    });
                },
            )
        });
        if let Some(subscription) = subscription {
            on_cleanup(move || subscription.close());
        }

        let host = crate::util::script::DomScriptHost { global: flows::checkout::PADDLE_GLOBAL };
        let environment = config.paddle_environment;
        let token = config.paddle_client_token.clone();
        let on_ready = Box::new(move || {
            match crate::util::paddle::initialize(environment, &token, |_| {}) {
                Ok(()) => billing_ready.set(true),
                Err(e) => leptos::logging::warn!("paddle init failed: {e}"),
            }
        });
        if let Err(e) = flows::checkout::ensure_billing_script(&host, on_ready) {
            leptos::logging::warn!("paddle load failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (&config, apply);

    let on_logout = move |_| {
        let route = flows::auth::logout(&session);
        navigate(route, NavigateOptions::default());
    };

    let on_portal = Callback::new(move |()| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match dashboard::customer_portal(&api, &session).await {
                PortalOutcome::Open(url) => crate::util::browser::open_in_new_tab(&url),
                PortalOutcome::Failed(message) => show_toast(toasts, ToastKind::Error, message),
            }
        });
    });

    let on_dismiss_low_usage = Callback::new(move |()| {
        dashboard::dismiss_low_usage(&SessionStorage);
        low_usage_hidden.set(true);
    });

    let chrome_store_url = config.chrome_store_url.clone();
    let support_email = config.support_email.clone();

    view! {
        {move || match phase.get() {
            DashboardPhase::Loading => view! { <Spinner label="Loading your dashboard..."/> }.into_any(),
            DashboardPhase::Error(message) => view! { <DashboardError message=message/> }.into_any(),
            DashboardPhase::Ready(profile) => {
                let show_low_usage = low_usage_modal_visible(&profile, low_usage_hidden.get());
                let remaining = profile.requests_remaining;
                let on_logout = on_logout.clone();
                view! {
                    <div class="dashboard-page">
                        <SiteHeader>
                            <button class="btn btn--link" on:click=on_logout>"Log Out"</button>
                        </SiteHeader>
                        <DashboardBody
                            profile=profile
                            billing_ready=billing_ready
                            on_portal=on_portal
                            chrome_store_url=chrome_store_url.clone()
                            support_email=support_email.clone()
                        />
                        <SiteFooter compact=true/>
                        {show_low_usage
                            .then(|| view! { <LowUsageModal remaining=remaining on_dismiss=on_dismiss_low_usage/> })}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn DashboardError(message: String) -> impl IntoView {
    view! {
        <div class="dashboard-error">
            <div class="error-mark" aria-hidden="true">"✕"</div>
            <h2>"Error Loading Dashboard"</h2>
            <p>{message}</p>
            <button class="btn btn--primary" on:click=move |_| crate::util::browser::reload()>
                "Try Again"
            </button>
        </div>
    }
}

#[component]
fn DashboardBody(
    profile: UserProfile,
    billing_ready: RwSignal<bool>,
    on_portal: Callback<()>,
    chrome_store_url: Option<String>,
    support_email: String,
) -> impl IntoView {
    let tier = profile.subscription_tier;
    let upgrade = dashboard::show_upgrade_banner(&profile);
    let manageable = profile.can_manage_subscription();
    let api_key = profile.api_key.clone();
    let portal_enabled = {
        let profile = profile.clone();
        Signal::derive(move || dashboard::portal_available(&profile, billing_ready.get()))
    };

    view! {
        <main class="dashboard-page__main">
            <h1>"Your Dashboard"</h1>
            <p class="dashboard-page__subtitle">"Manage your TLDR News account and API key"</p>

            <div class="dashboard-page__stats">
                <section class="card stat">
                    <h2 class="card__title">"Account"</h2>
                    <div class="stat__value">{profile.email.clone()}</div>
                </section>
                <section class="card stat">
                    <h2 class="card__title">"Subscription"</h2>
                    <TierBadge tier=tier/>
                </section>
                <section class="card stat">
                    <h2 class="card__title">"Usage"</h2>
                    <div class="stat__value">
                        <strong>{profile.requests_remaining}</strong>
                        " requests remaining"
                    </div>
                </section>
            </div>

            <Show when=move || upgrade>
                <section class="upgrade-banner">
                    <h2>"Upgrade Your Plan"</h2>
                    <p>"Get more article summaries and advanced features by upgrading to Premium or Pro."</p>
                    <a class="btn btn--accent" href=routes::checkout(None)>"View Plans"</a>
                </section>
            </Show>

            <section class="card extension">
                <h2 class="card__title">"Set Up Your Chrome Extension"</h2>
                <p class="card__hint">
                    "Get started by installing our Chrome extension to summarize articles directly from your browser."
                </p>
                {chrome_store_url
                    .map(|url| {
                        view! {
                            <a class="btn btn--primary" href=url target="_blank" rel="noopener noreferrer">
                                <img src="/images/chrome-store-icon.svg" alt="" width="20" height="20"/>
                                "Go to Chrome Web Store"
                            </a>
                        }
                    })}
            </section>

            <ApiKeyPanel api_key=Signal::stored(api_key)/>

            <Show when=move || manageable>
                <div class="dashboard-page__manage">
                    <button
                        class="btn btn--danger"
                        disabled=move || !portal_enabled.get()
                        on:click=move |_| on_portal.run(())
                    >
                        "Cancel Subscription"
                    </button>
                </div>
            </Show>

            <section class="support">
                <h2>"Need Help?"</h2>
                <p>"If you have any questions, issues, or feedback, our support team is here to help you."</p>
                <a class="btn btn--primary" href={format!("mailto:{support_email}")}>"Contact Support"</a>
            </section>
        </main>
    }
}
