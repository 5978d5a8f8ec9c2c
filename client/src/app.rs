//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::PublicConfig;
use crate::net::api::ApiClient;
use crate::net::endpoints::Endpoints;
use crate::net::http::BrowserTransport;
use crate::pages::{
    auth_success::AuthSuccessPage,
    checkout::CheckoutPage,
    dashboard::DashboardPage,
    google_callback::GoogleCallbackPage,
    home::HomePage,
    login::LoginPage,
    policy::{PrivacyPolicyPage, RefundPolicyPage, TermsPage},
    signup::SignupPage,
};
use crate::state::session::SessionStore;
use crate::state::toast::ToastState;
use crate::util::storage::LocalStorage;

/// REST client used by every page.
pub type Api = ApiClient<BrowserTransport>;
/// Session persisted in `localStorage`.
pub type BrowserSession = SessionStore<LocalStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="AI summaries of news articles, right in your browser."/>
                <link rel="icon" href="/favicon.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, the API client, the session store, and the toast queue,
/// then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PublicConfig::from_build_env();
    let api: Api = ApiClient::new(BrowserTransport, Endpoints::new(&config.api_url));
    let session: BrowserSession = SessionStore::new(LocalStorage);
    let toasts = RwSignal::new(ToastState::default());

    provide_context(config);
    provide_context(api);
    provide_context(session);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/tldr-site.css"/>
        <Title text="TLDR News"/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignupPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("success")) view=AuthSuccessPage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("google"), StaticSegment("callback"))
                    view=GoogleCallbackPage
                />
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("checkout")) view=CheckoutPage/>
                <Route path=StaticSegment("privacy-policy") view=PrivacyPolicyPage/>
                <Route path=StaticSegment("terms") view=TermsPage/>
                <Route path=StaticSegment("refunds-policy") view=RefundPolicyPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
