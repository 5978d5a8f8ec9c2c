//! Logo header shared by the marketing and auth pages.

use leptos::prelude::*;

use crate::routes;

/// Logo linking home, with an optional slot on the right for page actions.
#[component]
pub fn SiteHeader(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <header class="site-header">
            <a href=routes::HOME class="site-header__logo">
                <img src="/images/tldr-news-logo.svg" alt="TLDR News Logo"/>
            </a>
            <div class="site-header__actions">{children.map(|c| c())}</div>
        </header>
    }
}
