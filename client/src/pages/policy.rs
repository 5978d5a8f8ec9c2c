//! Privacy, terms, and refund policy pages rendered from bundled Markdown.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::routes;
use crate::util::markdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    Privacy,
    Terms,
    Refunds,
}

impl Policy {
    pub fn title(self) -> &'static str {
        match self {
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms & Conditions",
            Self::Refunds => "Refund Policy",
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            Self::Privacy => include_str!("../../content/privacy.md"),
            Self::Terms => include_str!("../../content/terms.md"),
            Self::Refunds => include_str!("../../content/refunds.md"),
        }
    }

    pub fn html(self) -> String {
        markdown::render(self.source())
    }
}

#[component]
fn PolicyPage(policy: Policy) -> impl IntoView {
    view! {
        <Title text={format!("{} | TLDR News", policy.title())}/>
        <div class="policy-page">
            <SiteHeader/>
            <main class="policy-page__main">
                <a href=routes::HOME class="back-link">"← Back to Home"</a>
                <article class="policy" inner_html=policy.html()></article>
            </main>
            <SiteFooter/>
        </div>
    }
}

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! { <PolicyPage policy=Policy::Privacy/> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <PolicyPage policy=Policy::Terms/> }
}

#[component]
pub fn RefundPolicyPage() -> impl IntoView {
    view! { <PolicyPage policy=Policy::Refunds/> }
}
