//! Marketing home page with plan cards.
//!
//! Sign-in state is read from storage after hydration, so the server render
//! always shows the signed-out links.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::app::BrowserSession;
use crate::components::plan_card::PlanCard;
use crate::components::site_footer::SiteFooter;
use crate::flows::checkout::Plan;
use crate::routes;

/// Where a paid plan's button leads: straight to checkout when signed in,
/// otherwise through signup with the plan carried along.
pub fn plan_href(plan: Plan, signed_in: bool) -> String {
    if signed_in {
        routes::checkout(Some(plan.as_str()))
    } else {
        routes::signup(Some(plan.as_str()))
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<BrowserSession>();
    let signed_in = RwSignal::new(false);
    Effect::new(move || signed_in.set(session.is_signed_in()));

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <nav class="home-page__nav">
                    {move || {
                        if signed_in.get() {
                            view! { <a class="btn btn--outline" href=routes::DASHBOARD>"Dashboard"</a> }.into_any()
                        } else {
                            view! { <a class="btn btn--outline" href=routes::LOGIN>"Log in"</a> }.into_any()
                        }
                    }}
                </nav>
                <img class="home-page__logo" src="/images/tldr-news-logo.svg" alt="TLDR News Logo"/>
            </header>

            <section class="hero">
                <h1>"Get to the Point, Faster"</h1>
                <p class="hero__tagline">"One click turns any news article into a short, accurate summary."</p>
            </section>

            <main class="home-page__main">
                <p class="home-page__lead">
                    "TLDR News uses AI to instantly summarize news articles, helping you stay informed without the fluff. Choose the plan that works best for you."
                </p>

                <div class="plans">
                    <PlanCard
                        name="Trial"
                        price="Free"
                        tagline="Get started with TLDR News"
                        features={vec!["30 article summaries per month"]}
                    >
                        <a class="btn btn--muted" href=routes::SIGNUP>"Start Free Trial"</a>
                    </PlanCard>
                    <PlanCard
                        name="Premium"
                        price="$1.99/month"
                        tagline="Perfect for regular readers"
                        features={Plan::Premium.features().to_vec()}
                        highlighted=true
                        badge="Popular"
                    >
                        <a class="btn btn--primary" href=move || plan_href(Plan::Premium, signed_in.get())>
                            "Subscribe Now"
                        </a>
                    </PlanCard>
                    <PlanCard
                        name="Pro"
                        price="$9.99/month"
                        tagline="For power users and researchers"
                        features={Plan::Pro.features().to_vec()}
                    >
                        <a class="btn btn--accent" href=move || plan_href(Plan::Pro, signed_in.get())>
                            "Go Pro"
                        </a>
                    </PlanCard>
                </div>

                <section class="how-it-works">
                    <h2>"How TLDR News Works"</h2>
                    <p>
                        "Our AI-powered extension analyzes news articles and creates concise, accurate summaries in seconds. Just click the TLDR News icon when reading any article online."
                    </p>
                    <ol class="how-it-works__steps">
                        <li>
                            <h3>"Browse to any article"</h3>
                            <p>"Navigate to your favorite news site"</p>
                        </li>
                        <li>
                            <h3>"Click TLDR News"</h3>
                            <p>"Activate the extension with one click"</p>
                        </li>
                        <li>
                            <h3>"Get your summary"</h3>
                            <p>"Instantly see a concise summary"</p>
                        </li>
                    </ol>
                </section>
            </main>
            <SiteFooter/>
        </div>
    }
}
