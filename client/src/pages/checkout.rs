//! Plan checkout via the Paddle overlay.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::BrowserSession;
use crate::components::plan_card::PlanCard;
use crate::components::spinner::Spinner;
use crate::config::PublicConfig;
use crate::flows::checkout::{Plan, checkout_options};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let config = expect_context::<PublicConfig>();
    let session = expect_context::<BrowserSession>();
    let query = use_query_map();
    let selected = move || Plan::from_query(query.get().get("plan").as_deref());
    let ready = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::flows::checkout::{PADDLE_GLOBAL, ensure_billing_script};
        use crate::util::script::DomScriptHost;

        let navigate = use_navigate();
        let environment = config.paddle_environment;
        let token = config.paddle_client_token.clone();
        let on_ready = Box::new(move || {
            let on_event = move |event: crate::flows::checkout::CheckoutEvent| {
                leptos::logging::log!("paddle event: {}", event.name);
                if let Some(route) = event.completion_route() {
                    navigate(route, NavigateOptions::default());
                }
            };
            match crate::util::paddle::initialize(environment, &token, on_event) {
                Ok(()) => ready.set(true),
                Err(e) => leptos::logging::error!("paddle init failed: {e}"),
            }
        });
        if let Err(e) = ensure_billing_script(&DomScriptHost { global: PADDLE_GLOBAL }, on_ready) {
            leptos::logging::error!("paddle load failed: {e}");
        }
    }

    let open = move |plan: Plan| {
        let options = checkout_options(plan.price_id(&config), session.cached_email().as_deref());
        if let Err(e) = crate::util::paddle::open_checkout(&options) {
            leptos::logging::error!("checkout open failed: {e}");
        }
    };

    view! {
        <Show when=move || ready.get() fallback=|| view! { <Spinner/> }>
            <div class="checkout-page">
                <h1>"Complete Your Purchase"</h1>
                <div class="checkout-page__plans">
                    {Plan::ALL
                        .into_iter()
                        .map(|plan| {
                            let open = open.clone();
                            view! {
                                <PlanCard
                                    name=plan.label()
                                    price=plan.price()
                                    tagline=""
                                    features={plan.features().to_vec()}
                                    highlighted={selected() == Some(plan)}
                                >
                                    <button class="btn btn--primary" on:click=move |_| open(plan)>
                                        {format!("Choose {}", plan.label())}
                                    </button>
                                </PlanCard>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="checkout-page__footnote">"Secure payment powered by Paddle"</p>
            </div>
        </Show>
    }
}
