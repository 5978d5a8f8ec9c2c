//! Prompt shown to free users who are about to run out of summaries.

use leptos::prelude::*;

use crate::routes;

#[component]
pub fn LowUsageModal(remaining: u64, on_dismiss: Callback<()>) -> impl IntoView {
    let noun = if remaining == 1 { "summary" } else { "summaries" };

    view! {
        <div class="modal__backdrop" on:click=move |_| on_dismiss.run(())>
            <div class="modal" role="dialog" aria-modal="true" on:click=move |ev| ev.stop_propagation()>
                <h2 class="modal__title">"Running low on summaries"</h2>
                <p class="modal__body">
                    {format!("You have {remaining} {noun} left this month. Upgrade to keep reading without limits.")}
                </p>
                <div class="modal__actions">
                    <a class="btn btn--accent" href=routes::checkout(None)>"View Plans"</a>
                    <button class="btn btn--ghost" on:click=move |_| on_dismiss.run(())>
                        "Maybe later"
                    </button>
                </div>
            </div>
        </div>
    }
}
