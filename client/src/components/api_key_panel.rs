//! API key display with reveal and copy controls.

use leptos::prelude::*;

use crate::flows::dashboard::mask_api_key;

/// How long the copy button shows its confirmation state.
#[cfg(feature = "hydrate")]
const COPIED_FEEDBACK: std::time::Duration = std::time::Duration::from_secs(2);

#[component]
pub fn ApiKeyPanel(#[prop(into)] api_key: Signal<String>) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let copied = RwSignal::new(false);

    let shown = move || {
        let key = api_key.get();
        if revealed.get() { key } else { mask_api_key(&key) }
    };

    let on_copy = move |_| {
        let key = api_key.get_untracked();
        if key.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::util::browser::copy_text(&key).await {
                Ok(()) => {
                    copied.set(true);
                    gloo_timers::future::sleep(COPIED_FEEDBACK).await;
                    copied.set(false);
                }
                Err(e) => leptos::logging::warn!("copy failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (key, copied);
    };

    view! {
        <section class="card api-key">
            <h2 class="card__title">"Your API Key"</h2>
            <p class="card__hint">
                "Use this API key to authenticate requests to the TLDR News API. Keep it secret and secure."
            </p>
            <div class="api-key__row">
                <input class="api-key__value" type="text" readonly prop:value=shown/>
                <button
                    class="api-key__toggle"
                    on:click=move |_| revealed.update(|r| *r = !*r)
                    aria-label=move || if revealed.get() { "Hide API key" } else { "Show API key" }
                >
                    {move || if revealed.get() { "Hide" } else { "Show" }}
                </button>
                <button
                    class=move || if copied.get() { "api-key__copy api-key__copy--done" } else { "api-key__copy" }
                    on:click=on_copy
                    aria-label="Copy API key"
                >
                    {move || if copied.get() { "Copied" } else { "Copy" }}
                </button>
            </div>
            <div class="api-key__howto">
                <h3>"How to use your API key"</h3>
                <ol>
                    <li>"Click the TLDR News extension icon in your browser toolbar"</li>
                    <li>"Go to \"Settings\""</li>
                    <li>"Paste your API key in the input field"</li>
                    <li>
                        "That's it! Visit any news article and click \"Summarize article\" to get an instant summary."
                    </li>
                </ol>
                <p class="api-key__note">"Your API key is stored locally in your browser."</p>
            </div>
        </section>
    }
}
