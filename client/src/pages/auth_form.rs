//! Pieces shared by the login and signup forms.

use leptos::prelude::*;

#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="field-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
pub fn GoogleButton(label: &'static str, busy: RwSignal<bool>, on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="btn btn--google"
            type="button"
            disabled=move || busy.get()
            on:click=move |_| on_click.run(())
        >
            <img src="/images/google-g.svg" alt="" aria-hidden="true" width="20" height="20"/>
            {label}
        </button>
    }
}
