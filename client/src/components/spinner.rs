//! Centered loading spinner.

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="spinner-screen">
            <div class="spinner" aria-hidden="true"></div>
            {label.map(|label| view! { <h2 class="spinner-screen__label">{label}</h2> })}
        </div>
    }
}
