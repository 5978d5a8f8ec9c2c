//! Footer with policy links.

use leptos::prelude::*;

use crate::routes;

#[component]
pub fn SiteFooter(#[prop(optional)] compact: bool) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__copy">"© TLDR News. All rights reserved."</p>
            <Show when=move || !compact>
                <nav class="site-footer__links">
                    <a href=routes::PRIVACY>"Privacy Policy"</a>
                    <a href=routes::TERMS>"Terms & Conditions"</a>
                    <a href=routes::REFUNDS>"Refund Policy"</a>
                </nav>
            </Show>
        </footer>
    }
}
