//! Signup page. `?plan=` is carried through to checkout and `?upgrade=` is
//! forwarded to the backend as the extension upgrade id.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::{Api, BrowserSession};
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::flows::auth::{SignupForm, start_google_auth, submit_signup};
use crate::flows::validation::FieldErrors;
use crate::pages::auth_form::{FieldError, GoogleButton};
use crate::routes;

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<BrowserSession>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let submit_api = api.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (plan, upgrade) = query.with_untracked(|q| (q.get("plan"), q.get("upgrade")));
        let form = SignupForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
            extension_upgrade_id: upgrade,
            plan,
        };
        let api = submit_api.clone();
        let navigate = navigate.clone();
        busy.set(true);
        leptos::task::spawn_local(async move {
            match submit_signup(&api, &session, &form).await {
                Ok(route) => navigate(&route, NavigateOptions::default()),
                Err(field_errors) => errors.set(field_errors),
            }
            busy.set(false);
        });
    };

    let on_google = Callback::new(move |()| {
        let api = api.clone();
        busy.set(true);
        leptos::task::spawn_local(async move {
            match start_google_auth(&api).await {
                Ok(url) => crate::util::browser::assign_location(&url),
                Err(field_errors) => {
                    errors.set(field_errors);
                    busy.set(false);
                }
            }
        });
    });

    view! {
        <div class="auth-page">
            <SiteHeader/>
            <main class="auth-page__main">
                <a href=routes::HOME class="back-link">"← Back to home"</a>
                <h1>"Create your account"</h1>
                <p class="auth-page__subtitle">"Start summarizing articles with TLDR News"</p>

                <div class="card">
                    <GoogleButton label="Sign up with Google" busy=busy on_click=on_google/>
                    <div class="divider"><span>"Or continue with email"</span></div>

                    <form class="auth-form" on:submit=on_submit novalidate>
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(move || errors.get().email)/>

                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(move || errors.get().password)/>

                        <label for="confirm-password">"Confirm Password"</label>
                        <input
                            id="confirm-password"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(move || errors.get().confirm_password)/>

                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating account..." } else { "Create account" }}
                        </button>
                    </form>
                </div>

                <p class="auth-page__switch">
                    "Already have an account? " <a href=routes::LOGIN>"Log in"</a>
                </p>
                <p class="auth-page__legal">
                    "By signing up you agree to our " <a href=routes::TERMS>"Terms & Conditions"</a>
                    " and " <a href=routes::PRIVACY>"Privacy Policy"</a> "."
                </p>
            </main>
            <SiteFooter compact=true/>
        </div>
    }
}
