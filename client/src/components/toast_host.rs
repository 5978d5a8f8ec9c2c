//! Bottom-center toast stack.

use leptos::prelude::*;

use crate::state::toast::{TOAST_DURATION, ToastKind, ToastState};

/// Queue a toast and dismiss it after `TOAST_DURATION`.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_DURATION).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (id, TOAST_DURATION);
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
