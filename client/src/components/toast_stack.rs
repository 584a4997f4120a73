//! Fixed-position stack of transient notifications.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.css_modifier()) role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
