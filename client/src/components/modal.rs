//! Dialog shell shared by the edit/create forms.

use leptos::prelude::*;

/// Backdrop plus centered dialog. Clicking the backdrop or the close button
/// runs `on_close`.
#[component]
pub fn Modal(title: Signal<String>, on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--wide"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
            >
                <header class="dialog__header">
                    <h2>{move || title.get()}</h2>
                    <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "\u{00d7}"
                    </button>
                </header>
                {children()}
            </div>
        </div>
    }
}
