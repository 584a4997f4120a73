//! Authenticated page frame: sidebar plus content, behind the login guard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Renders `children` only for a signed-in session; otherwise shows a holding
/// message while the guard redirects to `/login`.
#[component]
pub fn AdminLayout(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.with(AuthState::is_authenticated)
            fallback=move || {
                view! {
                    <div class="admin-page admin-page--pending">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="admin-page">
                <Sidebar/>
                <main class="admin-page__content">{children()}</main>
            </div>
        </Show>
    }
}
