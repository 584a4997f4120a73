//! Console navigation sidebar with logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Route and label of every console screen, in sidebar order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/events", "Events"),
    ("/speakers", "Speakers"),
    ("/sponsors", "Sponsors"),
    ("/gallery", "Gallery"),
    ("/venues", "Venues"),
    ("/pricing", "Pricing"),
    ("/pages/home", "Home Page"),
    ("/pages/about", "About Page"),
    ("/pages/agenda", "Agenda Page"),
    ("/navigation", "Navigation"),
    ("/registrations", "Registrations"),
    ("/queries", "Inquiries"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Admin Console"</div>
            <nav class="sidebar__nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="sidebar__link" href=*href>
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <button class="btn sidebar__logout" on:click=move |_| crate::util::auth::logout(auth)>
                "Logout"
            </button>
        </aside>
    }
}
