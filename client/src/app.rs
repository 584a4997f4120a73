//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::dashboard::DashboardPage;
use crate::pages::entities::{
    AboutContentPage, AgendaContentPage, EventsPage, GalleryPage, HomeContentPage, InquiriesPage, PricingPage,
    RegistrationsPage, SpeakersPage, SponsorsPage, VenuesPage,
};
use crate::pages::login::LoginPage;
use crate::pages::navigation::NavigationPage;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::cookie;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    // The cookie is only readable in the browser; until this runs the
    // session stays in its loading state.
    Effect::new(move || {
        auth.set(AuthState::restored(cookie::read_token()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/trader-admin.css"/>
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("events") view=EventsPage/>
                <Route path=StaticSegment("speakers") view=SpeakersPage/>
                <Route path=StaticSegment("sponsors") view=SponsorsPage/>
                <Route path=StaticSegment("gallery") view=GalleryPage/>
                <Route path=StaticSegment("venues") view=VenuesPage/>
                <Route path=StaticSegment("pricing") view=PricingPage/>
                <Route path=(StaticSegment("pages"), StaticSegment("home")) view=HomeContentPage/>
                <Route path=(StaticSegment("pages"), StaticSegment("about")) view=AboutContentPage/>
                <Route path=(StaticSegment("pages"), StaticSegment("agenda")) view=AgendaContentPage/>
                <Route path=StaticSegment("navigation") view=NavigationPage/>
                <Route path=StaticSegment("registrations") view=RegistrationsPage/>
                <Route path=StaticSegment("queries") view=InquiriesPage/>
            </Routes>
        </Router>
        <ToastStack/>
    }
}
