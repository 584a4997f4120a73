//! Route components, one per managed collection.

use leptos::prelude::*;

use super::resource_screen::resource_screen;
use crate::net::types::{
    AboutContent, AgendaContent, EventRecord, GalleryItem, HomeContent, Inquiry, PricePlan, Registration, Speaker,
    Sponsor, Venue,
};

#[component]
pub fn EventsPage() -> impl IntoView {
    resource_screen::<EventRecord>()
}

#[component]
pub fn SpeakersPage() -> impl IntoView {
    resource_screen::<Speaker>()
}

#[component]
pub fn SponsorsPage() -> impl IntoView {
    resource_screen::<Sponsor>()
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    resource_screen::<GalleryItem>()
}

#[component]
pub fn VenuesPage() -> impl IntoView {
    resource_screen::<Venue>()
}

#[component]
pub fn PricingPage() -> impl IntoView {
    resource_screen::<PricePlan>()
}

/// Home page copy (single record).
#[component]
pub fn HomeContentPage() -> impl IntoView {
    resource_screen::<HomeContent>()
}

/// About page copy and image (single record).
#[component]
pub fn AboutContentPage() -> impl IntoView {
    resource_screen::<AboutContent>()
}

/// Agenda page copy (single record).
#[component]
pub fn AgendaContentPage() -> impl IntoView {
    resource_screen::<AgendaContent>()
}

/// Submitted registrations, read-only.
#[component]
pub fn RegistrationsPage() -> impl IntoView {
    resource_screen::<Registration>()
}

/// Contact-form inquiries, read-only.
#[component]
pub fn InquiriesPage() -> impl IntoView {
    resource_screen::<Inquiry>()
}
