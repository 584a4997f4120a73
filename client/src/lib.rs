//! # client
//!
//! Leptos + WASM admin console for the convention site. Server-rendered by
//! the host binary and hydrated in the browser.
//!
//! This crate contains pages, components, per-screen state machines, the
//! declarative resource catalog, and the REST client for the platform
//! backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod resource;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
