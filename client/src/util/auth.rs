//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: protected pages
//! bounce to `/login` once the session has loaded without a token, and the
//! login page bounces to `/` when a token is already present.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::cookie;

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

pub fn should_redirect_home(state: &AuthState) -> bool {
    !state.loading && state.is_authenticated()
}

/// Redirect to `/login` whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever auth has loaded with a token present.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_home(&auth.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}

/// Drop the token cookie and clear the session.
pub fn logout(auth: RwSignal<AuthState>) {
    cookie::clear_token();
    auth.update(AuthState::logout);
}
