//! Browser task helpers: fire-and-forget futures, toasts, confirm dialogs.
//!
//! TRADE-OFFS
//! ==========
//! All of these are browser-only. During server rendering futures are dropped
//! unpolled and confirmations answer `false`, so nothing mutating can start.

use leptos::prelude::*;

use crate::state::toast::{Notice, ToastState};

/// Run a future on the browser's event loop.
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(future);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(future);
    }
}

/// Show a notice and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let Some(id) = toasts.try_update(|t| t.push(notice)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        use crate::state::toast::TOAST_TTL_MS;
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
            toasts.try_update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Blocking `window.confirm` prompt.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
