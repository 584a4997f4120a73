//! Login page: username + password against the backend's `/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_auth_redirect;

const MISSING_INPUT: &str = "Enter both username and password.";
const REJECTED: &str = "Login failed. Please check your credentials.";
const FAILED: &str = "An error occurred. Please try again.";

/// Trim the username and require both fields. The password is kept verbatim.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_INPUT);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_auth_redirect(auth, use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user_value, pass_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        crate::util::task::spawn(async move {
            use crate::net::api::{LoginOutcome, login};
            use crate::net::transport::BrowserTransport;

            match login(&BrowserTransport, &user_value, &pass_value).await {
                Ok(LoginOutcome::Accepted { token, user }) => {
                    crate::util::cookie::store_token(&token);
                    auth.update(|a| a.login(token, user));
                }
                Ok(LoginOutcome::Rejected) => error.set(REJECTED.to_owned()),
                Err(e) => {
                    log::error!("login request failed: {e}");
                    error.set(FAILED.to_owned());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Console"</h1>
                <p class="login-card__subtitle">"Sign in to manage the event site"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
