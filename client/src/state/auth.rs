//! Auth-session state for the signed-in administrator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and mutating requests. The session is just the bearer
//! token from the `token` cookie; its presence alone counts as signed in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state tracking the token, the user, and loading status.
///
/// `loading` stays `true` until the cookie has been read in the browser, so
/// guards do not redirect during server rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<serde_json::Value>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, user: None, loading: true }
    }
}

impl AuthState {
    /// Session restored from a stored token, if any.
    #[must_use]
    pub fn restored(token: Option<String>) -> Self {
        Self { token: token.filter(|t| !t.is_empty()), user: None, loading: false }
    }

    pub fn login(&mut self, token: String, user: Option<serde_json::Value>) {
        self.token = Some(token);
        self.user = user;
        self.loading = false;
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Token to attach to mutating requests.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
