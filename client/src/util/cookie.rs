//! Session token cookie helpers.
//!
//! The bearer token lives in a plain `token` cookie at path `/`, readable by
//! script. Parsing and formatting are pure; the `document.cookie` access is
//! hydrate-only and no-ops during server rendering.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

pub const TOKEN_COOKIE: &str = "token";

/// Value of cookie `name` in a `document.cookie` style header.
#[must_use]
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Assignment string that stores `value` under `name`.
#[must_use]
pub fn set_cookie_string(name: &str, value: &str) -> String {
    format!("{name}={value}; path=/; SameSite=Lax")
}

/// Assignment string that expires cookie `name`.
#[must_use]
pub fn expire_cookie_string(name: &str) -> String {
    format!("{name}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT")
}

/// Read the stored session token.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let header = html_document()?.cookie().ok()?;
        find_cookie(&header, TOKEN_COOKIE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn store_token(token: &str) {
    write_cookie(&set_cookie_string(TOKEN_COOKIE, token));
}

pub fn clear_token() {
    write_cookie(&expire_cookie_string(TOKEN_COOKIE));
}

fn write_cookie(assignment: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document()
            && let Err(e) = doc.set_cookie(assignment)
        {
            log::warn!("cookie write failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}
