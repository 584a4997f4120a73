//! Collection response shapes.
//!
//! Some backend collections answer with a bare JSON array, others wrap it as
//! `{ "success": true, "data": [...] }`. Each resource declares which shape its
//! list endpoint uses.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::transport::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Envelope {
    /// `[ ... ]`
    Bare,
    /// `{ "success": bool, "data": [ ... ] }`
    Wrapped,
}

#[derive(Deserialize)]
struct WrappedBody<T> {
    #[serde(default = "default_success")]
    success: bool,
    data: Vec<T>,
}

fn default_success() -> bool {
    true
}

/// Decode a list response body using the declared envelope.
///
/// # Errors
///
/// Returns `ApiError::Decode` if the body does not match the envelope or a
/// record fails to decode, and when a wrapped body reports `success: false`.
pub fn decode_collection<T: DeserializeOwned>(envelope: Envelope, body: &str) -> Result<Vec<T>, ApiError> {
    match envelope {
        Envelope::Bare => serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string())),
        Envelope::Wrapped => {
            let wrapped: WrappedBody<T> = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
            if !wrapped.success {
                return Err(ApiError::Decode("backend reported success=false".to_owned()));
            }
            Ok(wrapped.data)
        }
    }
}

/// Pull a `message` string out of an error body, if there is one.
#[must_use]
pub fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_owned)
}
