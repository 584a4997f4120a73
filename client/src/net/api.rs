//! REST helpers for the platform backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! All calls go to the same-origin `/api/v1` prefix; the host server forwards
//! them to the backend unchanged. Request builders are pure so they can be
//! tested without a browser; the async helpers run any `Transport`.
//!
//! AUTH
//! ====
//! Reads are anonymous. Create, update, delete and navigation updates carry
//! the session token as a bearer header when one exists.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::envelope::{decode_collection, error_message};
use super::transport::{ApiError, ApiRequest, ApiResponse, Method, RequestBody, Transport};
use super::types::LoginResponse;
use crate::resource::{Draft, EditMode, Resource};

/// Path prefix of every backend endpoint.
pub const API_PREFIX: &str = "/api/v1";

// =============================================================
// Endpoint builders
// =============================================================

#[must_use]
pub fn endpoint(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

#[must_use]
pub fn list_endpoint<R: Resource>() -> String {
    endpoint(R::LIST_PATH)
}

#[must_use]
pub fn create_endpoint<R: Resource>() -> String {
    endpoint(R::CREATE_PATH)
}

#[must_use]
pub fn item_endpoint<R: Resource>(id: &str) -> String {
    format!("{API_PREFIX}{}/{id}", R::ITEM_PATH)
}

// =============================================================
// Request builders
// =============================================================

#[must_use]
pub fn list_request<R: Resource>() -> ApiRequest {
    ApiRequest::new(Method::Get, list_endpoint::<R>())
}

/// `POST` (create) or `PUT` (update) carrying the encoded draft.
///
/// # Errors
///
/// Returns `ApiError::Encode` if the draft cannot be encoded.
pub fn submit_request<R: Resource>(mode: &EditMode, draft: &Draft, token: Option<&str>) -> Result<ApiRequest, ApiError> {
    let body = draft.encode(R::SCHEMA, mode, R::body_kind(mode))?;
    let request = match mode {
        EditMode::Create => ApiRequest::new(Method::Post, create_endpoint::<R>()),
        EditMode::Update { id } => ApiRequest::new(Method::Put, item_endpoint::<R>(id)),
    };
    Ok(request.with_body(body).with_bearer(token))
}

#[must_use]
pub fn delete_request<R: Resource>(id: &str, token: Option<&str>) -> ApiRequest {
    ApiRequest::new(Method::Delete, item_endpoint::<R>(id)).with_bearer(token)
}

#[must_use]
pub fn login_request(username: &str, password: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, endpoint("/login")).with_body(RequestBody::Json(serde_json::json!({
        "username": username,
        "password": password,
    })))
}

// =============================================================
// Calls
// =============================================================

/// Map non-2xx responses to `ApiError::Status`.
///
/// # Errors
///
/// Returns `ApiError::Status` with the backend's `message`, when present.
pub fn ensure_success(response: ApiResponse) -> Result<ApiResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status { status: response.status, message: error_message(&response.body) })
    }
}

/// Fetch and decode a resource collection.
///
/// # Errors
///
/// Returns transport, status, or decode failures.
pub async fn fetch_collection<R: Resource>(transport: &impl Transport) -> Result<Vec<R>, ApiError> {
    let response = ensure_success(transport.send(list_request::<R>()).await?)?;
    decode_collection(R::ENVELOPE, &response.body)
}

/// Send a mutating request and discard the response body.
///
/// # Errors
///
/// Returns transport or status failures.
pub async fn execute(transport: &impl Transport, request: ApiRequest) -> Result<(), ApiError> {
    ensure_success(transport.send(request).await?).map(|_| ())
}

/// Send every request concurrently; the first failure wins.
///
/// # Errors
///
/// Returns the first transport or status failure in request order.
pub async fn execute_all(transport: &impl Transport, requests: Vec<ApiRequest>) -> Result<(), ApiError> {
    let results = futures::future::join_all(requests.into_iter().map(|r| execute(transport, r))).await;
    results.into_iter().collect()
}

/// Outcome of a credential check.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    Accepted { token: String, user: Option<serde_json::Value> },
    Rejected,
}

/// Post credentials to `/login`.
///
/// A 2xx response without `success: true` and a token is a rejection, as is
/// a 4xx response.
///
/// # Errors
///
/// Returns transport failures, 5xx statuses, and undecodable bodies.
pub async fn login(transport: &impl Transport, username: &str, password: &str) -> Result<LoginOutcome, ApiError> {
    let response = transport.send(login_request(username, password)).await?;
    if (400..500).contains(&response.status) {
        return Ok(LoginOutcome::Rejected);
    }
    let response = ensure_success(response)?;
    let body: LoginResponse = serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
    match body.token.filter(|t| !t.is_empty()) {
        Some(token) if body.success => Ok(LoginOutcome::Accepted { token, user: body.user }),
        _ => Ok(LoginOutcome::Rejected),
    }
}
