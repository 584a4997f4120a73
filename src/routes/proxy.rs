//! Same-origin pass-through to the platform backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console calls `/api/v1/...` and loads images from `/uploads/...` on its
//! own origin. Both prefixes are forwarded to `BACKEND_ORIGIN` with the path
//! and query untouched, so the browser never needs CORS against the backend.
//!
//! DESIGN
//! ======
//! Bodies are buffered in both directions. Request bodies are capped at
//! `MAX_UPLOAD_BYTES`; responses are relayed with their status and end-to-end
//! headers. Hop-by-hop headers (RFC 9110 section 7.6.1), plus any header named
//! in `Connection`, never cross the proxy.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{CONTENT_LENGTH, HOST};
use axum::http::{HeaderMap, HeaderName, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend could not be reached or its response could not be read.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// The request body exceeded the configured cap.
    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        };
        (status, self.to_string()).into_response()
    }
}

/// Backend URL for an incoming request URI.
pub fn target_url(origin: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{origin}{path_and_query}")
}

/// Copy `headers`, dropping hop-by-hop headers and those listed in
/// `Connection`. `Host` and `Content-Length` are dropped too; the client
/// recomputes both.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<String> = headers
        .get_all("connection")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || *name == HOST || *name == CONTENT_LENGTH || listed.iter().any(|l| l == name.as_str())
        {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers.get(CONTENT_LENGTH)?.to_str().ok()?.parse().ok()
}

/// `ANY /api/{*path}` and `GET /uploads/{*path}`: relay to the backend.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let limit = state.config.max_upload_bytes;
    let (parts, body) = request.into_parts();
    if declared_length(&parts.headers).is_some_and(|len| len > limit) {
        tracing::warn!(path = %parts.uri.path(), limit, "rejecting oversized request body");
        return Err(ProxyError::BodyTooLarge { limit });
    }
    // `to_bytes` only fails on the limit for a fully received body.
    let body = to_bytes(body, limit).await.map_err(|_| ProxyError::BodyTooLarge { limit })?;

    let url = target_url(&state.config.backend_origin, &parts.uri);
    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(method = %parts.method, path = %parts.uri.path(), error = %e, "upstream request failed");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(path = %parts.uri.path(), error = %e, "upstream body read failed");
        ProxyError::Upstream(e.to_string())
    })?;
    tracing::debug!(method = %parts.method, path = %parts.uri.path(), %status, "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
