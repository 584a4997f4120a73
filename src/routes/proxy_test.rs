use axum::Json;
use axum::body::Bytes;
use axum::http::{HeaderValue, Method};
use tower::ServiceExt;

use super::*;
use crate::config::{ProxyTimeouts, ServerConfig};
use crate::routes::api_routes;

// =============================================================================
// Pure helpers
// =============================================================================

#[test]
fn target_url_keeps_path_and_query() {
    let uri: Uri = "/api/v1/speakers?sort=name&x=1".parse().unwrap();
    assert_eq!(target_url("https://backend.test", &uri), "https://backend.test/api/v1/speakers?sort=name&x=1");
}

#[test]
fn target_url_keeps_upload_paths() {
    let uri: Uri = "/uploads/speakers/a%20b.png".parse().unwrap();
    assert_eq!(target_url("http://127.0.0.1:9", &uri), "http://127.0.0.1:9/uploads/speakers/a%20b.png");
}

#[test]
fn forwardable_headers_strip_hop_by_hop() {
    let mut headers = HeaderMap::new();
    headers.insert("connection", HeaderValue::from_static("keep-alive, x-session-hint"));
    headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
    headers.insert("transfer-encoding", HeaderValue::from_static("chunked"));
    headers.insert("x-session-hint", HeaderValue::from_static("abc"));
    headers.insert("host", HeaderValue::from_static("console.test"));
    headers.insert("content-length", HeaderValue::from_static("12"));
    headers.insert("authorization", HeaderValue::from_static("Bearer t"));
    headers.insert("content-type", HeaderValue::from_static("application/json"));

    let out = forwardable_headers(&headers);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get("authorization").unwrap(), "Bearer t");
    assert_eq!(out.get("content-type").unwrap(), "application/json");
}

#[test]
fn proxy_errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::Upstream("refused".into()).into_response().status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::BodyTooLarge { limit: 1 }.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// =============================================================================
// Forwarding against a local upstream
// =============================================================================

/// Upstream that echoes what it received as JSON.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
    let payload = serde_json::json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "authorization": header("authorization"),
        "hint": header("x-session-hint"),
        "body": String::from_utf8_lossy(&body),
    });
    if uri.path().ends_with("/missing") {
        return (StatusCode::NOT_FOUND, Json(serde_json::json!({"message": "Not found"}))).into_response();
    }
    ([("x-upstream", "yes")], Json(payload)).into_response()
}

async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = axum::Router::new().fallback(echo);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_for(origin: &str, max_upload_bytes: usize) -> AppState {
    AppState::new(ServerConfig {
        port: 0,
        backend_origin: origin.to_owned(),
        timeouts: ProxyTimeouts { request_secs: 5, connect_secs: 1 },
        max_upload_bytes,
    })
    .unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn get_is_forwarded_with_query() {
    let origin = spawn_upstream().await;
    let app = api_routes(state_for(&origin, 1024));

    let response = app
        .oneshot(Request::builder().uri("/api/v1/event/?active=true").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("x-upstream").unwrap(), "yes");
    let json = body_json(response).await;
    assert_eq!(json["method"], "GET");
    assert_eq!(json["uri"], "/api/v1/event/?active=true");
}

#[tokio::test]
async fn put_forwards_body_and_bearer_but_not_connection_headers() {
    let origin = spawn_upstream().await;
    let app = api_routes(state_for(&origin, 1024));

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/v1/home/h1")
        .header("authorization", "Bearer tok")
        .header("content-type", "application/json")
        .header("connection", "x-session-hint")
        .header("x-session-hint", "secret")
        .body(Body::from(r#"{"home":"Hello"}"#))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["method"], "PUT");
    assert_eq!(json["authorization"], "Bearer tok");
    assert_eq!(json["hint"], serde_json::Value::Null);
    assert_eq!(json["body"], r#"{"home":"Hello"}"#);
}

#[tokio::test]
async fn upstream_error_statuses_pass_through() {
    let origin = spawn_upstream().await;
    let app = api_routes(state_for(&origin, 1024));

    let response = app
        .oneshot(Request::builder().method(Method::DELETE).uri("/api/v1/gallery/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Not found");
}

#[tokio::test]
async fn uploads_are_forwarded() {
    let origin = spawn_upstream().await;
    let app = api_routes(state_for(&origin, 1024));

    let response = app
        .oneshot(Request::builder().uri("/uploads/photo.jpg").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["uri"], "/uploads/photo.jpg");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let origin = spawn_upstream().await;
    let app = api_routes(state_for(&origin, 8));

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/gallery/create")
                .body(Body::from(vec![b'x'; 64]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let app = api_routes(state_for(&origin, 1024));

    let response = app
        .oneshot(Request::builder().uri("/api/v1/speakers").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(state_for("http://127.0.0.1:9", 1024));
    let response = app.oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
