use futures::executor::block_on;

use super::*;
use crate::net::test_backend::MemoryBackend;
use crate::net::types::{EventRecord, NavItem, PricePlan, Speaker};

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn endpoints_are_prefixed() {
    assert_eq!(endpoint("/login"), "/api/v1/login");
    assert_eq!(list_endpoint::<Speaker>(), "/api/v1/speakers");
    assert_eq!(create_endpoint::<EventRecord>(), "/api/v1/event/create");
    assert_eq!(item_endpoint::<EventRecord>("e1"), "/api/v1/event/e1");
    assert_eq!(item_endpoint::<PricePlan>("p1"), "/api/v1/eventPricing/p1");
}

#[test]
fn list_request_is_anonymous_get() {
    let req = list_request::<Speaker>();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.bearer, None);
    assert_eq!(req.body, RequestBody::Empty);
}

#[test]
fn submit_request_picks_method_path_and_body_kind() {
    let draft = Draft::default().with_text("title", "Expo").with_flag("isActive", true);

    let req = submit_request::<EventRecord>(&EditMode::Create, &draft, Some("tok")).unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/api/v1/event/create");
    assert!(matches!(req.body, RequestBody::Multipart(_)));
    assert_eq!(req.bearer.as_deref(), Some("tok"));

    let req = submit_request::<EventRecord>(&EditMode::Update { id: "e1".to_owned() }, &draft, None).unwrap();
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.path, "/api/v1/event/e1");
    assert!(matches!(req.body, RequestBody::Json(_)));
    assert_eq!(req.bearer, None);
}

#[test]
fn delete_request_carries_bearer() {
    let req = delete_request::<Speaker>("s1", Some("tok"));
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.path, "/api/v1/speakers/s1");
    assert_eq!(req.bearer.as_deref(), Some("tok"));
}

#[test]
fn login_request_posts_credentials() {
    let req = login_request("admin", "secret");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/api/v1/login");
    assert_eq!(req.body, RequestBody::Json(serde_json::json!({"username": "admin", "password": "secret"})));
    assert_eq!(req.bearer, None);
}

#[test]
fn ensure_success_extracts_message() {
    let err = ensure_success(ApiResponse { status: 400, body: r#"{"message":"bad"}"#.to_owned() }).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 400, message: Some("bad".to_owned()) });
}

// =============================================================
// Calls against the in-memory backend
// =============================================================

#[test]
fn fetch_collection_decodes_wrapped_envelope() {
    let backend = MemoryBackend::for_resource::<Speaker>(vec![
        serde_json::json!({"_id": "s1", "name": "Ada"}),
        serde_json::json!({"_id": "s2", "name": "Lin"}),
    ]);
    let speakers = block_on(fetch_collection::<Speaker>(&backend)).unwrap();
    assert_eq!(speakers.len(), 2);
    assert_eq!(speakers[1].name, "Lin");
}

#[test]
fn fetch_collection_reports_status_failure() {
    let backend = MemoryBackend::for_resource::<EventRecord>(vec![]);
    backend.fail_lists.set(true);
    let result = block_on(fetch_collection::<EventRecord>(&backend));
    assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
}

#[test]
fn execute_all_succeeds_when_every_request_does() {
    let backend = MemoryBackend::for_resource::<NavItem>(vec![
        serde_json::json!({"_id": "n1", "label": "Home", "isActive": true}),
        serde_json::json!({"_id": "n2", "label": "About", "isActive": false}),
    ]);
    let requests = vec![
        ApiRequest::new(Method::Put, item_endpoint::<NavItem>("n1"))
            .with_body(RequestBody::Json(serde_json::json!({"isActive": false}))),
        ApiRequest::new(Method::Put, item_endpoint::<NavItem>("n2"))
            .with_body(RequestBody::Json(serde_json::json!({"isActive": true}))),
    ];
    block_on(execute_all(&backend, requests)).unwrap();
    let records = backend.records();
    assert_eq!(records[0]["isActive"], false);
    assert_eq!(records[1]["isActive"], true);
}

#[test]
fn execute_all_fails_when_any_request_fails() {
    let backend = MemoryBackend::for_resource::<NavItem>(vec![serde_json::json!({"_id": "n1"})]);
    let requests = vec![
        ApiRequest::new(Method::Put, item_endpoint::<NavItem>("n1")),
        ApiRequest::new(Method::Put, item_endpoint::<NavItem>("missing")),
    ];
    let result = block_on(execute_all(&backend, requests));
    assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
}

#[test]
fn login_accepts_token() {
    struct Fixed(ApiResponse);
    impl Transport for Fixed {
        async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, ApiError> {
            Ok(self.0.clone())
        }
    }

    let ok = Fixed(ApiResponse {
        status: 200,
        body: r#"{"success":true,"token":"jwt","user":{"name":"admin"}}"#.to_owned(),
    });
    assert_eq!(
        block_on(login(&ok, "admin", "pw")).unwrap(),
        LoginOutcome::Accepted { token: "jwt".to_owned(), user: Some(serde_json::json!({"name": "admin"})) }
    );

    let refused = Fixed(ApiResponse { status: 200, body: r#"{"success":false}"#.to_owned() });
    assert_eq!(block_on(login(&refused, "admin", "pw")).unwrap(), LoginOutcome::Rejected);

    let unauthorized = Fixed(ApiResponse { status: 401, body: String::new() });
    assert_eq!(block_on(login(&unauthorized, "admin", "pw")).unwrap(), LoginOutcome::Rejected);

    let broken = Fixed(ApiResponse { status: 502, body: String::new() });
    assert!(block_on(login(&broken, "admin", "pw")).is_err());
}
