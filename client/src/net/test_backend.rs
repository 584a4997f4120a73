//! In-memory stand-in for the platform backend, used by unit tests.
//!
//! Serves one resource collection with the same envelopes, paths and body
//! encodings the real backend uses, and records every request it receives.

use std::cell::{Cell, RefCell};

use super::api::{create_endpoint, item_endpoint, list_endpoint};
use super::envelope::Envelope;
use super::transport::{ApiError, ApiRequest, ApiResponse, Method, RequestBody, Transport};
use crate::resource::Resource;

pub struct MemoryBackend {
    records: RefCell<Vec<serde_json::Value>>,
    requests: RefCell<Vec<ApiRequest>>,
    envelope: Envelope,
    list_path: String,
    create_path: String,
    item_prefix: String,
    next_id: Cell<u32>,
    pub fail_lists: Cell<bool>,
    pub fail_writes: Cell<bool>,
    pub offline: Cell<bool>,
}

impl MemoryBackend {
    pub fn for_resource<R: Resource>(records: Vec<serde_json::Value>) -> Self {
        Self {
            records: RefCell::new(records),
            requests: RefCell::new(Vec::new()),
            envelope: R::ENVELOPE,
            list_path: list_endpoint::<R>(),
            create_path: create_endpoint::<R>(),
            item_prefix: item_endpoint::<R>(""),
            next_id: Cell::new(1),
            fail_lists: Cell::new(false),
            fail_writes: Cell::new(false),
            offline: Cell::new(false),
        }
    }

    pub fn records(&self) -> Vec<serde_json::Value> {
        self.records.borrow().clone()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    fn respond(status: u16, body: serde_json::Value) -> ApiResponse {
        ApiResponse { status, body: body.to_string() }
    }

    fn list(&self) -> ApiResponse {
        let records = serde_json::Value::Array(self.records());
        match self.envelope {
            Envelope::Bare => Self::respond(200, records),
            Envelope::Wrapped => Self::respond(200, serde_json::json!({ "success": true, "data": records })),
        }
    }

    fn create(&self, body: &RequestBody) -> ApiResponse {
        let mut record = body_fields(body);
        let id = format!("new-{}", self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        record.insert("_id".to_owned(), serde_json::Value::String(id));
        let record = serde_json::Value::Object(record);
        self.records.borrow_mut().push(record.clone());
        Self::respond(201, record)
    }

    fn update(&self, id: &str, body: &RequestBody) -> ApiResponse {
        let mut records = self.records.borrow_mut();
        let Some(record) = records.iter_mut().find(|r| r["_id"] == id) else {
            return Self::respond(404, serde_json::json!({ "message": "Not found" }));
        };
        if let Some(object) = record.as_object_mut() {
            object.extend(body_fields(body));
        }
        Self::respond(200, record.clone())
    }

    fn delete(&self, id: &str) -> ApiResponse {
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|r| r["_id"] != id);
        if records.len() == before {
            return Self::respond(404, serde_json::json!({ "message": "Not found" }));
        }
        Self::respond(200, serde_json::json!({ "message": "Deleted" }))
    }
}

fn body_fields(body: &RequestBody) -> serde_json::Map<String, serde_json::Value> {
    match body {
        RequestBody::Json(serde_json::Value::Object(map)) => map.clone(),
        RequestBody::Multipart(parts) => parts
            .iter()
            .filter_map(|p| p.text().map(|t| (p.name().to_owned(), serde_json::Value::String(t.to_owned()))))
            .collect(),
        _ => serde_json::Map::new(),
    }
}

impl Transport for MemoryBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        if self.offline.get() {
            return Err(ApiError::Network("offline".to_owned()));
        }

        let item_id = request.path.strip_prefix(&self.item_prefix).filter(|id| !id.is_empty());
        let response = match request.method {
            Method::Get if request.path == self.list_path => {
                if self.fail_lists.get() {
                    Self::respond(500, serde_json::json!({ "message": "list failed" }))
                } else {
                    self.list()
                }
            }
            _ if request.method != Method::Get && self.fail_writes.get() => {
                Self::respond(500, serde_json::json!({ "message": "write failed" }))
            }
            Method::Post if request.path == self.create_path => self.create(&request.body),
            Method::Put => match item_id {
                Some(id) => self.update(id, &request.body),
                None => Self::respond(404, serde_json::json!({})),
            },
            Method::Delete => match item_id {
                Some(id) => self.delete(id),
                None => Self::respond(404, serde_json::json!({})),
            },
            _ => Self::respond(404, serde_json::json!({ "message": "no route" })),
        };
        Ok(response)
    }
}
