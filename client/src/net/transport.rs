//! Request/response plumbing shared by every REST call.
//!
//! DESIGN
//! ======
//! Screens build `ApiRequest` values synchronously from their state and hand
//! them to a `Transport`. The browser build sends them with `gloo-net`; the
//! server build has no browser to send from and reports `Unavailable`, the same
//! way the SSR stubs of the REST helpers behave.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` keeps enough detail for console logging. Screens never branch on
//! the variant: every failure becomes the screen's generic toast.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

/// HTTP verbs the console issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A file picked in a form, held in memory until the draft is submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// One part of a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, upload: PendingUpload },
}

impl FormPart {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }

    /// Text value of the part, `None` for file parts.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { value, .. } => Some(value),
            Self::File { .. } => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

/// A fully-resolved request: method, absolute path, body, optional bearer token.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: RequestBody,
    pub bearer: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: RequestBody::Empty, bearer: None }
    }

    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Attach `Authorization: Bearer` when a non-empty token is present.
    #[must_use]
    pub fn with_bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.filter(|t| !t.is_empty()).map(str::to_owned);
        self
    }
}

/// Raw response: status plus the body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid request body: {0}")]
    Encode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Sends an `ApiRequest` and returns the raw response.
///
/// Non-2xx statuses are not errors at this layer; `net::api` decides what a
/// failure is.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Transport backed by the browser's `fetch` through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            browser::send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::Request;
    use wasm_bindgen::JsValue;

    use super::{ApiError, ApiRequest, ApiResponse, FormPart, Method, RequestBody};

    pub(super) async fn send(request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.path),
            Method::Post => Request::post(&request.path),
            Method::Put => Request::put(&request.path),
            Method::Delete => Request::delete(&request.path),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let prepared = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(parts) => builder.body(form_data(parts)?),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let resp = prepared
            .send()
            .await
            .map_err(|e| {
                log::warn!("{} {} failed: {e}", request.method.as_str(), request.path);
                ApiError::Network(e.to_string())
            })?;
        let status = resp.status();
        log::debug!("{} {} -> {status}", request.method.as_str(), request.path);
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }

    fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new().map_err(js_encode_error)?;
        for part in parts {
            match part {
                FormPart::Text { name, value } => {
                    form.append_with_str(name, value).map_err(js_encode_error)?;
                }
                FormPart::File { name, upload } => {
                    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
                    let sequence = js_sys::Array::of1(&bytes);
                    let options = web_sys::BlobPropertyBag::new();
                    options.set_type(&upload.content_type);
                    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
                        .map_err(js_encode_error)?;
                    form.append_with_blob_and_filename(name, &blob, &upload.file_name)
                        .map_err(js_encode_error)?;
                }
            }
        }
        Ok(form)
    }

    #[allow(clippy::needless_pass_by_value)]
    fn js_encode_error(err: JsValue) -> ApiError {
        ApiError::Encode(format!("{err:?}"))
    }
}
