//! Editable form state for one record and its request-body encoding.
//!
//! DESIGN
//! ======
//! A `Draft` is a bag of field values keyed by the schema's field keys. It is
//! deliberately untyped: the same draft type backs every entity, and the
//! `FieldSpec` list decides how each value is rendered and encoded.
//!
//! ENCODING
//! ========
//! - JSON: text fields as strings, `Number` fields as numbers when they parse,
//!   `Active` as a boolean, row groups as arrays of objects, images skipped.
//! - Multipart: every non-image field as a text part (`"true"`/`"false"` for
//!   flags, row groups JSON-encoded), plus one file part per attached upload.
//!   An image field with no new upload sends nothing, so the backend keeps the
//!   stored image.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::collections::BTreeMap;

use super::{BodyKind, EditMode, FieldKind, FieldSpec, RowColumn, RowInput};
use crate::net::transport::{ApiError, FormPart, PendingUpload, RequestBody};
use crate::util::format::upload_url;

/// One entry of a repeatable row group, keyed by column key.
pub type Row = BTreeMap<&'static str, String>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Rows(Vec<Row>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    values: BTreeMap<&'static str, FieldValue>,
    uploads: BTreeMap<&'static str, PendingUpload>,
    previews: BTreeMap<&'static str, String>,
    existing_images: BTreeMap<&'static str, String>,
}

impl Draft {
    /// Empty draft for the create modal: one blank row per row group.
    #[must_use]
    pub fn blank(schema: &[FieldSpec], mode: &EditMode) -> Self {
        let mut draft = Self::default();
        for field in schema.iter().filter(|f| f.applies_to(mode)) {
            match field.kind {
                FieldKind::Active => {
                    draft.values.insert(field.key, FieldValue::Flag(false));
                }
                FieldKind::Rows(columns) => {
                    draft.values.insert(field.key, FieldValue::Rows(vec![blank_row(columns)]));
                }
                FieldKind::Image => {}
                _ => {
                    draft.values.insert(field.key, FieldValue::Text(String::new()));
                }
            }
        }
        draft
    }

    // =============================================================
    // Builders
    // =============================================================

    #[must_use]
    pub fn with_text(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(key, FieldValue::Text(value.into()));
        self
    }

    #[must_use]
    pub fn with_flag(mut self, key: &'static str, value: bool) -> Self {
        self.values.insert(key, FieldValue::Flag(value));
        self
    }

    #[must_use]
    pub fn with_rows(mut self, key: &'static str, rows: Vec<Row>) -> Self {
        self.values.insert(key, FieldValue::Rows(rows));
        self
    }

    /// Remember the stored image for `key` so the modal can preview it.
    #[must_use]
    pub fn with_existing_image(mut self, key: &'static str, stored: Option<&str>) -> Self {
        if let Some(stored) = stored.filter(|s| !s.is_empty()) {
            self.existing_images.insert(key, stored.to_owned());
        }
        self
    }

    // =============================================================
    // Accessors
    // =============================================================

    #[must_use]
    pub fn value(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    #[must_use]
    pub fn text(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.values.get(key), Some(FieldValue::Flag(true)))
    }

    #[must_use]
    pub fn rows(&self, key: &str) -> &[Row] {
        match self.values.get(key) {
            Some(FieldValue::Rows(rows)) => rows,
            _ => &[],
        }
    }

    #[must_use]
    pub fn upload(&self, key: &str) -> Option<&PendingUpload> {
        self.uploads.get(key)
    }

    /// Preview for an image field: the freshly picked file if any, otherwise
    /// the stored image resolved against the upload route.
    #[must_use]
    pub fn image_preview(&self, key: &str) -> Option<String> {
        self.previews
            .get(key)
            .cloned()
            .or_else(|| self.existing_images.get(key).map(|stored| upload_url(stored)))
    }

    /// Object URLs created for picked-file previews.
    #[must_use]
    pub fn preview_urls(&self) -> Vec<String> {
        self.previews.values().cloned().collect()
    }

    // =============================================================
    // Mutators
    // =============================================================

    pub fn set_text(&mut self, key: &'static str, value: impl Into<String>) {
        self.values.insert(key, FieldValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, key: &'static str, value: bool) {
        self.values.insert(key, FieldValue::Flag(value));
    }

    /// Attach a picked file. Returns the preview URL it displaced, which the
    /// caller must revoke.
    pub fn attach_upload(
        &mut self,
        key: &'static str,
        upload: PendingUpload,
        preview_url: Option<String>,
    ) -> Option<String> {
        self.uploads.insert(key, upload);
        match preview_url {
            Some(url) => self.previews.insert(key, url),
            None => self.previews.remove(key),
        }
    }

    pub fn add_row(&mut self, key: &'static str, columns: &[RowColumn]) {
        match self.values.get_mut(key) {
            Some(FieldValue::Rows(rows)) => rows.push(blank_row(columns)),
            _ => {
                self.values.insert(key, FieldValue::Rows(vec![blank_row(columns)]));
            }
        }
    }

    pub fn remove_row(&mut self, key: &str, index: usize) {
        if let Some(FieldValue::Rows(rows)) = self.values.get_mut(key)
            && index < rows.len()
        {
            rows.remove(index);
        }
    }

    pub fn set_row_cell(&mut self, key: &str, index: usize, column: &'static str, value: impl Into<String>) {
        if let Some(FieldValue::Rows(rows)) = self.values.get_mut(key)
            && let Some(row) = rows.get_mut(index)
        {
            row.insert(column, value.into());
        }
    }

    // =============================================================
    // Encoding
    // =============================================================

    /// Encode the fields that apply to `mode` as a request body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if a row group cannot be serialized.
    pub fn encode(&self, schema: &[FieldSpec], mode: &EditMode, kind: BodyKind) -> Result<RequestBody, ApiError> {
        let fields = schema.iter().filter(|f| f.applies_to(mode));
        match kind {
            BodyKind::Json => {
                let mut body = serde_json::Map::new();
                for field in fields {
                    if let Some(value) = self.json_value(field) {
                        body.insert(field.key.to_owned(), value);
                    }
                }
                Ok(RequestBody::Json(serde_json::Value::Object(body)))
            }
            BodyKind::Multipart => {
                let mut parts = Vec::new();
                for field in fields {
                    match field.kind {
                        FieldKind::Image => {
                            if let Some(upload) = self.uploads.get(field.key) {
                                parts.push(FormPart::File { name: field.key.to_owned(), upload: upload.clone() });
                            }
                        }
                        FieldKind::Rows(columns) => {
                            let rows = self.rows_json(field.key, columns);
                            let value = serde_json::to_string(&rows).map_err(|e| ApiError::Encode(e.to_string()))?;
                            parts.push(FormPart::Text { name: field.key.to_owned(), value });
                        }
                        FieldKind::Active => {
                            parts.push(FormPart::Text {
                                name: field.key.to_owned(),
                                value: self.flag(field.key).to_string(),
                            });
                        }
                        _ => {
                            parts.push(FormPart::Text {
                                name: field.key.to_owned(),
                                value: self.text(field.key).trim().to_owned(),
                            });
                        }
                    }
                }
                Ok(RequestBody::Multipart(parts))
            }
        }
    }

    fn json_value(&self, field: &FieldSpec) -> Option<serde_json::Value> {
        match field.kind {
            FieldKind::Image => None,
            FieldKind::Active => Some(serde_json::Value::Bool(self.flag(field.key))),
            FieldKind::Number => Some(number_value(self.text(field.key))),
            FieldKind::Rows(columns) => Some(self.rows_json(field.key, columns)),
            _ => Some(serde_json::Value::String(self.text(field.key).trim().to_owned())),
        }
    }

    fn rows_json(&self, key: &str, columns: &[RowColumn]) -> serde_json::Value {
        let rows = self
            .rows(key)
            .iter()
            .map(|row| {
                let mut object = serde_json::Map::new();
                for column in columns {
                    let raw = row.get(column.key).map_or("", String::as_str);
                    let value = match column.input {
                        RowInput::Number => number_value(raw),
                        RowInput::Text | RowInput::Date => serde_json::Value::String(raw.trim().to_owned()),
                    };
                    object.insert(column.key.to_owned(), value);
                }
                serde_json::Value::Object(object)
            })
            .collect();
        serde_json::Value::Array(rows)
    }
}

fn blank_row(columns: &[RowColumn]) -> Row {
    columns.iter().map(|c| (c.key, String::new())).collect()
}

/// Integer or float when the text parses, otherwise the trimmed text.
fn number_value(raw: &str) -> serde_json::Value {
    let trimmed = raw.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return serde_json::Value::from(int);
    }
    if let Ok(float) = trimmed.parse::<f64>()
        && let Some(number) = serde_json::Number::from_f64(float)
    {
        return serde_json::Value::Number(number);
    }
    serde_json::Value::String(trimmed.to_owned())
}
