//! Declarative description of every managed entity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each admin screen is the same machine (list, edit modal, delete) pointed at
//! a different backend collection. A `Resource` impl carries everything that
//! varies between collections: endpoints, the list envelope, the edit schema,
//! body encodings, table columns, and which actions the screen offers.
//!
//! DESIGN
//! ======
//! The per-entity quirks of the backend (odd paths like `/sponser`, mixed JSON
//! and multipart bodies, different image part names) are confined to the
//! associated consts in `catalog`. Generic code in `state::screen`,
//! `net::api` and `pages::resource_screen` never matches on a concrete entity.

pub mod catalog;
pub mod draft;

use serde::de::DeserializeOwned;
use std::fmt;

pub use draft::{Draft, FieldValue};

use crate::net::envelope::Envelope;

// =============================================================
// Capabilities and policies
// =============================================================

/// Which actions a screen offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
}

impl Capabilities {
    pub const FULL: Self = Self { create: true, edit: true, delete: true };
    pub const EDIT_ONLY: Self = Self { create: false, edit: true, delete: false };
    pub const READ_ONLY: Self = Self { create: false, edit: false, delete: false };

    #[must_use]
    pub fn has_row_actions(self) -> bool {
        self.edit || self.delete
    }
}

/// What the list does after a successful delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterDelete {
    /// Reload the whole collection.
    Refetch,
    /// Drop the row locally without a reload.
    Prune,
}

/// Body encoding for create/update requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Multipart,
}

/// Whether the modal is creating a new record or updating an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditMode {
    Create,
    Update { id: String },
}

impl EditMode {
    #[must_use]
    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create)
    }
}

// =============================================================
// Field schema
// =============================================================

/// Column inside a repeatable row group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowColumn {
    pub key: &'static str,
    pub label: &'static str,
    pub input: RowInput,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowInput {
    Text,
    Date,
    Number,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Email,
    /// Sent as a JSON number when the text parses, otherwise as text.
    Number,
    Date,
    /// Active/Inactive radio pair.
    Active,
    Choice(&'static [(&'static str, &'static str)]),
    /// Select populated from the event collection.
    EventRef,
    /// File picker; the field key is the multipart part name.
    Image,
    Rows(&'static [RowColumn]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Applies {
    Always,
    CreateOnly,
    UpdateOnly,
}

/// One editable field of a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    applies: Applies,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind, applies: Applies::Always }
    }

    #[must_use]
    pub const fn create_only(mut self) -> Self {
        self.applies = Applies::CreateOnly;
        self
    }

    #[must_use]
    pub const fn update_only(mut self) -> Self {
        self.applies = Applies::UpdateOnly;
        self
    }

    #[must_use]
    pub fn applies_to(&self, mode: &EditMode) -> bool {
        match self.applies {
            Applies::Always => true,
            Applies::CreateOnly => mode.is_create(),
            Applies::UpdateOnly => !mode.is_create(),
        }
    }
}

// =============================================================
// Table cells
// =============================================================

/// Rendered value of one table cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// Active/Inactive badge.
    Status(bool),
    /// Thumbnail URL, already normalized for the upload route.
    Image(Option<String>),
    /// External link opened in a new tab.
    Link(String),
}

// =============================================================
// Resource
// =============================================================

/// A backend collection managed by one admin screen.
pub trait Resource: Clone + fmt::Debug + PartialEq + DeserializeOwned + Send + Sync + 'static {
    /// Singular noun used in toasts and buttons (`"speaker"`).
    const LABEL: &'static str;
    /// Screen heading (`"Speakers"`).
    const TITLE: &'static str;
    /// List endpoint, relative to the API prefix.
    const LIST_PATH: &'static str;
    /// Create endpoint, relative to the API prefix.
    const CREATE_PATH: &'static str = "";
    /// Base for `{ITEM_PATH}/{id}` update and delete endpoints.
    const ITEM_PATH: &'static str = "";
    const ENVELOPE: Envelope = Envelope::Bare;
    const CAPABILITIES: Capabilities = Capabilities::FULL;
    const AFTER_DELETE: AfterDelete = AfterDelete::Refetch;
    const CREATE_BODY: BodyKind = BodyKind::Multipart;
    const UPDATE_BODY: BodyKind = BodyKind::Multipart;
    /// Only the first record of the collection is managed.
    const SINGLETON: bool = false;
    const COLUMNS: &'static [&'static str];
    const SCHEMA: &'static [FieldSpec] = &[];

    fn id(&self) -> &str;

    /// One cell per entry of `COLUMNS`.
    fn cells(&self) -> Vec<Cell>;

    /// Draft prefilled from this record for the edit modal.
    fn to_draft(&self) -> Draft {
        Draft::default()
    }

    #[must_use]
    fn body_kind(mode: &EditMode) -> BodyKind {
        if mode.is_create() { Self::CREATE_BODY } else { Self::UPDATE_BODY }
    }

    #[must_use]
    fn has_event_field() -> bool {
        Self::SCHEMA.iter().any(|f| matches!(f.kind, FieldKind::EventRef))
    }
}
