//! Wire records returned by the platform backend.
//!
//! DESIGN
//! ======
//! The backend is loosely typed: identifiers arrive as `_id`, field casing is
//! inconsistent (`BioGraphy`, `TwitterLink`, `Designation`), flags created via
//! multipart come back as `"true"`/`"false"` strings, and numbers are sometimes
//! quoted. The serde attributes here absorb those quirks so the rest of the
//! client only sees clean Rust fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================
// Content entities
// =============================================================

/// An event master record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    #[serde(rename = "_id")]
    pub id: String,
    /// `"speaker"` or `"mentor"`.
    #[serde(rename = "type", default, deserialize_with = "deserialize_text")]
    pub kind: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub phone: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(rename = "youTubeLink", default, deserialize_with = "deserialize_text")]
    pub youtube_link: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub instagram_link: String,
    #[serde(rename = "TwitterLink", default, deserialize_with = "deserialize_text")]
    pub twitter_link: String,
    #[serde(rename = "LinkedinLink", default, deserialize_with = "deserialize_text")]
    pub linkedin_link: String,
    #[serde(rename = "BioGraphy", default, deserialize_with = "deserialize_text")]
    pub biography: String,
    /// Free-text caption shown below the speaker's name.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub registered_at: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: bool,
    /// Stored image path; uploads are sent under the `image` part.
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub link: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: bool,
}

/// Reference to an event: populated `{ _id, title }` or a bare id string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventRef {
    Populated {
        #[serde(rename = "_id")]
        id: String,
        #[serde(default)]
        title: String,
    },
    Id(String),
}

impl EventRef {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Populated { id, .. } | Self::Id(id) => id,
        }
    }

    /// Title when the backend populated the reference.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Populated { title, .. } => Some(title),
            Self::Id(_) => None,
        }
    }
}

/// Dated price row attached to a venue.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueOffering {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub start_date: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub end_date: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub price: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub event_master_item: Option<EventRef>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub city: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub place: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub map: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: bool,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default)]
    pub offerings: Vec<VenueOffering>,
}

/// One bullet of a price plan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePlan {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub event_master_item: Option<EventRef>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title_top: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub title: String,
    /// Kept as text: the backend has stored both numbers and strings here.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub price: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub payment_link: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub slots: String,
    #[serde(default)]
    pub offerings: Vec<Offering>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

// =============================================================
// Page content singletons
// =============================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HomeContent {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub home: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub about: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgendaContent {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub agenda: String,
}

/// A public-site navigation entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub label: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_active: bool,
}

// =============================================================
// Read-only submissions
// =============================================================

/// Attendee registration. The form payload arrives as a JSON-encoded string
/// in `data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(deserialize_with = "deserialize_embedded_json")]
    pub data: RegistrationForm,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    #[serde(deserialize_with = "deserialize_text")]
    pub first_name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub last_name: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub twitter_id: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub phone_number: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub emergency_contact_number: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub trading_years: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub country: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub state: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub city: String,
    #[serde(deserialize_with = "deserialize_text")]
    pub capital_allocation_trading: String,
    pub market_traded: Vec<String>,
    pub profile: Vec<String>,
    pub how_to_know: Vec<String>,
    pub food_preferences: Vec<String>,
}

/// Contact-form inquiry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(rename = "Designation", default, deserialize_with = "deserialize_text")]
    pub designation: String,
    #[serde(rename = "Contact", default, deserialize_with = "deserialize_text")]
    pub contact: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub website: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub company_name: String,
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
}

// =============================================================
// Auth
// =============================================================

/// Response body of `POST /api/v1/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub user: Option<serde_json::Value>,
}

// =============================================================
// Lenient field decoders
// =============================================================

/// Strings pass through, numbers and booleans are stringified, null is empty.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(D::Error::custom(format!("expected text, got {other}"))),
    }
}

/// Booleans pass through, `"true"`/`"false"` strings are parsed, null is `false`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::String(text) => match text.trim() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(D::Error::custom(format!("expected boolean flag, got {other:?}"))),
        },
        other => Err(D::Error::custom(format!("expected boolean flag, got {other}"))),
    }
}

/// Accepts either an embedded JSON document in a string or the object itself.
fn deserialize_embedded_json<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => serde_json::from_str(&text).map_err(D::Error::custom),
        other => serde_json::from_value(other).map_err(D::Error::custom),
    }
}
