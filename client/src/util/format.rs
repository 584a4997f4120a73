//! Display and form-input formatting helpers.
//!
//! Backend timestamps are RFC 3339 strings, occasionally a bare `YYYY-MM-DD`.
//! Instants are shown in the browser's local zone as `M/D/YYYY`; date-only
//! values keep their calendar day. Date inputs need a zero-padded
//! `YYYY-MM-DD`.

use std::fmt::Display;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Public route that serves uploaded files.
pub const UPLOADS_ROUTE: &str = "/uploads";

const DAY_FORMAT: &str = "%-m/%-d/%Y";
const STAMP_FORMAT: &str = "%-m/%-d/%Y, %H:%M";

/// A parsed backend date value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stamp {
    /// Carries an offset, so it names a single instant.
    Instant(DateTime<FixedOffset>),
    /// Date and time with no offset; shown as written.
    Floating(NaiveDateTime),
    Day(NaiveDate),
}

impl Stamp {
    fn parse(raw: &str) -> Option<Self> {
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self::Instant(instant));
        }
        if let Ok(floating) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Self::Floating(floating));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().map(Self::Day)
    }

    fn render<Tz>(self, tz: &Tz, with_time: bool) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let fmt = if with_time { STAMP_FORMAT } else { DAY_FORMAT };
        match self {
            Self::Instant(instant) => instant.with_timezone(tz).format(fmt).to_string(),
            Self::Floating(floating) => floating.format(fmt).to_string(),
            Self::Day(day) => day.format(DAY_FORMAT).to_string(),
        }
    }
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|r| !r.is_empty())
}

/// Zero-padded `YYYY-MM-DD` for `<input type="date">`.
///
/// Keeps the calendar day the backend wrote, whatever its offset.
#[must_use]
pub fn date_input_value(raw: &str) -> String {
    let raw = raw.trim();
    match Stamp::parse(raw) {
        Some(Stamp::Instant(instant)) => instant.date_naive().format("%Y-%m-%d").to_string(),
        Some(Stamp::Floating(floating)) => floating.date().format("%Y-%m-%d").to_string(),
        Some(Stamp::Day(day)) => day.format("%Y-%m-%d").to_string(),
        None => raw.split('T').next().unwrap_or_default().to_owned(),
    }
}

/// `M/D/YYYY` in local time, or an em dash when missing.
///
/// Unparseable values are shown as-is.
#[must_use]
pub fn display_date(raw: Option<&str>) -> String {
    display_in(raw, &Local, false)
}

/// `M/D/YYYY, HH:MM` in local time; date-only values drop the time.
#[must_use]
pub fn display_timestamp(raw: Option<&str>) -> String {
    display_in(raw, &Local, true)
}

fn display_in<Tz>(raw: Option<&str>, tz: &Tz, with_time: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(raw) = present(raw) else {
        return "\u{2014}".to_owned();
    };
    Stamp::parse(raw).map_or_else(|| raw.to_owned(), |stamp| stamp.render(tz, with_time))
}

/// Resolve a stored image path to a URL the browser can load.
///
/// Absolute URLs and root-relative paths pass through. `uploads/x.png` and
/// bare file names are served from the uploads route.
#[must_use]
pub fn upload_url(stored: &str) -> String {
    let stored = stored.trim();
    if stored.starts_with("http://") || stored.starts_with("https://") || stored.starts_with('/') {
        return stored.to_owned();
    }
    if stored.starts_with("uploads/") {
        return format!("/{stored}");
    }
    format!("{UPLOADS_ROUTE}/{stored}")
}

#[must_use]
pub fn status_label(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}

/// Comma-joined list, or an em dash when empty.
#[must_use]
pub fn display_list(items: &[String]) -> String {
    if items.is_empty() { "\u{2014}".to_owned() } else { items.join(", ") }
}

/// Text or an em dash when blank.
#[must_use]
pub fn or_dash(text: &str) -> String {
    if text.trim().is_empty() { "\u{2014}".to_owned() } else { text.to_owned() }
}

/// Uppercase the first character (`"event venue"` -> `"Event venue"`).
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
