// src/models/review.rs
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;
use std::fmt;

/// Placeholder shown in the "Time" column when a review carries no timestamp.
pub const MISSING_TIME: &str = "-";

/// Layout used for localized timestamps, e.g. `1/1/2024, 10:00:00 AM`.
const LOCAL_TIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Row identity as sent by the listing endpoint. Backends disagree on
/// whether ids are integers or strings, so both are accepted.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ReviewId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewId::Number(n) => write!(f, "{n}"),
            ReviewId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: ReviewId,                       // Row key
    #[serde(default)]
    pub user_name: Option<String>,          // Name the reviewer gave, if any
    #[serde(default)]
    pub contact_number: Option<String>,     // Phone number the review came from
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub product_review: Option<String>,     // Free-form review text
    #[serde(default)]
    pub created_at: Option<String>,         // ISO-8601 timestamp, as sent
}

impl Review {
    /// Text for the "User" column: the reviewer's name, falling back to the
    /// contact number.
    pub fn display_user(&self) -> &str {
        self.user_name
            .as_deref()
            .or(self.contact_number.as_deref())
            .unwrap_or_default()
    }

    pub fn display_review(&self) -> &str {
        self.product_review.as_deref().unwrap_or_default()
    }

    /// Text for the "Time" column in the viewer's local time zone.
    pub fn display_time(&self) -> String {
        self.display_time_in(&Local)
    }

    pub fn display_time_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match self.created_at.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => localize_timestamp(raw, tz),
            _ => MISSING_TIME.to_string(),
        }
    }
}

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Renders `raw` in `tz`. Date-times without an offset are read as
/// wall-clock time in `tz`, bare dates as UTC midnight. Anything
/// unparseable is returned verbatim.
pub fn localize_timestamp<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let raw = raw.trim();
    match parse_timestamp(raw, tz) {
        Some(local) => local.format(LOCAL_TIME_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Some(parsed) = parse_with_offset(raw) {
        return Some(parsed.with_timezone(tz));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return tz.from_local_datetime(&naive).earliest();
    }

    let midnight = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

fn parse_with_offset(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }

    // `%z` has no spelling for `Z`
    let normalized = match raw.strip_suffix(['Z', 'z']) {
        Some(stem) => format!("{stem}+00:00"),
        None => raw.to_string(),
    };
    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&normalized, format).ok())
}
