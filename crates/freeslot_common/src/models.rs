// --- File: crates/freeslot_common/src/models.rs ---

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Serializes an instant as RFC 3339 UTC with millisecond precision
/// (`2025-02-15T09:00:00.000Z`).
pub fn serialize_instant<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_instant(instant))
}

pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A `[start, end]` interval in UTC. Used for both busy and free intervals.
///
/// Invariant: `start <= end`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    #[serde(serialize_with = "serialize_instant")]
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "2025-02-15T00:00:00.000Z")
    )]
    pub start: DateTime<Utc>,
    #[serde(serialize_with = "serialize_instant")]
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "2025-02-15T09:00:00.000Z")
    )]
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// An appointment to be forwarded to the calendar provider. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    pub summary: String,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub attendee_email: String,
}

/// What the provider reports back after creating an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEventResult {
    pub event_id: String,
    pub status: String,
}
