// --- File: crates/freeslot_gcal/src/logic.rs ---
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use freeslot_common::{validation_error, AppointmentRequest, FreeslotError, TimeWindow};
use serde::{Deserialize, Serialize};

// --- Caller-facing validation messages ---
pub const DATE_REQUIRED: &str = "Date is required";
pub const INVALID_DATE: &str = "Invalid date format (YYYY-MM-DD)";
pub const MISSING_FIELDS: &str = "Missing required fields";
pub const INVALID_DATETIME: &str = "Invalid date-time format";

// --- Data Structures ---
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct FreeSlotsQuery {
    /// Day to inspect, YYYY-MM-DD (UTC)
    #[cfg_attr(feature = "openapi", param(example = "2025-02-15"))]
    pub date: Option<String>,
}

/// Body of `POST /schedule`. Every field is optional at the decoding stage so
/// missing fields turn into a 400 instead of an extractor rejection.
#[derive(Deserialize, Debug, Default, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ScheduleRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Intro call"))]
    pub summary: Option<String>,
    pub description: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "2025-02-15T10:00:00Z"))]
    pub start: Option<String>, // ISO 8601 format
    #[cfg_attr(feature = "openapi", schema(example = "2025-02-15T10:30:00Z"))]
    pub end: Option<String>, // ISO 8601 format
    #[cfg_attr(feature = "openapi", schema(example = "guest@example.com"))]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ScheduleResponse {
    pub success: bool,
    #[serde(rename = "eventId")]
    pub event_id: String,
}

fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, FreeslotError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| validation_error(INVALID_DATETIME))
}

impl ScheduleRequest {
    /// Checks presence of all required fields, then parses the timestamps.
    pub fn into_appointment(self) -> Result<AppointmentRequest, FreeslotError> {
        let (Some(summary), Some(start), Some(end), Some(email)) = (
            required(&self.summary),
            required(&self.start),
            required(&self.end),
            required(&self.email),
        ) else {
            return Err(validation_error(MISSING_FIELDS));
        };

        Ok(AppointmentRequest {
            summary: summary.to_string(),
            description: self.description,
            start: parse_instant(start)?,
            end: parse_instant(end)?,
            attendee_email: email.trim().to_string(),
        })
    }
}

// --- Free Slot Logic ---

/// Parses the `date` query parameter (YYYY-MM-DD).
pub fn parse_query_date(date: Option<&str>) -> Result<NaiveDate, FreeslotError> {
    let date = date
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| validation_error(DATE_REQUIRED))?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| validation_error(INVALID_DATE))
}

/// The queried day in UTC: `00:00:00` through `23:59:59`.
pub fn day_window(date: NaiveDate) -> TimeWindow {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::seconds(24 * 60 * 60 - 1);
    TimeWindow::new(start, end)
}

/// Computes the free intervals of `[day_start, day_end]` around `busy`.
///
/// `busy` must be sorted ascending by start; it is neither sorted nor merged
/// here. The cursor only ever moves forward, so busy intervals that start
/// before `day_start` or sit inside an earlier interval are harmless.
/// Zero-length gaps are not emitted.
pub fn calculate_free_slots(
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
    busy: &[TimeWindow],
) -> Vec<TimeWindow> {
    let mut free = Vec::with_capacity(busy.len() + 1);
    let mut cursor = day_start;

    for interval in busy {
        let gap = TimeWindow::new(cursor, interval.start);
        if !gap.is_empty() {
            free.push(gap);
        }
        cursor = cursor.max(interval.end);
    }

    let tail = TimeWindow::new(cursor, day_end);
    if !tail.is_empty() {
        free.push(tail);
    }
    free
}
