// --- File: crates/freeslot_gcal/src/service.rs ---
//! Google Calendar service implementation.
//!
//! This module provides the Google Calendar implementation of the
//! [`CalendarService`] trait: one free/busy query and one event insertion.

use chrono::{DateTime, Utc};
use freeslot_common::services::{BoxFuture, CalendarService};
use freeslot_common::{AppointmentRequest, CalendarEventResult, TimeWindow};
use google_calendar3::api::{
    Event, EventAttendee, EventDateTime, FreeBusyRequest, FreeBusyRequestItem, FreeBusyResponse,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::auth::HubType;

/// Time zone annotation sent with every request and created event.
pub const UTC_TIME_ZONE: &str = "UTC";

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
    #[error("Calendar not found: {0}")]
    UnknownCalendar(String),
    #[error("Free/busy query failed for {calendar_id}: {reasons}")]
    FreeBusyError { calendar_id: String, reasons: String },
    #[error("Event rejected by provider: {0}")]
    Rejected(String),
    #[error("Provider returned an event without an id")]
    MissingEventId,
}

/// Google Calendar service implementation.
pub struct GoogleCalendarService {
    calendar_hub: Arc<HubType>,
}

impl GoogleCalendarService {
    /// Create a new Google Calendar service.
    pub fn new(calendar_hub: Arc<HubType>) -> Self {
        Self { calendar_hub }
    }
}

/// Free/busy request for exactly one calendar over `[start_time, end_time]`.
pub fn free_busy_request(
    calendar_id: &str,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> FreeBusyRequest {
    FreeBusyRequest {
        time_min: Some(start_time),
        time_max: Some(end_time),
        time_zone: Some(UTC_TIME_ZONE.to_string()),
        items: Some(vec![FreeBusyRequestItem {
            id: Some(calendar_id.to_string()),
            ..Default::default()
        }]),
        ..Default::default()
    }
}

/// Extracts the busy intervals of `calendar_id` from a free/busy response,
/// sorted by start.
///
/// Google reports an unknown or inaccessible calendar as a calendar entry
/// carrying `errors` (reason `notFound`) rather than as an HTTP failure.
pub fn busy_windows_from_response(
    response: FreeBusyResponse,
    calendar_id: &str,
) -> Result<Vec<TimeWindow>, GcalServiceError> {
    let cal_info = response
        .calendars
        .and_then(|mut calendars| calendars.remove(calendar_id))
        .ok_or_else(|| GcalServiceError::UnknownCalendar(calendar_id.to_string()))?;

    if let Some(errors) = cal_info.errors.filter(|errors| !errors.is_empty()) {
        let reasons: Vec<String> = errors
            .into_iter()
            .map(|e| e.reason.unwrap_or_else(|| "unknown".to_string()))
            .collect();
        if reasons.iter().any(|r| r == "notFound") {
            return Err(GcalServiceError::UnknownCalendar(calendar_id.to_string()));
        }
        return Err(GcalServiceError::FreeBusyError {
            calendar_id: calendar_id.to_string(),
            reasons: reasons.join(", "),
        });
    }

    let mut busy_periods = Vec::new();
    for period in cal_info.busy.unwrap_or_default() {
        match (period.start, period.end) {
            (Some(start), Some(end)) => busy_periods.push(TimeWindow::new(start, end)),
            _ => warn!("Skipping busy period with missing start/end: {:?}", period),
        }
    }

    busy_periods.sort_by_key(|w| w.start);
    Ok(busy_periods)
}

fn utc_event_time(instant: DateTime<Utc>) -> EventDateTime {
    EventDateTime {
        date_time: Some(instant),
        time_zone: Some(UTC_TIME_ZONE.to_string()),
        ..Default::default()
    }
}

/// Single-attendee timed event for an appointment.
pub fn build_event(appointment: AppointmentRequest) -> Event {
    Event {
        summary: Some(appointment.summary),
        description: appointment.description,
        start: Some(utc_event_time(appointment.start)),
        end: Some(utc_event_time(appointment.end)),
        attendees: Some(vec![EventAttendee {
            email: Some(appointment.attendee_email),
            ..Default::default()
        }]),
        ..Default::default()
    }
}

/// Message of a Google error body with code 400, i.e. a payload the provider
/// refused (malformed attendee email, end before start, ...).
pub fn rejection_message(body: &serde_json::Value) -> Option<String> {
    let error = body.get("error")?;
    if error.get("code")?.as_u64()? != 400 {
        return None;
    }
    Some(
        error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Bad Request")
            .to_string(),
    )
}

fn classify_insert_error(err: google_calendar3::Error) -> GcalServiceError {
    if let google_calendar3::Error::BadRequest(body) = &err {
        if let Some(message) = rejection_message(body) {
            return GcalServiceError::Rejected(message);
        }
    }
    GcalServiceError::ApiError(err)
}

impl CalendarService for GoogleCalendarService {
    type Error = GcalServiceError;

    /// Retrieves busy time periods for a calendar within a given time range.
    ///
    /// # Errors
    ///
    /// Returns a `GcalServiceError` if:
    /// * The API call to Google Calendar fails (transport, auth)
    /// * The calendar is unknown to the provider or not shared with the service account
    fn get_busy_times(
        &self,
        calendar_id: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<TimeWindow>, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let req = free_busy_request(&calendar_id, start_time, end_time);

            let (_response, freebusy_response) = calendar_hub.freebusy().query(req).doit().await?;

            let busy_periods = busy_windows_from_response(freebusy_response, &calendar_id)?;
            debug!(
                "{} busy periods for {} between {} and {}",
                busy_periods.len(),
                calendar_id,
                start_time,
                end_time
            );
            Ok(busy_periods)
        })
    }

    /// Creates a timed event with the requester as the single attendee.
    ///
    /// No overlap or business-hours checks happen here; whatever the provider
    /// accepts is booked.
    ///
    /// # Errors
    ///
    /// * `Rejected` when Google answers 400 for the payload
    /// * `ApiError` for transport and auth failures
    /// * `MissingEventId` if the created event comes back without an id
    fn create_event(
        &self,
        calendar_id: &str,
        appointment: AppointmentRequest,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let new_event = build_event(appointment);

            let (_response, created_event) = calendar_hub
                .events()
                .insert(new_event, &calendar_id)
                .doit()
                .await
                .map_err(classify_insert_error)?;

            Ok(CalendarEventResult {
                event_id: created_event.id.ok_or(GcalServiceError::MissingEventId)?,
                status: created_event
                    .status
                    .unwrap_or_else(|| "confirmed".to_string()),
            })
        })
    }
}
