// File: crates/freeslot_gcal/src/handlers.rs
use crate::logic::{
    calculate_free_slots, day_window, parse_query_date, FreeSlotsQuery, ScheduleRequest,
    ScheduleResponse, INVALID_DATE, MISSING_FIELDS,
};
use crate::service::GcalServiceError;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Json,
};
use freeslot_common::services::CalendarService;
use freeslot_common::{validation_error, Context, FreeslotError, TimeWindow};
use std::sync::Arc;
use tracing::{debug, info};

/// The calendar gateway as handlers see it.
pub type SharedCalendarService = Arc<dyn CalendarService<Error = GcalServiceError>>;

// Shared state needed by GCal handlers; built once at startup, read-only afterwards
#[derive(Clone)]
pub struct GcalState {
    pub calendar_id: String,
    pub calendar: SharedCalendarService,
}

impl GcalState {
    pub fn new(calendar_id: impl Into<String>, calendar: SharedCalendarService) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            calendar,
        }
    }
}

/// Handler returning the free intervals of one UTC day.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/free-slots",
    params(FreeSlotsQuery),
    responses(
        (status = 200, description = "Free intervals of the day", body = [TimeWindow]),
        (status = 400, description = "Missing or invalid date"),
        (status = 500, description = "Internal error")
    ),
    tag = "Scheduling"
))]
pub async fn free_slots_handler(
    State(state): State<Arc<GcalState>>,
    query: Result<Query<FreeSlotsQuery>, QueryRejection>,
) -> Result<Json<Vec<TimeWindow>>, FreeslotError> {
    let Query(query) = query.map_err(|rejection| {
        info!("Unreadable free-slots query: {}", rejection);
        validation_error(INVALID_DATE)
    })?;

    let date = parse_query_date(query.date.as_deref())?;
    let window = day_window(date);

    let busy = state
        .calendar
        .get_busy_times(&state.calendar_id, window.start, window.end)
        .await
        .provider_context("Error fetching free slots")?;

    let free = calculate_free_slots(window.start, window.end, &busy);
    debug!(
        "{}: {} busy intervals, {} free intervals",
        date,
        busy.len(),
        free.len()
    );
    Ok(Json(free))
}

/// Handler to schedule an appointment.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/schedule",
    request_body = ScheduleRequest,
    responses(
        (status = 200, description = "Event created", body = ScheduleResponse),
        (status = 400, description = "Missing required fields or invalid date-time"),
        (status = 500, description = "Internal error")
    ),
    tag = "Scheduling"
))]
pub async fn schedule_handler(
    State(state): State<Arc<GcalState>>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Result<Json<ScheduleResponse>, FreeslotError> {
    let Json(payload) = payload.map_err(|rejection| {
        info!("Unreadable schedule body: {}", rejection);
        validation_error(MISSING_FIELDS)
    })?;

    // Validated before any provider call
    let appointment = payload.into_appointment()?;

    let created = state
        .calendar
        .create_event(&state.calendar_id, appointment)
        .await
        .provider_context("Error scheduling event")?;

    info!(
        "Successfully created event: {} ({})",
        created.event_id, created.status
    );
    Ok(Json(ScheduleResponse {
        success: true,
        event_id: created.event_id,
    }))
}
