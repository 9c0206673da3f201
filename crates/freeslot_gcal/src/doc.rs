// File: crates/freeslot_gcal/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{ScheduleRequest, ScheduleResponse};
use freeslot_common::TimeWindow;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::free_slots_handler,
        crate::handlers::schedule_handler
    ),
    components(schemas(TimeWindow, ScheduleRequest, ScheduleResponse)),
    tags(
        (name = "Scheduling", description = "Free slots and appointment booking on one Google Calendar")
    )
)]
pub struct GcalApiDoc;
