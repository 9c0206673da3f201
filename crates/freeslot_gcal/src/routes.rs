// --- File: crates/freeslot_gcal/src/routes.rs ---

use crate::auth::create_calendar_hub;
use crate::handlers::{free_slots_handler, schedule_handler, GcalState};
use crate::service::GoogleCalendarService;
use axum::{
    routing::{get, post},
    Router,
};
use freeslot_common::log_result;
use freeslot_config::GcalConfig;
use std::error::Error;
use std::sync::Arc;
use tracing::info;

/// Builds the shared scheduling state: authenticated hub, Google gateway and
/// the configured calendar id. Fails if the credentials cannot be loaded.
pub async fn build_state(
    config: &GcalConfig,
) -> Result<Arc<GcalState>, Box<dyn Error + Send + Sync>> {
    let calendar_hub = log_result(
        create_calendar_hub(config).await,
        "Google Calendar hub ready",
        "Failed to create Google Calendar hub",
    )?;
    let calendar = GoogleCalendarService::new(Arc::new(calendar_hub));
    info!("Serving free/busy for calendar {}", config.calendar_id);
    Ok(Arc::new(GcalState::new(
        config.calendar_id.clone(),
        Arc::new(calendar),
    )))
}

/// Creates a router containing the scheduling routes.
pub fn routes(state: Arc<GcalState>) -> Router {
    Router::new()
        .route("/free-slots", get(free_slots_handler))
        .route("/schedule", post(schedule_handler))
        .with_state(state)
}
