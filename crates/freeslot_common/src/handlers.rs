// --- File: crates/freeslot_common/src/handlers.rs ---

pub const LIVENESS_MESSAGE: &str = "Google Calendar Webhook is running!";

/// Liveness probe. Always succeeds.
pub async fn liveness_handler() -> &'static str {
    LIVENESS_MESSAGE
}
