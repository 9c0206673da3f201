// --- File: crates/freeslot_common/src/routes.rs ---

use axum::{routing::get, Router};

use crate::handlers::liveness_handler;

/// Routes shared by every deployment: currently only the liveness check at `/`.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(liveness_handler))
}
