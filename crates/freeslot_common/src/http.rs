// --- File: crates/freeslot_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info};

use crate::error::{FreeslotError, HttpStatusCode};

/// Extension trait for FreeslotError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for FreeslotError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            error!("{}", self);
        } else {
            info!("Rejected request: {}", self);
        }

        // Body is always {"error": "<message>"}; server errors never carry detail
        let body = Json(json!({ "error": self.public_message() }));

        (status_code, body).into_response()
    }
}

/// Implement IntoResponse for FreeslotError to make it easier to use in Axum handlers.
impl IntoResponse for FreeslotError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}
