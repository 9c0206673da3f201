// --- File: crates/freeslot_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod handlers; // Shared HTTP handlers
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Data structures and models
pub mod routes; // Route definitions
pub mod services; // Service abstractions

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    config_error, provider_error, validation_error, Context, FreeslotError,
    HttpStatusCode, INTERNAL_ERROR_MESSAGE,
};

pub use http::IntoHttpResponse;

pub use logging::{init, init_with_level, log_error, log_result};

pub use models::{AppointmentRequest, CalendarEventResult, TimeWindow};
