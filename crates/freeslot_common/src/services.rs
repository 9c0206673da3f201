// --- File: crates/freeslot_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! Handlers talk to the calendar provider only through [`CalendarService`], so
//! the Google implementation can be swapped for an in-memory one in tests.

use chrono::{DateTime, Utc};
use std::future::Future;
use std::pin::Pin;

use crate::models::{AppointmentRequest, CalendarEventResult, TimeWindow};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Calendar provider operations needed by the service.
pub trait CalendarService: Send + Sync {
    /// Error type returned by calendar service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Busy intervals of one calendar within `[start_time, end_time]`,
    /// ascending by start.
    fn get_busy_times(
        &self,
        calendar_id: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<TimeWindow>, Self::Error>;

    /// Creates a single-attendee timed event.
    fn create_event(
        &self,
        calendar_id: &str,
        appointment: AppointmentRequest,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error>;
}
