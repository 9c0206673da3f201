#[cfg(test)]
mod tests {
    use crate::handlers::GcalState;
    use crate::routes::{build_state, routes};
    use crate::service::GcalServiceError;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use chrono::{DateTime, Utc};
    use freeslot_common::services::{BoxFuture, CalendarService};
    use freeslot_common::{AppointmentRequest, CalendarEventResult, TimeWindow};
    use freeslot_config::GcalConfig;
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Calendar with nothing booked that accepts every event.
    struct EmptyCalendar;

    impl CalendarService for EmptyCalendar {
        type Error = GcalServiceError;

        fn get_busy_times(
            &self,
            _calendar_id: &str,
            _start_time: DateTime<Utc>,
            _end_time: DateTime<Utc>,
        ) -> BoxFuture<'_, Vec<TimeWindow>, Self::Error> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn create_event(
            &self,
            _calendar_id: &str,
            _appointment: AppointmentRequest,
        ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
            Box::pin(async {
                Ok(CalendarEventResult {
                    event_id: "evt-1".to_string(),
                    status: "confirmed".to_string(),
                })
            })
        }
    }

    fn app() -> axum::Router {
        routes(Arc::new(GcalState::new("primary", Arc::new(EmptyCalendar))))
    }

    #[tokio::test]
    async fn test_free_slots_route_is_get() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/free-slots?date=2025-02-15")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "start": "2025-02-15T00:00:00.000Z", "end": "2025-02-15T23:59:59.000Z" }
            ])
        );
    }

    #[tokio::test]
    async fn test_schedule_route_is_post_only() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/schedule")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/availability")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_build_state_fails_without_credentials() {
        let config = GcalConfig {
            calendar_id: "primary".to_string(),
            client_email: None,
            private_key: None,
            key_path: None,
        };
        assert!(build_state(&config).await.is_err());
    }
}
