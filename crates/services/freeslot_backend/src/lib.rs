// File: services/freeslot_backend/src/lib.rs
use axum::Router;
use freeslot_gcal::GcalState;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// The full HTTP surface: liveness, scheduling routes and, with the `openapi`
/// feature, Swagger UI at `/api/docs`.
pub fn app(gcal_state: Arc<GcalState>) -> Router {
    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut app = Router::new()
        .merge(freeslot_common::routes())
        .merge(freeslot_gcal::routes(gcal_state));

    #[cfg(feature = "openapi")]
    {
        use freeslot_gcal::doc::GcalApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Freeslot API",
                version = "0.1.0",
                description = "Free slots and appointment scheduling on a Google Calendar",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            tags((name = "Freeslot", description = "Core service endpoints")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(GcalApiDoc::openapi());
        tracing::info!("Adding Swagger UI at /api/docs");

        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}
