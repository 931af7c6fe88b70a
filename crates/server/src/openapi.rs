use axum::Router;
use shared_types::{
    AppError, AppErrorKind, ConsultationPage, ConsultationStats, ConsultationStatus, HealthStatus,
    ServiceHealth, VideoConsultation,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::store::SharedStore;
use crate::{health, rest};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        rest::list_consultations,
        rest::consultation_summary,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        ConsultationPage,
        ConsultationStats,
        ConsultationStatus,
        HealthStatus,
        ServiceHealth,
        VideoConsultation,
    )),
    tags(
        (name = "consultations", description = "Video consultation endpoints"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Clinic Console API",
        description = "Video consultation and clinic health API",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`,
/// the health check at `/health`, and the REST API at `/api/*`.
pub fn api_router(store: SharedStore) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(store)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
