use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use shared_types::{AppError, ConsultationPage, ConsultationQuery};
use std::collections::HashMap;
use uuid::Uuid;

use crate::error_convert::ValidateRequest;
use crate::store::{self, SharedStore};

/// REST routes for consultations.
pub fn api_router() -> Router<SharedStore> {
    Router::new()
        .route("/api/consultations", get(list_consultations))
        .route("/api/consultations/{id}/summary", get(consultation_summary))
}

// ---------------------------------------------------------------------------
// GET /api/consultations
// ---------------------------------------------------------------------------

/// List consultations, newest first, bounded by `limit`.
#[utoipa::path(
    get,
    path = "/api/consultations",
    params(ConsultationQuery),
    responses(
        (status = 200, description = "Consultation page", body = ConsultationPage),
        (status = 404, description = "Unknown clinic", body = AppError),
        (status = 422, description = "Malformed query or limit out of range", body = AppError)
    ),
    tag = "consultations"
)]
#[tracing::instrument(skip(store))]
pub async fn list_consultations(
    State(store): State<SharedStore>,
    query: Result<Query<ConsultationQuery>, QueryRejection>,
) -> Result<Json<ConsultationPage>, AppError> {
    let Query(query) = query.map_err(query_error)?;
    query.validate_request()?;
    let page = store::read(&store, |s| s.page(&query))?;
    Ok(Json(page))
}

// ---------------------------------------------------------------------------
// GET /api/consultations/{id}/summary
// ---------------------------------------------------------------------------

/// Download a plain-text summary of a completed consultation.
#[utoipa::path(
    get,
    path = "/api/consultations/{id}/summary",
    params(("id" = Uuid, Path, description = "Consultation ID")),
    responses(
        (status = 200, description = "Summary text", body = String, content_type = "text/plain"),
        (status = 404, description = "Not found", body = AppError),
        (status = 409, description = "Consultation not completed", body = AppError)
    ),
    tag = "consultations"
)]
#[tracing::instrument(skip(store))]
pub async fn consultation_summary(
    State(store): State<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let text = store::read(&store, |s| s.summary(id))?;
    let disposition = format!("attachment; filename=\"consultation-{id}.txt\"");
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        text,
    ))
}

/// Undecodable query strings become validation errors like any other bad input.
fn query_error(rejection: QueryRejection) -> AppError {
    tracing::warn!(error = %rejection, "rejected consultation query");
    AppError::validation(
        "Invalid query string",
        HashMap::from([("query".to_string(), rejection.body_text())]),
    )
}
