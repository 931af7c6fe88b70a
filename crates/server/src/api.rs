use dioxus::prelude::*;
use shared_types::{
    Clinic, ConsultationPage, ConsultationQuery, FeatureFlags, HealthStatus, VideoConsultation,
};
use uuid::Uuid;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use crate::store;

/// Get the current feature flags. Flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// List every clinic, for the clinic filter.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_clinics() -> Result<Vec<Clinic>, ServerFnError> {
    store::read(&store::shared(), |s| Ok(s.clinics().to_vec()))
        .map_err(|e| e.into_server_fn_error())
}

/// List consultations for a view, newest first, with statistics for the
/// whole filtered set.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_consultations(query: ConsultationQuery) -> Result<ConsultationPage, ServerFnError> {
    query
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    store::read(&store::shared(), |s| s.page(&query)).map_err(|e| e.into_server_fn_error())
}

/// End an open consultation.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn end_consultation(id: Uuid) -> Result<VideoConsultation, ServerFnError> {
    store::write(&store::shared(), |s| s.end(id)).map_err(|e| {
        tracing::warn!(%id, error = %e, "end consultation rejected");
        e.into_server_fn_error()
    })
}

/// Health report for the super admin dashboard.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_health_status() -> Result<HealthStatus, ServerFnError> {
    Ok(crate::health::health_status(&store::shared()))
}
