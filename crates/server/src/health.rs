use axum::extract::State;
use axum::Json;
use shared_types::{HealthStatus, ServiceHealth};
use std::sync::OnceLock;
use std::time::Instant;

use crate::store::SharedStore;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Build the health report from the store and config state.
pub fn health_status(store: &SharedStore) -> HealthStatus {
    let store_service = match store.read() {
        Ok(guard) => ServiceHealth {
            name: "consultation-store".to_string(),
            healthy: true,
            detail: format!("{} clinics", guard.clinics().len()),
        },
        Err(_) => ServiceHealth {
            name: "consultation-store".to_string(),
            healthy: false,
            detail: "lock poisoned".to_string(),
        },
    };

    let config_service = ServiceHealth {
        name: "config".to_string(),
        healthy: true,
        detail: if crate::config::is_loaded() {
            "loaded".to_string()
        } else {
            "defaults".to_string()
        },
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    HealthStatus::from_services(
        vec![store_service, config_service],
        uptime,
        env!("CARGO_PKG_VERSION"),
    )
}

/// Health check handler.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health report", body = HealthStatus)
    ),
    tag = "health"
)]
#[tracing::instrument(skip(store))]
pub async fn health_check(State(store): State<SharedStore>) -> Json<HealthStatus> {
    Json(health_status(&store))
}
