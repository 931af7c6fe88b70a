use serde::{Deserialize, Serialize};

/// Health of one backing service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ServiceHealth {
    pub name: String,
    pub healthy: bool,
    pub detail: String,
}

/// Health report shown on the super admin dashboard and served at `/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HealthStatus {
    /// `"ok"` when every service is healthy, `"degraded"` otherwise.
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub services: Vec<ServiceHealth>,
}

impl HealthStatus {
    pub fn from_services(services: Vec<ServiceHealth>, uptime_seconds: u64, version: &str) -> Self {
        let status = if services.iter().all(|s| s.healthy) {
            "ok"
        } else {
            "degraded"
        };
        Self {
            status: status.to_string(),
            uptime_seconds,
            version: version.to_string(),
            services,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
