use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional behaviour is active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FeatureFlags {
    /// Seed the consultation store with demo clinics and consultations.
    #[serde(default)]
    pub demo_data: bool,
    /// Wrap the HTTP router in a request tracing layer.
    #[serde(default)]
    pub request_tracing: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}
