use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// What went wrong, independent of transport.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AppErrorKind {
    /// Unknown consultation or clinic.
    NotFound,
    /// Query parameters out of range.
    ValidationError,
    /// The consultation is in the wrong state for the request.
    Conflict,
    /// Store unavailable.
    InternalError,
}

impl AppErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppErrorKind::NotFound => "NotFound",
            AppErrorKind::ValidationError => "ValidationError",
            AppErrorKind::Conflict => "Conflict",
            AppErrorKind::InternalError => "InternalError",
        }
    }

    /// HTTP status used by the REST routes.
    pub fn status_code(&self) -> u16 {
        match self {
            AppErrorKind::NotFound => 404,
            AppErrorKind::ValidationError => 422,
            AppErrorKind::Conflict => 409,
            AppErrorKind::InternalError => 500,
        }
    }
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error shared by the REST routes, the server functions and the UI.
///
/// Serialized as JSON so the client can recover the kind and message from a
/// server function failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// Per-field messages for validation failures.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            field_errors,
            ..Self::new(AppErrorKind::ValidationError, message)
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Conflict, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Recover an `AppError` from `ServerFnError::to_string()` output.
    ///
    /// The JSON payload is either the whole string or embedded, e.g.
    /// `error running server function: {"kind":"Conflict",...} (details: None)`.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        (end > start)
            .then(|| serde_json::from_str(&error_message[start..=end]).ok())
            .flatten()
    }

    /// Message to show inline in the UI for a failed server call.
    pub fn friendly_message(error_string: &str) -> String {
        Self::from_server_error(error_string)
            .map(|e| e.message)
            .unwrap_or_else(|| "Something went wrong. Please try again.".to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                let first = errs.first()?;
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                Some((field.to_string(), msg))
            })
            .collect();
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.kind.status_code())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_bare_payload() {
        let json = r#"{"kind":"Conflict","message":"Consultation already completed"}"#;
        let err = AppError::from_server_error(json).unwrap();
        assert_eq!(err.kind, AppErrorKind::Conflict);
        assert_eq!(err.message, "Consultation already completed");
    }

    #[test]
    fn parses_payload_wrapped_by_server_fn() {
        let wrapped = r#"error running server function: {"kind":"NotFound","message":"Consultation not found"} (details: None)"#;
        let err = AppError::from_server_error(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Consultation not found");
    }

    #[test]
    fn garbage_is_not_an_app_error() {
        assert!(AppError::from_server_error("not json at all").is_none());
        assert!(AppError::from_server_error("").is_none());
        assert!(AppError::from_server_error("} backwards {").is_none());
    }

    #[test]
    fn friendly_message_prefers_payload_message() {
        let json = r#"{"kind":"InternalError","message":"Consultation store is unavailable"}"#;
        assert_eq!(
            AppError::friendly_message(json),
            "Consultation store is unavailable"
        );
        assert_eq!(
            AppError::friendly_message("connection reset"),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn validation_keeps_field_errors() {
        let fields = HashMap::from([("limit".to_string(), "out of range".to_string())]);
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors["limit"], "out of range");
    }

    #[test]
    fn status_codes() {
        assert_eq!(AppErrorKind::NotFound.status_code(), 404);
        assert_eq!(AppErrorKind::ValidationError.status_code(), 422);
        assert_eq!(AppErrorKind::Conflict.status_code(), 409);
        assert_eq!(AppErrorKind::InternalError.status_code(), 500);
    }

    #[test]
    fn display_prefixes_kind() {
        let err = AppError::conflict("already ended");
        assert_eq!(err.to_string(), "Conflict: already ended");
    }

    #[test]
    fn empty_field_errors_are_not_serialized() {
        let json = serde_json::to_string(&AppError::not_found("gone")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
