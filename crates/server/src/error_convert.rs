use dioxus::prelude::ServerFnError;
use shared_types::AppError;

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, ConsultationQuery, MAX_CONSULTATION_LIMIT};

    #[test]
    fn server_fn_error_carries_app_error_json() {
        let err = AppError::not_found("Consultation not found").into_server_fn_error();
        let parsed = AppError::from_server_error(&err.to_string()).unwrap();
        assert_eq!(parsed.kind, AppErrorKind::NotFound);
        assert_eq!(parsed.message, "Consultation not found");
    }

    #[test]
    fn zero_limit_fails_validation_with_field_error() {
        let query = ConsultationQuery {
            clinic_id: None,
            limit: 0,
        };
        let err = query.validate_request().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("limit"));
    }

    #[test]
    fn limit_bound_is_the_consultation_maximum() {
        let at_max = ConsultationQuery {
            clinic_id: None,
            limit: MAX_CONSULTATION_LIMIT,
        };
        assert!(at_max.validate_request().is_ok());

        let over = ConsultationQuery {
            limit: MAX_CONSULTATION_LIMIT + 1,
            ..at_max
        };
        assert!(over.validate_request().is_err());
    }

    #[test]
    fn in_range_limit_passes() {
        let query = ConsultationQuery {
            clinic_id: Some("north".to_string()),
            limit: 200,
        };
        assert!(query.validate_request().is_ok());
    }
}
