//! Unified error handling with Sentry integration.
//!
//! Route handlers return `Result<T, AppError>`. Client errors are answered
//! with a plain-text message; server errors are captured to Sentry first and
//! never expose their details.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The path did not name a contact.
    #[error("Contact not found")]
    NotFound,

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::NotFound(_)) | Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Invalid(_)) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::DuplicateEmail) => StatusCode::CONFLICT,
            Self::Store(StoreError::IdsExhausted) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use contact_list_core::ContactId;

    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(StoreError::NotFound(ContactId::new(4)));
        assert_eq!(err.to_string(), "Contact not found");

        let err = AppError::from(StoreError::Invalid("Name is required"));
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(get_status(AppError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            get_status(StoreError::NotFound(ContactId::FIRST).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(StoreError::Invalid("x").into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(StoreError::DuplicateEmail.into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(StoreError::IdsExhausted.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
