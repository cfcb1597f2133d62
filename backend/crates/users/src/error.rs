//! User Directory Error Types
//!
//! This module provides user-directory error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::{BytesRejection, JsonRejection, PathRejection, QueryRejection};
use axum::extract::path::ErrorKind as PathErrorKind;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{
    app_error::AppError,
    field::{FieldError, Location},
    kind::ErrorKind,
};
use thiserror::Error;

/// User-directory result type alias
pub type UserResult<T> = Result<T, UserError>;

/// User-directory error variants
#[derive(Debug, Error)]
pub enum UserError {
    /// No record under the requested username
    #[error("User not found")]
    UserNotFound,

    /// Username already taken
    #[error("User already exists")]
    UserAlreadyExists,

    /// Request failed schema validation before reaching a use case
    #[error("Request validation failed")]
    Validation(Vec<FieldError>),

    /// Body exceeded the configured size limit
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Body could not be read off the connection
    #[error("{0}")]
    BodyUnreadable(String),
}

impl UserError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::UserNotFound => ErrorKind::NotFound,
            UserError::UserAlreadyExists => ErrorKind::Conflict,
            UserError::Validation(_) => ErrorKind::UnprocessableEntity,
            UserError::PayloadTooLarge => ErrorKind::PayloadTooLarge,
            UserError::BodyUnreadable(_) => ErrorKind::BadRequest,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            UserError::Validation(errors) => err.with_field_errors(errors.iter().cloned()),
            UserError::UserAlreadyExists => err.with_action("Choose a different username"),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UserError::Validation(errors) => {
                tracing::debug!(
                    fields = errors.len(),
                    first = %errors.first().map(ToString::to_string).unwrap_or_default(),
                    "Rejected invalid request"
                );
            }
            _ => {
                tracing::debug!(error = %self, "User request failed");
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

// ============================================================================
// Extractor rejections
// ============================================================================

impl From<JsonRejection> for UserError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::BytesRejection(bytes) => return bytes_rejection(bytes),
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "json_invalid",
        };
        UserError::Validation(vec![FieldError::new(
            Location::Body,
            None,
            kind,
            rejection.body_text(),
        )])
    }
}

impl From<QueryRejection> for UserError {
    fn from(rejection: QueryRejection) -> Self {
        UserError::Validation(vec![FieldError::new(
            Location::Query,
            None,
            "query_invalid",
            rejection.body_text(),
        )])
    }
}

impl From<PathRejection> for UserError {
    fn from(rejection: PathRejection) -> Self {
        let key = match &rejection {
            PathRejection::FailedToDeserializePathParams(err) => match err.kind() {
                PathErrorKind::InvalidUtf8InPathParam { key }
                | PathErrorKind::ParseErrorAtKey { key, .. } => Some(key.clone()),
                _ => None,
            },
            _ => None,
        };
        UserError::Validation(vec![FieldError::new(
            Location::Path,
            key.as_deref(),
            "path_invalid",
            rejection.body_text(),
        )])
    }
}

fn bytes_rejection(rejection: &BytesRejection) -> UserError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UserError::PayloadTooLarge
    } else {
        UserError::BodyUnreadable(rejection.body_text())
    }
}
