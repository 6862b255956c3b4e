//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::FieldError;

/// Longest diagnostic message returned to clients
pub const MAX_DETAIL_LEN: usize = 200;

/// Truncate a diagnostic message on a char boundary
pub fn truncate_detail(message: &str, max_chars: usize) -> String {
    match message.char_indices().nth(max_chars) {
        Some((idx, _)) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

/// Failure reported by a quote store backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store write failed: {0}")]
    Write(String),

    #[error("Store read failed: {0}")]
    Read(String),
}

impl StoreError {
    /// Classify a sqlx error raised while writing
    pub fn write(err: sqlx::Error) -> Self {
        if is_connectivity_error(&err) {
            StoreError::Unavailable(err.to_string())
        } else {
            StoreError::Write(err.to_string())
        }
    }

    /// Classify a sqlx error raised while reading
    pub fn read(err: sqlx::Error) -> Self {
        if is_connectivity_error(&err) {
            StoreError::Unavailable(err.to_string())
        } else {
            StoreError::Read(err.to_string())
        }
    }
}

fn is_connectivity_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
    )
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Failed to save: {0}")]
    StorageWrite(String),

    #[error("Failed to read: {0}")]
    StorageRead(String),
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => AppError::StorageUnavailable(msg),
            StoreError::Write(msg) => AppError::StorageWrite(msg),
            StoreError::Read(msg) => AppError::StorageRead(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Validation(errors) => {
                tracing::debug!("Validation error: {}", self);
                (StatusCode::UNPROCESSABLE_ENTITY, json!(errors))
            }
            AppError::InvalidBody(msg) | AppError::InvalidQuery(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, json!(msg))
            }
            AppError::StorageUnavailable(msg) => {
                tracing::error!("Storage unavailable: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!(truncate_detail(msg, MAX_DETAIL_LEN)),
                )
            }
            AppError::StorageWrite(msg) => {
                tracing::error!("Storage write error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!(format!("Failed to save: {}", truncate_detail(msg, MAX_DETAIL_LEN))),
                )
            }
            AppError::StorageRead(msg) => {
                tracing::error!("Storage read error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!(truncate_detail(msg, MAX_DETAIL_LEN)),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_detail() {
        assert_eq!(truncate_detail("short", 10), "short");
        assert_eq!(truncate_detail("abcdefghij", 4), "abcd");
        assert_eq!(truncate_detail("héllo wörld", 5), "héllo");
    }

    #[test]
    fn test_status_codes() {
        let validation = AppError::Validation(vec![FieldError {
            field: "age",
            message: "must be between 16 and 120, got 15".to_string(),
        }]);
        assert_eq!(
            validation.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::InvalidBody("bad".into()).into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::StorageUnavailable("Database not configured".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::StorageWrite("disk full".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::StorageRead("timeout".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_conversion() {
        assert!(matches!(
            AppError::from(StoreError::Unavailable("down".into())),
            AppError::StorageUnavailable(_)
        ));
        assert!(matches!(
            AppError::from(StoreError::Write("x".into())),
            AppError::StorageWrite(_)
        ));
        assert!(matches!(
            AppError::from(StoreError::Read("x".into())),
            AppError::StorageRead(_)
        ));
    }

    #[test]
    fn test_sqlx_errors_classified() {
        assert!(matches!(
            StoreError::write(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            StoreError::read(sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            StoreError::write(sqlx::Error::RowNotFound),
            StoreError::Write(_)
        ));
        assert!(matches!(
            StoreError::read(sqlx::Error::RowNotFound),
            StoreError::Read(_)
        ));
    }

    #[test]
    fn test_validation_message_lists_fields() {
        let err = AppError::Validation(vec![
            FieldError {
                field: "age",
                message: "too low".to_string(),
            },
            FieldError {
                field: "vehicle_year",
                message: "too old".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: age: too low; vehicle_year: too old"
        );
    }
}
