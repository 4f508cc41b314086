use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use clinic_core::error::CoreError;
use serde_json::{json, Value};
use sqlx::error::ErrorKind;

/// Body returned for every validation failure, whichever field failed.
pub const VALIDATION_ERRORS: &str = "validation errors";

/// Body returned when a resource id does not exist.
pub const NOT_FOUND: &str = "not found";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the JSON error bodies clients
/// expect:
///
/// ```text
/// 400  {"errors": ["validation errors"]}    also an unreadable create body
/// 404  {"error": "not found"}               also a non-integer id
/// 404  {"error": "<reason>"}            failed patch
/// 500  {"error": "An internal error occurred"}
/// ```
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `clinic_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A create body that could not be read as the expected object.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// A path id that is not an integer. No such resource can exist.
    #[error("Invalid resource id: {0}")]
    InvalidId(#[from] PathRejection),

    /// A patch that could not be applied. Reported as 404 with the reason,
    /// the same status used for a missing patient.
    #[error("{0}")]
    PatchFailed(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    not_found()
                }
                CoreError::Validation(errors) => {
                    tracing::debug!(%errors, "Validation failed");
                    validation_failed()
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::InvalidBody(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Unreadable request body");
                validation_failed()
            }

            AppError::InvalidId(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Unparseable resource id");
                not_found()
            }

            AppError::PatchFailed(msg) => {
                tracing::debug!(error = %msg, "Patch failed");
                (StatusCode::NOT_FOUND, json!({ "error": msg }))
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn not_found() -> (StatusCode, Value) {
    (StatusCode::NOT_FOUND, json!({ "error": NOT_FOUND }))
}

fn validation_failed() -> (StatusCode, Value) {
    (
        StatusCode::BAD_REQUEST,
        json!({ "errors": [VALIDATION_ERRORS] }),
    )
}

fn internal() -> (StatusCode, Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "An internal error occurred" }),
    )
}

/// Classify a sqlx error into an HTTP status and body.
///
/// - `RowNotFound` maps to 404.
/// - Constraint violations (`CHECK`, `NOT NULL`, foreign key) map to 400:
///   they are the storage-side twin of field validation.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, Value) {
    match err {
        sqlx::Error::RowNotFound => not_found(),
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::CheckViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::ForeignKeyViolation => {
                tracing::debug!(error = %db_err, "Constraint violation");
                validation_failed()
            }
            _ => {
                tracing::error!(error = %db_err, "Database error");
                internal()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
