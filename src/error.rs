//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the domain, application and infrastructure
//! layers returns [`AppError`]. Handlers propagate it with `?` and axum turns
//! it into a JSON error body via [`IntoResponse`].
//!
//! # Response Format
//!
//! ```json
//! {
//!   "error": {
//!     "code": "not_found",
//!     "message": "Short link not found",
//!     "details": { "code": "abc1234" }
//!   }
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors surfaced by link operations.
///
/// | Variant              | HTTP status |
/// |----------------------|-------------|
/// | `Validation`         | 400         |
/// | `NotFound`           | 404         |
/// | `Conflict`           | 409         |
/// | `StorageExhausted`   | 503         |
/// | `StoreUnavailable`   | 500         |
/// | `Internal`           | 500         |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed input.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// No link matches the requested short code.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// A uniqueness constraint was violated in the store.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Short code generation gave up after too many collisions.
    #[error("{message}")]
    StorageExhausted { message: String, details: Value },

    /// The database could not complete the operation.
    #[error("{message}")]
    StoreUnavailable { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn storage_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::StorageExhausted {
            message: message.into(),
            details,
        }
    }

    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::StorageExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::StoreUnavailable { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts the error into its serializable form.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::StorageExhausted { message, details } => {
                ("storage_exhausted", message, details)
            }
            AppError::StoreUnavailable { message, details } => {
                ("store_unavailable", message, details)
            }
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        // The driver message can leak connection details, so it stays in the log.
        tracing::error!(error = %e, "database operation failed");
        AppError::store_unavailable("Storage is unavailable", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut first_message = None;
        let mut details = Map::new();

        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();

            if first_message.is_none() {
                first_message = messages.first().cloned();
            }

            details.insert(field.to_string(), json!(messages));
        }

        AppError::bad_request(
            first_message.unwrap_or_else(|| "Invalid request".to_string()),
            Value::Object(details),
        )
    }
}
