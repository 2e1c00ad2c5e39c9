//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Kasir POS                              │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Bad input?   ─── CoreError::Validation ────► VALIDATION_ERROR          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Wrong state? ─── CoreError::Precondition ──► PRECONDITION_FAILED       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Unknown id?  ─── (command layer) ──────────► NOT_FOUND                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Bad config?  ─── ConfigError (reload) ─────► CONFIG_ERROR              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ──────────────────────────────────────────────────────────►    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The presentation layer shows `message` as-is and may branch on `code`.

use serde::Serialize;

use kasir_core::CoreError;

use crate::config::ConfigError;

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "PRECONDITION_FAILED",
///   "message": "Cart is empty"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A form field was empty or not numeric
    ValidationError,

    /// Empty cart at checkout, nothing to undo, prompt still open, ...
    PreconditionFailed,

    /// Referenced product does not exist
    NotFound,

    /// Configuration could not be loaded
    ConfigError,

    /// The caller broke the command contract (e.g. stale cart index)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::new(ErrorCode::ValidationError, e.to_string()),
            CoreError::Precondition(e) => {
                ApiError::new(ErrorCode::PreconditionFailed, e.to_string())
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Config error: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use kasir_core::{PreconditionError, ValidationError};

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: ApiError = CoreError::from(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");

        let err: ApiError = CoreError::from(PreconditionError::CartEmpty).into();
        assert_eq!(err.code, ErrorCode::PreconditionFailed);
        assert_eq!(err.message, "Cart is empty");
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::not_found("Product", "42");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({"code": "NOT_FOUND", "message": "Product not found: 42"})
        );
    }

    #[test]
    fn test_config_error_maps_to_code() {
        let err: ApiError = ConfigError::Invalid("store name must not be empty".into()).into();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(
            serde_json::to_value(&err).unwrap()["code"],
            "CONFIG_ERROR"
        );
    }

    #[test]
    fn test_display() {
        let err = ApiError::internal("boom");
        assert_eq!(err.to_string(), "[Internal] boom");
    }
}
