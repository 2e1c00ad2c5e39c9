//! # Error Types
//!
//! Domain-specific error types for kasir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kasir-core errors (this file)                                         │
//! │  ├── CoreError            - What every session operation returns       │
//! │  ├── ValidationError      - Empty or non-numeric input field           │
//! │  └── PreconditionError    - Action not possible in the current state   │
//! │                                                                         │
//! │  apps/kasir errors                                                     │
//! │  └── ApiError             - What the presentation layer sees           │
//! │                                                                         │
//! │  Flow: ValidationError / PreconditionError → CoreError → ApiError      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both kinds are recoverable by the user retrying. A declined confirmation
//! is not an error at all; see [`crate::confirm::Outcome::Cancelled`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by session operations.
///
/// Any operation that returns a `CoreError` has left the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A required input was empty or not numeric.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The session is not in a state that allows the operation.
    #[error("{0}")]
    Precondition(#[from] PreconditionError),
}

impl CoreError {
    /// Returns true for input validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }

    /// Returns true for precondition failures.
    pub fn is_precondition(&self) -> bool {
        matches!(self, CoreError::Precondition(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a user-entered field doesn't meet requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value could not be parsed.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Precondition Error
// =============================================================================

/// The action was well-formed but the session can't perform it right now.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty")]
    CartEmpty,

    /// Undo was requested with an empty undo slot.
    #[error("No transaction to undo")]
    NothingToUndo,

    /// Save or cancel was requested while no product is being edited.
    #[error("No product is being edited")]
    NotEditing,

    /// A confirmation prompt is still waiting for an answer.
    #[error("A {0} confirmation is still pending")]
    ConfirmationPending(String),

    /// An answer arrived but no confirmation was requested.
    #[error("No confirmation is pending")]
    NoPendingConfirmation,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a whole number".to_string(),
        };
        assert_eq!(err.to_string(), "price has invalid format: must be a whole number");
    }

    #[test]
    fn test_precondition_error_messages() {
        assert_eq!(PreconditionError::CartEmpty.to_string(), "Cart is empty");
        assert_eq!(
            PreconditionError::ConfirmationPending("checkout".to_string()).to_string(),
            "A checkout confirmation is still pending"
        );
    }

    #[test]
    fn test_conversions_into_core_error() {
        let core_err: CoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(core_err.is_validation());

        let core_err: CoreError = PreconditionError::NothingToUndo.into();
        assert!(core_err.is_precondition());
        assert_eq!(core_err.to_string(), "No transaction to undo");
    }
}
