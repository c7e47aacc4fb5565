//! # Error Types
//!
//! Domain-specific error types for grainboard-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  grainboard-core errors (this file)                                    │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  grainboard-cli errors (app)                                           │
//! │  ├── ConfigError      - Bad config file / env values                   │
//! │  └── CliError         - What the terminal sees ([CODE] message)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in error messages
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core computation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A square index outside the board was supplied.
    ///
    /// ## When This Occurs
    /// - A caller bypassed its own bounded control (slider, arg parser)
    /// - Square 0 or a negative number was passed through
    #[error("Square {square} is not on the board (valid squares are {min}..={max})")]
    SquareOutOfRange { square: i64, min: u8, max: u8 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when raw user input doesn't meet requirements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., "ten" instead of 10).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::SquareOutOfRange {
            square: 65,
            min: 1,
            max: 64,
        };
        assert_eq!(
            err.to_string(),
            "Square 65 is not on the board (valid squares are 1..=64)"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "square".to_string(),
        };
        assert_eq!(err.to_string(), "square is required");

        let err = ValidationError::NotAllowed {
            field: "format".to_string(),
            allowed: vec!["text".to_string(), "json".to_string()],
        };
        assert_eq!(err.to_string(), "format must be one of: [\"text\", \"json\"]");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "square".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
