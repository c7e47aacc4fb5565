//! # Validation Module
//!
//! Turns raw user input into a [`SquareIndex`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (slider, CLI args)                              │
//! │  └── Bounded control, normally only yields 1..=64                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Empty input      → ValidationError::Required                      │
//! │  ├── Not an integer   → ValidationError::InvalidFormat                 │
//! │  └── Off the board    → CoreError::SquareOutOfRange                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Type system                                                  │
//! │  └── SquareIndex can't hold an invalid value                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is clamped. Square 0 and negative squares are rejected rather
//! than producing an empty board.

use crate::error::{CoreResult, ValidationError};
use crate::types::SquareIndex;

/// Parses a square number typed by a user.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Must be a base-10 integer
/// - Must be in `1..=64`
///
/// ## Example
/// ```rust
/// use grainboard_core::validation::parse_square;
///
/// assert_eq!(parse_square(" 64 ").unwrap().get(), 64);
/// assert!(parse_square("").is_err());
/// assert!(parse_square("ten").is_err());
/// assert!(parse_square("0").is_err());
/// ```
pub fn parse_square(input: &str) -> CoreResult<SquareIndex> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "square".to_string(),
        }
        .into());
    }

    let square: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "square".to_string(),
        reason: format!("'{}' is not a whole number", input),
    })?;

    SquareIndex::new(square)
}

/// Validates an already-numeric square.
pub fn validate_square(square: i64) -> CoreResult<SquareIndex> {
    SquareIndex::new(square)
}

// =============================================================================
// Unit Tests
// =============================================================================
