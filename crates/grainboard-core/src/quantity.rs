//! # Quantity Engine
//!
//! Exact grain arithmetic for the doubling board.
//!
//! ```text
//! square n         1   2   3   4    ...   63        64
//! grains 2^(n-1)   1   2   4   8    ...   2^62      2^63
//! total  2^n - 1   1   3   7   15   ...   2^63 - 1  2^64 - 1 = u64::MAX
//! ```
//!
//! Both functions are shifts on `u64`. The total is computed as
//! `u64::MAX >> (64 - n)`, which yields `2^n - 1` without ever forming `2^64`.

use crate::grains::GrainCount;
use crate::types::SquareIndex;
use crate::BOARD_SQUARES;

/// Grains placed on a single square: `2^(n-1)`.
///
/// ## Example
/// ```rust
/// use grainboard_core::{grains_on_square, SquareIndex};
///
/// let square = SquareIndex::new(10).unwrap();
/// assert_eq!(grains_on_square(square).get(), 512);
///
/// // Square 64 holds more than i64::MAX
/// assert_eq!(grains_on_square(SquareIndex::LAST).get(), 1u64 << 63);
/// ```
#[inline]
pub fn grains_on_square(square: SquareIndex) -> GrainCount {
    GrainCount::new(1u64 << (square.get() - 1))
}

/// Grains on squares `1..=n` combined: `2^n - 1`.
///
/// ## Example
/// ```rust
/// use grainboard_core::{total_through_square, SquareIndex};
///
/// let square = SquareIndex::new(10).unwrap();
/// assert_eq!(total_through_square(square).get(), 1023);
///
/// assert_eq!(
///     total_through_square(SquareIndex::LAST).get(),
///     18_446_744_073_709_551_615
/// );
/// ```
#[inline]
pub fn total_through_square(square: SquareIndex) -> GrainCount {
    GrainCount::new(u64::MAX >> (BOARD_SQUARES - square.get()))
}

/// Approximate weight of `grains` in kilograms.
pub fn estimated_weight_kg(grains: GrainCount) -> f64 {
    grains.weight_kg()
}

/// Fraction of the whole board's grains already placed through `square`.
///
/// ## Example
/// ```rust
/// use grainboard_core::{share_of_board, SquareIndex};
///
/// // The first half of the board is a rounding error
/// let half = SquareIndex::new(32).unwrap();
/// assert!(share_of_board(half) < 0.00001 / 100.0);
/// assert_eq!(share_of_board(SquareIndex::LAST), 1.0);
/// ```
pub fn share_of_board(square: SquareIndex) -> f64 {
    total_through_square(square).as_f64() / total_through_square(SquareIndex::LAST).as_f64()
}

// =============================================================================
// Unit Tests
// =============================================================================
