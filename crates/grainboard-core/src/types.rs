//! # Domain Types
//!
//! The input type every grainboard computation is keyed on.
//!
//! ## Board Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  col:   0    1    2    3    4    5    6    7                            │
//! │  row 0  1    2    3    4    5    6    7    8                            │
//! │  row 1  9   10   11   12   13   14   15   16                            │
//! │  ...                                                                    │
//! │  row 7  57  58   59   60   61   62   63   64                            │
//! │                                                                         │
//! │  square = row × 8 + column + 1   (row-major, 0-indexed row/column)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::{BOARD_SQUARES, BOARD_WIDTH};

// =============================================================================
// Square Index
// =============================================================================

/// A square on the board, always in `1..=64`.
///
/// ## Invariant
/// The only constructors are [`SquareIndex::new`], `TryFrom<i64>` and
/// `FromStr`, all of which reject out-of-range values. Code that holds a
/// `SquareIndex` never needs to re-check bounds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(try_from = "i64")]
#[ts(export)]
pub struct SquareIndex(u8);

impl SquareIndex {
    /// The first square (1 grain).
    pub const FIRST: SquareIndex = SquareIndex(1);

    /// The last square (2^63 grains).
    pub const LAST: SquareIndex = SquareIndex(BOARD_SQUARES);

    /// Creates a square index, rejecting anything off the board.
    ///
    /// ## Example
    /// ```rust
    /// use grainboard_core::SquareIndex;
    ///
    /// assert_eq!(SquareIndex::new(10).unwrap().get(), 10);
    /// assert!(SquareIndex::new(0).is_err());
    /// assert!(SquareIndex::new(65).is_err());
    /// ```
    pub fn new(square: i64) -> CoreResult<Self> {
        if square < 1 || square > BOARD_SQUARES as i64 {
            return Err(CoreError::SquareOutOfRange {
                square,
                min: 1,
                max: BOARD_SQUARES,
            });
        }

        Ok(SquareIndex(square as u8))
    }

    /// Returns the 1-based square number.
    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Zero-based row on the 8×8 board.
    #[inline]
    pub const fn row(&self) -> usize {
        (self.0 as usize - 1) / BOARD_WIDTH
    }

    /// Zero-based column on the 8×8 board.
    #[inline]
    pub const fn column(&self) -> usize {
        (self.0 as usize - 1) % BOARD_WIDTH
    }

    /// The square one step earlier, or `None` on square 1.
    pub fn previous(&self) -> Option<SquareIndex> {
        (self.0 > 1).then(|| SquareIndex(self.0 - 1))
    }

    /// Iterates squares `1..=last` in ascending order.
    pub fn through(last: SquareIndex) -> impl Iterator<Item = SquareIndex> {
        (1..=last.0).map(SquareIndex)
    }

    /// Iterates every square on the board in ascending order.
    pub fn all() -> impl Iterator<Item = SquareIndex> {
        Self::through(Self::LAST)
    }

    /// Checks if this is the final square of the board.
    #[inline]
    pub const fn is_last(&self) -> bool {
        self.0 == BOARD_SQUARES
    }
}

impl Default for SquareIndex {
    fn default() -> Self {
        SquareIndex::FIRST
    }
}

impl fmt::Display for SquareIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for SquareIndex {
    type Error = CoreError;

    fn try_from(square: i64) -> CoreResult<Self> {
        SquareIndex::new(square)
    }
}

impl From<SquareIndex> for u8 {
    fn from(square: SquareIndex) -> u8 {
        square.0
    }
}

impl FromStr for SquareIndex {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        crate::validation::parse_square(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(SquareIndex::new(1).is_ok());
        assert!(SquareIndex::new(64).is_ok());

        assert!(matches!(
            SquareIndex::new(0),
            Err(CoreError::SquareOutOfRange { square: 0, .. })
        ));
        assert!(SquareIndex::new(-3).is_err());
        assert!(SquareIndex::new(65).is_err());
    }

    #[test]
    fn test_row_major_layout() {
        let first = SquareIndex::FIRST;
        assert_eq!((first.row(), first.column()), (0, 0));

        let eighth = SquareIndex::new(8).unwrap();
        assert_eq!((eighth.row(), eighth.column()), (0, 7));

        let ninth = SquareIndex::new(9).unwrap();
        assert_eq!((ninth.row(), ninth.column()), (1, 0));

        assert_eq!((SquareIndex::LAST.row(), SquareIndex::LAST.column()), (7, 7));

        for square in SquareIndex::all() {
            let rebuilt = square.row() * BOARD_WIDTH + square.column() + 1;
            assert_eq!(rebuilt, square.get() as usize);
        }
    }

    #[test]
    fn test_iterators() {
        assert_eq!(SquareIndex::all().count(), 64);

        let squares: Vec<u8> = SquareIndex::through(SquareIndex::new(4).unwrap())
            .map(|s| s.get())
            .collect();
        assert_eq!(squares, vec![1, 2, 3, 4]);

        assert_eq!(SquareIndex::FIRST.previous(), None);
        assert_eq!(SquareIndex::LAST.previous().map(|s| s.get()), Some(63));
    }

    #[test]
    fn test_serde_rejects_off_board_values() {
        let square: SquareIndex = serde_json::from_str("12").unwrap();
        assert_eq!(square.get(), 12);
        assert_eq!(serde_json::to_string(&square).unwrap(), "12");

        assert!(serde_json::from_str::<SquareIndex>("0").is_err());
        assert!(serde_json::from_str::<SquareIndex>("99").is_err());
    }
}
