//! # Series Generator
//!
//! Ordered per-square and cumulative sequences for the growth charts.
//!
//! ## Shape
//! ```text
//! build_series(4)
//!
//!   per_square:  (1, 1)  (2, 2)  (3, 4)  (4, 8)    current = (4, 8)
//!   cumulative:  (1, 1)  (2, 3)  (3, 7)  (4, 15)   current = (4, 15)
//!
//! build_series(1)
//!
//!   per_square:  (1, 1)                             current = None
//!   cumulative:  (1, 1)                             current = None
//! ```
//!
//! `current` is a highlight for the presentation layer. It is only set when
//! there is an earlier point to contrast against.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::grains::GrainCount;
use crate::quantity::{grains_on_square, total_through_square};
use crate::types::SquareIndex;

// =============================================================================
// Series Types
// =============================================================================

/// One `(square, grains)` point on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub square: SquareIndex,
    pub grains: GrainCount,
}

/// An ascending, gap-free run of points starting at square 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Points for squares `1..=up_to`.
    pub points: Vec<SeriesPoint>,

    /// The highlighted "current" point (always the last one), when shown.
    pub current: Option<SeriesPoint>,
}

impl Series {
    /// Builds a series by evaluating `value` on every square up to `up_to`.
    fn generate(up_to: SquareIndex, value: fn(SquareIndex) -> GrainCount) -> Self {
        let points: Vec<SeriesPoint> = SquareIndex::through(up_to)
            .map(|square| SeriesPoint {
                square,
                grains: value(square),
            })
            .collect();

        let current = if up_to > SquareIndex::FIRST {
            points.last().copied()
        } else {
            None
        };

        Series { points, current }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Never true for a series built by [`build_series`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point for a given square, if the series reaches it.
    pub fn get(&self, square: SquareIndex) -> Option<&SeriesPoint> {
        self.points.get(square.get() as usize - 1)
    }

    /// Whether `point` is the highlighted one.
    pub fn is_current(&self, point: &SeriesPoint) -> bool {
        self.current.as_ref() == Some(point)
    }

    /// Raw counts in square order, e.g. for a chart's y-axis.
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.iter().map(|p| p.grains.get())
    }
}

/// The two growth series shown side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSeries {
    /// Grains on each square.
    pub per_square: Series,

    /// Running total through each square.
    pub cumulative: Series,
}

// =============================================================================
// Generator
// =============================================================================

/// Builds the per-square and cumulative series for squares `1..=up_to`.
///
/// Both series are derived from the quantity engine, so
/// `cumulative[i] == per_square[1..=i].sum()` holds for every point.
///
/// ## Example
/// ```rust
/// use grainboard_core::{build_series, SquareIndex};
///
/// let series = build_series(SquareIndex::new(10).unwrap());
/// assert_eq!(series.per_square.len(), 10);
/// assert_eq!(series.per_square.current.unwrap().grains.get(), 512);
/// assert_eq!(series.cumulative.current.unwrap().grains.get(), 1023);
/// ```
pub fn build_series(up_to: SquareIndex) -> GrowthSeries {
    GrowthSeries {
        per_square: Series::generate(up_to, grains_on_square),
        cumulative: Series::generate(up_to, total_through_square),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
