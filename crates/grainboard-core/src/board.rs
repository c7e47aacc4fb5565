//! # Board Grid
//!
//! The 8×8 log-magnitude heatmap with raw counts per cell.
//!
//! ## Zero vs. One Grain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cell state          grains     log_magnitude                          │
//! │  ──────────────────  ─────────  ─────────────────────────────────────  │
//! │  square 1, placed    1          log10(1 + 1) = 0.301                   │
//! │  square n, placed    2^(n-1)    log10(2^(n-1) + 1)                     │
//! │  not yet placed      0          0.0   (sentinel, NOT log10(0 + 1))     │
//! │                                                                         │
//! │  A placed square is never 0 on the log scale, so 0 always means        │
//! │  "unreached".                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::grains::GrainCount;
use crate::quantity::grains_on_square;
use crate::types::SquareIndex;
use crate::BOARD_WIDTH;

/// One square of the heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BoardCell {
    /// Square number, used as the cell label.
    pub square: SquareIndex,

    /// Whether the square is at or before the selected square.
    pub placed: bool,

    /// Grains on the square, or zero when not placed.
    pub grains: GrainCount,

    /// `log10(grains + 1)` when placed, exactly `0.0` otherwise.
    pub log_magnitude: f64,
}

impl BoardCell {
    fn new(square: SquareIndex, current: SquareIndex) -> Self {
        if square <= current {
            let grains = grains_on_square(square);
            BoardCell {
                square,
                placed: true,
                grains,
                log_magnitude: grains.log10_p1(),
            }
        } else {
            BoardCell {
                square,
                placed: false,
                grains: GrainCount::zero(),
                log_magnitude: 0.0,
            }
        }
    }
}

/// The full board as rows of cells, row 0 first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BoardGrid {
    /// The selected square the grid was built for.
    pub current: SquareIndex,

    /// `BOARD_WIDTH` rows of `BOARD_WIDTH` cells each.
    pub rows: Vec<Vec<BoardCell>>,
}

impl BoardGrid {
    /// Cell at a zero-based `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Option<&BoardCell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Cell for a square.
    pub fn cell_for(&self, square: SquareIndex) -> &BoardCell {
        &self.rows[square.row()][square.column()]
    }

    /// All cells in square order.
    pub fn cells(&self) -> impl Iterator<Item = &BoardCell> {
        self.rows.iter().flatten()
    }

    /// Heatmap z-values.
    pub fn log_matrix(&self) -> Vec<Vec<f64>> {
        self.map_rows(|cell| cell.log_magnitude)
    }

    /// Hover values: raw grains per cell, zero when unplaced.
    pub fn grains_matrix(&self) -> Vec<Vec<u64>> {
        self.map_rows(|cell| cell.grains.get())
    }

    /// Number of placed squares (equals the current square number).
    pub fn placed_count(&self) -> usize {
        self.cells().filter(|cell| cell.placed).count()
    }

    fn map_rows<T>(&self, f: impl Fn(&BoardCell) -> T) -> Vec<Vec<T>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(&f).collect())
            .collect()
    }
}

/// Builds the 8×8 grid with squares up to `current` filled in.
///
/// ## Example
/// ```rust
/// use grainboard_core::{board_grid, SquareIndex};
///
/// let grid = board_grid(SquareIndex::FIRST);
/// assert!(grid.cell(0, 0).unwrap().log_magnitude > 0.0);
/// assert_eq!(grid.cell(0, 1).unwrap().log_magnitude, 0.0);
/// ```
pub fn board_grid(current: SquareIndex) -> BoardGrid {
    let mut rows: Vec<Vec<BoardCell>> = Vec::with_capacity(BOARD_WIDTH);

    for square in SquareIndex::all() {
        if square.column() == 0 {
            rows.push(Vec::with_capacity(BOARD_WIDTH));
        }
        if let Some(row) = rows.last_mut() {
            row.push(BoardCell::new(square, current));
        }
    }

    BoardGrid { current, rows }
}

// =============================================================================
// Unit Tests
// =============================================================================
