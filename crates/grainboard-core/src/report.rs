//! # Board Report
//!
//! Everything a presentation layer needs for one selected square.
//!
//! ## Per-Interaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  slider / argv ──► SquareIndex ──► build_report()                       │
//! │                                        │                                │
//! │          ┌──────────────┬──────────────┼──────────────┬──────────────┐  │
//! │          ▼              ▼              ▼              ▼              ▼  │
//! │      summarize     board_grid    build_series   comparison    formula  │
//! │      (stats +      (8×8 log      (per-square +  _entries()    _rows()  │
//! │       narrative)    heatmap)      cumulative)   (fixed)                 │
//! │                                                                         │
//! │  Nothing is cached: two calls with the same square return equal        │
//! │  reports, built independently.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::board::{board_grid, BoardGrid};
use crate::comparison::{comparison_entries, ComparisonEntry};
use crate::formulas::{formula_rows, FormulaRow};
use crate::series::{build_series, GrowthSeries};
use crate::summary::{summarize, Summary};
use crate::types::SquareIndex;

/// The complete output for one selected square.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BoardReport {
    pub square: SquareIndex,
    pub summary: Summary,
    pub board: BoardGrid,
    pub growth: GrowthSeries,
    pub comparisons: Vec<ComparisonEntry>,
    pub formulas: Vec<FormulaRow>,
}

/// Computes every derived value for `square`.
///
/// ## Example
/// ```rust
/// use grainboard_core::{build_report, SquareIndex};
///
/// let report = build_report(SquareIndex::new(10).unwrap());
/// assert_eq!(report.summary.total_display, "1,023");
/// assert_eq!(report.board.placed_count(), 10);
/// assert_eq!(report.growth.cumulative.len(), 10);
/// assert_eq!(report.comparisons.len(), 5);
/// ```
pub fn build_report(square: SquareIndex) -> BoardReport {
    BoardReport {
        square,
        summary: summarize(square),
        board: board_grid(square),
        growth: build_series(square),
        comparisons: comparison_entries(),
        formulas: formula_rows(square),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_is_consistent() {
        let square = SquareIndex::new(12).unwrap();
        let report = build_report(square);

        let last_growth = report.growth.per_square.points.last().unwrap();
        assert_eq!(last_growth.grains, report.summary.grains);
        assert_eq!(report.board.cell_for(square).grains, report.summary.grains);

        let last_total = report.growth.cumulative.points.last().unwrap();
        assert_eq!(last_total.grains, report.summary.total);
    }

    #[test]
    fn test_report_is_stateless() {
        let square = SquareIndex::new(33).unwrap();
        let first = build_report(square);
        let _other = build_report(SquareIndex::LAST);
        assert_eq!(first, build_report(square));
    }

    #[test]
    fn test_full_board_json_keeps_exact_total() {
        let json = serde_json::to_string(&build_report(SquareIndex::LAST)).unwrap();
        assert!(json.contains("\"total\":18446744073709551615"));
        assert!(json.contains("\"totalExact\":\"18,446,744,073,709,551,615\""));
    }
}
