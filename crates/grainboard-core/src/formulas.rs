//! # Formula Table
//!
//! The three closed-form facts of the board, evaluated for one square.
//!
//! | Concept              | Formula                        | Square 10        |
//! |----------------------|--------------------------------|------------------|
//! | Grains on square n   | 2^(n-1)                        | 2^9 = 512        |
//! | Total up to square n | 2^n - 1                        | 2^10 - 1 = 1,023 |
//! | Doubling pattern     | Each square = All previous + 1 | 512 = 511 + 1    |

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::quantity::{grains_on_square, total_through_square};
use crate::types::SquareIndex;

/// One row of the formula table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormulaRow {
    pub concept: String,
    pub formula: String,
    pub example: String,
}

impl FormulaRow {
    fn new(concept: &str, formula: &str, example: String) -> Self {
        FormulaRow {
            concept: concept.to_string(),
            formula: formula.to_string(),
            example,
        }
    }
}

/// Evaluates the formula table for `square`.
///
/// ## Example
/// ```rust
/// use grainboard_core::{formula_rows, SquareIndex};
///
/// let rows = formula_rows(SquareIndex::new(10).unwrap());
/// assert_eq!(rows[0].example, "2^9 = 512");
/// assert_eq!(rows[1].example, "2^10 - 1 = 1,023");
/// assert_eq!(rows[2].example, "512 = 511 + 1");
/// ```
pub fn formula_rows(square: SquareIndex) -> Vec<FormulaRow> {
    let n = square.get();
    let grains = grains_on_square(square);
    let total = total_through_square(square);
    // Everything before this square is one grain short of it
    let previous_total = square
        .previous()
        .map(total_through_square)
        .unwrap_or_default();

    vec![
        FormulaRow::new(
            "Grains on square n",
            "2^(n-1)",
            format!("2^{} = {}", n - 1, grains),
        ),
        FormulaRow::new(
            "Total up to square n",
            "2^n - 1",
            format!("2^{} - 1 = {}", n, total),
        ),
        FormulaRow::new(
            "Doubling pattern",
            "Each square = All previous + 1",
            format!("{} = {} + 1", grains, previous_total),
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_square() {
        let rows = formula_rows(SquareIndex::FIRST);
        assert_eq!(rows[0].example, "2^0 = 1");
        assert_eq!(rows[1].example, "2^1 - 1 = 1");
        assert_eq!(rows[2].example, "1 = 0 + 1");
    }

    #[test]
    fn test_last_square_is_exact() {
        let rows = formula_rows(SquareIndex::LAST);
        assert_eq!(rows[0].example, "2^63 = 9,223,372,036,854,775,808");
        assert_eq!(rows[1].example, "2^64 - 1 = 18,446,744,073,709,551,615");
        assert_eq!(
            rows[2].example,
            "9,223,372,036,854,775,808 = 9,223,372,036,854,775,807 + 1"
        );
    }

    #[test]
    fn test_concepts_are_fixed() {
        let concepts: Vec<String> = formula_rows(SquareIndex::new(5).unwrap())
            .into_iter()
            .map(|row| row.concept)
            .collect();
        assert_eq!(
            concepts,
            vec!["Grains on square n", "Total up to square n", "Doubling pattern"]
        );
    }
}
