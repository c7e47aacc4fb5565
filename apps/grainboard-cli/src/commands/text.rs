//! Plain-text rendering of a [`BoardReport`].
//!
//! ```text
//! Square 3/64
//! ...
//!
//! Board (grains per square, · = not yet placed)
//!        1      2    [4]      ·      ·      ·      ·      ·
//!        ·      ·      ·      ·      ·      ·      ·      ·
//! ```

use std::fmt::Write;

use grainboard_core::{BoardGrid, BoardReport, ComparisonEntry, FormulaRow};

const CELL_WIDTH: usize = 11;
const UNPLACED: &str = "·";

/// Renders the summary, board, formula table and comparisons.
pub fn render(report: &BoardReport) -> String {
    let mut out = report.summary.to_string();

    out.push('\n');
    out.push_str(&render_board(&report.board));
    out.push('\n');
    out.push_str(&render_formulas(&report.formulas));
    out.push('\n');
    out.push_str(&render_comparisons(&report.comparisons));

    out
}

fn render_board(board: &BoardGrid) -> String {
    let mut out = String::from("Board (grains per square, · = not yet placed)\n");

    for row in &board.rows {
        for cell in row {
            let label = if !cell.placed {
                UNPLACED.to_string()
            } else if cell.square == board.current {
                format!("[{}]", cell.grains.formatted())
            } else {
                cell.grains.formatted()
            };
            let _ = write!(out, "{:>width$}", label, width = CELL_WIDTH);
        }
        out.push('\n');
    }

    out
}

fn render_formulas(rows: &[FormulaRow]) -> String {
    let concept_width = column_width("Concept", rows.iter().map(|r| r.concept.as_str()));
    let formula_width = column_width("Formula", rows.iter().map(|r| r.formula.as_str()));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<cw$}  {:<fw$}  Example",
        "Concept",
        "Formula",
        cw = concept_width,
        fw = formula_width
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<cw$}  {:<fw$}  {}",
            row.concept,
            row.formula,
            row.example,
            cw = concept_width,
            fw = formula_width
        );
    }

    out
}

fn render_comparisons(entries: &[ComparisonEntry]) -> String {
    let label_width = column_width("", entries.iter().map(|e| e.label.as_str()));

    let mut out = String::from("Scale comparison\n");
    for entry in entries {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>16}",
            entry.label,
            entry.formatted(),
            width = label_width
        );
    }

    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use grainboard_core::{build_report, SquareIndex};

    fn report(square: i64) -> BoardReport {
        build_report(SquareIndex::new(square).unwrap())
    }

    #[test]
    fn test_board_marks_placed_and_current() {
        let board = render_board(&report(3).board);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), 9);
        let first_row: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(first_row, vec!["1", "2", "[4]", "·", "·", "·", "·", "·"]);
        assert_eq!(board.matches(UNPLACED).count(), 61 + 1);
    }

    #[test]
    fn test_full_board_has_no_gaps() {
        let board = render_board(&report(64).board);
        let last_row: Vec<&str> = board.lines().last().unwrap().split_whitespace().collect();

        assert_eq!(last_row.len(), 8);
        assert_eq!(last_row[7], "[9223.37Q]");
        // Only the legend mentions the unplaced marker
        assert_eq!(board.matches(UNPLACED).count(), 1);
    }

    #[test]
    fn test_formula_table() {
        let table = render_formulas(&report(10).formulas);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Concept"));
        assert!(lines[1].ends_with("2^9 = 512"));
        assert!(lines[2].ends_with("2^10 - 1 = 1,023"));
        assert!(lines[3].ends_with("512 = 511 + 1"));
    }

    #[test]
    fn test_comparisons() {
        let table = render_comparisons(&report(1).comparisons);
        assert!(table.contains("World Population"));
        assert!(table.contains("8.00B"));
        assert!(table.contains("1000000000.00Q"));
    }

    #[test]
    fn test_complete_board_text() {
        let text = render(&report(64));
        assert!(text.contains("Complete Board!"));
        assert!(text.contains("Weight: ~461 billion metric tons"));
    }
}
