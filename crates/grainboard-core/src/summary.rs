//! # Statistics Summary
//!
//! The headline numbers and narrative shown above the charts.
//!
//! ## Narrative Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  squares   tier           narrative                                     │
//! │  ───────   ────────────   ───────────────────────────────────────────   │
//! │  1..=10    Manageable     "…we have 512 grains - still manageable…"     │
//! │  11..=20   Significant    "…grains per square - this is getting…"       │
//! │  21..=30   Weighty        "Total weight so far: ~671 kg (1 metric…)"    │
//! │  31..=64   Astronomical   "The numbers are now astronomically large!…"  │
//! │                                                                         │
//! │  Square 64 additionally gets the CompleteBoard block with the exact    │
//! │  total 18,446,744,073,709,551,615.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::grains::GrainCount;
use crate::magnitude::format_magnitude;
use crate::quantity::{grains_on_square, total_through_square};
use crate::types::SquareIndex;
use crate::BOARD_SQUARES;

// =============================================================================
// Narrative Tier
// =============================================================================

/// Which narrative applies to a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeTier {
    /// Squares 1-10.
    Manageable,
    /// Squares 11-20.
    Significant,
    /// Squares 21-30: narrated by weight.
    Weighty,
    /// Squares 31-64.
    Astronomical,
}

impl NarrativeTier {
    /// Selects the tier by fixed thresholds (≤10, ≤20, ≤30, >30).
    pub fn for_square(square: SquareIndex) -> Self {
        match square.get() {
            0..=10 => NarrativeTier::Manageable,
            11..=20 => NarrativeTier::Significant,
            21..=30 => NarrativeTier::Weighty,
            _ => NarrativeTier::Astronomical,
        }
    }

    fn narrate(&self, square: SquareIndex, grains: GrainCount, total: GrainCount) -> String {
        match self {
            NarrativeTier::Manageable => format!(
                "At square {}, we have {} grains - still manageable amounts!",
                square,
                grains.formatted()
            ),
            NarrativeTier::Significant => format!(
                "At square {}, we have {} grains per square - this is getting significant!",
                square,
                grains.formatted()
            ),
            NarrativeTier::Weighty => {
                let kg = total.weight_kg();
                format!(
                    "Total weight so far: ~{} kg ({} metric tons!)",
                    format_magnitude(kg),
                    format_magnitude(kg / 1000.0)
                )
            }
            NarrativeTier::Astronomical => format!(
                "The numbers are now astronomically large! Current square alone: {} grains",
                grains.formatted()
            ),
        }
    }
}

// =============================================================================
// Complete Board
// =============================================================================

/// Extra block shown once all 64 squares are filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompleteBoard {
    /// Exact grouped total, "18,446,744,073,709,551,615".
    pub total_exact: String,
    pub weight_note: String,
    pub production_note: String,
}

impl CompleteBoard {
    fn new(total: GrainCount) -> Self {
        CompleteBoard {
            total_exact: total.to_string(),
            weight_note: "Weight: ~461 billion metric tons".to_string(),
            production_note: "More than 1,000 years of global rice production!".to_string(),
        }
    }

    /// "Total: 18,446,744,073,709,551,615 grains"
    pub fn headline(&self) -> String {
        format!("Total: {} grains", self.total_exact)
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Statistics for the selected square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub square: SquareIndex,

    /// Grains on the selected square (exact).
    pub grains: GrainCount,

    /// Grains on squares 1 through the selected square (exact).
    pub total: GrainCount,

    /// `grains` through the magnitude formatter.
    pub grains_display: String,

    /// `total` through the magnitude formatter.
    pub total_display: String,

    pub tier: NarrativeTier,
    pub narrative: String,

    /// Present only on square 64.
    pub complete_board: Option<CompleteBoard>,
}

/// Builds the statistics summary for a square.
///
/// ## Example
/// ```rust
/// use grainboard_core::{summarize, SquareIndex};
///
/// let summary = summarize(SquareIndex::new(10).unwrap());
/// assert_eq!(summary.grains_display, "512");
/// assert_eq!(summary.total_display, "1,023");
/// assert!(summary.complete_board.is_none());
/// ```
pub fn summarize(square: SquareIndex) -> Summary {
    let grains = grains_on_square(square);
    let total = total_through_square(square);
    let tier = NarrativeTier::for_square(square);

    Summary {
        square,
        grains,
        total,
        grains_display: grains.formatted(),
        total_display: total.formatted(),
        tier,
        narrative: tier.narrate(square, grains, total),
        complete_board: square.is_last().then(|| CompleteBoard::new(total)),
    }
}

impl Summary {
    /// Renders the summary as an HTML fragment.
    ///
    /// The markup is class-based; styling belongs to the embedding page.
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<section class=\"grainboard-summary\">\n");
        html.push_str("  <h2>Current Statistics</h2>\n");
        html.push_str("  <dl class=\"stats\">\n");
        html.push_str(&format!(
            "    <div><dt>Square Number</dt><dd>{}<span>/{}</span></dd></div>\n",
            self.square, BOARD_SQUARES
        ));
        html.push_str(&format!(
            "    <div><dt>Grains on This Square</dt><dd class=\"grains\">{}</dd></div>\n",
            escape_html(&self.grains_display)
        ));
        html.push_str(&format!(
            "    <div><dt>Total Grains So Far</dt><dd class=\"total\">{}</dd></div>\n",
            escape_html(&self.total_display)
        ));
        html.push_str("  </dl>\n");
        html.push_str("  <h3>Real-World Context</h3>\n");
        html.push_str(&format!(
            "  <p class=\"narrative\">{}</p>\n",
            escape_html(&self.narrative)
        ));

        if let Some(board) = &self.complete_board {
            html.push_str("  <div class=\"complete-board\">\n");
            html.push_str("    <h3>Complete Board!</h3>\n");
            html.push_str(&format!(
                "    <p><strong>{}</strong><br>{}<br>{}</p>\n",
                escape_html(&board.headline()),
                escape_html(&board.weight_note),
                escape_html(&board.production_note)
            ));
            html.push_str("  </div>\n");
        }

        html.push_str("</section>\n");
        html
    }
}

/// Plain-text rendering for terminals and logs.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Square {}/{}", self.square, BOARD_SQUARES)?;
        writeln!(f, "Grains on this square: {}", self.grains_display)?;
        writeln!(f, "Total grains so far:   {}", self.total_display)?;
        writeln!(f)?;
        writeln!(f, "{}", self.narrative)?;

        if let Some(board) = &self.complete_board {
            writeln!(f)?;
            writeln!(f, "Complete Board!")?;
            writeln!(f, "  {}", board.headline())?;
            writeln!(f, "  {}", board.weight_note)?;
            writeln!(f, "  {}", board.production_note)?;
        }

        Ok(())
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// =============================================================================
// Unit Tests
// =============================================================================
