//! # Comparison Dataset
//!
//! Real-world quantities to put the board total in perspective.
//!
//! The values are rough public estimates, not derived from the engine. In
//! particular the "Total Rice Grains" entry is the float `1.844674407e19`,
//! while the engine's exact total is `18,446,744,073,709,551,615`. The two
//! are separate representations and are not reconciled.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::magnitude::format_magnitude;

/// Fixed reference table, ascending by value.
const REFERENCE_QUANTITIES: [(&str, f64); 5] = [
    ("World Population", 8e9),
    ("Seconds in 1 million years", 3.15e13),
    ("Grains of sand on Earth", 7.5e18),
    ("Total Rice Grains (64 squares)", 1.844674407e19),
    ("Stars in observable universe", 1e24),
];

/// One bar of the comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub label: String,
    pub value: f64,
}

impl ComparisonEntry {
    /// Bar label text ("8.00B", "1000000000.00Q").
    pub fn formatted(&self) -> String {
        format_magnitude(self.value)
    }
}

/// Returns the reference quantities in their fixed order.
///
/// ## Example
/// ```rust
/// use grainboard_core::comparison_entries;
///
/// let entries = comparison_entries();
/// assert_eq!(entries.len(), 5);
/// assert_eq!(entries[0].label, "World Population");
/// ```
pub fn comparison_entries() -> Vec<ComparisonEntry> {
    REFERENCE_QUANTITIES
        .iter()
        .map(|(label, value)| ComparisonEntry {
            label: (*label).to_string(),
            value: *value,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
