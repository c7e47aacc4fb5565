//! # Grains Module
//!
//! Provides the `GrainCount` type for exact grain quantities.
//!
//! ## Why `u64`?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE OVERFLOW PROBLEM                                                   │
//! │                                                                         │
//! │  Square 64 alone holds 2^63 grains:                                     │
//! │    i64::MAX = 9,223,372,036,854,775,807 = 2^63 - 1   ❌ one short!      │
//! │                                                                         │
//! │  The full board holds 2^64 - 1 grains:                                  │
//! │    u64::MAX = 18,446,744,073,709,551,615             ✅ exact fit       │
//! │                                                                         │
//! │  f64 only has 53 bits of mantissa, so anything past square 54 would    │
//! │  be rounded. Counts stay integers; floats appear only at the           │
//! │  formatting and log-scale edges.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

use crate::magnitude::{format_magnitude, group_thousands};
use crate::GRAIN_MASS_KG;

// =============================================================================
// GrainCount Type
// =============================================================================

/// An exact, non-negative number of grains.
///
/// ## Where GrainCount is Used
/// ```text
/// grains_on_square(n) ──┬──► Series point ──► growth chart
///                       ├──► Board cell   ──► heatmap hover value
///                       └──► Summary      ──► "Grains on This Square"
///
/// total_through_square(n) ──► cumulative chart, "Total Grains So Far"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GrainCount(u64);

impl GrainCount {
    /// Creates a count from a raw number of grains.
    #[inline]
    pub const fn new(grains: u64) -> Self {
        GrainCount(grains)
    }

    /// Returns the exact number of grains.
    ///
    /// ## Example
    /// ```rust
    /// use grainboard_core::GrainCount;
    ///
    /// assert_eq!(GrainCount::new(512).get(), 512);
    /// ```
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns zero grains (an unplaced square).
    #[inline]
    pub const fn zero() -> Self {
        GrainCount(0)
    }

    /// Checks if the count is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Lossy conversion for charting and formatting.
    ///
    /// Counts above 2^53 lose low-order bits. Use [`GrainCount::get`] when
    /// exactness matters.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// `log10(grains + 1)`: the heatmap intensity for a placed square.
    ///
    /// ## Example
    /// ```rust
    /// use grainboard_core::GrainCount;
    ///
    /// // One grain is visibly non-zero on a log scale
    /// assert!((GrainCount::new(1).log10_p1() - 2f64.log10()).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn log10_p1(&self) -> f64 {
        (self.as_f64() + 1.0).log10()
    }

    /// Approximate weight in kilograms at ~20 mg per grain.
    pub fn weight_kg(&self) -> f64 {
        self.as_f64() * GRAIN_MASS_KG
    }

    /// Human-readable magnitude ("512", "1.05M", "18.45Q").
    pub fn formatted(&self) -> String {
        format_magnitude(self.as_f64())
    }

    /// Adds without wrapping. `None` means the sum left the `u64` range.
    #[inline]
    pub const fn checked_add(self, other: GrainCount) -> Option<GrainCount> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(GrainCount(sum)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the exact count with thousands separators.
impl fmt::Display for GrainCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group_thousands(self.0))
    }
}

impl Default for GrainCount {
    fn default() -> Self {
        GrainCount::zero()
    }
}

impl From<u64> for GrainCount {
    fn from(grains: u64) -> Self {
        GrainCount(grains)
    }
}

/// Addition of two counts.
///
/// Sums of board squares never exceed `u64::MAX`; debug builds still trap
/// on overflow.
impl Add for GrainCount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GrainCount(self.0 + other.0)
    }
}

impl Sum for GrainCount {
    fn sum<I: Iterator<Item = GrainCount>>(iter: I) -> Self {
        iter.fold(GrainCount::zero(), Add::add)
    }
}

impl<'a> Sum<&'a GrainCount> for GrainCount {
    fn sum<I: Iterator<Item = &'a GrainCount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_exact() {
        assert_eq!(GrainCount::new(0).to_string(), "0");
        assert_eq!(GrainCount::new(1023).to_string(), "1,023");
        assert_eq!(
            GrainCount::new(u64::MAX).to_string(),
            "18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn test_formatted_uses_magnitude_suffix() {
        assert_eq!(GrainCount::new(512).formatted(), "512");
        assert_eq!(GrainCount::new(1 << 20).formatted(), "1.05M");
    }

    #[test]
    fn test_log10_p1() {
        assert_eq!(GrainCount::zero().log10_p1(), 0.0);
        assert!((GrainCount::new(9).log10_p1() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weight() {
        // 50,000 grains at 20mg = 1kg
        let grains = GrainCount::new(50_000);
        assert!((grains.weight_kg() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sum_and_checked_add() {
        let parts = [GrainCount::new(1), GrainCount::new(2), GrainCount::new(4)];
        assert_eq!(parts.iter().sum::<GrainCount>(), GrainCount::new(7));

        assert_eq!(GrainCount::new(u64::MAX).checked_add(GrainCount::new(1)), None);
        assert_eq!(
            GrainCount::new(u64::MAX - 1).checked_add(GrainCount::new(1)),
            Some(GrainCount::new(u64::MAX))
        );
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&GrainCount::new(u64::MAX)).unwrap();
        assert_eq!(json, "18446744073709551615");
    }
}
