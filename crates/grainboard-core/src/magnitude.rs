//! # Magnitude Formatter
//!
//! Turns numbers spanning 24 orders of magnitude into short display strings.
//!
//! ## Brackets
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  value range              rendering            example                 │
//! │  ───────────────────────  ───────────────────  ─────────────────────── │
//! │  [0, 1e6)                 grouped integer      1023      → "1,023"     │
//! │  [1e6, 1e9)               value/1e6  + "M"     1048576   → "1.05M"     │
//! │  [1e9, 1e12)              value/1e9  + "B"     8e9       → "8.00B"     │
//! │  [1e12, 1e15)             value/1e12 + "T"     3.15e13   → "31.50T"    │
//! │  [1e15, ∞)                value/1e15 + "Q"     7.5e18    → "7500.00Q"  │
//! │                                                                         │
//! │  Upper bounds are strict: exactly 1e6 is "1.00M", never "1,000,000".   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input is `f64` because derived quantities (kilograms, tons, comparison
//! constants) are floating point. Exact integer totals are rendered with
//! [`group_thousands`] instead.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Magnitude Suffix
// =============================================================================

/// The scale bracket a value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeSuffix {
    /// Below one million: shown in full.
    None,
    /// Millions ("M").
    Million,
    /// Billions ("B").
    Billion,
    /// Trillions ("T").
    Trillion,
    /// Quadrillions and beyond ("Q").
    Quadrillion,
}

impl MagnitudeSuffix {
    /// Picks the bracket for a value. Ties resolve to the higher bracket.
    ///
    /// ## Example
    /// ```rust
    /// use grainboard_core::magnitude::MagnitudeSuffix;
    ///
    /// assert_eq!(MagnitudeSuffix::for_value(999_999.0), MagnitudeSuffix::None);
    /// assert_eq!(MagnitudeSuffix::for_value(1e6), MagnitudeSuffix::Million);
    /// assert_eq!(MagnitudeSuffix::for_value(1e24), MagnitudeSuffix::Quadrillion);
    /// ```
    pub fn for_value(value: f64) -> Self {
        if value < 1e6 {
            MagnitudeSuffix::None
        } else if value < 1e9 {
            MagnitudeSuffix::Million
        } else if value < 1e12 {
            MagnitudeSuffix::Billion
        } else if value < 1e15 {
            MagnitudeSuffix::Trillion
        } else {
            MagnitudeSuffix::Quadrillion
        }
    }

    /// The divisor applied before printing two decimals.
    pub const fn divisor(&self) -> f64 {
        match self {
            MagnitudeSuffix::None => 1.0,
            MagnitudeSuffix::Million => 1e6,
            MagnitudeSuffix::Billion => 1e9,
            MagnitudeSuffix::Trillion => 1e12,
            MagnitudeSuffix::Quadrillion => 1e15,
        }
    }

    /// The letter appended to scaled values.
    pub const fn symbol(&self) -> &'static str {
        match self {
            MagnitudeSuffix::None => "",
            MagnitudeSuffix::Million => "M",
            MagnitudeSuffix::Billion => "B",
            MagnitudeSuffix::Trillion => "T",
            MagnitudeSuffix::Quadrillion => "Q",
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a magnitude for display.
///
/// ## Example
/// ```rust
/// use grainboard_core::format_magnitude;
///
/// assert_eq!(format_magnitude(512.0), "512");
/// assert_eq!(format_magnitude(1023.0), "1,023");
/// assert_eq!(format_magnitude(1_000_000.0), "1.00M");
/// assert_eq!(format_magnitude(1e15), "1.00Q");
/// ```
///
/// Negative, NaN and infinite values are outside the domain. They still
/// produce a string (never a panic), but the text is unspecified.
pub fn format_magnitude(value: f64) -> String {
    match MagnitudeSuffix::for_value(value) {
        MagnitudeSuffix::None => group_digits(&format!("{:.0}", value)),
        suffix => format!("{:.2}{}", value / suffix.divisor(), suffix.symbol()),
    }
}

/// Renders an exact integer with comma thousands separators.
///
/// ## Example
/// ```rust
/// use grainboard_core::group_thousands;
///
/// assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
/// ```
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Inserts separators into a rendered integer, keeping a leading sign.
/// Anything that isn't plain digits ("NaN", "inf") passes through untouched.
fn group_digits(rendered: &str) -> String {
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return rendered.to_string();
    }

    let mut grouped = String::with_capacity(rendered.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values_are_grouped_integers() {
        assert_eq!(format_magnitude(0.0), "0");
        assert_eq!(format_magnitude(1.0), "1");
        assert_eq!(format_magnitude(512.0), "512");
        assert_eq!(format_magnitude(1023.0), "1,023");
        assert_eq!(format_magnitude(524_288.0), "524,288");
        assert_eq!(format_magnitude(999_999.0), "999,999");
    }

    #[test]
    fn test_fractional_small_values_round_to_integer() {
        // Kilogram weights for the early squares are fractional
        assert_eq!(format_magnitude(21.47), "21");
        assert_eq!(format_magnitude(1234.7), "1,235");
    }

    #[test]
    fn test_bracket_boundaries_go_up() {
        assert!(!format_magnitude(999_999.0).ends_with('M'));
        assert_eq!(format_magnitude(1_000_000.0), "1.00M");
        assert_eq!(format_magnitude(1_000_000_000.0), "1.00B");
        assert_eq!(format_magnitude(1e12), "1.00T");
        assert_eq!(format_magnitude(1e15), "1.00Q");
    }

    #[test]
    fn test_scaled_values() {
        assert_eq!(format_magnitude(1_048_576.0), "1.05M");
        assert_eq!(format_magnitude(8e9), "8.00B");
        assert_eq!(format_magnitude(3.15e13), "31.50T");
        assert_eq!(format_magnitude(7.5e18), "7500.00Q");
        assert_eq!(format_magnitude(u64::MAX as f64), "18446.74Q");
    }

    #[test]
    fn test_beyond_integer_range_is_tolerated() {
        assert_eq!(format_magnitude(1e24), "1000000000.00Q");
    }

    #[test]
    fn test_out_of_domain_inputs_do_not_panic() {
        assert_eq!(format_magnitude(-1234.0), "-1,234");
        assert!(!format_magnitude(f64::NAN).is_empty());
        assert!(!format_magnitude(f64::INFINITY).is_empty());
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(123_456_789), "123,456,789");
    }

    #[test]
    fn test_suffix_ordering_is_monotonic() {
        let samples = [1.0, 5e5, 1e6, 2e8, 1e9, 4e11, 1e12, 9e14, 1e15, 1e20];
        let suffixes: Vec<_> = samples.iter().map(|v| MagnitudeSuffix::for_value(*v)).collect();
        assert!(suffixes.windows(2).all(|w| w[0] <= w[1]));
    }
}
