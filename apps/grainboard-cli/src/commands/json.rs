//! JSON rendering of a [`BoardReport`].
//!
//! Field names are camelCase, matching the TypeScript bindings exported by
//! `grainboard-core`. Grain counts are plain integers, so the square-64 total
//! appears as `18446744073709551615`.

use grainboard_core::BoardReport;

use crate::error::CliResult;

/// Serializes the report, pretty-printed or on one line, newline-terminated.
pub fn render(report: &BoardReport, pretty: bool) -> CliResult<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    json.push('\n');
    Ok(json)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use grainboard_core::{build_report, SquareIndex};

    #[test]
    fn test_pretty_and_compact() {
        let report = build_report(SquareIndex::new(5).unwrap());

        let pretty = render(&report, true).unwrap();
        let compact = render(&report, false).unwrap();

        assert!(pretty.lines().count() > 1);
        assert_eq!(compact.lines().count(), 1);
        assert!(compact.ends_with('\n'));

        let a: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        let b: serde_json::Value = serde_json::from_str(&compact).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unplaced_cells_are_zero() {
        let report = build_report(SquareIndex::new(2).unwrap());
        let value: serde_json::Value =
            serde_json::from_str(&render(&report, false).unwrap()).unwrap();

        let third = &value["board"]["rows"][0][2];
        assert_eq!(third["placed"], false);
        assert_eq!(third["grains"], 0);
        assert_eq!(third["logMagnitude"], 0.0);
    }
}
