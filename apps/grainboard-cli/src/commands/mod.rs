//! # Commands Module
//!
//! Turns a parsed command line plus configuration into stdout text.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (execute, flag resolution)
//! ├── text.rs     ◄─── Terminal rendering (summary, board, tables)
//! └── json.rs     ◄─── BoardReport as JSON
//! ```
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CliArgs.square ──► parse_square ──┐                                    │
//! │  (or config.default_square)        ├──► build_report ──► render(format) │
//! │  CliArgs.format ──► OutputFormat ──┘                                    │
//! │  (or config.format)                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod json;
pub mod text;

use grainboard_core::validation::{parse_square, validate_square};
use grainboard_core::{build_report, SquareIndex};
use tracing::{debug, info};

use crate::args::CliArgs;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;

/// Resolves flags against the config, builds the report and renders it.
pub fn execute(args: &CliArgs, config: &CliConfig) -> CliResult<String> {
    let square = resolve_square(args, config)?;
    let format = args.format.unwrap_or(config.format);
    let pretty = config.pretty_json && !args.compact;

    debug!(%square, %format, pretty, "Building report");
    let report = build_report(square);

    let output = match format {
        OutputFormat::Text => text::render(&report),
        OutputFormat::Html => report.summary.to_html(),
        OutputFormat::Json => json::render(&report, pretty)?,
    };

    info!(
        square = square.get(),
        tier = ?report.summary.tier,
        total = %report.summary.total_display,
        "Report rendered"
    );

    Ok(output)
}

/// The square from argv if given, else the configured default.
fn resolve_square(args: &CliArgs, config: &CliConfig) -> CliResult<SquareIndex> {
    let square = match &args.square {
        Some(raw) => parse_square(raw)?,
        None => validate_square(config.default_square)?,
    };
    Ok(square)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CliError, ErrorCode};

    fn args(square: Option<&str>, format: OutputFormat) -> CliArgs {
        CliArgs {
            square: square.map(str::to_string),
            format: Some(format),
            ..CliArgs::default()
        }
    }

    #[test]
    fn test_text_output() {
        let output = execute(&args(Some("10"), OutputFormat::Text), &CliConfig::default()).unwrap();
        assert!(output.contains("Square 10/64"));
        assert!(output.contains("Total grains so far:   1,023"));
        assert!(output.contains("still manageable amounts!"));
    }

    #[test]
    fn test_html_output() {
        let output = execute(&args(Some("64"), OutputFormat::Html), &CliConfig::default()).unwrap();
        assert!(output.starts_with("<section class=\"grainboard-summary\">"));
        assert!(output.contains("Total: 18,446,744,073,709,551,615 grains"));
    }

    #[test]
    fn test_json_output() {
        let mut cli = args(Some("20"), OutputFormat::Json);
        cli.compact = true;

        let output = execute(&cli, &CliConfig::default()).unwrap();
        assert_eq!(output.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["square"], 20);
        assert_eq!(value["summary"]["total"], 1_048_575);
        assert_eq!(value["summary"]["tier"], "significant");
    }

    #[test]
    fn test_config_defaults_apply() {
        let config = CliConfig {
            default_square: 33,
            format: OutputFormat::Json,
            pretty_json: false,
            ..CliConfig::default()
        };

        let output = execute(&CliArgs::default(), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["square"], 33);
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_format_flag_beats_config() {
        let config = CliConfig {
            format: OutputFormat::Json,
            ..CliConfig::default()
        };
        let output = execute(&args(Some("3"), OutputFormat::Text), &config).unwrap();
        assert!(output.starts_with("Square 3/64"));
    }

    #[test]
    fn test_invalid_squares_are_rejected() {
        for raw in ["0", "65", "-1", "ten", ""] {
            let err = execute(&args(Some(raw), OutputFormat::Text), &CliConfig::default())
                .unwrap_err();
            assert!(matches!(err, CliError::Core(_)), "input {:?}", raw);
            assert_eq!(err.code(), ErrorCode::ValidationError);
        }
    }
}
