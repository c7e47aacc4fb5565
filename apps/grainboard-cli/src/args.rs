//! # Command-Line Arguments
//!
//! ```text
//! grainboard [SQUARE] [-f|--format text|html|json] [--compact] [-c|--config PATH]
//! grainboard -h|--help
//! ```
//!
//! The square stays a raw string here so that `grainboard_core::parse_square`
//! owns every rule about what a valid square looks like.

use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::error::{CliError, CliResult};

/// Help text printed for `--help`.
pub const USAGE: &str = "\
Grainboard - the chessboard doubling explorer

Usage: grainboard [SQUARE] [OPTIONS]

Arguments:
  [SQUARE]               Square to inspect, 1-64 (default: config default_square)

Options:
  -f, --format <FORMAT>  Output format: text, html or json
      --compact          Single-line JSON output
  -c, --config <PATH>    Config file (default: $GRAINBOARD_CONFIG or the platform config dir)
  -h, --help             Show this help message

Environment:
  GRAINBOARD_SQUARE, GRAINBOARD_FORMAT, GRAINBOARD_PRETTY_JSON, GRAINBOARD_LOG, RUST_LOG
";

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// Raw square argument, validated later.
    pub square: Option<String>,

    /// `--format`, overriding the configured format.
    pub format: Option<OutputFormat>,

    /// `--compact`, forcing single-line JSON.
    pub compact: bool,

    /// `--config`, an explicit config file.
    pub config_path: Option<PathBuf>,

    /// `--help` was given.
    pub help: bool,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    ///
    /// ## Example
    /// ```rust
    /// use grainboard_cli::args::CliArgs;
    /// use grainboard_cli::config::OutputFormat;
    ///
    /// let args = CliArgs::parse(["64", "--format=json"].map(String::from)).unwrap();
    /// assert_eq!(args.square.as_deref(), Some("64"));
    /// assert_eq!(args.format, Some(OutputFormat::Json));
    /// ```
    pub fn parse<I>(argv: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = CliArgs::default();
        let mut argv = argv.into_iter();

        while let Some(arg) = argv.next() {
            let (flag, inline_value) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => {
                    (flag.to_string(), Some(value.to_string()))
                }
                _ => (arg.clone(), None),
            };

            match flag.as_str() {
                "--format" | "-f" => {
                    let value = flag_value(&flag, inline_value, &mut argv)?;
                    let format = value
                        .parse::<OutputFormat>()
                        .map_err(|e| CliError::usage(e.to_string()))?;
                    args.format = Some(format);
                }
                "--config" | "-c" => {
                    let value = flag_value(&flag, inline_value, &mut argv)?;
                    args.config_path = Some(PathBuf::from(value));
                }
                "--compact" => args.compact = true,
                "--help" | "-h" => args.help = true,
                // Negative numbers are squares (and get rejected as such)
                _ if is_option(&arg) => {
                    return Err(CliError::usage(format!("Unknown option: {}", arg)));
                }
                _ => {
                    if let Some(existing) = &args.square {
                        return Err(CliError::usage(format!(
                            "Expected one square, got '{}' and '{}'",
                            existing, arg
                        )));
                    }
                    args.square = Some(arg);
                }
            }
        }

        Ok(args)
    }
}

fn is_option(arg: &str) -> bool {
    arg.starts_with('-') && arg.len() > 1 && arg.parse::<i64>().is_err()
}

fn flag_value(
    flag: &str,
    inline_value: Option<String>,
    argv: &mut impl Iterator<Item = String>,
) -> CliResult<String> {
    inline_value
        .or_else(|| argv.next())
        .ok_or_else(|| CliError::usage(format!("Missing value for {}", flag)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliResult<CliArgs> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_empty_args() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&["-f", "html", "12", "--compact", "--config", "/tmp/g.toml"]).unwrap();
        assert_eq!(args.square.as_deref(), Some("12"));
        assert_eq!(args.format, Some(OutputFormat::Html));
        assert!(args.compact);
        assert_eq!(args.config_path, Some(PathBuf::from("/tmp/g.toml")));
        assert!(!args.help);

        let args = parse(&["--config=grain.toml", "--help"]).unwrap();
        assert_eq!(args.config_path, Some(PathBuf::from("grain.toml")));
        assert!(args.help);
    }

    #[test]
    fn test_negative_square_is_positional() {
        let args = parse(&["-5"]).unwrap();
        assert_eq!(args.square.as_deref(), Some("-5"));
    }

    #[test]
    fn test_usage_errors() {
        assert!(matches!(parse(&["--colour"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["--format"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["--format", "pdf"]), Err(CliError::Usage(_))));
        assert!(matches!(parse(&["1", "2"]), Err(CliError::Usage(_))));
    }
}
