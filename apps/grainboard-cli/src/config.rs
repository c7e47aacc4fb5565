//! # CLI Configuration
//!
//! Settings for the `grainboard` binary.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  4. Command-line flags      (--format, --compact, SQUARE)   ◄── wins    │
//! │  3. Environment variables   (GRAINBOARD_*)                              │
//! │  2. Config file             (grainboard.toml)                           │
//! │  1. Defaults                (this file)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Layers 1-3 are resolved here; flags are applied by `commands::execute`.
//!
//! ## Example Configuration
//! ```toml
//! default_square = 32
//! format = "json"
//! pretty_json = false
//! log_filter = "warn,grainboard=debug"
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use grainboard_core::validation::validate_square;
use grainboard_core::{CoreError, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable pointing at an alternate config file.
pub const CONFIG_PATH_ENV: &str = "GRAINBOARD_CONFIG";

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn,grainboard=info";

// =============================================================================
// Output Format
// =============================================================================

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text summary, board and tables.
    #[default]
    Text,

    /// The summary as an HTML fragment.
    Html,

    /// The full report as JSON.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ValidationError::NotAllowed {
                field: "format".to_string(),
                allowed: vec!["text".to_string(), "html".to_string(), "json".to_string()],
            }),
        }
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid default_square: {0}")]
    DefaultSquare(#[source] CoreError),

    #[error("Invalid log_filter '{filter}': {reason}")]
    LogFilter { filter: String, reason: String },
}

// =============================================================================
// CLI Config
// =============================================================================

/// Settings resolved from defaults, `grainboard.toml` and `GRAINBOARD_*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Square shown when none is given on the command line.
    /// Default: 1 (where the slider starts)
    pub default_square: i64,

    /// Output format when `--format` is not given.
    pub format: OutputFormat,

    /// Pretty-print JSON output. `--compact` turns it off for one run.
    pub pretty_json: bool,

    /// `tracing_subscriber::EnvFilter` directives. `RUST_LOG` still wins.
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            default_square: 1,
            format: OutputFormat::Text,
            pretty_json: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from file and environment.
    ///
    /// ## Load Order
    /// 1. Start with defaults
    /// 2. Load from TOML file if present
    /// 3. Override with environment variables
    /// 4. Validate
    ///
    /// An explicit path (argument or `GRAINBOARD_CONFIG`) must exist; the
    /// platform default path may be absent.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let explicit =
            config_path.or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses one TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml(&contents)?;
        debug!(?path, "Loaded config file");
        Ok(config)
    }

    /// Parses TOML text. Missing keys fall back to defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_square(self.default_square).map_err(ConfigError::DefaultSquare)?;

        EnvFilter::try_new(&self.log_filter).map_err(|e| ConfigError::LogFilter {
            filter: self.log_filter.clone(),
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Applies `GRAINBOARD_*` overrides read through `lookup`.
    ///
    /// `lookup` is `std::env::var` in production and a map in tests.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Default square
        if let Some(value) = lookup("GRAINBOARD_SQUARE") {
            self.default_square = value
                .trim()
                .parse()
                .map_err(|_| invalid("GRAINBOARD_SQUARE", &value))?;
            debug!(square = self.default_square, "Overriding default square from environment");
        }

        // Output format
        if let Some(value) = lookup("GRAINBOARD_FORMAT") {
            self.format = value.parse().map_err(|_| invalid("GRAINBOARD_FORMAT", &value))?;
            debug!(format = %self.format, "Overriding format from environment");
        }

        // Pretty JSON
        if let Some(value) = lookup("GRAINBOARD_PRETTY_JSON") {
            self.pretty_json =
                parse_bool(&value).ok_or_else(|| invalid("GRAINBOARD_PRETTY_JSON", &value))?;
        }

        // Log filter
        if let Some(value) = lookup("GRAINBOARD_LOG") {
            self.log_filter = value;
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "grainboard", "grainboard")
            .map(|dirs| dirs.config_dir().join("grainboard.toml"))
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.default_square, 1);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.pretty_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!(" json ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "pdf".parse::<OutputFormat>(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CliConfig::from_toml("format = \"json\"\n").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.default_square, 1);
        assert!(config.pretty_json);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            CliConfig::from_toml("format = \"pdf\"\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CliConfig::from_toml("default_square = \"ten\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_config_validation() {
        let mut config = CliConfig::default();

        config.default_square = 0;
        assert!(matches!(config.validate(), Err(ConfigError::DefaultSquare(_))));

        config.default_square = 65;
        assert!(config.validate().is_err());

        config.default_square = 64;
        assert!(config.validate().is_ok());

        config.log_filter = "grainboard=loud".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::LogFilter { .. })));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_overrides(env(&[
                ("GRAINBOARD_SQUARE", " 40 "),
                ("GRAINBOARD_FORMAT", "json"),
                ("GRAINBOARD_PRETTY_JSON", "off"),
                ("GRAINBOARD_LOG", "debug"),
            ]))
            .unwrap();

        assert_eq!(config.default_square, 40);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.pretty_json);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_env_values() {
        let mut config = CliConfig::default();
        let err = config
            .apply_overrides(env(&[("GRAINBOARD_SQUARE", "ten")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for GRAINBOARD_SQUARE: 'ten'");

        assert!(config
            .apply_overrides(env(&[("GRAINBOARD_FORMAT", "pdf")]))
            .is_err());
        assert!(config
            .apply_overrides(env(&[("GRAINBOARD_PRETTY_JSON", "maybe")]))
            .is_err());
    }

    #[test]
    fn test_out_of_range_env_square_fails_validation() {
        let mut config = CliConfig::default();
        config
            .apply_overrides(env(&[("GRAINBOARD_SQUARE", "99")]))
            .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_file() {
        let path = std::env::temp_dir().join("grainboard-does-not-exist.toml");
        assert!(matches!(
            CliConfig::load(Some(path)),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "grainboard-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "default_square = 12\npretty_json = false\n").unwrap();

        let config = CliConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.default_square, 12);
        assert!(!config.pretty_json);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&CliConfig::default()).unwrap();
        assert!(toml_str.contains("default_square = 1"));
        assert!(toml_str.contains("format = \"text\""));
        assert_eq!(CliConfig::from_toml(&toml_str).unwrap(), CliConfig::default());
    }
}
