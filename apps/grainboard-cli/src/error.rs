//! # CLI Error Type
//!
//! Unified error type for everything the `grainboard` binary can report.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in grainboard                             │
//! │                                                                         │
//! │  argv ──► parse_args ─── bad flag ──────────────► CliError::Usage      │
//! │             │                                                           │
//! │             ▼                                                           │
//! │  CliConfig::load ─── bad toml / env ────────────► CliError::Config     │
//! │             │                                                           │
//! │             ▼                                                           │
//! │  parse_square ─── "ten", "0", "65" ─────────────► CliError::Core       │
//! │             │                                                           │
//! │             ▼                                                           │
//! │  render ─── serde_json failure ─────────────────► CliError::Render     │
//! │                                                                         │
//! │  stderr:  [VALIDATION_ERROR] Square 65 is not on the board (...)        │
//! │  exit:    2                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use grainboard_core::CoreError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown flag, missing flag value, or a stray positional argument.
    #[error("{0}")]
    Usage(String),

    /// The square (or another core input) was rejected.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Config file or `GRAINBOARD_*` environment value was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The report could not be serialized.
    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// Machine-readable error codes, printed in front of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Bad command line
    Usage,

    /// Input validation failed
    ValidationError,

    /// Configuration could not be loaded
    ConfigError,

    /// Something that is not the caller's fault
    Internal,
}

impl ErrorCode {
    /// The wire name of the code, e.g. `VALIDATION_ERROR`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Usage => "USAGE",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }

    /// Process exit status for this code.
    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorCode::Usage | ErrorCode::ValidationError | ErrorCode::ConfigError => 2,
            ErrorCode::Internal => 1,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CliError {
    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }

    /// Maps the error to its code.
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Usage(_) => ErrorCode::Usage,
            CliError::Core(CoreError::SquareOutOfRange { .. })
            | CliError::Core(CoreError::Validation(_)) => ErrorCode::ValidationError,
            CliError::Config(_) => ErrorCode::ConfigError,
            CliError::Render(_) => ErrorCode::Internal,
        }
    }

    /// Process exit status.
    pub fn exit_code(&self) -> u8 {
        self.code().exit_code()
    }

    /// The `[CODE] message` line written to stderr.
    pub fn to_terminal(&self) -> String {
        format!("[{}] {}", self.code(), self)
    }
}

/// Convenience type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;

// =============================================================================
// Unit Tests
// =============================================================================
