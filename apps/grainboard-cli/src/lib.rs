//! # grainboard-cli: Terminal Front End for Grainboard
//!
//! Thin orchestration layer over `grainboard-core`. All computation lives
//! in the core; this crate owns argv, configuration, logging and rendering.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. CliArgs::parse(argv)            --help short-circuits here          │
//! │  2. CliConfig::load(--config)       defaults → toml → GRAINBOARD_*      │
//! │  3. init_tracing(log_filter)        RUST_LOG wins, output to stderr     │
//! │  4. commands::execute(args, config) build_report → text/html/json       │
//! │  5. write to stdout                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod args;
pub mod commands;
pub mod config;
pub mod error;

pub use args::CliArgs;
pub use config::{CliConfig, ConfigError, OutputFormat};
pub use error::{CliError, CliResult, ErrorCode};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes priority; otherwise `default_filter` (the configured
/// `log_filter`) is used. Logs go to stderr so stdout only carries output.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
