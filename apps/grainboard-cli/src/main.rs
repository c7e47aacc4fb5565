//! `grainboard` binary entry point.
//!
//! See the library crate for the startup sequence. Errors are printed as
//! `[CODE] message` and mapped to an exit status.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use grainboard_cli::args::USAGE;
use grainboard_cli::{commands, init_tracing, CliArgs, CliConfig, CliError};
use tracing::info;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<CliError>() {
            Some(cli_err) => {
                eprintln!("{}", cli_err.to_terminal());
                ExitCode::from(cli_err.exit_code())
            }
            None => {
                eprintln!("[INTERNAL] {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}

fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;

    if args.help {
        print!("{}", USAGE);
        return Ok(());
    }

    let config = CliConfig::load(args.config_path.clone()).map_err(CliError::from)?;
    init_tracing(&config.log_filter);

    info!(
        format = %config.format,
        default_square = config.default_square,
        "Configuration loaded"
    );

    let output = commands::execute(&args, &config)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write report to stdout")?;

    Ok(())
}
