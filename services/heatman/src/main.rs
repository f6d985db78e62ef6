//! heatman command-line tool.
//!
//! Exit codes: 0 success, 1 usage error, 2 I/O or encoding error,
//! 3 invalid option value.

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser};
use heatman::cli::parse_error_exit_code;
use heatman::{report_failure, run, Args};
use heatman_common::HeatmanError;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return exit_code(parse_error_exit_code(&err));
        }
    };

    if let Err(err) = init_tracing(&args.log_level) {
        eprintln!("heatman: {:#}", err);
    }

    match run(&args) {
        Ok(summary) => {
            debug!(?summary, "heatman finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let _ = report_failure(&err, &mut std::io::stderr().lock());
            if matches!(err, HeatmanError::Usage(_)) {
                let _ = Args::command().print_help();
            }
            exit_code(err.exit_code())
        }
    }
}

/// Log to stderr; RUST_LOG takes precedence over `--log-level`.
fn init_tracing(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{}'", level))?,
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to install log subscriber")
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
