//! Tally CLI
//!
//! Thin command-line entry point over the numeric helpers in `tally-core`.
//! Results go to stdout, logs go to stderr.

mod command;

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use command::{Command, USAGE};
use tally_shared::{AppConfig, AppError};

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = match Command::from_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => return Ok(report(&err)),
    };
    info!(?command, "Running command");

    match command.run(&config.display) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(report(&err)),
    }
}

fn report(err: &AppError) -> ExitCode {
    error!(code = err.error_code(), "{err}");
    if matches!(err, AppError::Usage(_)) {
        eprintln!("{err}\n{USAGE}");
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    ExitCode::from(err.exit_code() as u8)
}
