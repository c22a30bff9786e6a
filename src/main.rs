//! WeRent command-line client.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;
use werent::config::OperationMode;
use werent::{AppError, WerentConfig};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = load_config()?;
    let mode = config.operation_mode();
    init_tracing(mode);

    match mode {
        OperationMode::Login => cli::login::run(&config).await,
        OperationMode::Logout => cli::logout::run(&config),
        OperationMode::Review => cli::review::run(&config).await,
        OperationMode::Status => cli::status::run(&config),
    }
}

/// Loads configuration from CLI, environment, and files.
fn load_config() -> Result<WerentConfig, AppError> {
    WerentConfig::load().map_err(|error| AppError::Configuration {
        message: error.to_string(),
    })
}

/// Installs a stderr subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG`, the review TUI logs nothing so the alternate screen
/// stays clean; other modes log warnings.
fn init_tracing(mode: OperationMode) {
    let fallback = if mode == OperationMode::Review {
        "off"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ignored = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
