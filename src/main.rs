//! Reviewng CLI entrypoint for reviewing pending edits.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use reviewng::cli::{self, line_session::LineSession};
use reviewng::{OperationMode, ReviewConfig, ReviewError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            writeln!(io::stderr().lock(), "{error}").ok();
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ReviewError> {
    let config = load_config()?;
    init_logging(config.operation_mode());

    let mut controller = cli::build_controller(&config)?;

    match config.operation_mode() {
        OperationMode::Tui => cli::review_tui::run(controller).await,
        OperationMode::Line => {
            let mut session = LineSession::new(io::stdin().lock(), io::stdout().lock());
            session.run(&mut controller).await
        }
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReviewConfig, ReviewError> {
    ReviewConfig::load().map_err(|error| ReviewError::Configuration {
        message: error.to_string(),
    })
}

/// Sends `tracing` output to stderr, filtered by `RUST_LOG`.
///
/// Line mode logs warnings by default. The TUI owns the screen, so it logs
/// nothing unless `RUST_LOG` asks for it.
fn init_logging(mode: OperationMode) {
    let fallback = match mode {
        OperationMode::Line => "warn",
        OperationMode::Tui => "off",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
