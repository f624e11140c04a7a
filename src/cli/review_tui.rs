//! TUI mode for the review session.
//!
//! This module provides the entry point for the interactive terminal user
//! interface.

use std::io::{self, Write};

use bubbletea_rs::Program;

use crate::api::ReviewError;
use crate::session::ReviewController;
use crate::tui::{ReviewApp, set_session_controller};

/// Runs the TUI over the given controller.
///
/// # Errors
///
/// Returns [`ReviewError::Io`] if the TUI fails to initialise or exits with
/// an error.
pub async fn run(controller: ReviewController) -> Result<(), ReviewError> {
    // Store the controller for Model::init() to retrieve.
    // If already set (e.g. re-running TUI in same process), this is a no-op
    // and the existing controller remains.
    let _ = set_session_controller(controller);

    run_tui().await.map_err(|error| ReviewError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Runs the bubbletea-rs program with the `ReviewApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<ReviewApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
