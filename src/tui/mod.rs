//! Terminal User Interface for the review session.
//!
//! This module provides a full-screen front-end over
//! [`ReviewController`](crate::session::ReviewController) using the
//! bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::ReviewApp`]
//! - **View**: String rendering in `app::rendering`
//! - **Update**: Message-driven state transitions in `update()`
//!
//! Controller operations run inside commands. Each command locks the shared
//! controller, performs one operation, and reports the resulting session
//! snapshot back as [`messages::AppMsg::OperationFinished`].
//!
//! # Session Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the controller is handed over through module-level storage.
//! Call [`set_session_controller`] before starting the program, and
//! `ReviewApp::init()` will pick it up.

use std::sync::{Arc, OnceLock};

use tokio::sync::Mutex;

use crate::session::ReviewController;

pub mod app;
pub mod input;
pub mod messages;

pub use app::ReviewApp;

/// Controller shared between the update loop and running commands.
pub type SharedController = Arc<Mutex<ReviewController>>;

/// Global storage for the session controller.
///
/// This is set before the TUI program starts and read by `ReviewApp::init()`.
static SESSION_CONTROLLER: OnceLock<SharedController> = OnceLock::new();

/// Sets the controller the TUI application drives.
///
/// Returns `true` if the controller was set, `false` if one was already set.
pub fn set_session_controller(controller: ReviewController) -> bool {
    SESSION_CONTROLLER
        .set(Arc::new(Mutex::new(controller)))
        .is_ok()
}

pub(crate) fn session_controller() -> Option<SharedController> {
    SESSION_CONTROLLER.get().cloned()
}
