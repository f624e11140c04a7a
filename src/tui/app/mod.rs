//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the application state and update logic for the
//! review session TUI. The [`ReviewController`](crate::session::ReviewController)
//! stays the single owner of session state; the model keeps the latest
//! snapshot it reported plus purely presentational state (comment draft,
//! alert, help overlay).
//!
//! # Module Structure
//!
//! - `comment_handlers`: Comment draft editing
//! - `lifecycle_handlers`: Startup, quit, help, and resize handling
//! - `model_impl`: `bubbletea_rs::Model` implementation
//! - `rendering`: View rendering methods for terminal output
//! - `session_handlers`: Controller operations run as commands

use bubbletea_rs::Cmd;

use super::SharedController;
use super::input::InputContext;
use super::messages::AppMsg;
use crate::session::SessionState;

mod comment_handlers;
mod lifecycle_handlers;
mod model_impl;
mod rendering;
mod session_handlers;

/// Main application model for the review session TUI.
#[derive(Debug)]
pub struct ReviewApp {
    /// Controller driven by session commands, if one was configured.
    controller: Option<SharedController>,
    /// Session snapshot from the last completed operation.
    pub(crate) session: SessionState,
    /// Comment being typed for the displayed edit.
    pub(crate) comment_draft: String,
    /// Whether keys are typed into the comment.
    pub(crate) editing_comment: bool,
    /// Whether a controller operation is in flight.
    pub(crate) loading: bool,
    /// Blocking alert awaiting dismissal.
    pub(crate) alert: Option<String>,
    /// Informational status line.
    pub(crate) notice: Option<String>,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Whether the startup load has been issued.
    has_initialized: bool,
    /// Terminal dimensions.
    width: u16,
    height: u16,
}

impl ReviewApp {
    /// Creates an application driving the given controller.
    #[must_use]
    pub fn new(controller: SharedController) -> Self {
        let session = controller
            .try_lock()
            .map(|locked| locked.state().clone())
            .unwrap_or_default();
        Self {
            session,
            ..Self::detached_with(Some(controller))
        }
    }

    /// Creates an application with no controller. Every review action
    /// raises an alert.
    #[must_use]
    pub fn detached() -> Self {
        Self::detached_with(None)
    }

    fn detached_with(controller: Option<SharedController>) -> Self {
        Self {
            controller,
            session: SessionState::default(),
            comment_draft: String::new(),
            editing_comment: false,
            loading: false,
            alert: None,
            notice: None,
            show_help: false,
            has_initialized: false,
            width: 80,
            height: 24,
        }
    }

    /// Returns the latest session snapshot.
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// Returns the alert on screen, if any.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Returns the comment draft.
    #[must_use]
    pub fn comment_draft(&self) -> &str {
        &self.comment_draft
    }

    /// Whether a controller operation is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Determines how key presses are interpreted right now.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.alert.is_some() {
            InputContext::Alert
        } else if self.session.pending_confirmation().is_some() {
            InputContext::Confirming
        } else if self.editing_comment {
            InputContext::EditingComment
        } else {
            InputContext::Review
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This method is the core update function that processes all application
    /// messages and returns any resulting commands. It delegates to specialised
    /// handlers for each message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_session_action() {
            return self.handle_session_action(msg);
        }
        if msg.is_comment_edit() {
            return self.handle_comment_msg(msg);
        }
        if let AppMsg::OperationFinished(report) = msg {
            return self.handle_operation_finished(report);
        }
        self.handle_lifecycle_msg(msg)
    }
}
