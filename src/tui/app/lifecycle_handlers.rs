//! Lifecycle and window handlers for the review TUI.
//!
//! This module handles startup, terminal resize events, and high-level
//! lifecycle messages such as quit, help toggling and alert dismissal.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::ReviewApp;
use super::session_handlers::SessionOperation;
use crate::tui::messages::AppMsg;

impl ReviewApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::DismissAlert => {
                self.alert = None;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    /// Handles the synthetic startup message by loading the first edit.
    ///
    /// Subsequent `Initialized` messages are ignored.
    fn handle_initialized(&mut self) -> Option<Cmd> {
        if self.has_initialized {
            return None;
        }

        self.has_initialized = true;
        self.start_operation(SessionOperation::Start)
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first load without waiting
    /// for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
