//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::api::Classification;
use crate::session::{DisplayMode, SessionState};

/// Outcome of one controller operation, sent back to the update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationReport {
    /// Snapshot of the session after the operation.
    pub state: SessionState,
    /// Informational line for the status bar.
    pub notice: Option<String>,
    /// Blocking alert raised by the operation.
    pub alert: Option<String>,
    /// Whether the operation displayed a newly fetched edit.
    pub loaded: bool,
}

/// Messages for the review session TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Review actions
    /// Classify the displayed edit with this label.
    Classify(Classification),
    /// Answer a pending confirmation.
    Confirm(bool),
    /// Advance to the next display mode.
    CycleMode,
    /// Select a display mode directly.
    SelectMode(DisplayMode),
    /// Re-render the displayed edit.
    Refresh,
    /// Fetch the next pending edit.
    NextEdit,
    /// Open the viewer URL in the browser.
    OpenViewer,
    /// Open the details page in the browser.
    OpenDetails,

    // Comment editing
    /// Start editing the reviewer comment.
    StartComment,
    /// Append a character to the comment.
    CommentInput(char),
    /// Delete the last character of the comment.
    CommentBackspace,
    /// Stop editing the comment.
    FinishComment,

    // Async results
    /// A controller operation completed.
    OperationFinished(OperationReport),

    // Application lifecycle
    /// Synthetic startup event that loads the first edit.
    Initialized,
    /// Dismiss the alert on screen.
    DismissAlert,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Whether this message asks the controller to do something.
    ///
    /// These are rejected while a request is in flight.
    #[must_use]
    pub const fn is_session_action(&self) -> bool {
        matches!(
            self,
            Self::Classify(_)
                | Self::Confirm(_)
                | Self::CycleMode
                | Self::SelectMode(_)
                | Self::Refresh
                | Self::NextEdit
                | Self::OpenViewer
                | Self::OpenDetails
        )
    }

    /// Whether this message edits the comment draft.
    #[must_use]
    pub const fn is_comment_edit(&self) -> bool {
        matches!(
            self,
            Self::StartComment
                | Self::CommentInput(_)
                | Self::CommentBackspace
                | Self::FinishComment
        )
    }
}
