//! Error types exposed by the review API layer and the session controller.

use std::fmt;

use thiserror::Error;

use super::models::EditId;

/// Server operations that can fail and raise a user-visible alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOperation {
    /// Fetching the next pending edit.
    LoadNext,
    /// Submitting a classification for the displayed edit.
    Classify,
}

impl ReviewOperation {
    /// Alert text shown to the reviewer when this operation fails.
    #[must_use]
    pub const fn failure_alert(self) -> &'static str {
        match self {
            Self::LoadNext => "Failed to retrieve pending edit",
            Self::Classify => "Failed to classify edit",
        }
    }
}

impl fmt::Display for ReviewOperation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LoadNext => "load next edit",
            Self::Classify => "classify edit",
        };
        formatter.write_str(name)
    }
}

/// Errors surfaced while configuring the client or talking to the review
/// service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// Configuration could not be loaded or is incomplete.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A configured URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The request never produced an HTTP response.
    #[error("{operation} failed: network error: {message}")]
    Transport {
        /// Operation that was in flight.
        operation: ReviewOperation,
        /// Transport-level error detail.
        message: String,
    },

    /// The server answered with something other than `200 OK`.
    #[error("{operation} failed with status {status}")]
    UnexpectedStatus {
        /// Operation that was in flight.
        operation: ReviewOperation,
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The response body did not match the expected JSON shape.
    #[error("{operation} failed: response could not be decoded: {message}")]
    Decode {
        /// Operation that was in flight.
        operation: ReviewOperation,
        /// Decoder error detail.
        message: String,
    },

    /// The server reported that the review queue is drained.
    #[error("no pending edits remain")]
    NoPendingEdits,

    /// An action needs a displayed edit but none has been loaded yet.
    #[error("no edit is currently displayed")]
    NoEditDisplayed,

    /// A confirmation answer arrived while no confirmation was pending.
    #[error("no classification is awaiting confirmation")]
    NoPendingConfirmation,

    /// The reviewer declined the confirmation the server asked for.
    #[error("classification of edit {edit_id} was not confirmed")]
    ConfirmationDeclined {
        /// Edit that stays displayed and unclassified.
        edit_id: EditId,
    },

    /// The system browser could not be launched.
    #[error("failed to open {url}: {message}")]
    BrowserLaunch {
        /// Target URL.
        url: String,
        /// Launcher error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ReviewError {
    /// Returns the operation this error belongs to when it is a network or
    /// server failure.
    #[must_use]
    pub const fn failed_operation(&self) -> Option<ReviewOperation> {
        match self {
            Self::Transport { operation, .. }
            | Self::UnexpectedStatus { operation, .. }
            | Self::Decode { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Whether the error is a network or server failure.
    #[must_use]
    pub const fn is_network_or_server(&self) -> bool {
        self.failed_operation().is_some()
    }

    /// Text of the blocking alert the reviewer sees for this error.
    ///
    /// Network and server failures collapse to the per-operation alert.
    /// Declining a confirmation is a deliberate choice and raises no alert.
    #[must_use]
    pub fn alert_message(&self) -> Option<String> {
        if let Some(operation) = self.failed_operation() {
            return Some(operation.failure_alert().to_owned());
        }
        match self {
            Self::NoPendingEdits => Some("No pending edits remain".to_owned()),
            Self::ConfirmationDeclined { .. } | Self::NoPendingConfirmation => None,
            other => Some(other.to_string()),
        }
    }
}
