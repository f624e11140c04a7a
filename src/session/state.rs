//! Session state owned by the review controller.
//!
//! Front-ends never hold their own copy of the displayed edit; they render
//! a projection of [`SessionState`].

use url::Url;

use super::display_mode::DisplayMode;
use crate::api::{ClassificationRequest, EditId, ReviewOperation};

/// Where the session is in the review cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the reviewer, with or without an edit on display.
    #[default]
    Idle,
    /// A request to the review service is in flight.
    Submitting(ReviewOperation),
    /// The server asked for a confirmed resubmission of this request.
    PendingConfirmation(ClassificationRequest),
}

/// The edit on display and where the viewer points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEdit {
    /// Displayed edit.
    pub edit_id: EditId,
    /// Viewer URL for the edit under the current display mode.
    pub viewer_url: Url,
}

/// Mutable state of one review session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    displayed: Option<RenderedEdit>,
    display_mode: DisplayMode,
    comment: String,
    phase: SessionPhase,
}

impl SessionState {
    /// Creates an empty session using the given display mode.
    #[must_use]
    pub fn new(display_mode: DisplayMode) -> Self {
        Self {
            display_mode,
            ..Self::default()
        }
    }

    /// Returns the displayed edit and viewer URL, if any.
    #[must_use]
    pub const fn displayed(&self) -> Option<&RenderedEdit> {
        self.displayed.as_ref()
    }

    /// Returns the identifier of the displayed edit, if any.
    #[must_use]
    pub fn current_edit(&self) -> Option<EditId> {
        self.displayed.as_ref().map(|rendered| rendered.edit_id)
    }

    /// Returns the viewer URL of the displayed edit, if any.
    #[must_use]
    pub fn viewer_url(&self) -> Option<&Url> {
        self.displayed.as_ref().map(|rendered| &rendered.viewer_url)
    }

    /// Returns the selected display mode.
    #[must_use]
    pub const fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Returns the reviewer comment typed so far.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Returns the submission awaiting the reviewer's confirmation.
    #[must_use]
    pub const fn pending_confirmation(&self) -> Option<&ClassificationRequest> {
        match &self.phase {
            SessionPhase::PendingConfirmation(request) => Some(request),
            _ => None,
        }
    }

    pub(crate) fn show(&mut self, rendered: RenderedEdit) {
        self.displayed = Some(rendered);
    }

    pub(crate) const fn set_display_mode(&mut self, display_mode: DisplayMode) {
        self.display_mode = display_mode;
    }

    pub(crate) fn set_comment(&mut self, comment: String) {
        self.comment = comment;
    }

    pub(crate) fn clear_comment(&mut self) {
        self.comment.clear();
    }

    pub(crate) fn set_phase(&mut self, phase: SessionPhase) {
        self.phase = phase;
    }

    /// Moves a pending confirmation out of the phase, leaving `Idle`.
    ///
    /// Any other phase is left untouched and `None` is returned.
    pub(crate) fn take_pending_confirmation(&mut self) -> Option<ClassificationRequest> {
        if !matches!(self.phase, SessionPhase::PendingConfirmation(_)) {
            return None;
        }
        match std::mem::take(&mut self.phase) {
            SessionPhase::PendingConfirmation(request) => Some(request),
            _ => None,
        }
    }
}
