//! Controller operations for the review TUI.
//!
//! Each review action becomes one command that locks the shared controller,
//! runs a single operation, and reports back with
//! [`AppMsg::OperationFinished`]. The `loading` flag keeps a second action
//! from starting while one is in flight.

use std::any::Any;

use bubbletea_rs::Cmd;

use super::ReviewApp;
use crate::api::{Classification, ReviewError};
use crate::session::{ClassifyOutcome, DisplayMode, RenderedEdit, ReviewController};
use crate::tui::SharedController;
use crate::tui::messages::{AppMsg, OperationReport};

/// A single controller call issued by the TUI.
#[derive(Debug, Clone)]
pub(super) enum SessionOperation {
    Start,
    LoadNext,
    Classify {
        classification: Classification,
        comment: String,
    },
    Confirm(bool),
    SelectMode(DisplayMode),
    Refresh,
    OpenViewer,
    OpenDetails,
}

/// Status text produced by an operation, and whether it displayed a newly
/// fetched edit.
#[derive(Debug, Default)]
struct Feedback {
    notice: Option<String>,
    alert: Option<String>,
    loaded: bool,
}

impl Feedback {
    fn notice(text: String) -> Self {
        Self {
            notice: Some(text),
            ..Self::default()
        }
    }

    fn loaded(text: String) -> Self {
        Self {
            loaded: true,
            ..Self::notice(text)
        }
    }

    fn from_load(result: Result<RenderedEdit, ReviewError>) -> Self {
        match result {
            Ok(rendered) => Self::loaded(format!("Loaded edit {}", rendered.edit_id)),
            Err(error) => Self::from_error(&error),
        }
    }

    fn from_error(error: &ReviewError) -> Self {
        if let ReviewError::ConfirmationDeclined { edit_id } = error {
            return Self::notice(format!("Edit {edit_id} left unclassified"));
        }
        Self {
            alert: error.alert_message(),
            ..Self::default()
        }
    }

    fn from_result(result: Result<String, ReviewError>) -> Self {
        match result {
            Ok(text) => Self::notice(text),
            Err(error) => Self::from_error(&error),
        }
    }

    fn from_classification(result: Result<ClassifyOutcome, ReviewError>) -> Self {
        match result {
            Ok(ClassifyOutcome::Advanced(rendered)) => {
                Self::loaded(format!("Classified; showing edit {}", rendered.edit_id))
            }
            Ok(ClassifyOutcome::ConfirmationRequired { .. }) => Self::default(),
            Err(error) => Self::from_error(&error),
        }
    }
}

impl SessionOperation {
    async fn perform(self, controller: &mut ReviewController) -> Feedback {
        match self {
            Self::Start => Feedback::from_load(controller.start().await),
            Self::LoadNext => Feedback::from_load(controller.load_next().await),
            Self::Classify {
                classification,
                comment,
            } => {
                controller.set_comment(comment);
                Feedback::from_classification(controller.classify(classification, false).await)
            }
            Self::Confirm(accepted) => {
                Feedback::from_classification(controller.resolve_confirmation(accepted).await)
            }
            Self::SelectMode(mode) => {
                controller.set_display_mode(mode);
                controller.refresh();
                Feedback::notice(format!("Display mode: {mode}"))
            }
            Self::Refresh => Feedback::from_result(
                controller
                    .refresh()
                    .map(|rendered| format!("Refreshed edit {}", rendered.edit_id))
                    .ok_or(ReviewError::NoEditDisplayed),
            ),
            Self::OpenViewer => {
                Feedback::from_result(controller.open_viewer().map(|url| format!("Opened {url}")))
            }
            Self::OpenDetails => {
                Feedback::from_result(controller.open_details().map(|url| format!("Opened {url}")))
            }
        }
    }
}

impl ReviewApp {
    /// Turns a review action into a controller operation.
    pub(super) fn handle_session_action(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let operation = match msg {
            AppMsg::Classify(classification) => SessionOperation::Classify {
                classification: classification.clone(),
                comment: self.comment_draft.clone(),
            },
            AppMsg::Confirm(accepted) => SessionOperation::Confirm(*accepted),
            AppMsg::CycleMode => SessionOperation::SelectMode(self.session.display_mode().next()),
            AppMsg::SelectMode(mode) => SessionOperation::SelectMode(*mode),
            AppMsg::Refresh => SessionOperation::Refresh,
            AppMsg::NextEdit => SessionOperation::LoadNext,
            AppMsg::OpenViewer => SessionOperation::OpenViewer,
            AppMsg::OpenDetails => SessionOperation::OpenDetails,
            _ => {
                debug_assert!(false, "non-session message routed to handle_session_action");
                return None;
            }
        };
        self.start_operation(operation)
    }

    /// Starts an operation unless one is already in flight.
    pub(super) fn start_operation(&mut self, operation: SessionOperation) -> Option<Cmd> {
        if self.loading {
            self.notice = Some("Waiting for the server...".to_owned());
            return None;
        }
        let Some(controller) = self.controller.clone() else {
            self.alert = Some("No review session is configured".to_owned());
            return None;
        };

        self.loading = true;
        self.notice = None;
        Some(Self::operation_cmd(controller, operation))
    }

    fn operation_cmd(controller: SharedController, operation: SessionOperation) -> Cmd {
        Box::pin(async move {
            let mut locked = controller.lock().await;
            let feedback = operation.perform(&mut locked).await;
            let report = OperationReport {
                state: locked.state().clone(),
                notice: feedback.notice,
                alert: feedback.alert,
                loaded: feedback.loaded,
            };
            Some(Box::new(AppMsg::OperationFinished(report)) as Box<dyn Any + Send>)
        })
    }

    /// Applies the session snapshot reported by a finished operation.
    ///
    /// The comment draft is reset whenever a freshly fetched edit is
    /// displayed, even one with the same id, so a failed submission keeps
    /// what the reviewer typed.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    pub(super) fn handle_operation_finished(&mut self, report: &OperationReport) -> Option<Cmd> {
        if report.loaded {
            self.comment_draft = report.state.comment().to_owned();
            self.editing_comment = false;
        }
        self.session = report.state.clone();
        self.notice.clone_from(&report.notice);
        self.alert.clone_from(&report.alert);
        self.loading = false;
        None
    }
}
