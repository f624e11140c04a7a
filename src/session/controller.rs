//! The review session controller.
//!
//! [`ReviewController`] owns the [`SessionState`] and drives the review
//! cycle: fetch the next pending edit, point the viewer at it, submit the
//! reviewer's classification, and advance. Every operation takes
//! `&mut self`, so a controller never has two requests in flight.
//!
//! When the server asks for a confirmed resubmission the controller parks
//! the request in [`SessionPhase::PendingConfirmation`] and waits for
//! [`ReviewController::resolve_confirmation`].

use std::sync::Arc;
use std::time::Instant;

use url::Url;

use super::display_mode::DisplayMode;
use super::state::{RenderedEdit, SessionPhase, SessionState};
use super::viewer::DiffViewer;
use crate::api::{
    Classification, ClassificationRequest, EditId, ReviewError, ReviewGateway, ReviewOperation,
    ServerLocator,
};
use crate::browser::{BrowserLauncher, NoopBrowser};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Question put to the reviewer when the server wants a confirmation.
pub const CONFIRMATION_QUESTION: &str = "Are you sure?";

/// Result of a classification that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyOutcome {
    /// The server wants the reviewer to confirm before it records the label.
    ConfirmationRequired {
        /// Edit still on display.
        edit_id: EditId,
        /// Label awaiting confirmation.
        classification: Classification,
    },
    /// The classification was recorded and the next edit is displayed.
    Advanced(RenderedEdit),
}

/// Asks the reviewer a yes/no question and blocks until answered.
pub trait ConfirmationPrompt {
    /// Returns `true` when the reviewer agrees.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Io`] when the answer cannot be read.
    fn confirm(&mut self, question: &str) -> Result<bool, ReviewError>;
}

/// Drives one review session against a gateway.
pub struct ReviewController {
    gateway: Arc<dyn ReviewGateway>,
    locator: ServerLocator,
    viewer: DiffViewer,
    browser: Arc<dyn BrowserLauncher>,
    telemetry: Arc<dyn TelemetrySink>,
    open_viewer: bool,
    state: SessionState,
}

impl std::fmt::Debug for ReviewController {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ReviewController")
            .field("locator", &self.locator)
            .field("viewer", &self.viewer)
            .field("open_viewer", &self.open_viewer)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ReviewController {
    /// Creates a controller with no browser launches and no telemetry.
    #[must_use]
    pub fn new(gateway: Arc<dyn ReviewGateway>, locator: ServerLocator, viewer: DiffViewer) -> Self {
        Self {
            gateway,
            locator,
            viewer,
            browser: Arc::new(NoopBrowser),
            telemetry: Arc::new(NoopTelemetrySink),
            open_viewer: false,
            state: SessionState::default(),
        }
    }

    /// Uses the given launcher for details pages and viewer URLs.
    #[must_use]
    pub fn with_browser(mut self, browser: Arc<dyn BrowserLauncher>) -> Self {
        self.browser = browser;
        self
    }

    /// Records round-trip telemetry to the given sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Selects the display mode used for the first render.
    #[must_use]
    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.state.set_display_mode(display_mode);
        self
    }

    /// Launches every rendered viewer URL in the browser when enabled.
    #[must_use]
    pub const fn opening_viewer(mut self, open_viewer: bool) -> Self {
        self.open_viewer = open_viewer;
        self
    }

    /// Returns the session state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Starts the session by loading the first pending edit.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Self::load_next`].
    pub async fn start(&mut self) -> Result<RenderedEdit, ReviewError> {
        tracing::info!(server = %self.locator.base(), "starting review session");
        self.load_next().await
    }

    /// Fetches the next pending edit and displays it.
    ///
    /// On success the comment is cleared. On failure the displayed edit is
    /// left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::NoPendingEdits`] when the queue is drained,
    /// or a network or server error for [`ReviewOperation::LoadNext`].
    pub async fn load_next(&mut self) -> Result<RenderedEdit, ReviewError> {
        self.state
            .set_phase(SessionPhase::Submitting(ReviewOperation::LoadNext));
        let started = Instant::now();
        let result = self.gateway.next_edit().await;
        self.state.set_phase(SessionPhase::Idle);

        match result {
            Ok(edit_id) => {
                self.telemetry.record(TelemetryEvent::EditLoaded {
                    edit_id: edit_id.get(),
                    latency_ms: elapsed_ms(started),
                });
                tracing::info!(%edit_id, "loaded pending edit");
                self.state.clear_comment();
                Ok(self.render(edit_id))
            }
            Err(error) => {
                tracing::warn!(%error, "failed to retrieve pending edit");
                Err(error)
            }
        }
    }

    /// Displays an edit under the current display mode.
    ///
    /// This performs no request to the review service.
    pub fn render(&mut self, edit_id: EditId) -> RenderedEdit {
        let mode = self.state.display_mode();
        let viewer_url = self.viewer.url_for(edit_id, mode);
        tracing::debug!(%edit_id, %mode, url = %viewer_url, "rendering edit");

        if self.open_viewer
            && let Err(error) = self.browser.open(&viewer_url)
        {
            tracing::warn!(%error, "failed to open viewer");
        }

        let rendered = RenderedEdit {
            edit_id,
            viewer_url,
        };
        self.state.show(rendered.clone());
        rendered
    }

    /// Re-renders the displayed edit, picking up a changed display mode.
    ///
    /// Returns `None` when nothing is displayed yet.
    pub fn refresh(&mut self) -> Option<RenderedEdit> {
        let edit_id = self.state.current_edit()?;
        Some(self.render(edit_id))
    }

    /// Changes the display mode used by the next render.
    pub fn set_display_mode(&mut self, display_mode: DisplayMode) {
        self.state.set_display_mode(display_mode);
    }

    /// Replaces the reviewer comment.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.state.set_comment(comment.into());
    }

    /// Submits a classification for the displayed edit.
    ///
    /// The request carries the displayed edit and the current comment. When
    /// the server accepts it the next edit is loaded; when the server wants
    /// a confirmation and `confirmed` is `false`, the request is parked
    /// until [`Self::resolve_confirmation`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::NoEditDisplayed`] before the first edit is
    /// loaded, a network or server error for [`ReviewOperation::Classify`],
    /// or the errors of [`Self::load_next`] when advancing fails.
    pub async fn classify(
        &mut self,
        classification: Classification,
        confirmed: bool,
    ) -> Result<ClassifyOutcome, ReviewError> {
        let edit_id = self
            .state
            .current_edit()
            .ok_or(ReviewError::NoEditDisplayed)?;

        let request = ClassificationRequest {
            edit_id,
            comment: self.state.comment().to_owned(),
            classification,
            confirmation: confirmed,
        };
        self.submit(request).await
    }

    /// Answers a pending confirmation.
    ///
    /// Accepting resubmits the parked request once with the confirmation
    /// flag set. Declining drops it and leaves the edit on display.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::NoPendingConfirmation`] when nothing is
    /// parked, [`ReviewError::ConfirmationDeclined`] when the reviewer
    /// declines, or the errors of [`Self::classify`] for the resubmission.
    pub async fn resolve_confirmation(
        &mut self,
        accepted: bool,
    ) -> Result<ClassifyOutcome, ReviewError> {
        let request = self
            .state
            .take_pending_confirmation()
            .ok_or(ReviewError::NoPendingConfirmation)?;

        if !accepted {
            tracing::info!(edit_id = %request.edit_id, "reviewer declined confirmation");
            return Err(ReviewError::ConfirmationDeclined {
                edit_id: request.edit_id,
            });
        }

        self.submit(request.confirmed()).await
    }

    /// Classifies the displayed edit and answers any confirmation request
    /// through `prompt` straight away.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::classify`] and
    /// [`Self::resolve_confirmation`], and prompt I/O failures.
    pub async fn classify_with_prompt<P>(
        &mut self,
        classification: Classification,
        prompt: &mut P,
    ) -> Result<ClassifyOutcome, ReviewError>
    where
        P: ConfirmationPrompt + ?Sized,
    {
        match self.classify(classification, false).await? {
            ClassifyOutcome::ConfirmationRequired { .. } => {
                let accepted = match prompt.confirm(CONFIRMATION_QUESTION) {
                    Ok(answer) => answer,
                    Err(error) => {
                        self.state.take_pending_confirmation();
                        return Err(error);
                    }
                };
                self.resolve_confirmation(accepted).await
            }
            advanced @ ClassifyOutcome::Advanced(_) => Ok(advanced),
        }
    }

    /// Opens the server-rendered details page of the displayed edit.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::NoEditDisplayed`] before the first edit is
    /// loaded, or the launcher's error.
    pub fn open_details(&self) -> Result<Url, ReviewError> {
        let edit_id = self
            .state
            .current_edit()
            .ok_or(ReviewError::NoEditDisplayed)?;
        let url = self.locator.details_url(edit_id)?;
        self.browser.open(&url)?;
        Ok(url)
    }

    /// Opens the viewer URL of the displayed edit.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::NoEditDisplayed`] before the first edit is
    /// loaded, or the launcher's error.
    pub fn open_viewer(&self) -> Result<Url, ReviewError> {
        let url = self
            .state
            .viewer_url()
            .cloned()
            .ok_or(ReviewError::NoEditDisplayed)?;
        self.browser.open(&url)?;
        Ok(url)
    }

    async fn submit(
        &mut self,
        request: ClassificationRequest,
    ) -> Result<ClassifyOutcome, ReviewError> {
        self.state
            .set_phase(SessionPhase::Submitting(ReviewOperation::Classify));
        let started = Instant::now();
        let result = self.gateway.submit_classification(&request).await;

        let response = match result {
            Ok(response) => response,
            Err(error) => {
                self.state.set_phase(SessionPhase::Idle);
                tracing::warn!(edit_id = %request.edit_id, %error, "failed to classify edit");
                return Err(error);
            }
        };

        self.telemetry
            .record(TelemetryEvent::ClassificationSubmitted {
                edit_id: request.edit_id.get(),
                classification: request.classification.to_string(),
                confirmed: request.confirmation,
                require_confirmation: response.require_confirmation,
                latency_ms: elapsed_ms(started),
            });

        if response.require_confirmation && !request.confirmation {
            tracing::info!(edit_id = %request.edit_id, "server requires confirmation");
            let outcome = ClassifyOutcome::ConfirmationRequired {
                edit_id: request.edit_id,
                classification: request.classification.clone(),
            };
            self.state
                .set_phase(SessionPhase::PendingConfirmation(request));
            return Ok(outcome);
        }

        self.state.set_phase(SessionPhase::Idle);
        tracing::info!(
            edit_id = %request.edit_id,
            classification = %request.classification,
            "classification recorded"
        );
        self.load_next().await.map(ClassifyOutcome::Advanced)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
