//! CLI operation mode handlers.
//!
//! This module contains the implementations for the two front-ends:
//! - [`line_session`]: Prompt-driven session on stdin/stdout
//! - [`review_tui`]: Full-screen terminal interface
//!
//! Both take a ready [`ReviewController`](crate::session::ReviewController)
//! built by [`build_controller`].

use std::sync::Arc;

use crate::api::{HttpReviewGateway, ReviewError};
use crate::browser::{BrowserLauncher, SystemBrowser};
use crate::config::ReviewConfig;
use crate::session::ReviewController;
use crate::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};

pub mod line_session;
pub mod review_tui;

/// Builds a controller for the configured review service.
///
/// Details pages and `--open-viewer` always go through the system browser.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] or [`ReviewError::InvalidUrl`]
/// when the configuration is incomplete or malformed.
pub fn build_controller(config: &ReviewConfig) -> Result<ReviewController, ReviewError> {
    build_controller_with(config, Arc::new(SystemBrowser))
}

/// Builds a controller that opens URLs through `browser`.
///
/// # Errors
///
/// Returns the same errors as [`build_controller`].
pub fn build_controller_with(
    config: &ReviewConfig,
    browser: Arc<dyn BrowserLauncher>,
) -> Result<ReviewController, ReviewError> {
    let locator = config.require_server_locator()?;
    let cookie = config.session_cookie();
    let gateway = HttpReviewGateway::new(locator.clone(), cookie.as_ref(), config.request_timeout())?;
    let telemetry: Arc<dyn TelemetrySink> = if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    };

    Ok(
        ReviewController::new(Arc::new(gateway), locator, config.diff_viewer()?)
            .with_display_mode(config.display_mode()?)
            .with_browser(browser)
            .with_telemetry(telemetry)
            .opening_viewer(config.open_viewer),
    )
}
