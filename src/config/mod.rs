//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reviewng.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `REVIEWNG_SERVER_URL`,
//!    `REVIEWNG_SESSION_COOKIE`, `REVIEWNG_DISPLAY_MODE`, ...
//! 4. **Command-line arguments** – `--server-url`/`-s`,
//!    `--session-cookie`/`-c`, `--display-mode`/`-m`, ...
//!
//! # Configuration File
//!
//! ```toml
//! server_url = "https://review.example.org/"
//! session_cookie = "session=abc123"
//! display_mode = "diff-only"
//! request_timeout_seconds = 30
//! open_viewer = true
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::{ReviewError, ServerLocator, SessionCookie};
use crate::session::{DEFAULT_VIEWER_BASE_URL, DiffViewer, DisplayMode};

/// Front-end selected by the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Prompt-driven session on stdin/stdout.
    Line,
    /// Full-screen terminal interface.
    Tui,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reviewng::ReviewConfig;
///
/// let config = ReviewConfig::load().expect("failed to load configuration");
/// let locator = config.require_server_locator().expect("server URL required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEWNG",
    discovery(
        dotfile_name = ".reviewng.toml",
        config_file_name = "reviewng.toml",
        app_name = "reviewng"
    )
)]
pub struct ReviewConfig {
    /// Base URL of the review service.
    ///
    /// Can be provided via:
    /// - CLI: `--server-url <URL>` or `-s <URL>`
    /// - Environment: `REVIEWNG_SERVER_URL`
    /// - Config file: `server_url = "..."`
    #[ortho_config(cli_short = 's')]
    pub server_url: Option<String>,

    /// Cookie header value forwarded with every request.
    ///
    /// Can be provided via:
    /// - CLI: `--session-cookie <COOKIE>` or `-c <COOKIE>`
    /// - Environment: `REVIEWNG_SESSION_COOKIE`
    /// - Config file: `session_cookie = "..."`
    #[ortho_config(cli_short = 'c')]
    pub session_cookie: Option<String>,

    /// Initial display mode: `normal`, `diff-only` or `rendered`.
    ///
    /// The single letters `n`, `d` and `r` are accepted too.
    #[ortho_config(cli_short = 'm')]
    pub display_mode: Option<String>,

    /// Base URL of the external diff viewer.
    #[ortho_config()]
    pub viewer_base_url: Option<String>,

    /// HTTP request timeout in seconds. Zero disables the timeout.
    #[ortho_config()]
    pub request_timeout_seconds: u64,

    /// Opens every rendered viewer URL in the system browser.
    ///
    /// Can be provided via:
    /// - CLI: `--open-viewer` / `-o`
    /// - Config file: `open_viewer = true`
    ///
    /// Note: Environment variable `REVIEWNG_OPEN_VIEWER` is not supported
    /// because `ortho_config` does not load boolean values from the environment.
    #[ortho_config(cli_short = 'o')]
    pub open_viewer: bool,

    /// Writes round-trip telemetry to stderr as JSON lines.
    ///
    /// Can be provided via:
    /// - CLI: `--telemetry`
    /// - Config file: `telemetry = true`
    ///
    /// Note: Environment variable `REVIEWNG_TELEMETRY` is not supported
    /// because `ortho_config` does not load boolean values from the environment.
    #[ortho_config()]
    pub telemetry: bool,

    /// Runs the full-screen terminal interface instead of line mode.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    ///
    /// Note: Environment variable `REVIEWNG_TUI` is not supported
    /// because `ortho_config` does not load boolean values from the environment.
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,
}

impl ReviewConfig {
    /// Parses the configured server URL.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when no server URL is
    /// configured, or [`ReviewError::InvalidUrl`] when it does not parse.
    pub fn require_server_locator(&self) -> Result<ServerLocator, ReviewError> {
        let url = self
            .server_url
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ReviewError::Configuration {
                message: "server URL is required (use --server-url or -s)".to_owned(),
            })?;
        ServerLocator::parse(url)
    }

    /// Returns the session cookie, ignoring blank values.
    #[must_use]
    pub fn session_cookie(&self) -> Option<SessionCookie> {
        self.session_cookie
            .as_deref()
            .and_then(|value| SessionCookie::new(value).ok())
    }

    /// Resolves the initial display mode, defaulting to normal.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] for an unknown mode name.
    pub fn display_mode(&self) -> Result<DisplayMode, ReviewError> {
        self.display_mode
            .as_deref()
            .map_or(Ok(DisplayMode::default()), str::parse)
    }

    /// Builds the diff viewer from the configured or default base.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidUrl`] when the base does not parse.
    pub fn diff_viewer(&self) -> Result<DiffViewer, ReviewError> {
        DiffViewer::new(
            self.viewer_base_url
                .as_deref()
                .unwrap_or(DEFAULT_VIEWER_BASE_URL),
        )
    }

    /// Request timeout, or `None` when disabled.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_seconds == 0 {
            None
        } else {
            Some(Duration::from_secs(self.request_timeout_seconds))
        }
    }

    /// Determines the front-end to run.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.tui {
            OperationMode::Tui
        } else {
            OperationMode::Line
        }
    }
}

#[cfg(test)]
mod tests;
