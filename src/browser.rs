//! Launching URLs in a new browsing context.
//!
//! The review session never embeds the diff viewer or the details page; it
//! hands their URLs to a [`BrowserLauncher`]. [`SystemBrowser`] delegates to
//! the platform opener, and [`NoopBrowser`] only records the request in the
//! log.

use std::io;

use url::Url;

use crate::api::ReviewError;

/// Opens URLs outside the terminal.
pub trait BrowserLauncher: Send + Sync {
    /// Opens the URL in a new browsing context.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::BrowserLaunch`] when the opener cannot be
    /// started.
    fn open(&self, url: &Url) -> Result<(), ReviewError>;
}

/// Launcher that hands URLs to the platform opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &Url) -> Result<(), ReviewError> {
        tracing::debug!(%url, "opening URL in system browser");
        launch_with(url, |target| open::that_detached(target))
    }
}

/// Passes the whole URL to `opener` and maps its failure.
fn launch_with(
    url: &Url,
    opener: impl FnOnce(&str) -> io::Result<()>,
) -> Result<(), ReviewError> {
    opener(url.as_str()).map_err(|error| ReviewError::BrowserLaunch {
        url: url.to_string(),
        message: error.to_string(),
    })
}

/// Launcher that never leaves the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBrowser;

impl BrowserLauncher for NoopBrowser {
    fn open(&self, url: &Url) -> Result<(), ReviewError> {
        tracing::debug!(%url, "browser launch skipped");
        Ok(())
    }
}

/// Test doubles for code that launches browsers.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::{Mutex, PoisonError};

    use url::Url;

    use super::BrowserLauncher;
    use crate::api::ReviewError;

    /// Launcher that remembers every URL it was asked to open.
    #[derive(Debug, Default)]
    pub struct RecordingBrowser {
        opened: Mutex<Vec<Url>>,
    }

    impl RecordingBrowser {
        /// Returns the URLs opened so far, oldest first.
        #[must_use]
        pub fn opened(&self) -> Vec<Url> {
            self.opened
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    impl BrowserLauncher for RecordingBrowser {
        fn open(&self, url: &Url) -> Result<(), ReviewError> {
            self.opened
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(url.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use url::Url;

    use super::launch_with;
    use crate::api::ReviewError;

    #[test]
    fn opener_receives_the_full_query_string() {
        let url = Url::parse("https://en.wikipedia.org/w/index.php?action=view&diffonly=1&diff=42")
            .expect("URL should parse");
        let mut received = None;

        launch_with(&url, |target| {
            received = Some(target.to_owned());
            Ok(())
        })
        .expect("launch should succeed");

        assert_eq!(
            received.as_deref(),
            Some("https://en.wikipedia.org/w/index.php?action=view&diffonly=1&diff=42")
        );
    }

    #[test]
    fn opener_failure_maps_to_browser_launch() {
        let url = Url::parse("http://review.test/admin/details/7").expect("URL should parse");

        let error = launch_with(&url, |_| Err(io::Error::other("no opener")))
            .expect_err("launch should fail");

        assert_eq!(
            error,
            ReviewError::BrowserLaunch {
                url: "http://review.test/admin/details/7".to_owned(),
                message: "no opener".to_owned(),
            }
        );
    }
}
