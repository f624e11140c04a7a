//! Diff viewer URL construction.

use url::Url;

use super::display_mode::DisplayMode;
use crate::api::{EditId, ReviewError};

/// Default base of the external diff viewer.
pub const DEFAULT_VIEWER_BASE_URL: &str = "https://en.wikipedia.org/w/index.php";

/// Builds viewer URLs from a fixed base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffViewer {
    base: Url,
}

impl DiffViewer {
    /// Parses the viewer base. Any query or fragment on it is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidUrl`] when the base is not a URL.
    pub fn new(base: &str) -> Result<Self, ReviewError> {
        let mut url =
            Url::parse(base.trim()).map_err(|error| ReviewError::InvalidUrl(error.to_string()))?;
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self { base: url })
    }

    /// Viewer URL for an edit under a display mode.
    #[must_use]
    pub fn url_for(&self, edit_id: EditId, mode: DisplayMode) -> Url {
        let mut url = self.base.clone();
        url.set_query(Some(&mode.query(edit_id)));
        url
    }
}
