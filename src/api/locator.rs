//! URL parsing and identity wrappers for the review service.

use url::Url;

use super::error::ReviewError;
use super::models::EditId;

const NEXT_EDIT_PATH: &str = "api/edit/next";
const CLASSIFICATION_PATH: &str = "api/user-classification";
const DETAILS_PATH_PREFIX: &str = "admin/details";

/// Base URL of the review service.
///
/// The path always ends with `/` so endpoint paths join beneath it instead
/// of replacing its last segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLocator(Url);

impl ServerLocator {
    /// Parses and normalises the server base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidUrl`] when the value is not an absolute
    /// `http` or `https` URL.
    pub fn parse(value: &str) -> Result<Self, ReviewError> {
        let mut url =
            Url::parse(value.trim()).map_err(|error| ReviewError::InvalidUrl(error.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ReviewError::InvalidUrl(format!(
                "unsupported scheme '{}' in {value}",
                url.scheme()
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self(url))
    }

    /// Borrow the base URL.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.0
    }

    /// Endpoint returning the next pending edit.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidUrl`] when the endpoint cannot be joined.
    pub fn next_edit_url(&self) -> Result<Url, ReviewError> {
        self.join(NEXT_EDIT_PATH)
    }

    /// Endpoint accepting classifications.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidUrl`] when the endpoint cannot be joined.
    pub fn classification_url(&self) -> Result<Url, ReviewError> {
        self.join(CLASSIFICATION_PATH)
    }

    /// Server-rendered details page for an edit.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::InvalidUrl`] when the path cannot be joined.
    pub fn details_url(&self, edit_id: EditId) -> Result<Url, ReviewError> {
        self.join(&format!("{DETAILS_PATH_PREFIX}/{edit_id}"))
    }

    fn join(&self, path: &str) -> Result<Url, ReviewError> {
        self.0
            .join(path)
            .map_err(|error| ReviewError::InvalidUrl(format!("{path}: {error}")))
    }
}

/// Opaque session cookie forwarded to the review service.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCookie(String);

impl SessionCookie {
    /// Wraps a cookie header value, rejecting blank input.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the value is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ReviewError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ReviewError::Configuration {
                message: "session cookie must not be blank".to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the cookie value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for SessionCookie {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("SessionCookie(..)")
    }
}
