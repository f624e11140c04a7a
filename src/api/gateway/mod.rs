//! Gateway for talking to the review service over HTTP.
//!
//! The trait-based design enables mocking in tests while
//! [`HttpReviewGateway`] performs real requests with reqwest.

use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;
use http::header::{ACCEPT, COOKIE, HeaderMap, HeaderValue};
use reqwest::Client;

use super::error::{ReviewError, ReviewOperation};
use super::locator::{ServerLocator, SessionCookie};
use super::models::{ClassificationRequest, ClassificationResponse, EditId, NextEditResponse};

mod error_mapping;

use error_mapping::{map_reqwest_error, map_status};

/// Gateway that can fetch pending edits and record classifications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetch the identifier of the next edit awaiting review.
    async fn next_edit(&self) -> Result<EditId, ReviewError>;

    /// Submit a classification for an edit.
    async fn submit_classification(
        &self,
        request: &ClassificationRequest,
    ) -> Result<ClassificationResponse, ReviewError>;
}

/// reqwest-backed gateway.
#[derive(Debug, Clone)]
pub struct HttpReviewGateway {
    client: Client,
    locator: ServerLocator,
}

impl HttpReviewGateway {
    /// Builds a gateway for the given server.
    ///
    /// The session cookie, when present, is sent with every request. A
    /// `None` timeout leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the cookie is not a valid
    /// header value or the HTTP client cannot be constructed.
    pub fn new(
        locator: ServerLocator,
        cookie: Option<&SessionCookie>,
        timeout: Option<Duration>,
    ) -> Result<Self, ReviewError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(session) = cookie {
            let mut value =
                HeaderValue::from_str(session.value()).map_err(|error| {
                    ReviewError::Configuration {
                        message: format!("session cookie is not a valid header value: {error}"),
                    }
                })?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(limit) = timeout {
            builder = builder.timeout(limit);
        }

        let client = builder
            .build()
            .map_err(|error| ReviewError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self { client, locator })
    }

    /// Returns the server this gateway talks to.
    #[must_use]
    pub const fn locator(&self) -> &ServerLocator {
        &self.locator
    }
}

#[async_trait]
impl ReviewGateway for HttpReviewGateway {
    async fn next_edit(&self) -> Result<EditId, ReviewError> {
        let operation = ReviewOperation::LoadNext;
        let url = self.locator.next_edit_url()?;
        tracing::debug!(%url, "requesting next pending edit");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| map_reqwest_error(operation, &error))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(map_status(operation, status));
        }

        let body: NextEditResponse = response
            .json()
            .await
            .map_err(|error| map_reqwest_error(operation, &error))?;
        Ok(body.edit_id)
    }

    async fn submit_classification(
        &self,
        request: &ClassificationRequest,
    ) -> Result<ClassificationResponse, ReviewError> {
        let operation = ReviewOperation::Classify;
        let url = self.locator.classification_url()?;
        tracing::debug!(
            %url,
            edit_id = %request.edit_id,
            classification = %request.classification,
            confirmation = request.confirmation,
            "submitting classification"
        );

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|error| map_reqwest_error(operation, &error))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(map_status(operation, status));
        }

        let body = response
            .text()
            .await
            .map_err(|error| map_reqwest_error(operation, &error))?;
        parse_classification_body(&body)
    }
}

/// Decodes the classification response.
///
/// The server may answer an accepted submission with an empty body, which
/// means no confirmation is needed.
fn parse_classification_body(body: &str) -> Result<ClassificationResponse, ReviewError> {
    if body.trim().is_empty() {
        return Ok(ClassificationResponse::default());
    }

    serde_json::from_str(body).map_err(|error| ReviewError::Decode {
        operation: ReviewOperation::Classify,
        message: error.to_string(),
    })
}
