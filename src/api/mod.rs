//! Client for the edit-review service API.
//!
//! This module groups the wire models, the server locator, the error type
//! shared with the session controller, and the HTTP gateway.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::{ReviewError, ReviewOperation};
pub use gateway::{HttpReviewGateway, ReviewGateway};
pub use locator::{ServerLocator, SessionCookie};
pub use models::{
    Classification, ClassificationRequest, ClassificationResponse, EditId, NextEditResponse,
};
