//! Reviewng library crate providing a terminal client for edit moderation.
//!
//! The library fetches the next pending edit from a review service, builds
//! the diff viewer URL for it, and submits the reviewer's classification,
//! including the server's optional confirmation round-trip. It is driven by
//! either a line-oriented prompt or a bubbletea-rs terminal interface.

pub mod api;
pub mod browser;
pub mod cli;
pub mod config;
pub mod session;
pub mod telemetry;
pub mod tui;

pub use api::{
    Classification, ClassificationRequest, ClassificationResponse, EditId, HttpReviewGateway,
    ReviewError, ReviewGateway, ReviewOperation, ServerLocator, SessionCookie,
};
pub use config::{OperationMode, ReviewConfig};
pub use session::{ClassifyOutcome, DisplayMode, ReviewController, SessionState};
