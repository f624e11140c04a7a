//! Shared test utilities.

pub mod runtime;
pub mod review_server;
