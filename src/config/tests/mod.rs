//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `resolution`: Server URL, cookie, display mode and timeout resolution
//! - `loading`: Environment and CLI loading through `load_from_iter`

mod helpers;
mod resolution;
