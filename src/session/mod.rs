//! The review session: display modes, viewer URLs, state, and the
//! controller that ties them to the gateway.

pub mod controller;
pub mod display_mode;
pub mod state;
pub mod viewer;

pub use controller::{CONFIRMATION_QUESTION, ClassifyOutcome, ConfirmationPrompt, ReviewController};
pub use display_mode::DisplayMode;
pub use state::{RenderedEdit, SessionPhase, SessionState};
pub use viewer::{DEFAULT_VIEWER_BASE_URL, DiffViewer};
