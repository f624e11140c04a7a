//! Error mapping helpers for the HTTP review gateway.

use http::StatusCode;

use crate::api::error::{ReviewError, ReviewOperation};

/// Maps a reqwest failure to a review error for the given operation.
pub(super) fn map_reqwest_error(operation: ReviewOperation, error: &reqwest::Error) -> ReviewError {
    if error.is_decode() {
        return ReviewError::Decode {
            operation,
            message: error.to_string(),
        };
    }

    if let Some(status) = error.status() {
        return ReviewError::UnexpectedStatus {
            operation,
            status: status.as_u16(),
        };
    }

    ReviewError::Transport {
        operation,
        message: error.to_string(),
    }
}

/// Maps a non-OK status to a review error.
///
/// `204 No Content` from the next-edit endpoint is the drained queue.
pub(super) fn map_status(operation: ReviewOperation, status: StatusCode) -> ReviewError {
    if operation == ReviewOperation::LoadNext && status == StatusCode::NO_CONTENT {
        return ReviewError::NoPendingEdits;
    }

    ReviewError::UnexpectedStatus {
        operation,
        status: status.as_u16(),
    }
}
