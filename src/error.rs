//! API Error Types

use thiserror::Error;

use crate::models::Problem;

/// Errors surfaced by the HTTP API boundary.
///
/// Nothing is recovered here: the controller logs and re-raises, and the
/// view decides between a toast and an inline form message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with an RFC 7807 problem body.
    #[error("server problem: {}", .0.message())]
    Problem(Problem),
}

impl ApiError {
    /// Structured problem details, when the server sent any.
    pub fn problem(&self) -> Option<&Problem> {
        match self {
            ApiError::Problem(problem) => Some(problem),
            ApiError::Transport(_) => None,
        }
    }
}
