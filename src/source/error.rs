//! Error taxonomy for stats fetching.

use thiserror::Error;

/// Errors that can occur while fetching a stats snapshot.
///
/// All variants are handled the same way by the poll loop: record the
/// message, log it, and wait for the next tick. No variant is retried
/// and none reaches the draw loop.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request was rejected or the endpoint was unreachable.
    #[error("request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("endpoint returned status {0}")]
    Status(u16),

    /// The response body was not a valid stats payload.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
