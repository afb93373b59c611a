use thiserror::Error;

use crate::ai::client::CompletionError;
use crate::core::history::HistoryError;

/// Caller-facing failure taxonomy for summarization requests.
///
/// Every variant carries a stable kind plus a human-readable detail; the
/// routing layer turns the kind into an HTTP status via [`status_code`].
///
/// [`status_code`]: SummarizeError::status_code
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("summarization is disabled on this server")]
    Disabled,

    #[error("invalid time range: {0}")]
    InvalidTimeRange(String),

    #[error("thread not found")]
    ThreadNotFound,

    #[error("the selected time range contains too many messages, please narrow the range")]
    RangeTooLarge,

    #[error("failed to generate summary: {0}")]
    Upstream(#[source] CompletionError),

    #[error("failed to load message history: {0}")]
    Storage(#[from] HistoryError),
}

impl SummarizeError {
    /// HTTP-equivalent status for the routing layer.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Disabled => 403,
            Self::InvalidTimeRange(_) | Self::RangeTooLarge => 400,
            Self::ThreadNotFound => 404,
            Self::Upstream(_) | Self::Storage(_) => 500,
        }
    }
}

impl From<CompletionError> for SummarizeError {
    fn from(error: CompletionError) -> Self {
        match error {
            // Recoverable by the caller narrowing the range: a bad request,
            // not an upstream failure.
            CompletionError::TokenLimitExceeded => Self::RangeTooLarge,
            other => Self::Upstream(other),
        }
    }
}
