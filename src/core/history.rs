use async_trait::async_trait;
use thiserror::Error;

use crate::core::models::Post;

/// Failure in the message-history storage backend.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HistoryError(pub String);

/// Storage collaborator boundary for message history.
///
/// Implementations must return posts in chronological order, already
/// sanitized for the requesting caller's visibility. The summarization
/// prompt is order-sensitive, so the order is preserved downstream.
#[async_trait]
pub trait MessageHistory: Send + Sync {
    /// Channel messages created at or after `since_millis` (epoch ms).
    async fn fetch_since(
        &self,
        channel_id: &str,
        since_millis: i64,
    ) -> Result<Vec<Post>, HistoryError>;

    /// The full thread rooted at `root_post_id`. An unresolvable root
    /// yields an empty vector; the service classifies that as not-found.
    async fn fetch_thread(&self, root_post_id: &str) -> Result<Vec<Post>, HistoryError>;
}
