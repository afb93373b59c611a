//! Channel and thread summarization orchestration.

use chrono::Utc;
use tracing::{info, warn};

use crate::ai::client::Summarizer;
use crate::core::history::MessageHistory;
use crate::core::models::{Post, SummaryResponse, TimeRange};
use crate::errors::SummarizeError;

/// Summary text returned when a channel window contains no messages.
pub const NO_MESSAGES_SUMMARY: &str = "No messages found in the selected time range.";

const CHANNEL_CONTEXT: &str = "channel conversation";
const THREAD_CONTEXT: &str = "thread conversation";

/// Orchestrates the summarization pipeline for both entry points.
///
/// Holds only immutable state; concurrent requests share one instance
/// with no coordination. Each invocation performs at most one history
/// fetch and one completion call, and writes nothing.
pub struct SummarizeService<H, C> {
    enabled: bool,
    history: H,
    completion: C,
}

impl<H: MessageHistory, C: Summarizer> SummarizeService<H, C> {
    pub fn new(enabled: bool, history: H, completion: C) -> Self {
        Self {
            enabled,
            history,
            completion,
        }
    }

    /// Summarize channel activity over the requested lookback window.
    ///
    /// # Errors
    ///
    /// [`SummarizeError::Disabled`] when the feature gate is off,
    /// [`SummarizeError::InvalidTimeRange`] for an unknown token,
    /// [`SummarizeError::RangeTooLarge`] when the model rejects the prompt
    /// for size, [`SummarizeError::Storage`] / [`SummarizeError::Upstream`]
    /// for collaborator failures.
    pub async fn channel_summary(
        &self,
        channel_id: &str,
        time_range: &str,
    ) -> Result<SummaryResponse, SummarizeError> {
        if !self.enabled {
            return Err(SummarizeError::Disabled);
        }

        let range: TimeRange = time_range.parse()?;
        let since = Utc::now().timestamp_millis() - range.duration().as_millis() as i64;

        let posts = self.history.fetch_since(channel_id, since).await?;
        info!(
            "Fetched {} posts from channel {} over the last {}",
            posts.len(),
            channel_id,
            range.as_str()
        );

        if posts.is_empty() {
            return Ok(SummaryResponse {
                summary: NO_MESSAGES_SUMMARY.to_string(),
                post_count: 0,
                time_range: Some(range),
            });
        }

        let lines = format_posts_for_summary(&posts);
        let summary = self.summarize_lines(&lines, CHANNEL_CONTEXT).await?;

        Ok(SummaryResponse {
            summary,
            post_count: posts.len(),
            time_range: Some(range),
        })
    }

    /// Summarize the full thread rooted at `root_post_id`.
    ///
    /// An empty thread is a lookup failure, unlike a quiet channel window:
    /// it means the root does not resolve, so this returns
    /// [`SummarizeError::ThreadNotFound`] rather than an empty-summary
    /// result.
    pub async fn thread_summary(
        &self,
        root_post_id: &str,
    ) -> Result<SummaryResponse, SummarizeError> {
        if !self.enabled {
            return Err(SummarizeError::Disabled);
        }

        let posts = self.history.fetch_thread(root_post_id).await?;
        if posts.is_empty() {
            return Err(SummarizeError::ThreadNotFound);
        }
        info!("Fetched {} posts from thread {}", posts.len(), root_post_id);

        let lines = format_posts_for_summary(&posts);
        let summary = self.summarize_lines(&lines, THREAD_CONTEXT).await?;

        Ok(SummaryResponse {
            summary,
            post_count: posts.len(),
            time_range: None,
        })
    }

    async fn summarize_lines(
        &self,
        lines: &[String],
        context_label: &str,
    ) -> Result<String, SummarizeError> {
        match self.completion.summarize(lines, context_label).await {
            Ok(summary) => Ok(summary),
            Err(error) => {
                warn!("Completion request for {} failed: {}", context_label, error);
                Err(error.into())
            }
        }
    }
}

/// Project posts into `"user_id: message"` lines, dropping empty bodies
/// and preserving order.
#[must_use]
pub fn format_posts_for_summary(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .filter(|post| !post.message.is_empty())
        .map(|post| format!("{}: {}", post.user_id, post.message))
        .collect()
}
