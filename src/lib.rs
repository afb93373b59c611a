//! Recap - summarizes a chat channel's recent activity or a single
//! discussion thread with an LLM completion endpoint.
//!
//! The pipeline is: resolve the requested time range, fetch message
//! history through the [`core::history::MessageHistory`] collaborator,
//! format the posts into speaker-prefixed lines, and hand them to the
//! [`ai::client::CompletionClient`] for condensation. The
//! [`summarize::SummarizeService`] orchestrates the two entry points
//! (channel summary, thread summary) and maps low-level failures into the
//! caller-facing [`errors::SummarizeError`] taxonomy.
//!
//! The HTTP routing layer, authorization, and the storage backend live
//! outside this crate; routing consumes [`errors::SummarizeError::status_code`]
//! and the serde wire types in [`core::models`].
//!
//! # Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use recap::ai::client::CompletionClient;
//! use recap::core::config::AppConfig;
//! use recap::core::history::{HistoryError, MessageHistory};
//! use recap::core::models::Post;
//! use recap::summarize::SummarizeService;
//!
//! struct InMemoryHistory(Vec<Post>);
//!
//! #[async_trait]
//! impl MessageHistory for InMemoryHistory {
//!     async fn fetch_since(
//!         &self,
//!         _channel_id: &str,
//!         since: i64,
//!     ) -> Result<Vec<Post>, HistoryError> {
//!         Ok(self.0.iter().filter(|p| p.create_at >= since).cloned().collect())
//!     }
//!
//!     async fn fetch_thread(&self, _root_post_id: &str) -> Result<Vec<Post>, HistoryError> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     recap::setup_logging();
//!
//!     let config = AppConfig::from_env();
//!     let client = CompletionClient::from_env(&config)?;
//!     let history = InMemoryHistory(Vec::new());
//!
//!     let service = SummarizeService::new(config.enable_summarization, history, client);
//!     let result = service.channel_summary("town-square", "24h").await?;
//!     println!("{} ({} posts)", result.summary, result.post_count);
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod core;
pub mod errors;
pub mod summarize;

/// Configure structured logging with JSON format.
///
/// Sets up tracing-subscriber with a JSON formatter so log lines can be
/// ingested by whatever aggregation the host platform uses. Call once at
/// process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
