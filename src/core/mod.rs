//! Configuration, data model, and collaborator contracts

pub mod config;
pub mod history;
pub mod models;

// Re-export main types for convenience
pub use config::AppConfig;
pub use history::{HistoryError, MessageHistory};
pub use models::{ChannelSummaryRequest, Post, SummaryResponse, TimeRange};
