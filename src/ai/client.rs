//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the single chat-completion call used to generate
//! summaries, and classifies remote failures into typed errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::ai::credentials::resolve_api_key;
use crate::ai::prompt_builder::{SYSTEM_PROMPT, build_summary_prompt};
use crate::core::config::AppConfig;

pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const TOKEN_LIMIT_CODE: &str = "context_length_exceeded";

/// Failures from the completion endpoint, classified where the
/// distinguishing information exists.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The model rejected the prompt for exceeding its context window.
    #[error("prompt exceeds the model context window, include fewer messages")]
    TokenLimitExceeded,

    /// Any other structured error reported by the API.
    #[error("OpenAI API error: {0}")]
    Api(String),

    /// A well-formed response that produced no choices.
    #[error("no response from OpenAI")]
    NoChoices,

    /// Connection, request-build, body-read, or decode failure.
    #[error("completion request failed: {0}")]
    Transport(String),

    /// No credential was found at construction time.
    #[error("OPENAI_API_KEY is not set")]
    MissingCredential,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    pub error: Option<ApiError>,
}

/// Seam consumed by the summarization service; lets tests substitute a
/// call-counting double for the real client.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        lines: &[String],
        context_label: &str,
    ) -> Result<String, CompletionError>;
}

/// Stateless chat-completion client. Holds an immutable credential and a
/// reusable HTTP connection pool; safe for concurrent use.
pub struct CompletionClient {
    api_key: String,
    model: String,
    http: Client,
}

impl CompletionClient {
    /// Build a client from an explicit credential.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::MissingCredential`] for an empty key, or
    /// [`CompletionError::Transport`] if the HTTP client cannot be built.
    pub fn new(api_key: String, model: String) -> Result<Self, CompletionError> {
        if api_key.trim().is_empty() {
            return Err(CompletionError::MissingCredential);
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CompletionError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            model,
            http,
        })
    }

    /// Build a client from deployment configuration, falling back to
    /// [`resolve_api_key`] when the config carries no key.
    ///
    /// Construction failure means the feature is unavailable, not a crash;
    /// callers surface it as an upstream failure.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::MissingCredential`] when no source
    /// provides a key.
    pub fn from_env(config: &AppConfig) -> Result<Self, CompletionError> {
        let api_key = match &config.openai_api_key {
            Some(key) if !key.trim().is_empty() => key.clone(),
            _ => resolve_api_key()?,
        };
        let model = config
            .openai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self::new(api_key, model)
    }
}

#[async_trait]
impl Summarizer for CompletionClient {
    /// Issue one blocking chat-completion request. No retries, no
    /// streaming.
    async fn summarize(
        &self,
        lines: &[String],
        context_label: &str,
    ) -> Result<String, CompletionError> {
        let prompt = build_summary_prompt(lines, context_label);

        #[cfg(feature = "debug-logs")]
        info!("Using completion prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting summary of a {} with {} message lines",
            context_label,
            lines.len()
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
        };

        let response = self
            .http
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(format!("request failed: {e}")))?;

        // Classified failures (the token limit included) arrive as a
        // structured error in the body, usually with a non-2xx status.
        // Parse the body regardless of status; only an undecodable body is
        // a transport failure.
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Transport(format!("failed to read response: {e}")))?;

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::Transport(format!("failed to decode response: {e}")))?;

        classify_response(parsed)
    }
}

/// Map a parsed completion response to a summary or a classified error.
fn classify_response(response: ChatResponse) -> Result<String, CompletionError> {
    if let Some(error) = response.error {
        if error.code.as_deref() == Some(TOKEN_LIMIT_CODE) {
            return Err(CompletionError::TokenLimitExceeded);
        }
        return Err(CompletionError::Api(error.message));
    }

    let mut choices = response.choices;
    if choices.is_empty() {
        return Err(CompletionError::NoChoices);
    }

    Ok(choices.remove(0).message.content)
}
