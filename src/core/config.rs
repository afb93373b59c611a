use std::env;

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub enable_summarization: bool,
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
}

impl AppConfig {
    /// Read deployment configuration from the environment.
    ///
    /// Summarization is off unless `RECAP_ENABLE_SUMMARIZATION` is `1` or
    /// `true`. The API key may be absent here; the completion client falls
    /// back to its own credential resolution in that case.
    #[must_use]
    pub fn from_env() -> Self {
        let enable_summarization = env::var("RECAP_ENABLE_SUMMARIZATION")
            .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "True"))
            .unwrap_or(false);

        Self {
            enable_summarization,
            openai_api_key: env::var("OPENAI_API_KEY").ok().filter(|v| !v.trim().is_empty()),
            openai_model: env::var("OPENAI_MODEL").ok().filter(|v| !v.trim().is_empty()),
        }
    }
}
