/// Configuration for a chat-completion model invocation.
///
/// The endpoint is the provider base URL (without `/v1/...`); any server that
/// speaks the OpenAI chat-completion protocol works, including local runtimes.
///
/// # Examples
///
/// ```
/// use ai_llm_service::LlmModelConfig;
///
/// let cfg = LlmModelConfig {
///     model: "gpt-4o-mini".to_string(),
///     endpoint: "https://api.openai.com".to_string(),
///     api_key: Some("sk-...".to_string()),
///     max_tokens: Some(2048),
///     temperature: None,
///     top_p: None,
///     timeout_secs: Some(120),
///     max_retries: 0,
/// };
/// assert_eq!(cfg.chat_url(), "https://api.openai.com/v1/chat/completions");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// Model identifier string (e.g., `"gpt-4o-mini"`).
    pub model: String,

    /// Provider base URL.
    pub endpoint: String,

    /// Bearer token sent as `Authorization`.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Request timeout (in seconds).
    pub timeout_secs: Option<u64>,

    /// Retries on transient failures (connect errors, 5xx, 429). `0` disables.
    pub max_retries: u32,
}

impl LlmModelConfig {
    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.endpoint.trim().trim_end_matches('/')
    }

    pub fn chat_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url())
    }

    pub fn models_url(&self) -> String {
        format!("{}/v1/models", self.base_url())
    }
}
