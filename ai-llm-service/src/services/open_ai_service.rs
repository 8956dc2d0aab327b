//! OpenAI-compatible chat-completion client.
//!
//! Minimal, non-streaming client around `POST {endpoint}/v1/chat/completions`.
//!
//! Constructor validation:
//! - `cfg.api_key` must be present
//! - `cfg.endpoint` must start with http:// or https://
//!
//! When `cfg.max_retries > 0` the request goes through `reqwest-retry` with
//! exponential backoff; transient failures (connect errors, 5xx, 429) are retried.

use std::time::{Duration, Instant};

use reqwest::header;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use crate::{
    config::{default_config::DEFAULT_TIMEOUT_SECS, llm_model_config::LlmModelConfig},
    error_handler::{AiLlmError, HttpError, ProviderError, ProviderErrorKind, make_snippet},
};

const RETRY_MIN_BACKOFF: Duration = Duration::from_millis(250);
const RETRY_MAX_BACKOFF: Duration = Duration::from_secs(8);

/// Thin client for an OpenAI-compatible chat-completion API.
///
/// Constructed from a complete [`LlmModelConfig`]. Internally keeps a
/// preconfigured HTTP client (timeout, default headers, optional retry policy)
/// so a single instance can be shared across requests.
pub struct OpenAiService {
    client: ClientWithMiddleware,
    cfg: LlmModelConfig,
    url_chat: String,
    timeout: Duration,
}

impl OpenAiService {
    /// Creates a new [`OpenAiService`] from the given config.
    ///
    /// # Errors
    /// - [`ProviderErrorKind::MissingApiKey`] if `cfg.api_key` is `None`
    /// - [`ProviderErrorKind::InvalidEndpoint`] if `cfg.endpoint` is invalid
    /// - [`AiLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        let api_key = cfg
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::MissingApiKey))?;

        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(
                ProviderError::new(ProviderErrorKind::InvalidEndpoint(cfg.endpoint.clone())).into(),
            );
        }

        let timeout = Duration::from_secs(cfg.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        let mut headers = header::HeaderMap::new();
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))
            .map_err(|e| {
                ProviderError::new(ProviderErrorKind::Decode(format!(
                    "invalid API key header: {e}"
                )))
            })?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        let client = if cfg.max_retries > 0 {
            let policy = ExponentialBackoff::builder()
                .retry_bounds(RETRY_MIN_BACKOFF, RETRY_MAX_BACKOFF)
                .build_with_max_retries(cfg.max_retries);
            ClientBuilder::new(inner)
                .with(RetryTransientMiddleware::new_with_policy(policy))
                .build()
        } else {
            ClientBuilder::new(inner).build()
        };

        let url_chat = cfg.chat_url();

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = timeout.as_secs(),
            max_retries = cfg.max_retries,
            "OpenAiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
            timeout,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &LlmModelConfig {
        &self.cfg
    }

    /// Performs a **non-streaming** chat completion request.
    ///
    /// `messages` holds exactly one user message with `prompt`; no system
    /// message is sent. Mapped options from config: `model`,
    /// `temperature`, `top_p`, `max_tokens`.
    ///
    /// Returns the content of the first choice that carries any.
    ///
    /// # Errors
    /// - [`ProviderErrorKind::HttpStatus`] for non-2xx responses
    /// - [`AiLlmError::HttpTransport`] / [`AiLlmError::Timeout`] for network failures
    /// - [`ProviderErrorKind::Decode`] if the JSON cannot be parsed
    /// - [`ProviderErrorKind::EmptyChoices`] if no choice has content
    #[instrument(skip_all, fields(model = %self.cfg.model))]
    pub async fn generate(&self, prompt: &str) -> Result<String, AiLlmError> {
        let started = Instant::now();
        let body = ChatCompletionRequest::from_cfg(&self.cfg, prompt);

        debug!(prompt_len = prompt.len(), "POST {}", self.url_chat);

        let resp = self
            .client
            .post(&self.url_chat)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiLlmError::from_middleware(e, self.timeout))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_chat.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                latency_ms = started.elapsed().as_millis(),
                "/v1/chat/completions returned non-success status"
            );

            return Err(ProviderError::new(ProviderErrorKind::HttpStatus(HttpError {
                status,
                url,
                snippet,
            }))
            .into());
        }

        let raw = resp
            .text()
            .await
            .map_err(|e| AiLlmError::from_transport(e, self.timeout))?;

        let out: ChatCompletionResponse = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    snippet = %make_snippet(&raw),
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode /v1/chat/completions response"
                );
                return Err(ProviderError::new(ProviderErrorKind::Decode(format!(
                    "serde error: {e}; expected `choices[0].message.content`"
                )))
                .into());
            }
        };

        let content = out
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .ok_or_else(|| ProviderError::new(ProviderErrorKind::EmptyChoices))?;

        info!(
            latency_ms = started.elapsed().as_millis(),
            reply_len = content.len(),
            "chat completion completed"
        );

        Ok(content)
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Minimal request body for `/v1/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl<'a> ChatCompletionRequest<'a> {
    fn from_cfg(cfg: &'a LlmModelConfig, prompt: &'a str) -> Self {
        Self {
            model: &cfg.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: cfg.temperature,
            top_p: cfg.top_p,
            max_tokens: cfg.max_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}
