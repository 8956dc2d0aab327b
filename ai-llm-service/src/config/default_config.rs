//! Chat-completion config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`   = bearer token (mandatory)
//! - `OPENAI_URL`       = provider base URL (default `https://api.openai.com`)
//! - `OPENAI_MODEL`     = model identifier (default `gpt-4o-mini`)
//! - `LLM_MAX_TOKENS`   = optional max tokens (u32)
//! - `LLM_TEMPERATURE`  = optional sampling temperature (0.0..=2.0)
//! - `LLM_TIMEOUT_SECS` = request timeout (default 120)
//! - `LLM_MAX_RETRIES`  = retries on transient failures (default 0)

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{
        AiLlmError, ConfigError, env_opt_f32, env_opt_u32, env_opt_u64, env_or, must_env,
        validate_http_endpoint, validate_range_f32,
    },
};

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Constructs the chat-completion config from the environment.
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if `OPENAI_API_KEY` is unset
/// - [`ConfigError::InvalidFormat`] if `OPENAI_URL` is not http(s)
/// - [`ConfigError::InvalidNumber`] / [`ConfigError::OutOfRange`] for bad numeric values
pub fn config_openai_from_env() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("OPENAI_API_KEY")?;

    let endpoint = env_or("OPENAI_URL", DEFAULT_OPENAI_URL);
    validate_http_endpoint("OPENAI_URL", &endpoint)?;

    let model = env_or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL);
    if model.is_empty() {
        return Err(ConfigError::EmptyModel.into());
    }

    let temperature = env_opt_f32("LLM_TEMPERATURE")?;
    if let Some(t) = temperature {
        validate_range_f32("LLM_TEMPERATURE", "expected 0.0..=2.0", t, 0.0, 2.0)?;
    }

    Ok(LlmModelConfig {
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens: env_opt_u32("LLM_MAX_TOKENS")?,
        temperature,
        top_p: None,
        timeout_secs: Some(env_opt_u64("LLM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        max_retries: env_opt_u32("LLM_MAX_RETRIES")?.unwrap_or(0),
    })
}
