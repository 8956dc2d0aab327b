use ai_llm_service::{
    HealthService, LlmModelConfig, OpenAiService, config_openai_from_env, error_handler::env_or,
};
use tracing::info;

use crate::error_handler::AppResult;

/// Listen address used when `API_ADDRESS` is unset.
pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:5000";

/// Process-level settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Socket address to bind, e.g. "127.0.0.1:5000".
    pub address: String,
    /// Origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,
    /// Chat-completion provider settings.
    pub llm: LlmModelConfig,
}

impl ApiConfig {
    /// Load server settings from environment variables.
    ///
    /// # Errors
    /// Returns [`crate::AppError::Llm`] when the provider settings are missing
    /// or invalid (e.g. no `OPENAI_API_KEY`).
    pub fn from_env() -> AppResult<Self> {
        let address = env_or("API_ADDRESS", DEFAULT_API_ADDRESS);
        let allowed_origins = parse_origins(&env_or("CORS_ALLOWED_ORIGINS", ""));
        let llm = config_openai_from_env()?;

        Ok(Self {
            address,
            allowed_origins,
            llm,
        })
    }
}

/// Splits a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// Chat-completion client used by the estimate route.
    pub llm: OpenAiService,
    /// Provider probe used by `/health`.
    pub health: HealthService,
}

impl AppState {
    /// Builds the HTTP clients once for the lifetime of the server.
    pub fn new(llm_config: LlmModelConfig) -> AppResult<Self> {
        let health = HealthService::new(llm_config.timeout_secs)?;
        let llm = OpenAiService::new(llm_config)?;

        info!(
            model = %llm.config().model,
            endpoint = %llm.config().endpoint,
            "application state ready"
        );

        Ok(Self { llm, health })
    }
}
