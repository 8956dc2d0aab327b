//! OpenAI-compatible chat-completion client.
//!
//! - [`config`]: model/endpoint configuration, loaded from environment
//! - [`services::open_ai_service`]: non-streaming `/v1/chat/completions` client
//! - [`health_service`]: `/v1/models` probe suitable for a `/health` route
//! - [`telemetry`]: library-scoped `tracing` layer for the binary to compose

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod services;
pub mod telemetry;

pub use config::default_config::config_openai_from_env;
pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::{AiLlmError, ConfigError, HealthError, ProviderError, ProviderErrorKind};
pub use health_service::{HealthService, HealthStatus};
pub use services::open_ai_service::OpenAiService;
