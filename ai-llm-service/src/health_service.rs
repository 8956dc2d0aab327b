//! Health probe for the chat-completion provider.
//!
//! Probe: `GET {endpoint}/v1/models` with Bearer auth, plus a best-effort
//! check that the configured model is listed.
//!
//! The returned [`HealthStatus`] is JSON-serializable and suitable for a `/health` endpoint.
//! [`HealthService::check`] is resilient and never fails (errors mapped to `ok=false`).

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::config::llm_model_config::LlmModelConfig;
use crate::error_handler::{AiLlmError, HealthError, HttpError, make_snippet};

const PROVIDER: &str = "OpenAI";

/// A serializable health snapshot for a single provider/config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Backend/provider label.
    pub provider: String,
    /// Target endpoint base URL.
    pub endpoint: String,
    /// Model identifier relevant to the probe.
    pub model: Option<String>,
    /// Overall health flag.
    pub ok: bool,
    /// Measured HTTP latency in milliseconds for the probe.
    pub latency_ms: u128,
    /// Short human-readable message with details.
    pub message: String,
}

impl HealthStatus {
    #[inline]
    fn new(cfg: &LlmModelConfig, ok: bool, latency_ms: u128, message: impl Into<String>) -> Self {
        Self {
            provider: PROVIDER.to_string(),
            endpoint: cfg.endpoint.clone(),
            model: Some(cfg.model.clone()),
            ok,
            latency_ms,
            message: message.into(),
        }
    }
}

/// A health checker that reuses a single HTTP client.
///
/// Every probe uses the client's timeout.
pub struct HealthService {
    client: reqwest::Client,
    timeout: Duration,
}

impl HealthService {
    /// Creates a new health service with an optional client timeout (seconds).
    ///
    /// # Errors
    /// Returns [`AiLlmError::HttpTransport`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, AiLlmError> {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(10));
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        info!(
            default_timeout_secs = timeout.as_secs(),
            "HealthService initialized"
        );

        Ok(Self {
            client,
            timeout,
        })
    }

    /// Checks provider health for a config.
    ///
    /// Never returns an error: any failure is converted to
    /// `HealthStatus { ok: false, message: ... }`.
    pub async fn check(&self, cfg: &LlmModelConfig) -> HealthStatus {
        let start = Instant::now();

        match self.try_probe(cfg).await {
            Ok(status) => {
                info!(
                    endpoint = %status.endpoint,
                    model = %status.model.as_deref().unwrap_or("n/a"),
                    ok = status.ok,
                    latency_ms = status.latency_ms,
                    "health probe completed"
                );
                status
            }
            Err(err) => {
                let status =
                    HealthStatus::new(cfg, false, start.elapsed().as_millis(), err.to_string());
                warn!(
                    endpoint = %status.endpoint,
                    latency_ms = status.latency_ms,
                    message = %status.message,
                    "health probe failed"
                );
                status
            }
        }
    }

    /// Strict probe. Returns an error on hard failures.
    async fn try_probe(&self, cfg: &LlmModelConfig) -> Result<HealthStatus, AiLlmError> {
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(HealthError::InvalidEndpoint(cfg.endpoint.clone()).into());
        }

        let url = cfg.models_url();

        let api_key = cfg
            .api_key
            .as_ref()
            .ok_or_else(|| HealthError::Decode("missing API key".into()))?;

        let mut auth_header = header::HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))
            .map_err(|e| HealthError::Decode(format!("invalid API key header: {e}")))?;
        auth_header.set_sensitive(true);

        let start = Instant::now();
        debug!(model = %cfg.model, "GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, auth_header)
            .send()
            .await
            .map_err(|e| AiLlmError::from_transport(e, self.timeout))?;

        let latency = start.elapsed().as_millis();

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %url,
                %status,
                %snippet,
                latency_ms = latency,
                "health GET /v1/models returned non-success status"
            );

            return Err(HealthError::HttpStatus(HttpError {
                status,
                url,
                snippet,
            })
            .into());
        }

        // Expected minimal JSON: { "data": [ { "id": "<model>" }, ... ] }
        #[derive(Deserialize)]
        struct ModelItem {
            id: String,
        }
        #[derive(Deserialize)]
        struct Models {
            data: Vec<ModelItem>,
        }

        match resp.json::<Models>().await {
            Ok(models) => {
                if models.data.iter().any(|m| m.id == cfg.model) {
                    Ok(HealthStatus::new(
                        cfg,
                        true,
                        latency,
                        "provider is healthy; model is available",
                    ))
                } else {
                    Ok(HealthStatus::new(
                        cfg,
                        false,
                        latency,
                        "provider is up, but model not found in /v1/models",
                    ))
                }
            }
            Err(e) => {
                warn!(
                    error = %e,
                    latency_ms = latency,
                    "failed to decode /v1/models; model availability unknown"
                );
                Err(HealthError::Decode(format!("failed to decode /v1/models: {e}")).into())
            }
        }
    }
}
