//! Unified error handling for `ai-llm-service`.
//!
//! This module exposes a single top-level error type [`AiLlmError`] for the whole
//! library, and groups domain-specific errors in nested types ([`ConfigError`],
//! [`ProviderError`], [`HealthError`]). Small helpers for reading/validating
//! environment variables are provided and return the unified [`Result<T>`] alias.
//!
//! All messages include the prefix `[AI LLM Service]` to simplify attribution in logs.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, AiLlmError>;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `ai-llm-service` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AiLlmError {
    /// Configuration/validation errors (startup/readiness).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Upstream provider returned something we cannot use.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Health-check/connectivity/decoding errors.
    #[error(transparent)]
    Health(#[from] HealthError),

    /// Underlying HTTP transport error (DNS, connect, reset, TLS).
    #[error("[AI LLM Service] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// Failure raised inside the retry middleware itself.
    #[error("[AI LLM Service] middleware error: {0}")]
    Middleware(String),

    /// Operation exceeded the configured timeout.
    #[error("[AI LLM Service] operation timed out after {0:?}")]
    Timeout(Duration),
}

impl AiLlmError {
    /// Maps a transport failure, promoting timeouts to [`AiLlmError::Timeout`].
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            AiLlmError::Timeout(timeout)
        } else {
            AiLlmError::HttpTransport(err)
        }
    }

    /// Same as [`AiLlmError::from_transport`] for errors coming out of the middleware stack.
    ///
    /// The retry middleware wraps the last attempt's error, so the cause chain
    /// is searched for a timed-out request before falling back to
    /// [`AiLlmError::Middleware`].
    pub fn from_middleware(err: reqwest_middleware::Error, timeout: Duration) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => Self::from_transport(e, timeout),
            reqwest_middleware::Error::Middleware(e) => {
                let timed_out = e.chain().any(|cause| {
                    if let Some(inner) = cause.downcast_ref::<reqwest::Error>() {
                        return inner.is_timeout();
                    }
                    matches!(
                        cause.downcast_ref::<reqwest_middleware::Error>(),
                        Some(reqwest_middleware::Error::Reqwest(inner)) if inner.is_timeout()
                    )
                });
                if timed_out {
                    AiLlmError::Timeout(timeout)
                } else {
                    AiLlmError::Middleware(format!("{e:#}"))
                }
            }
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, AiLlmError::Timeout(_))
    }
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[AI LLM Service] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (like limits, timeouts).
    #[error("[AI LLM Service] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `LLM_MAX_TOKENS`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u32`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[AI LLM Service] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `OPENAI_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },

    /// A numeric field was outside of the allowed range.
    #[error("[AI LLM Service] {field} is out of range: {detail}")]
    OutOfRange {
        field: &'static str,
        detail: &'static str,
    },

    /// Model name was empty.
    #[error("[AI LLM Service] model name must not be empty")]
    EmptyModel,
}

/* ------------------------------------------------------------------------- */
/* Provider errors                                                           */
/* ------------------------------------------------------------------------- */

/// Non-success HTTP response details, shared by provider and health errors.
#[derive(Debug, Clone)]
pub struct HttpError {
    pub status: StatusCode,
    pub url: String,
    /// Short snippet of the response body (see [`make_snippet`]).
    pub snippet: String,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} from {}: {}", self.status, self.url, self.snippet)
    }
}

/// What went wrong while talking to the chat-completion provider.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProviderErrorKind {
    #[error("API key is missing")]
    MissingApiKey,

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("unexpected status: {0}")]
    HttpStatus(HttpError),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("response contained no choices with message content")]
    EmptyChoices,
}

/// Provider-level failure.
#[derive(Debug, Error)]
#[error("[AI LLM Service] provider error: {kind}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind) -> Self {
        Self { kind }
    }

    /// HTTP status returned by the provider, if the failure carried one.
    pub fn status(&self) -> Option<StatusCode> {
        match &self.kind {
            ProviderErrorKind::HttpStatus(http) => Some(http.status),
            _ => None,
        }
    }
}

impl From<ProviderErrorKind> for ProviderError {
    fn from(kind: ProviderErrorKind) -> Self {
        Self::new(kind)
    }
}

/* ------------------------------------------------------------------------- */
/* Health errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for provider health checks.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum HealthError {
    /// The endpoint is empty or does not start with http/https.
    #[error("[AI LLM Service] invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Upstream returned a non-successful HTTP status.
    #[error("[AI LLM Service] {0}")]
    HttpStatus(HttpError),

    /// Response payload could not be decoded as expected.
    #[error("[AI LLM Service] decode error: {0}")]
    Decode(String),
}

/* ------------------------------------------------------------------------- */
/* Helpers                                                                   */
/* ------------------------------------------------------------------------- */

const SNIPPET_CHARS: usize = 240;

/// Trims a response body down to a log-friendly snippet.
pub fn make_snippet(text: &str) -> String {
    let trimmed = text.trim();
    let mut snippet: String = trimmed.chars().take(SNIPPET_CHARS).collect();
    if trimmed.chars().count() > SNIPPET_CHARS {
        snippet.push('…');
    }
    snippet
}

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`AiLlmError::Config`] with [`ConfigError::MissingVar`] if the
/// variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Reads an optional environment variable, falling back to `default` when unset/empty.
pub fn env_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

/// Parses an optional `u32` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`ConfigError::InvalidNumber`] if the variable is set but not a valid `u32`.
pub fn env_opt_u32(name: &'static str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().parse::<u32>().map(Some).map_err(|_| {
            AiLlmError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u32",
            })
        }),
        _ => Ok(None),
    }
}

/// Parses an optional `u64` from env (`Ok(None)` if unset/empty).
pub fn env_opt_u64(name: &'static str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().parse::<u64>().map(Some).map_err(|_| {
            AiLlmError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            })
        }),
        _ => Ok(None),
    }
}

/// Parses an optional `f32` from env (`Ok(None)` if unset/empty).
pub fn env_opt_f32(name: &'static str) -> Result<Option<f32>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().parse::<f32>().map(Some).map_err(|_| {
            AiLlmError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected floating-point number",
            })
        }),
        _ => Ok(None),
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`ConfigError::InvalidFormat`] when the string does not start with
/// a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Validates that a floating-point value lies within an inclusive range.
///
/// # Errors
/// Returns [`ConfigError::OutOfRange`] if `value` is outside `[min, max]` or not finite.
pub fn validate_range_f32(
    field: &'static str,
    detail: &'static str,
    value: f32,
    min: f32,
    max: f32,
) -> Result<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, detail }.into())
    }
}
