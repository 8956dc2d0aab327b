use ai_llm_service::AiLlmError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use capacity_estimator::EstimatorError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Llm(#[from] AiLlmError),

    // --- IO / network / server ---
    #[error("failed to bind listener on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / relay ---
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Estimator(#[from] EstimatorError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            AppError::Estimator(err) => match err {
                EstimatorError::MissingField(_) | EstimatorError::NotAnObject(_) => {
                    StatusCode::BAD_REQUEST
                }
                EstimatorError::Llm(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
                EstimatorError::Llm(_) | EstimatorError::Reply(_) => StatusCode::BAD_GATEWAY,
            },

            // startup-only
            AppError::Config(_) | AppError::Llm(_) | AppError::Bind { .. } | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable code. Client errors carry none so their body
    /// stays `{"error": "..."}`.
    fn error_code(&self) -> Option<&'static str> {
        match self {
            AppError::BadRequest(_) => None,
            AppError::Estimator(err) => match err {
                EstimatorError::MissingField(_) | EstimatorError::NotAnObject(_) => None,
                EstimatorError::Llm(e) if e.is_timeout() => Some("UPSTREAM_TIMEOUT"),
                EstimatorError::Llm(_) => Some("UPSTREAM_UNAVAILABLE"),
                EstimatorError::Reply(_) => Some("UPSTREAM_UNPARSABLE"),
            },
            AppError::Config(_) => Some("CONFIG_ERROR"),
            AppError::Llm(_) => Some("LLM_CONFIG_ERROR"),
            AppError::Bind { .. } => Some("BIND_ERROR"),
            AppError::Server(_) => Some("SERVER_ERROR"),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), code, error = %message, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "request rejected");
        }

        let body = ErrorBody {
            error: message,
            code,
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Any body the JSON extractor rejects (syntax, content type, size) is a 400.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}
