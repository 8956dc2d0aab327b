//! Crate-wide error hierarchy for capacity-estimator.

use ai_llm_service::AiLlmError;
use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type EstimatorResult<T> = Result<T, EstimatorError>;

/// Root error type for the capacity-estimator crate.
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// A required truck-spec key is absent. Holds the first missing key in
    /// declaration order.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The request body was valid JSON but not an object.
    #[error("Request body must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// The chat-completion call failed (transport, status, decode, timeout).
    #[error(transparent)]
    Llm(#[from] AiLlmError),

    /// The model answered, but the text is not usable JSON.
    #[error(transparent)]
    Reply(#[from] ReplyError),
}

/// Failure to turn a model reply into JSON.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("model reply is empty")]
    Empty,

    #[error("model reply is not valid JSON: {reason}; reply starts with: {snippet}")]
    Unparsable {
        /// Parser message for the fence-stripped text.
        reason: String,
        /// Short prefix of the fence-stripped text.
        snippet: String,
    },
}
