use std::sync::Arc;

use ai_llm_service::HealthStatus;
use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use crate::state::app_state::AppState;

/// Probes the chat-completion provider. 200 when reachable, 503 otherwise.
#[instrument(name = "health_route", skip_all)]
pub async fn health_route(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthStatus>) {
    let status = state.health.check(state.llm.config()).await;
    let code = if status.ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}
