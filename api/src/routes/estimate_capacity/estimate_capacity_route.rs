use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use capacity_estimator::{TruckSpec, estimate_capacity};
use serde_json::Value;
use tracing::{info, instrument};

use crate::{error_handler::AppResult, state::app_state::AppState};

/// HTTP endpoint for estimating a truck's household-item capacity.
///
/// Expects a JSON object with `manufacturer`, `model`, `type`, `year`,
/// `startingRate`, `units` and `dimensions`; extra keys are passed to the
/// model untouched. The model's JSON reply is returned as the body.
///
/// A missing key is rejected before any upstream call.
#[instrument(name = "estimate_capacity_route", skip_all)]
pub async fn estimate_capacity_route(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(body) = payload?;
    let spec = TruckSpec::from_value(body)?;

    info!(
        manufacturer = spec.manufacturer().unwrap_or("?"),
        model = spec.model().unwrap_or("?"),
        "truck spec accepted"
    );

    let estimate = estimate_capacity(&state.llm, &spec).await?;
    Ok(Json(estimate))
}
