use ai_llm_service::OpenAiService;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::{
    errors::EstimatorResult,
    prompt::build_prompt,
    reply::{missing_top_level_keys, parse_reply},
    truck_spec::TruckSpec,
};

/// Runs one capacity estimate: prompt → chat completion → JSON.
///
/// The prompt goes out as the only user message (no system message). The
/// reply is returned as-is once it parses; its shape is only checked for
/// logging.
///
/// # Errors
/// - [`crate::EstimatorError::Llm`] if the provider call fails
/// - [`crate::EstimatorError::Reply`] if the reply is not JSON
#[instrument(
    name = "estimate_capacity",
    skip_all,
    fields(
        manufacturer = spec.manufacturer().unwrap_or("?"),
        model = spec.model().unwrap_or("?"),
        truck_type = spec.truck_type().unwrap_or("?"),
        year = spec.year(),
        starting_rate = spec.starting_rate(),
        units = spec.units(),
    )
)]
pub async fn estimate_capacity(llm: &OpenAiService, spec: &TruckSpec) -> EstimatorResult<Value> {
    match spec.dimensions() {
        Some(dims) => debug!(
            volume_m3 = dims.volume_m3(),
            size_class = %dims.size_class(),
            "dimensions parsed"
        ),
        None => warn!("dimensions missing or malformed; relying on the model to flag it"),
    }

    let prompt = build_prompt(spec);
    debug!(prompt_len = prompt.len(), "prompt built");

    let reply = llm.generate(&prompt).await?;

    let estimate = parse_reply(&reply).inspect_err(|e| {
        warn!(error = %e, "model reply could not be parsed");
    })?;

    for key in missing_top_level_keys(&estimate) {
        warn!(key, "model reply lacks expected top-level key");
    }

    info!("capacity estimate produced");
    Ok(estimate)
}
