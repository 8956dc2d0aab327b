use ai_llm_service::telemetry;
use anyhow::Context;
use tracing::{Level, info, warn};
use tracing_subscriber::{Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "info,capacity_estimator=debug,api=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file; a missing file is fine.
    let dotenv = dotenvy::dotenv();

    let app_layer = fmt::layer()
        .with_target(true)
        .with_filter(filter::filter_fn(|meta| {
            !telemetry::is_library_target(meta.target())
        }));

    tracing_subscriber::registry()
        .with(telemetry::env_filter_with_level(DEFAULT_LOG_FILTER, Level::INFO))
        .with(app_layer)
        .with(telemetry::layer())
        .try_init()
        .context("failed to install tracing subscriber")?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "ignoring unreadable .env"),
    }

    api::start().await.context("truck capacity API failed")?;

    Ok(())
}
