//! HTTP surface of the truck capacity relay.
//!
//! - `POST /estimate-capacity`: truck spec in, model-generated estimate out
//! - `GET /health`: provider reachability

use std::sync::Arc;

pub mod error_handler;
mod routes;
pub mod state;

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, error, info, info_span};

pub use crate::error_handler::{AppError, AppResult};
pub use crate::state::app_state::{ApiConfig, AppState};
use crate::routes::{
    estimate_capacity::estimate_capacity_route::estimate_capacity_route,
    health::health_route::health_route,
};

/// Loads config from the environment and serves until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let config = ApiConfig::from_env()?;
    let state = Arc::new(AppState::new(config.llm.clone())?);
    let app = router(state, &config.allowed_origins)?;

    let listener = TcpListener::bind(&config.address)
        .await
        .map_err(|source| AppError::Bind {
            addr: config.address.clone(),
            source,
        })?;

    info!(address = %config.address, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns the [`Router`] of this application.
///
/// `allowed_origins` restricts CORS; an empty list allows any origin.
pub fn router(state: Arc<AppState>, allowed_origins: &[String]) -> AppResult<Router> {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        });

    let cors = cors_layer(allowed_origins)?;

    Ok(Router::new()
        .route("/estimate-capacity", post(estimate_capacity_route))
        .route("/health", get(health_route))
        .layer(cors)
        .layer(trace_layer)
        .with_state(state))
}

fn cors_layer(allowed_origins: &[String]) -> AppResult<CorsLayer> {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|e| AppError::Config(format!("CORS origin {origin:?}: {e}")))
            })
            .collect::<AppResult<Vec<HeaderValue>>>()?;
        AllowOrigin::list(origins)
    };

    debug!(?allowed_origins, "CORS configured");

    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(origin)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]))
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server runs until killed.
            error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
