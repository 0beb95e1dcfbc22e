//! HTTP boundary around the telemetry synthesis core.
//!
//! Fetches a round-trip route from the directions provider, runs the
//! synthesis pipeline, and serves the result as JSON telemetry or as a GPX
//! file, behind a per-client rate limit.

pub mod errors;
pub mod gpx_writer;
pub mod handlers;
pub mod provider;
pub mod rate_limit;
pub mod types;

use std::net::SocketAddr;

use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
};

use crate::handlers::{generate_single, generate_single_gpx, health_check};
use crate::provider::RouteProvider;
use crate::rate_limit::RateLimiter;

pub fn create_router(provider: RouteProvider, limiter: RateLimiter) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/generate-single", post(generate_single))
        .route("/generate-single/gpx", post(generate_single_gpx))
        .layer(Extension(provider))
        .layer(Extension(limiter))
        .layer(cors)
        .layer(CompressionLayer::new())
}

pub async fn run_server(provider: RouteProvider, port: u16) -> anyhow::Result<()> {
    let app = create_router(provider, RateLimiter::new());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!("Server running on http://0.0.0.0:{port}");

    // Connect info exposes client IPs to the rate limiter.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
