//! Generation endpoint handlers.

use std::net::SocketAddr;

use axum::{
    Extension,
    extract::ConnectInfo,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use time::OffsetDateTime;
use tracing::info;

use telemetry::{SynthesisConfig, TelemetryRecord, synthesize};

use crate::errors::AppError;
use crate::gpx_writer::generate_gpx;
use crate::provider::{RouteProfile, RouteProvider};
use crate::rate_limit::RateLimiter;
use crate::types::{GenerateRequest, TelemetryResponse};

/// Health check endpoint.
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Generates telemetry for a round trip from a single start marker and
/// returns the four-list JSON contract.
pub async fn generate_single(
    Extension(provider): Extension<RouteProvider>,
    Extension(limiter): Extension<RateLimiter>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<TelemetryResponse>, AppError> {
    let record = run_pipeline(&provider, &limiter, addr, &request).await?;
    Ok(Json(TelemetryResponse::from_record(&record)))
}

/// Same pipeline, but responds with a downloadable GPX 1.1 document.
pub async fn generate_single_gpx(
    Extension(provider): Extension<RouteProvider>,
    Extension(limiter): Extension<RateLimiter>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(request): Json<GenerateRequest>,
) -> Result<Response, AppError> {
    let profile = RouteProfile::from_tag(request.route_type.as_deref());
    let record = run_pipeline(&provider, &limiter, addr, &request).await?;
    let document = generate_gpx(&record, "Generated workout", profile.as_str());

    Ok((
        [
            (header::CONTENT_TYPE, "application/gpx+xml"),
            (
                header::CONTENT_DISPOSITION,
                r#"attachment; filename="workout.gpx""#,
            ),
        ],
        document,
    )
        .into_response())
}

/// Throttle check, route fetch, and synthesis shared by both endpoints.
async fn run_pipeline(
    provider: &RouteProvider,
    limiter: &RateLimiter,
    addr: SocketAddr,
    request: &GenerateRequest,
) -> Result<TelemetryRecord, AppError> {
    if !limiter.check(addr.ip()) {
        return Err(AppError::RateLimited);
    }

    info!(
        client = %addr.ip(),
        length = request.route_length,
        "generating telemetry"
    );

    let profile = RouteProfile::from_tag(request.route_type.as_deref());
    let waypoints = provider
        .fetch_round_trip(
            (request.start_coords.lat, request.start_coords.lon),
            request.route_length,
            profile,
        )
        .await?;

    let config = SynthesisConfig {
        route_length_m: request.route_length as f64,
        start_time: OffsetDateTime::now_utc(),
        ..Default::default()
    };

    let record = synthesize(&waypoints, &config, &mut rand::thread_rng())?;
    Ok(record)
}
