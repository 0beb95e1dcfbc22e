use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use telemetry::SynthesisError;

use crate::provider::ProviderError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("too many requests")]
    RateLimited,

    #[error("upstream route fetch failed: {0}")]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, "Too many requests"),
            AppError::Provider(e) => {
                error!("upstream route fetch failed: {e}");
                (StatusCode::BAD_GATEWAY, "Upstream route fetch failed")
            }
            AppError::Synthesis(SynthesisError::EmptyRoute) => (
                StatusCode::BAD_GATEWAY,
                "Route contained no usable segments",
            ),
            AppError::Synthesis(SynthesisError::InvalidConfig(msg)) => {
                (StatusCode::BAD_REQUEST, msg.as_str())
            }
            AppError::Synthesis(e @ SynthesisError::LengthReconciliation { .. }) => {
                // Reconciliation cannot fail on valid pipelines; this is a
                // defect, not an input problem.
                error!("synthesis defect: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
