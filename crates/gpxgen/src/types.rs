//! Wire types for the generation endpoints.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;

use telemetry::{RoutePoint, TelemetryRecord};

/// Request body for the single-marker generation endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub start_coords: StartCoords,
    /// Desired round-trip length in meters.
    pub route_length: u32,
    /// Routing profile tag; defaults to foot-walking.
    #[serde(default)]
    pub route_type: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StartCoords {
    pub lat: f64,
    pub lon: f64,
}

/// The four equal-length telemetry lists of the display contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryResponse {
    /// RFC 3339 instants, one per sample.
    pub timestamps: Vec<String>,
    pub bpm_profile: Vec<i32>,
    /// Minutes per kilometer; 999.0 marks a stalled sample.
    pub pace_profile: Vec<f64>,
    pub route: Vec<RoutePoint>,
}

impl TelemetryResponse {
    pub fn from_record(record: &TelemetryRecord) -> Self {
        let timestamps = record
            .timestamps
            .iter()
            .map(|ts| ts.format(&Rfc3339).unwrap_or_default())
            .collect();
        Self {
            timestamps,
            bpm_profile: record.heart_rate.clone(),
            pace_profile: record.pace.clone(),
            route: record.route.clone(),
        }
    }
}
