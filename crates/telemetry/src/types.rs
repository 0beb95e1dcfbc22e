//! Core data types shared across the synthesis pipeline.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A sparse route point as returned by the routing provider.
///
/// Coordinates are degrees, elevation is meters. The waypoint sequence is
/// ordered in travel order and immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
    pub elevation: f64,
}

impl Waypoint {
    pub const fn new(lat: f64, lon: f64, elevation: f64) -> Self {
        Self {
            lat,
            lon,
            elevation,
        }
    }
}

/// A position interpolated at second granularity between two waypoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "ele")]
    pub elevation: f64,
}

/// The assembled, length-reconciled output of a synthesis run.
///
/// All five series have identical length; the assembler refuses to produce
/// a record otherwise. Entities are created fresh per run and never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRecord {
    /// One absolute instant per sample, strictly increasing.
    pub timestamps: Vec<OffsetDateTime>,
    /// Heart rate in beats per minute, within [60, 200].
    pub heart_rate: Vec<i32>,
    /// Pace in minutes per kilometer; 999.0 marks a stalled sample.
    pub pace: Vec<f64>,
    /// Cadence in steps/revolutions per minute, within [30, 150].
    pub cadence: Vec<i32>,
    /// Interpolated positions along the route.
    pub route: Vec<RoutePoint>,
}

impl TelemetryRecord {
    /// Number of samples in the record.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}
