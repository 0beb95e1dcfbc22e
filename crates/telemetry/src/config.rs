//! Synthesis configuration.

use time::{Duration, OffsetDateTime};

use crate::error::SynthesisError;

/// Target averages and sizing parameters for a synthesis run.
///
/// The defaults mirror a recreational walk: 1.5 m/s, 120 bpm, 80 rpm.
#[derive(Debug, Clone)]
pub struct SynthesisConfig {
    /// Target average speed in m/s.
    pub avg_speed_mps: f64,
    /// Target average heart rate in bpm.
    pub avg_heart_rate: f64,
    /// Target average cadence in rpm.
    pub avg_cadence: f64,
    /// Desired round-trip length in meters.
    pub route_length_m: f64,
    /// Headroom factor applied to the naive `length / speed` time estimate
    /// when sizing the horizon.
    pub horizon_inflation: f64,
    /// Instant of the first sample.
    pub start_time: OffsetDateTime,
    /// Spacing between consecutive samples.
    pub sample_interval: Duration,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            avg_speed_mps: 1.5,
            avg_heart_rate: 120.0,
            avg_cadence: 80.0,
            route_length_m: 5000.0,
            horizon_inflation: 1.3,
            start_time: OffsetDateTime::now_utc(),
            sample_interval: Duration::seconds(1),
        }
    }
}

impl SynthesisConfig {
    /// Number of one-second slots the synthesized telemetry spans.
    pub fn horizon(&self) -> usize {
        (self.route_length_m / self.avg_speed_mps * self.horizon_inflation) as usize
    }

    /// Rejects values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), SynthesisError> {
        if !self.avg_speed_mps.is_finite() || self.avg_speed_mps <= 0.0 {
            return Err(SynthesisError::InvalidConfig(format!(
                "average speed must be positive, got {}",
                self.avg_speed_mps
            )));
        }
        if !self.route_length_m.is_finite() || self.route_length_m <= 0.0 {
            return Err(SynthesisError::InvalidConfig(format!(
                "route length must be positive, got {}",
                self.route_length_m
            )));
        }
        if !self.horizon_inflation.is_finite() || self.horizon_inflation < 1.0 {
            return Err(SynthesisError::InvalidConfig(format!(
                "horizon inflation must be at least 1.0, got {}",
                self.horizon_inflation
            )));
        }
        if self.sample_interval <= Duration::ZERO {
            return Err(SynthesisError::InvalidConfig(
                "sample interval must be positive".into(),
            ));
        }
        if self.horizon() == 0 {
            return Err(SynthesisError::InvalidConfig(
                "route too short for a one-second horizon".into(),
            ));
        }
        Ok(())
    }
}
