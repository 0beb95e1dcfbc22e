//! End-to-end synthesis orchestration.

use rand::Rng;
use tracing::debug;

use crate::assemble::assemble;
use crate::config::SynthesisConfig;
use crate::elevation::elevation_signal;
use crate::error::SynthesisError;
use crate::interpolate::interpolate_route;
use crate::profiles::{cadence_profile, heart_rate_profile, speed_profile};
use crate::types::{TelemetryRecord, Waypoint};

/// Synthesizes a full telemetry record from sparse route waypoints.
///
/// A single run is synchronous, CPU-bound, and retains no state; runs may
/// execute in parallel with zero coordination. The injected `rng` is the
/// only source of randomness, so a seeded generator makes output
/// reproducible.
pub fn synthesize(
    waypoints: &[Waypoint],
    config: &SynthesisConfig,
    rng: &mut impl Rng,
) -> Result<TelemetryRecord, SynthesisError> {
    config.validate()?;
    if waypoints.len() < 2 {
        return Err(SynthesisError::EmptyRoute);
    }

    let horizon = config.horizon();
    debug!(
        waypoints = waypoints.len(),
        horizon, "synthesizing telemetry"
    );

    let elevation_changes = elevation_signal(waypoints, config.avg_speed_mps, horizon);
    let speed = speed_profile(horizon, config.avg_speed_mps, rng);
    let heart_rate = heart_rate_profile(
        horizon,
        config.avg_heart_rate,
        config.avg_speed_mps,
        &speed,
        &elevation_changes,
        rng,
    );
    let cadence = cadence_profile(
        horizon,
        config.avg_cadence,
        config.avg_speed_mps,
        &speed,
        &elevation_changes,
        rng,
    );

    let route = interpolate_route(waypoints, &speed, horizon);
    debug!(samples = route.len(), "interpolated trajectory");

    assemble(
        route,
        speed,
        heart_rate,
        cadence,
        config.start_time,
        config.sample_interval,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_single_waypoint_is_empty_route() {
        let config = SynthesisConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let result = synthesize(&[Waypoint::new(0.0, 0.0, 0.0)], &config, &mut rng);
        assert_eq!(result, Err(SynthesisError::EmptyRoute));
    }

    #[test]
    fn test_no_waypoints_is_empty_route() {
        let config = SynthesisConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            synthesize(&[], &config, &mut rng),
            Err(SynthesisError::EmptyRoute)
        );
    }

    #[test]
    fn test_invalid_config_rejected_before_waypoint_check() {
        let config = SynthesisConfig {
            avg_speed_mps: -1.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            synthesize(&[], &config, &mut rng),
            Err(SynthesisError::InvalidConfig(_))
        ));
    }
}
