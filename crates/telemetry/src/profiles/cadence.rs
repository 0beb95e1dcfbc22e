//! Cadence profile generation.

use rand::Rng;

use super::{elevation_at, unit_jitter};

/// Cadence change per m/s of speed deviation.
const SPEED_COUPLING: f64 = 3.0;

/// Cadence change per m/s-equivalent of elevation change.
const ELEVATION_COUPLING: f64 = 2.0;

const MIN_CADENCE: f64 = 30.0;
const MAX_CADENCE: f64 = 150.0;

/// Generates a per-second cadence profile of exactly `horizon` samples.
///
/// The target cadence with speed and climb coupling plus unit jitter,
/// clamped to [30, 150].
pub fn cadence_profile(
    horizon: usize,
    avg_cadence: f64,
    avg_speed: f64,
    speed_profile: &[f64],
    elevation_changes: &[f64],
    rng: &mut impl Rng,
) -> Vec<f64> {
    (0..horizon)
        .map(|t| {
            if t == 0 {
                return avg_cadence + unit_jitter(rng);
            }
            let speed_deviation = speed_profile[t] - avg_speed;
            let cadence = avg_cadence
                + speed_deviation * SPEED_COUPLING
                + elevation_at(elevation_changes, t) * ELEVATION_COUPLING
                + unit_jitter(rng);
            cadence.clamp(MIN_CADENCE, MAX_CADENCE)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::speed_profile;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let speed = speed_profile(1300, 1.5, &mut rng);
        let elevation = vec![-3.0; 1300];
        let profile = cadence_profile(1300, 80.0, 1.5, &speed, &elevation, &mut rng);
        assert_eq!(profile.len(), 1300);
        for cad in profile {
            assert!((30.0..=150.0).contains(&cad));
        }
    }

    #[test]
    fn test_first_sample_near_target() {
        let mut rng = StdRng::seed_from_u64(42);
        let speed = vec![1.5; 10];
        let elevation = vec![0.0; 10];
        let profile = cadence_profile(10, 80.0, 1.5, &speed, &elevation, &mut rng);
        assert!((profile[0] - 80.0).abs() <= 1.0);
    }

    #[test]
    fn test_tracks_speed_deviation() {
        let elevation = vec![0.0; 500];
        let steady = vec![1.5; 500];
        let pushing = vec![3.0; 500];
        let base =
            cadence_profile(500, 80.0, 1.5, &steady, &elevation, &mut StdRng::seed_from_u64(3));
        let fast =
            cadence_profile(500, 80.0, 1.5, &pushing, &elevation, &mut StdRng::seed_from_u64(3));
        let base_avg: f64 = base.iter().sum::<f64>() / 500.0;
        let fast_avg: f64 = fast.iter().sum::<f64>() / 500.0;
        assert!(fast_avg > base_avg + 3.0);
    }
}
