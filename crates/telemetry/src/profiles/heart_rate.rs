//! Heart-rate profile generation.

use rand::Rng;

use super::{elevation_at, unit_jitter};

/// Resting-to-active offset at the start of a run, in bpm.
const WARMUP_DROP: f64 = 20.0;

/// Steepness of the logistic warm-up curve.
const WARMUP_STEEPNESS: f64 = 12.0;

/// Fraction of the horizon at which the warm-up curve is halfway up.
const WARMUP_MIDPOINT: f64 = 0.2;

/// Heart-rate change per m/s of speed deviation.
const SPEED_COUPLING: f64 = 10.0;

/// Heart-rate change per m/s-equivalent of elevation change.
const ELEVATION_COUPLING: f64 = 8.0;

const MIN_BPM: f64 = 60.0;
const MAX_BPM: f64 = 200.0;

/// Generates a per-second heart-rate profile of exactly `horizon` samples.
///
/// Starts 20 bpm under the target and climbs a logistic warm-up curve back
/// to it, with effort coupling to the speed profile, climb coupling to the
/// elevation signal, and unit jitter. Clamped to [60, 200].
pub fn heart_rate_profile(
    horizon: usize,
    avg_bpm: f64,
    avg_speed: f64,
    speed_profile: &[f64],
    elevation_changes: &[f64],
    rng: &mut impl Rng,
) -> Vec<f64> {
    (0..horizon)
        .map(|t| {
            if t == 0 {
                return avg_bpm - WARMUP_DROP;
            }
            let progress = t as f64 / horizon as f64;
            let sigmoid = 1.0 / (1.0 + (-WARMUP_STEEPNESS * (progress - WARMUP_MIDPOINT)).exp());
            let warmup = -WARMUP_DROP + WARMUP_DROP * sigmoid;

            let speed_deviation = speed_profile[t] - avg_speed;
            let bpm = avg_bpm
                + warmup
                + speed_deviation * SPEED_COUPLING
                + elevation_at(elevation_changes, t) * ELEVATION_COUPLING
                + unit_jitter(rng);
            bpm.clamp(MIN_BPM, MAX_BPM)
        })
        .collect()
}
