//! Speed profile generation.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Standard deviation of the per-second speed fluctuations in m/s.
const NOISE_STD_DEV: f64 = 1.8;

/// Total linear speed loss over the horizon, modeling fatigue.
const DECLINE_RATE: f64 = 0.2;

/// Fraction of the target speed the profile is floored at.
const MIN_SPEED_FRACTION: f64 = 0.9;

/// Generates a per-second speed profile of exactly `horizon` samples.
///
/// Each sample is the target speed plus zero-mean Gaussian noise, minus a
/// linear fatigue decline. The first sample's noise is replaced by 20% of
/// the target so runs start at a deliberate push rather than a random one.
/// Samples never drop below 90% of the target; there is no upper clamp.
pub fn speed_profile(horizon: usize, avg_speed: f64, rng: &mut impl Rng) -> Vec<f64> {
    let noise = Normal::new(0.0, NOISE_STD_DEV).expect("finite std dev");
    let min_speed = avg_speed * MIN_SPEED_FRACTION;

    (0..horizon)
        .map(|t| {
            let fluctuation = if t == 0 {
                0.2 * avg_speed
            } else {
                noise.sample(rng)
            };
            let decline = DECLINE_RATE * t as f64 / horizon as f64;
            (avg_speed + fluctuation - decline).max(min_speed)
        })
        .collect()
}
