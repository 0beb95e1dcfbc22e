//! Scalar profile synthesis.
//!
//! Three independently-parameterized generators produce per-second speed,
//! heart-rate, and cadence series over a shared horizon. Heart rate and
//! cadence are coupled to the speed profile and to the elevation-change
//! signal; the curves are heuristic, not physiologically validated.
//!
//! Randomness is always an injected `rng` so runs are reproducible with a
//! seeded generator.

mod cadence;
mod heart_rate;
mod speed;

pub use cadence::cadence_profile;
pub use heart_rate::heart_rate_profile;
pub use speed::speed_profile;

use rand::Rng;

/// Small integer jitter in `{-1, 0, 1}`, applied per sample to heart rate
/// and cadence.
pub(crate) fn unit_jitter(rng: &mut impl Rng) -> f64 {
    rng.gen_range(-1..=1) as f64
}

/// Elevation change at `t`, zero past the end of the signal.
pub(crate) fn elevation_at(elevation_changes: &[f64], t: usize) -> f64 {
    elevation_changes.get(t).copied().unwrap_or(0.0)
}
