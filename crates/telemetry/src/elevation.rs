//! Per-second elevation-change series derived from waypoint segments.

use crate::geodesic::haversine_distance;
use crate::types::Waypoint;

/// Builds a per-second elevation-change series aligned to segment distances.
///
/// Each waypoint pair contributes `floor(distance / assumed_speed)` seconds,
/// with the pair's elevation delta spread evenly across them. Segments whose
/// duration rounds to zero contribute nothing. The concatenated series is
/// zero-padded or truncated to exactly `horizon` entries.
pub fn elevation_signal(waypoints: &[Waypoint], assumed_speed: f64, horizon: usize) -> Vec<f64> {
    let mut changes = Vec::with_capacity(horizon);

    for pair in waypoints.windows(2) {
        let delta = pair[1].elevation - pair[0].elevation;
        let distance = haversine_distance(pair[0].lat, pair[0].lon, pair[1].lat, pair[1].lon);
        let seconds = (distance / assumed_speed) as usize;
        if seconds == 0 {
            continue;
        }
        let per_second = delta / seconds as f64;
        changes.extend(std::iter::repeat(per_second).take(seconds));
    }

    changes.resize(horizon, 0.0);
    changes
}
