//! Second-resolution trajectory interpolation between waypoints.

use crate::geodesic::{destination, haversine_distance, initial_bearing};
use crate::types::{RoutePoint, Waypoint};

/// Walks consecutive waypoint pairs and emits one interpolated position per
/// second of travel, using the speed profile value at the segment's start.
///
/// Each segment lasts `max(1, floor(distance / speed))` seconds; positions
/// are projected along the segment's initial bearing and elevation is
/// linearly interpolated. Processing stops once the accumulated elapsed
/// time reaches the horizon. The returned length is the ground truth that
/// all other series are reconciled against.
pub fn interpolate_route(
    waypoints: &[Waypoint],
    speed_profile: &[f64],
    horizon: usize,
) -> Vec<RoutePoint> {
    let mut route = Vec::new();
    let mut elapsed = 0usize;

    for pair in waypoints.windows(2) {
        if elapsed >= horizon || speed_profile.is_empty() {
            break;
        }

        let (p1, p2) = (&pair[0], &pair[1]);
        let distance = haversine_distance(p1.lat, p1.lon, p2.lat, p2.lon);
        let bearing = initial_bearing(p1.lat, p1.lon, p2.lat, p2.lon);

        // Clamp to the last valid index in case elapsed time has run past
        // the profile; the x1.3 horizon headroom should keep this from ever
        // triggering in practice.
        let index = elapsed.min(speed_profile.len() - 1);
        let speed = speed_profile[index];

        let duration = ((distance / speed) as usize).max(1);
        let elevation_delta = p2.elevation - p1.elevation;

        for i in 1..=duration {
            let fraction = i as f64 / duration as f64;
            let (lat, lon) = destination(p1.lat, p1.lon, bearing, speed * i as f64);
            route.push(RoutePoint {
                lat,
                lon,
                elevation: p1.elevation + elevation_delta * fraction,
            });
        }

        elapsed += duration;
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_pair() -> Vec<Waypoint> {
        vec![
            Waypoint::new(0.0, 0.0, 100.0),
            Waypoint::new(0.0, 0.01, 100.0),
        ]
    }

    #[test]
    fn test_sample_count_matches_segment_time() {
        // ~1113m at a constant 1.5 m/s is 742 whole seconds
        let speed = vec![1.5; 2000];
        let route = interpolate_route(&flat_pair(), &speed, 2000);
        let distance = haversine_distance(0.0, 0.0, 0.0, 0.01);
        let expected = (distance / 1.5) as usize;
        assert!(route.len().abs_diff(expected) <= 1);
    }

    #[test]
    fn test_flat_segment_keeps_elevation_constant() {
        let speed = vec![1.5; 2000];
        let route = interpolate_route(&flat_pair(), &speed, 2000);
        assert!(!route.is_empty());
        for point in route {
            assert!((point.elevation - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_elevation_interpolates_linearly() {
        let waypoints = vec![
            Waypoint::new(0.0, 0.0, 100.0),
            Waypoint::new(0.0, 0.01, 200.0),
        ];
        let speed = vec![1.5; 2000];
        let route = interpolate_route(&waypoints, &speed, 2000);
        // Monotone climb ending exactly at the far elevation
        for pair in route.windows(2) {
            assert!(pair[1].elevation > pair[0].elevation);
        }
        assert!((route.last().unwrap().elevation - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_points_advance_along_bearing() {
        let speed = vec![1.5; 2000];
        let route = interpolate_route(&flat_pair(), &speed, 2000);
        // Due east: latitude stays put, longitude grows
        for pair in route.windows(2) {
            assert!(pair[1].lon > pair[0].lon);
            assert!(pair[1].lat.abs() < 1e-6);
        }
    }

    #[test]
    fn test_stops_at_horizon() {
        let waypoints = vec![
            Waypoint::new(0.0, 0.0, 0.0),
            Waypoint::new(0.0, 0.01, 0.0),
            Waypoint::new(0.0, 0.02, 0.0),
            Waypoint::new(0.0, 0.03, 0.0),
        ];
        let speed = vec![1.5; 800];
        let route = interpolate_route(&waypoints, &speed, 800);
        // First segment is ~742s, so the second starts but the third never
        // runs; the route cannot grow a full segment past the horizon.
        assert!(route.len() < 2 * 742 + 2);
        assert!(route.len() >= 742);
    }

    #[test]
    fn test_coincident_waypoints_emit_one_sample() {
        let waypoints = vec![Waypoint::new(0.0, 0.0, 0.0), Waypoint::new(0.0, 0.0, 0.0)];
        let speed = vec![1.5; 10];
        let route = interpolate_route(&waypoints, &speed, 10);
        // Zero distance still spends the 1-second minimum
        assert_eq!(route.len(), 1);
    }

    #[test]
    fn test_no_waypoints_no_route() {
        let speed = vec![1.5; 10];
        assert!(interpolate_route(&[], &speed, 10).is_empty());
        assert!(interpolate_route(&[Waypoint::new(0.0, 0.0, 0.0)], &speed, 10).is_empty());
    }
}
