//! End-to-end properties of the synthesis pipeline.

use rand::SeedableRng;
use rand::rngs::StdRng;
use time::{Duration, macros::datetime};

use telemetry::geodesic::haversine_distance;
use telemetry::{SynthesisConfig, SynthesisError, Waypoint, synthesize};

fn walk_config() -> SynthesisConfig {
    SynthesisConfig {
        route_length_m: 1500.0,
        start_time: datetime!(2024-06-01 08:00:00 UTC),
        ..Default::default()
    }
}

fn east_pair() -> Vec<Waypoint> {
    // ~1.11 km due east at the equator, flat
    vec![Waypoint::new(0.0, 0.0, 0.0), Waypoint::new(0.0, 0.01, 0.0)]
}

#[test]
fn all_series_have_equal_length() {
    let record = synthesize(&east_pair(), &walk_config(), &mut StdRng::seed_from_u64(42)).unwrap();
    let n = record.route.len();
    assert!(n > 0);
    assert_eq!(record.timestamps.len(), n);
    assert_eq!(record.heart_rate.len(), n);
    assert_eq!(record.pace.len(), n);
    assert_eq!(record.cadence.len(), n);
}

#[test]
fn heart_rate_and_cadence_stay_in_bounds() {
    let waypoints = vec![
        Waypoint::new(40.0, -105.30, 1650.0),
        Waypoint::new(40.0, -105.29, 1750.0),
        Waypoint::new(40.01, -105.29, 1600.0),
    ];
    let record = synthesize(&waypoints, &walk_config(), &mut StdRng::seed_from_u64(7)).unwrap();
    for bpm in &record.heart_rate {
        assert!((60..=200).contains(bpm));
    }
    for cad in &record.cadence {
        assert!((30..=150).contains(cad));
    }
}

#[test]
fn pace_reflects_the_speed_floor() {
    let config = walk_config();
    let record = synthesize(&east_pair(), &config, &mut StdRng::seed_from_u64(42)).unwrap();
    // Speed never drops below 0.9 x target, so pace never exceeds the
    // corresponding ceiling (and never hits the stalled sentinel).
    let max_pace = 1000.0 / (0.9 * config.avg_speed_mps * 60.0);
    for pace in &record.pace {
        assert!(*pace <= max_pace + 1e-9);
        assert!(*pace < 999.0);
    }
}

#[test]
fn timestamps_increase_by_the_configured_interval() {
    let config = walk_config();
    let record = synthesize(&east_pair(), &config, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(record.timestamps[0], config.start_time);
    for pair in record.timestamps.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::seconds(1));
    }
}

#[test]
fn seeded_runs_are_identical() {
    let config = walk_config();
    let a = synthesize(&east_pair(), &config, &mut StdRng::seed_from_u64(1234)).unwrap();
    let b = synthesize(&east_pair(), &config, &mut StdRng::seed_from_u64(1234)).unwrap();
    assert_eq!(a, b);

    let c = synthesize(&east_pair(), &config, &mut StdRng::seed_from_u64(1235)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn sample_count_tracks_segment_travel_time() {
    let config = walk_config();
    let record = synthesize(&east_pair(), &config, &mut StdRng::seed_from_u64(42)).unwrap();

    // The single segment is traversed at the first speed sample, which is
    // deterministically 1.2 x target.
    let distance = haversine_distance(0.0, 0.0, 0.0, 0.01);
    let expected = (distance / (1.2 * config.avg_speed_mps)) as usize;
    assert!(record.route.len().abs_diff(expected) <= 1);

    // And well within the 1300-second horizon.
    assert!(record.route.len() < config.horizon());
}

#[test]
fn flat_segment_yields_constant_elevation() {
    let record = synthesize(&east_pair(), &walk_config(), &mut StdRng::seed_from_u64(42)).unwrap();
    for point in &record.route {
        assert!(point.elevation.abs() < 1e-9);
    }
}

#[test]
fn single_waypoint_is_rejected() {
    let result = synthesize(
        &[Waypoint::new(0.0, 0.0, 0.0)],
        &walk_config(),
        &mut StdRng::seed_from_u64(42),
    );
    assert_eq!(result, Err(SynthesisError::EmptyRoute));
}

#[test]
fn multi_segment_route_covers_every_segment_start() {
    // Three short segments; each contributes at least one sample, and the
    // route passes near each intermediate waypoint.
    let waypoints = vec![
        Waypoint::new(0.0, 0.0, 10.0),
        Waypoint::new(0.0, 0.002, 20.0),
        Waypoint::new(0.002, 0.002, 30.0),
        Waypoint::new(0.002, 0.0, 15.0),
    ];
    let config = SynthesisConfig {
        route_length_m: 700.0,
        start_time: datetime!(2024-06-01 08:00:00 UTC),
        ..Default::default()
    };
    let record = synthesize(&waypoints, &config, &mut StdRng::seed_from_u64(42)).unwrap();
    assert!(record.route.len() >= 3);

    for target in &waypoints[1..] {
        let closest = record
            .route
            .iter()
            .map(|p| haversine_distance(p.lat, p.lon, target.lat, target.lon))
            .fold(f64::INFINITY, f64::min);
        // Within a few seconds of travel of each waypoint
        assert!(closest < 30.0, "route never approached waypoint: {closest}");
    }
}
