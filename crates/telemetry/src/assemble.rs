//! Final assembly: length reconciliation, pace derivation, timestamps.

use time::{Duration, OffsetDateTime};
use tracing::error;

use crate::error::SynthesisError;
use crate::types::{RoutePoint, TelemetryRecord};

/// Pace reported when the aligned speed sample is non-positive, signaling
/// "effectively stalled" rather than a real pace.
pub const STALLED_PACE: f64 = 999.0;

/// Minutes per kilometer for a speed in m/s.
pub fn pace_from_speed(speed: f64) -> f64 {
    if speed > 0.0 {
        1000.0 / (speed * 60.0)
    } else {
        STALLED_PACE
    }
}

/// Reconciles the profile series against the interpolated route and emits
/// the final aligned record.
///
/// Series shorter than the route are padded by repeating their last value;
/// longer ones are truncated. Timestamps step by `interval` from
/// `start_time`. A record is only produced when every series ends up with
/// exactly the route's length; anything else is a defect, not bad input.
pub fn assemble(
    route: Vec<RoutePoint>,
    speed: Vec<f64>,
    heart_rate: Vec<f64>,
    cadence: Vec<f64>,
    start_time: OffsetDateTime,
    interval: Duration,
) -> Result<TelemetryRecord, SynthesisError> {
    let target = route.len();

    let speed = reconcile(speed, target, "speed")?;
    let heart_rate = reconcile(heart_rate, target, "heart rate")?;
    let cadence = reconcile(cadence, target, "cadence")?;

    let pace: Vec<f64> = speed.iter().copied().map(pace_from_speed).collect();
    let heart_rate: Vec<i32> = heart_rate.into_iter().map(|bpm| bpm as i32).collect();
    let cadence: Vec<i32> = cadence.into_iter().map(|cad| cad as i32).collect();

    let timestamps: Vec<OffsetDateTime> = (0..target as i64)
        .map(|i| start_time + interval * i as i32)
        .collect();

    let record = TelemetryRecord {
        timestamps,
        heart_rate,
        pace,
        cadence,
        route,
    };
    check_lengths(&record)?;
    Ok(record)
}

/// Pads (repeating the last value) or truncates a series to `target`.
fn reconcile(
    mut series: Vec<f64>,
    target: usize,
    name: &'static str,
) -> Result<Vec<f64>, SynthesisError> {
    if series.len() < target {
        let Some(&last) = series.last() else {
            error!("cannot pad empty {name} series to {target} samples");
            return Err(SynthesisError::LengthReconciliation {
                series: name,
                expected: target,
                actual: 0,
            });
        };
        series.resize(target, last);
    } else {
        series.truncate(target);
    }
    Ok(series)
}

fn check_lengths(record: &TelemetryRecord) -> Result<(), SynthesisError> {
    let expected = record.route.len();
    let lengths = [
        ("timestamps", record.timestamps.len()),
        ("heart rate", record.heart_rate.len()),
        ("pace", record.pace.len()),
        ("cadence", record.cadence.len()),
    ];
    for (series, actual) in lengths {
        if actual != expected {
            error!("length invariant violated: {series} has {actual} samples, expected {expected}");
            return Err(SynthesisError::LengthReconciliation {
                series,
                expected,
                actual,
            });
        }
    }
    Ok(())
}
