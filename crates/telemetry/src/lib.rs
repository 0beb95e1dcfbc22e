//! Workout telemetry synthesis.
//!
//! Turns a sparse sequence of route waypoints into a dense, second-resolution
//! telemetry stream: interpolated positions, elevation, heart rate, cadence,
//! pace, and timestamps, all mutually consistent and length-reconciled.
//!
//! The pipeline is pure and synchronous: waypoints and a [`SynthesisConfig`]
//! go in, a [`TelemetryRecord`] or a typed failure comes out. All randomness
//! flows through an injected `rand::Rng`, so seeded runs are byte-identical.
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use telemetry::{SynthesisConfig, Waypoint, synthesize};
//!
//! let waypoints = vec![
//!     Waypoint::new(40.0, -105.30, 1650.0),
//!     Waypoint::new(40.0, -105.29, 1660.0),
//! ];
//! let config = SynthesisConfig {
//!     route_length_m: 1500.0,
//!     ..Default::default()
//! };
//! let record = synthesize(&waypoints, &config, &mut StdRng::seed_from_u64(42)).unwrap();
//! assert_eq!(record.timestamps.len(), record.route.len());
//! ```

pub mod assemble;
pub mod config;
pub mod elevation;
pub mod error;
pub mod geodesic;
pub mod interpolate;
pub mod profiles;
pub mod synth;
pub mod types;

pub use assemble::STALLED_PACE;
pub use config::SynthesisConfig;
pub use error::SynthesisError;
pub use synth::synthesize;
pub use types::{RoutePoint, TelemetryRecord, Waypoint};
