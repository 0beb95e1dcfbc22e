//! Synthesis error taxonomy.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SynthesisError {
    /// The waypoint sequence has fewer than two usable points, so there are
    /// no segments to interpolate. Synthesis does not proceed.
    #[error("route has no usable segments")]
    EmptyRoute,

    /// A configuration value that the pipeline cannot work with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The equal-length invariant could not be established. Given the
    /// pad/truncate reconciliation policy this indicates a logic defect,
    /// never bad input.
    #[error("length reconciliation failed: {series} has {actual} samples, expected {expected}")]
    LengthReconciliation {
        series: &'static str,
        expected: usize,
        actual: usize,
    },
}
