//! Unified error handling for the track-charts library.
//!
//! Every chart builder is a pure function over its inputs, so all failures
//! here are local, synchronous and deterministic: retrying never helps, and
//! none of them are swallowed. The rendering layer decides what the user
//! sees (typically a "no data" state).

use std::fmt;

/// Unified error type for chart dataset computation.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// The sample sequence (or the requested sub-range of it) is empty.
    /// Range and grid computation need at least one sample.
    EmptyTrack { context: String },
    /// A normalization would divide by `max - min` with `max == min`.
    DegenerateRange { min: f64, max: f64 },
    /// A bucket/band count that cannot partition anything.
    InvalidDepth { depth: usize },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::EmptyTrack { context } => {
                write!(f, "Empty sample sequence: {}", context)
            }
            ChartError::DegenerateRange { min, max } => {
                write!(f, "Degenerate value range: min {} equals max {}", min, max)
            }
            ChartError::InvalidDepth { depth } => {
                write!(f, "Invalid depth {}: at least 1 bucket required", depth)
            }
        }
    }
}

impl std::error::Error for ChartError {}

/// Result type alias for track-charts operations.
pub type Result<T> = std::result::Result<T, ChartError>;
