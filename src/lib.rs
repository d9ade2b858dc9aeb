//! # Track Charts
//!
//! Render-ready chart dataset computation for recorded outdoor activity
//! tracks (e.g. a ski day).
//!
//! The library ingests an ordered sequence of timestamped track samples
//! (position, altitude, speed, activity mode) and derives compact datasets
//! for five chart views:
//! - Altitude vs. time, colored by speed
//! - Speed vs. time, colored by altitude
//! - Planar location path, grouped into speed-colored Bezier bands
//! - Activity-mode timeline strip
//! - Activity-mode histogram
//!
//! All computation is synchronous, single-threaded and stateless: every
//! builder is a pure function of the sample slice and its parameters, and
//! the sample slice is read-only for the duration of a call. Rendering,
//! input handling and file parsing are external collaborators.
//!
//! ## Features
//!
//! - **`parallel`** - Enable parallel histogram binning with rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use track_charts::{build_altitude_chart, PlanarPoint, TrackMode, TrackSample, TrackSummary};
//!
//! let samples: Vec<TrackSample> = (0..4)
//!     .map(|i| {
//!         TrackSample::new(
//!             i as f64 * 10.0,
//!             TrackMode::Ski,
//!             1500.0 - i as f64 * 5.0,
//!             12.0 + i as f64,
//!             PlanarPoint::new(i as f64, i as f64),
//!         )
//!     })
//!     .collect();
//! let summary = TrackSummary::from_samples(1_700_000_000, &samples).unwrap();
//!
//! let dataset = build_altitude_chart(&samples, &summary, 1).unwrap();
//! assert_eq!(dataset.points.len(), 4);
//! assert_eq!(dataset.max_y, 1500.0);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{ChartError, Result};

// Gradient color mapping
pub mod color;
pub use color::ColorScheme;

// Stride-sampled field range scanning
pub mod range;
pub use range::{scan_field, scan_stats, FieldRange, FieldStats, SampleField};

// Axis gridline generation
pub mod grid;
pub use grid::{
    magnitude_grid, time_grid, GridLine, ALTITUDE_GRID_STEP, SPEED_GRID_STEP, TIME_GRID_STEP,
};

// Bezier segment assembly
pub mod segment;
pub use segment::{ColorBand, CurveSegment};

// Histogram and color-band binning
pub mod binning;
#[cfg(feature = "parallel")]
pub use binning::histogram_parallel;
pub use binning::{color_bands, histogram, Histogram, HistogramBucket};

// Chart dataset builders
pub mod charts;
pub use charts::{
    build_activity_histogram, build_altitude_chart, build_location_chart, build_speed_chart,
    build_timeline_chart, ChartDataset, ChartPoint, LocationDataset,
};

// Readout string formatting
pub mod format;

// ============================================================================
// Core Types
// ============================================================================

/// Categorical activity state of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackMode {
    Stop,
    Ski,
    Lift,
    Unknown,
}

impl TrackMode {
    /// Stable numeric value used for binning and timeline coloring.
    pub fn value(&self) -> f64 {
        match self {
            TrackMode::Stop => 0.0,
            TrackMode::Ski => 1.0,
            TrackMode::Lift => 2.0,
            TrackMode::Unknown => 3.0,
        }
    }

    /// Decode a loader-supplied raw mode value; anything out of range is
    /// [`TrackMode::Unknown`].
    pub fn from_value(value: i64) -> Self {
        match value {
            0 => TrackMode::Stop,
            1 => TrackMode::Ski,
            2 => TrackMode::Lift,
            _ => TrackMode::Unknown,
        }
    }
}

/// A planar projected position or Bezier control handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One recorded instant of the activity.
///
/// Samples are owned by the track source and only read here; `t` must be
/// monotonically non-decreasing across a sequence. The control handles are
/// computed upstream when the path is smoothed and consumed verbatim by
/// segment assembly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSample {
    /// Elapsed seconds since activity start.
    pub t: f64,
    /// Activity mode.
    pub mode: TrackMode,
    /// Altitude in meters.
    pub altitude: f64,
    /// Speed in kph.
    pub speed: f64,
    /// Planar projected position.
    pub pos: PlanarPoint,
    /// Incoming Bezier handle (shapes the curve arriving at this sample).
    pub control_in: PlanarPoint,
    /// Outgoing Bezier handle (shapes the curve leaving this sample).
    pub control_out: PlanarPoint,
}

impl TrackSample {
    /// Create a sample with both control handles collapsed onto the
    /// position (an unsmoothed path).
    pub fn new(t: f64, mode: TrackMode, altitude: f64, speed: f64, pos: PlanarPoint) -> Self {
        Self {
            t,
            mode,
            altitude,
            speed,
            pos,
            control_in: pos,
            control_out: pos,
        }
    }

    /// Attach smoothed control handles.
    pub fn with_controls(mut self, control_in: PlanarPoint, control_out: PlanarPoint) -> Self {
        self.control_in = control_in;
        self.control_out = control_out;
        self
    }
}

/// Activity-level summary record supplied by the track source.
///
/// Builders use only `start_seconds`, to align time gridlines on wall-clock
/// hour boundaries; the stats fields feed the readout panel via
/// [`format`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    /// Wall-clock start of the activity, seconds since the Unix epoch.
    pub start_seconds: i64,
    /// Lowest altitude in meters.
    pub low_altitude: f64,
    /// Highest altitude in meters.
    pub high_altitude: f64,
    /// Top speed in kph.
    pub top_speed: f64,
    /// Average speed in kph.
    pub avg_speed: f64,
}

impl TrackSummary {
    /// Compute the summary stats from a sample sequence.
    pub fn from_samples(start_seconds: i64, samples: &[TrackSample]) -> Result<Self> {
        let altitude = scan_field(samples, SampleField::Altitude, 1)?;
        let speed = scan_stats(samples, SampleField::Speed, 1)?;

        Ok(Self {
            start_seconds,
            low_altitude: altitude.min,
            high_altitude: altitude.max,
            top_speed: speed.range.max,
            avg_speed: speed.mean(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_track() -> Vec<TrackSample> {
        let altitudes = [1450.0, 1430.0, 1395.0, 1410.0, 1500.0];
        let speeds = [0.0, 22.5, 38.0, 12.0, 4.5];
        altitudes
            .iter()
            .zip(&speeds)
            .enumerate()
            .map(|(i, (&a, &s))| {
                TrackSample::new(
                    i as f64 * 30.0,
                    TrackMode::Ski,
                    a,
                    s,
                    PlanarPoint::new(i as f64 * 5.0, i as f64 * 3.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_mode_values_round_trip() {
        for mode in [
            TrackMode::Stop,
            TrackMode::Ski,
            TrackMode::Lift,
            TrackMode::Unknown,
        ] {
            assert_eq!(TrackMode::from_value(mode.value() as i64), mode);
        }
        assert_eq!(TrackMode::from_value(-1), TrackMode::Unknown);
        assert_eq!(TrackMode::from_value(7), TrackMode::Unknown);
    }

    #[test]
    fn test_sample_controls_default_to_position() {
        let sample = TrackSample::new(
            0.0,
            TrackMode::Stop,
            1000.0,
            0.0,
            PlanarPoint::new(3.0, 4.0),
        );
        assert_eq!(sample.control_in, sample.pos);
        assert_eq!(sample.control_out, sample.pos);
    }

    #[test]
    fn test_summary_from_samples() {
        let summary = TrackSummary::from_samples(1_700_000_000, &sample_track()).unwrap();

        assert_eq!(summary.low_altitude, 1395.0);
        assert_eq!(summary.high_altitude, 1500.0);
        assert_eq!(summary.top_speed, 38.0);
        assert!((summary.avg_speed - 15.4).abs() < 1e-9);
    }

    #[test]
    fn test_summary_empty_errors() {
        assert!(matches!(
            TrackSummary::from_samples(0, &[]),
            Err(ChartError::EmptyTrack { .. })
        ));
    }
}
