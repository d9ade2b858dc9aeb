//! Chart dataset builders.
//!
//! One builder per chart view, each a pure function of the sample slice and
//! its scalar parameters: altitude-vs-time, speed-vs-time, mode timeline,
//! planar location path, and the activity-mode histogram. Builders
//! recompute from scratch on every call and hold no cache; callers re-invoke
//! when the viewed range changes and debounce externally if needed.
//!
//! ## Example
//! ```rust
//! use track_charts::{build_speed_chart, PlanarPoint, TrackMode, TrackSample, TrackSummary};
//!
//! let samples: Vec<TrackSample> = (0..60)
//!     .map(|i| {
//!         TrackSample::new(
//!             i as f64 * 10.0,
//!             TrackMode::Ski,
//!             1500.0 - i as f64,
//!             10.0 + (i % 7) as f64,
//!             PlanarPoint::new(i as f64, 0.0),
//!         )
//!     })
//!     .collect();
//! let summary = TrackSummary::from_samples(1_700_000_000, &samples).unwrap();
//!
//! let dataset = build_speed_chart(&samples, &summary, 2).unwrap();
//! assert_eq!(dataset.points.len(), 30);
//! ```

use std::ops::Range;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::binning::{color_bands, histogram, Histogram};
use crate::error::{ChartError, Result};
use crate::grid::{magnitude_grid, time_grid, GridLine, ALTITUDE_GRID_STEP, SPEED_GRID_STEP};
use crate::range::{FieldRange, SampleField};
use crate::segment::ColorBand;
use crate::{TrackSample, TrackSummary};

/// Fixed `min_y`/`max_y` of the timeline strip.
const TIMELINE_Y_RANGE: (f64, f64) = (-2.0, 2.0);

/// Fixed `min_v`/`max_v` of the timeline strip (stop..lift).
const TIMELINE_V_RANGE: (f64, f64) = (0.0, 2.0);

/// One down-sampled chart point: source index, axis position and the
/// secondary value used for per-point coloring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub i: usize,
    pub x: f64,
    pub y: f64,
    pub v: f64,
}

/// Render-ready dataset for the time-series charts (altitude, speed,
/// timeline). Extrema cover exactly the stride-sampled subset visited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_v: f64,
    pub max_v: f64,
    pub grid_x: Vec<GridLine>,
    pub grid_y: Vec<GridLine>,
    pub points: Vec<ChartPoint>,
}

/// Render-ready dataset for the location chart: a full master point list
/// for scrubbing/markers plus speed-colored curve bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDataset {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_v: f64,
    pub max_v: f64,
    pub master: Vec<ChartPoint>,
    pub bands: Vec<ColorBand>,
}

/// Clamp a requested stride to `[1, 100]`.
fn clamp_stride(incr: u32) -> usize {
    incr.clamp(1, 100) as usize
}

/// Resolve an optional sub-range against the sequence, clamping like a
/// slice operation, and error on an empty result.
fn sub_slice<'a>(
    samples: &'a [TrackSample],
    range: Option<Range<usize>>,
    context: &str,
) -> Result<&'a [TrackSample]> {
    let range = range.unwrap_or(0..samples.len());
    let start = range.start.min(samples.len());
    let end = range.end.min(samples.len());

    if start >= end {
        return Err(ChartError::EmptyTrack {
            context: context.to_string(),
        });
    }
    Ok(&samples[start..end])
}

/// Shared body of the altitude and speed charts: x = elapsed time,
/// y = primary field, v = secondary field for per-segment coloring.
fn build_time_series(
    samples: &[TrackSample],
    summary: &TrackSummary,
    stride: usize,
    y_field: SampleField,
    v_field: SampleField,
    y_step: f64,
    context: &str,
) -> Result<ChartDataset> {
    let first = samples.first().ok_or_else(|| ChartError::EmptyTrack {
        context: context.to_string(),
    })?;

    let mut x_range = FieldRange::from_value(first.t);
    let mut y_range = FieldRange::from_value(y_field.value(first));
    let mut v_range = FieldRange::from_value(v_field.value(first));

    let mut points = vec![ChartPoint {
        i: 0,
        x: first.t,
        y: y_field.value(first),
        v: v_field.value(first),
    }];

    let mut i = stride;
    while i < samples.len() {
        let sample = &samples[i];
        x_range.include(sample.t);

        let y = y_field.value(sample);
        y_range.include(y);

        let v = v_field.value(sample);
        v_range.include(v);

        points.push(ChartPoint {
            i,
            x: sample.t,
            y,
            v,
        });
        i += stride;
    }

    Ok(ChartDataset {
        min_x: x_range.min,
        max_x: x_range.max,
        min_y: y_range.min,
        max_y: y_range.max,
        min_v: v_range.min,
        max_v: v_range.max,
        grid_x: time_grid(x_range.min, x_range.max, summary.start_seconds),
        grid_y: magnitude_grid(y_range.min, y_range.max, y_step),
        points,
    })
}

/// Build the altitude-vs-time dataset, colored by speed.
///
/// `incr` is the down-sampling stride, clamped to `[1, 100]`.
pub fn build_altitude_chart(
    samples: &[TrackSample],
    summary: &TrackSummary,
    incr: u32,
) -> Result<ChartDataset> {
    let stride = clamp_stride(incr);
    debug!(
        "[Charts] Building altitude dataset: {} samples, stride {}",
        samples.len(),
        stride
    );
    build_time_series(
        samples,
        summary,
        stride,
        SampleField::Altitude,
        SampleField::Speed,
        ALTITUDE_GRID_STEP,
        "altitude chart",
    )
}

/// Build the speed-vs-time dataset, colored by altitude.
///
/// `incr` is the down-sampling stride, clamped to `[1, 100]`.
pub fn build_speed_chart(
    samples: &[TrackSample],
    summary: &TrackSummary,
    incr: u32,
) -> Result<ChartDataset> {
    let stride = clamp_stride(incr);
    debug!(
        "[Charts] Building speed dataset: {} samples, stride {}",
        samples.len(),
        stride
    );
    build_time_series(
        samples,
        summary,
        stride,
        SampleField::Speed,
        SampleField::Altitude,
        SPEED_GRID_STEP,
        "speed chart",
    )
}

/// Build the activity-mode timeline: a flat strip at `y = 0` with the mode
/// as the coloring value and fixed y/v extents.
pub fn build_timeline_chart(
    samples: &[TrackSample],
    summary: &TrackSummary,
    incr: u32,
    range: Option<Range<usize>>,
) -> Result<ChartDataset> {
    let stride = clamp_stride(incr);
    let slice = sub_slice(samples, range, "timeline chart")?;
    debug!(
        "[Charts] Building timeline dataset: {} samples, stride {}",
        slice.len(),
        stride
    );

    let first = &slice[0];
    let mut x_range = FieldRange::from_value(first.t);

    let mut points = vec![ChartPoint {
        i: 0,
        x: first.t,
        y: 0.0,
        v: first.mode.value(),
    }];

    let mut i = stride;
    while i < slice.len() {
        let sample = &slice[i];
        x_range.include(sample.t);
        points.push(ChartPoint {
            i,
            x: sample.t,
            y: 0.0,
            v: sample.mode.value(),
        });
        i += stride;
    }

    Ok(ChartDataset {
        min_x: x_range.min,
        max_x: x_range.max,
        min_y: TIMELINE_Y_RANGE.0,
        max_y: TIMELINE_Y_RANGE.1,
        min_v: TIMELINE_V_RANGE.0,
        max_v: TIMELINE_V_RANGE.1,
        grid_x: time_grid(x_range.min, x_range.max, summary.start_seconds),
        grid_y: Vec::new(),
        points,
    })
}

/// Build the planar location dataset: a master point list at the sampled
/// stride plus `depth` speed-colored curve bands.
pub fn build_location_chart(
    samples: &[TrackSample],
    depth: usize,
    incr: u32,
    range: Option<Range<usize>>,
) -> Result<LocationDataset> {
    if depth == 0 {
        return Err(ChartError::InvalidDepth { depth });
    }
    let stride = clamp_stride(incr);
    let slice = sub_slice(samples, range, "location chart")?;
    debug!(
        "[Charts] Building location dataset: {} samples, stride {}, {} bands",
        slice.len(),
        stride,
        depth
    );

    let first = &slice[0];
    let mut x_range = FieldRange::from_value(first.pos.x);
    let mut y_range = FieldRange::from_value(first.pos.y);
    let mut v_range = FieldRange::from_value(first.speed);

    let mut master = vec![ChartPoint {
        i: 0,
        x: first.pos.x,
        y: first.pos.y,
        v: first.speed,
    }];

    let mut i = stride;
    while i < slice.len() {
        let sample = &slice[i];
        x_range.include(sample.pos.x);
        y_range.include(sample.pos.y);
        v_range.include(sample.speed);
        master.push(ChartPoint {
            i,
            x: sample.pos.x,
            y: sample.pos.y,
            v: sample.speed,
        });
        i += stride;
    }

    let bands = color_bands(slice, SampleField::Speed, depth, stride)?;

    Ok(LocationDataset {
        min_x: x_range.min,
        max_x: x_range.max,
        min_y: y_range.min,
        max_y: y_range.max,
        min_v: v_range.min,
        max_v: v_range.max,
        master,
        bands,
    })
}

/// Build the activity-mode histogram: every sample at stride 1, bucketed
/// by mode. `depth == 0` auto-sizes to one bucket per mode value present.
pub fn build_activity_histogram(samples: &[TrackSample], depth: usize) -> Result<Histogram> {
    debug!(
        "[Charts] Building activity histogram: {} samples, depth {}",
        samples.len(),
        depth
    );
    histogram(samples, SampleField::Mode, depth)
}
