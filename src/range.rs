//! Stride-sampled range scanning over track sample fields.
//!
//! A single pass extracts the minimum and maximum (and optionally the sum)
//! of one field across a sample slice, visiting index 0 and then every
//! `stride`-th index. With `stride > 1` the result reflects the visited
//! subset only, which is exactly what a down-sampled chart renders.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::TrackSample;

/// Selects which field of a [`TrackSample`] a scan reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleField {
    /// Elapsed seconds since activity start.
    Time,
    /// Altitude in meters.
    Altitude,
    /// Speed in kph.
    Speed,
    /// Numeric activity mode (0 = stop, 1 = ski, 2 = lift, 3 = unknown).
    Mode,
    /// Planar projected x position.
    X,
    /// Planar projected y position.
    Y,
}

impl SampleField {
    /// Read this field from a sample.
    pub fn value(&self, sample: &TrackSample) -> f64 {
        match self {
            SampleField::Time => sample.t,
            SampleField::Altitude => sample.altitude,
            SampleField::Speed => sample.speed,
            SampleField::Mode => sample.mode.value(),
            SampleField::X => sample.pos.x,
            SampleField::Y => sample.pos.y,
        }
    }
}

/// Minimum and maximum of a scanned field over the visited subset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    /// A range containing a single value.
    pub fn from_value(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Widen the range to include `value`.
    pub fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Width of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` within the range, in `[0, 1]` for in-range input.
    ///
    /// Errors with [`ChartError::DegenerateRange`] when the span is zero
    /// instead of silently producing NaN.
    pub fn normalize(&self, value: f64) -> Result<f64> {
        let span = self.span();
        if span == 0.0 {
            return Err(ChartError::DegenerateRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok((value - self.min) / span)
    }
}

/// Scan statistics over the visited subset: range, sum and visit count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldStats {
    pub range: FieldRange,
    pub sum: f64,
    pub count: usize,
}

impl FieldStats {
    /// Arithmetic mean of the visited values.
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Compute the min/max of `field` over `samples`, visiting index 0 and then
/// every `stride`-th index. `O(len / stride)`.
pub fn scan_field(samples: &[TrackSample], field: SampleField, stride: usize) -> Result<FieldRange> {
    Ok(scan_stats(samples, field, stride)?.range)
}

/// Like [`scan_field`], also accumulating the sum and count of visited values.
pub fn scan_stats(samples: &[TrackSample], field: SampleField, stride: usize) -> Result<FieldStats> {
    let first = samples.first().ok_or_else(|| ChartError::EmptyTrack {
        context: format!("{:?} field scan", field),
    })?;

    let stride = stride.max(1);
    let mut range = FieldRange::from_value(field.value(first));
    let mut sum = 0.0;
    let mut count = 0;

    for sample in samples.iter().step_by(stride) {
        let value = field.value(sample);
        range.include(value);
        sum += value;
        count += 1;
    }

    Ok(FieldStats { range, sum, count })
}
