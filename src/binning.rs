//! Histogram and color-band binning over track sample fields.
//!
//! Two partitioning modes share the clamp-to-last-bucket rule:
//! - **Histogram**: count samples into `depth` equal-width buckets of a
//!   field's value range (the activity-mode chart).
//! - **Bands**: group consecutive-pair curve segments into `depth` color
//!   bands by a secondary field (the location path colored by speed).
//!
//! ## Example
//! ```rust
//! use track_charts::{histogram, PlanarPoint, SampleField, TrackMode, TrackSample};
//!
//! let samples: Vec<TrackSample> = [0, 0, 1, 1, 2]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &m)| {
//!         TrackSample::new(
//!             i as f64,
//!             TrackMode::from_value(m),
//!             1000.0,
//!             5.0,
//!             PlanarPoint::new(0.0, 0.0),
//!         )
//!     })
//!     .collect();
//!
//! // depth 0 auto-sizes to one bucket per unit of the field.
//! let hist = histogram(&samples, SampleField::Mode, 0).unwrap();
//! assert_eq!(hist.buckets.len(), 3);
//! assert_eq!(hist.sum_v, 5);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::color::ColorScheme;
use crate::error::{ChartError, Result};
use crate::range::{scan_field, FieldRange, SampleField};
use crate::segment::{ColorBand, CurveSegment};
use crate::TrackSample;

/// One histogram cell: the last contributing value and the member count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub x: f64,
    pub v: u32,
}

/// Result of histogram binning over one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// True extrema of the field at stride 1.
    pub min_x: f64,
    pub max_x: f64,
    /// Total samples scanned; normalizer for proportional rendering.
    pub sum_v: u32,
    /// Exactly `depth` buckets, empty ones included.
    pub buckets: Vec<HistogramBucket>,
}

/// Resolve a requested depth against a field range: 0 means one bucket per
/// unit of the field.
fn resolve_depth(depth: usize, range: &FieldRange) -> usize {
    if depth == 0 {
        (1.0 + range.span()) as usize
    } else {
        depth
    }
}

/// Equal-width bucket index for a value, clamped to the last bucket.
fn bucket_index(value: f64, min: f64, denominator: f64, depth: usize) -> usize {
    let xf = (value - min) / denominator;
    (((xf * depth as f64).floor()) as usize).min(depth - 1)
}

/// Bin every sample (stride 1) of `field` into `depth` equal-width buckets.
///
/// With `depth == 0` the bucket count is auto-set to `1 + (max - min)` so
/// each whole unit of the field maps to one bucket, which is how the
/// activity-mode histogram is built.
pub fn histogram(samples: &[TrackSample], field: SampleField, depth: usize) -> Result<Histogram> {
    let range = scan_field(samples, field, 1)?;
    let depth = resolve_depth(depth, &range);
    // The +1 keeps the maximum value inside the last bucket.
    let denominator = 1.0 + range.span();

    let mut buckets = vec![HistogramBucket { x: 0.0, v: 0 }; depth];
    let mut sum_v = 0u32;

    for sample in samples {
        let value = field.value(sample);
        let ci = bucket_index(value, range.min, denominator, depth);
        buckets[ci].x = value;
        buckets[ci].v += 1;
        sum_v += 1;
    }

    debug!(
        "[Binning] Histogram over {:?}: {} samples into {} buckets",
        field, sum_v, depth
    );

    Ok(Histogram {
        min_x: range.min,
        max_x: range.max,
        sum_v,
        buckets,
    })
}

/// Parallel histogram binning. Falls back to the sequential path below
/// 10,000 samples where the split overhead dominates.
#[cfg(feature = "parallel")]
pub fn histogram_parallel(
    samples: &[TrackSample],
    field: SampleField,
    depth: usize,
) -> Result<Histogram> {
    if samples.len() < 10_000 {
        return histogram(samples, field, depth);
    }

    let range = scan_field(samples, field, 1)?;
    let depth = resolve_depth(depth, &range);
    let denominator = 1.0 + range.span();

    // Per-bucket count plus the highest-index contribution, so the merged
    // result keeps the same "last contributing value" as the sequential path.
    let (counts, last) = samples
        .par_iter()
        .enumerate()
        .fold(
            || (vec![0u32; depth], vec![None::<(usize, f64)>; depth]),
            |(mut counts, mut last), (i, sample)| {
                let value = field.value(sample);
                let ci = bucket_index(value, range.min, denominator, depth);
                counts[ci] += 1;
                if last[ci].map_or(true, |(j, _)| i > j) {
                    last[ci] = Some((i, value));
                }
                (counts, last)
            },
        )
        .reduce(
            || (vec![0u32; depth], vec![None; depth]),
            |(mut c1, mut l1), (c2, l2)| {
                for i in 0..depth {
                    c1[i] += c2[i];
                    match (l1[i], l2[i]) {
                        (None, other) => l1[i] = other,
                        (Some((a, _)), Some((b, _))) if b > a => l1[i] = l2[i],
                        _ => {}
                    }
                }
                (c1, l1)
            },
        );

    let buckets = counts
        .iter()
        .zip(&last)
        .map(|(&v, contribution)| HistogramBucket {
            x: contribution.map_or(0.0, |(_, value)| value),
            v,
        })
        .collect();

    Ok(Histogram {
        min_x: range.min,
        max_x: range.max,
        sum_v: samples.len() as u32,
        buckets,
    })
}

/// Group consecutive stride-sampled pairs of `samples` into `depth` color
/// bands by the *later* sample's `field` value.
///
/// Band `i` carries the [`ColorScheme::LowHigh`] color at `i / (depth - 1)`;
/// a single band sits at the gradient's high end. A degenerate field range
/// (flat trace) collapses every pair into band 0 rather than failing the
/// chart.
pub fn color_bands(
    samples: &[TrackSample],
    field: SampleField,
    depth: usize,
    stride: usize,
) -> Result<Vec<ColorBand>> {
    if depth == 0 {
        return Err(ChartError::InvalidDepth { depth });
    }
    let stride = stride.max(1);
    let range = scan_field(samples, field, stride)?;

    let mut bands: Vec<ColorBand> = (0..depth)
        .map(|i| {
            let position = if depth == 1 {
                1.0
            } else {
                i as f64 / (depth - 1) as f64
            };
            ColorBand {
                color: ColorScheme::LowHigh.color_at(position),
                segments: Vec::new(),
            }
        })
        .collect();

    let mut i = stride;
    while i < samples.len() {
        let ci = match range.normalize(field.value(&samples[i])) {
            Ok(vx) => (((vx * depth as f64).floor()) as usize).min(depth - 1),
            Err(ChartError::DegenerateRange { .. }) => 0,
            Err(e) => return Err(e),
        };
        bands[ci]
            .segments
            .push(CurveSegment::between(&samples[i - stride], &samples[i]));
        i += stride;
    }

    Ok(bands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlanarPoint, TrackMode};

    fn mode_track(modes: &[u8]) -> Vec<TrackSample> {
        modes
            .iter()
            .enumerate()
            .map(|(i, &m)| {
                TrackSample::new(
                    i as f64,
                    TrackMode::from_value(m as i64),
                    1000.0,
                    5.0,
                    PlanarPoint::new(0.0, 0.0),
                )
            })
            .collect()
    }

    fn speed_track(speeds: &[f64]) -> Vec<TrackSample> {
        speeds
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                TrackSample::new(
                    i as f64,
                    TrackMode::Ski,
                    1000.0,
                    s,
                    PlanarPoint::new(i as f64, i as f64),
                )
            })
            .collect()
    }

    #[test]
    fn test_histogram_auto_depth() {
        let track = mode_track(&[0, 0, 1, 1, 2]);
        let hist = histogram(&track, SampleField::Mode, 0).unwrap();

        assert_eq!(hist.min_x, 0.0);
        assert_eq!(hist.max_x, 2.0);
        assert_eq!(hist.buckets.len(), 3);
        assert_eq!(hist.buckets[0].v, 2);
        assert_eq!(hist.buckets[1].v, 2);
        assert_eq!(hist.buckets[2].v, 1);
        assert_eq!(hist.sum_v, 5);
    }

    #[test]
    fn test_histogram_counts_sum_to_total() {
        let track = mode_track(&[0, 1, 2, 1, 0, 2, 2, 1]);
        let hist = histogram(&track, SampleField::Mode, 4).unwrap();

        assert_eq!(hist.buckets.len(), 4);
        let total: u32 = hist.buckets.iter().map(|b| b.v).sum();
        assert_eq!(total, hist.sum_v);
        assert_eq!(hist.sum_v, track.len() as u32);
    }

    #[test]
    fn test_histogram_bucket_keeps_last_value() {
        let track = mode_track(&[2, 0]);
        let hist = histogram(&track, SampleField::Mode, 0).unwrap();
        assert_eq!(hist.buckets[0].x, 0.0);
        assert_eq!(hist.buckets[2].x, 2.0);
        // No sample landed in the middle bucket.
        assert_eq!(hist.buckets[1].v, 0);
        assert_eq!(hist.buckets[1].x, 0.0);
    }

    #[test]
    fn test_histogram_single_mode() {
        let track = mode_track(&[1, 1, 1]);
        let hist = histogram(&track, SampleField::Mode, 0).unwrap();
        assert_eq!(hist.buckets.len(), 1);
        assert_eq!(hist.buckets[0].v, 3);
    }

    #[test]
    fn test_histogram_empty_errors() {
        assert!(matches!(
            histogram(&[], SampleField::Mode, 0),
            Err(ChartError::EmptyTrack { .. })
        ));
    }

    #[test]
    fn test_bands_partition_all_pairs() {
        let track = speed_track(&[5.0, 10.0, 8.0, 15.0, 12.0, 3.0]);
        let bands = color_bands(&track, SampleField::Speed, 4, 1).unwrap();

        assert_eq!(bands.len(), 4);
        let total: usize = bands.iter().map(|b| b.segments.len()).sum();
        assert_eq!(total, track.len() - 1);
    }

    #[test]
    fn test_bands_stride_two() {
        let track = speed_track(&[5.0, 10.0, 8.0, 15.0, 12.0]);
        let bands = color_bands(&track, SampleField::Speed, 3, 2).unwrap();

        // Pairs (0,2) and (2,4) only.
        let total: usize = bands.iter().map(|b| b.segments.len()).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_bands_max_value_clamps_to_last() {
        let track = speed_track(&[0.0, 30.0]);
        let bands = color_bands(&track, SampleField::Speed, 5, 1).unwrap();
        assert_eq!(bands[4].segments.len(), 1);
    }

    #[test]
    fn test_band_colors_follow_gradient() {
        let track = speed_track(&[5.0, 10.0]);
        let bands = color_bands(&track, SampleField::Speed, 3, 1).unwrap();
        assert_eq!(bands[0].color, "#FF0000");
        assert_eq!(bands[2].color, "#FFFFFF");
    }

    #[test]
    fn test_single_band_color_is_gradient_end() {
        let track = speed_track(&[5.0, 10.0]);
        let bands = color_bands(&track, SampleField::Speed, 1, 1).unwrap();
        assert_eq!(bands[0].color, "#FFFFFF");
        assert_eq!(bands[0].segments.len(), 1);
    }

    #[test]
    fn test_flat_field_collapses_into_first_band() {
        let track = speed_track(&[7.0, 7.0, 7.0, 7.0]);
        let bands = color_bands(&track, SampleField::Speed, 3, 1).unwrap();
        assert_eq!(bands[0].segments.len(), 3);
        assert!(bands[1].segments.is_empty());
        assert!(bands[2].segments.is_empty());
    }

    #[test]
    fn test_bands_zero_depth_errors() {
        let track = speed_track(&[5.0, 10.0]);
        assert!(matches!(
            color_bands(&track, SampleField::Speed, 0, 1),
            Err(ChartError::InvalidDepth { depth: 0 })
        ));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let modes: Vec<u8> = (0..25_000).map(|i| (i % 3) as u8).collect();
        let track = mode_track(&modes);

        let sequential = histogram(&track, SampleField::Mode, 0).unwrap();
        let parallel = histogram_parallel(&track, SampleField::Mode, 0).unwrap();
        assert_eq!(sequential, parallel);
    }
}
