//! Bezier curve-segment assembly for the location path.
//!
//! Control points are computed upstream by the track source when the path
//! is smoothed; this module only pairs adjacent samples into drawable
//! segment descriptors and never does any smoothing of its own.

use serde::{Deserialize, Serialize};

use crate::{PlanarPoint, TrackSample};

/// A drawable cubic Bezier segment between two samples: two endpoints and
/// their associated control handles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub start: PlanarPoint,
    pub start_control: PlanarPoint,
    pub end: PlanarPoint,
    pub end_control: PlanarPoint,
}

impl CurveSegment {
    /// Build the segment connecting `p1` to `p2`.
    ///
    /// The outgoing handle of `p1` and the incoming handle of `p2` shape
    /// the curve between them.
    pub fn between(p1: &TrackSample, p2: &TrackSample) -> Self {
        Self {
            start: p1.pos,
            start_control: p1.control_out,
            end: p2.pos,
            end_control: p2.control_in,
        }
    }
}

/// A color-grouped collection of curve segments sharing a normalized
/// secondary-value range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    /// Uppercase `#RRGGBB` color for every segment in the band.
    pub color: String,
    pub segments: Vec<CurveSegment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrackMode;

    #[test]
    fn test_between_picks_facing_handles() {
        let p1 = TrackSample::new(0.0, TrackMode::Ski, 1000.0, 10.0, PlanarPoint::new(0.0, 0.0))
            .with_controls(PlanarPoint::new(-1.0, 0.0), PlanarPoint::new(1.0, 0.0));
        let p2 = TrackSample::new(10.0, TrackMode::Ski, 990.0, 12.0, PlanarPoint::new(4.0, 2.0))
            .with_controls(PlanarPoint::new(3.0, 2.0), PlanarPoint::new(5.0, 2.0));

        let segment = CurveSegment::between(&p1, &p2);
        assert_eq!(segment.start, p1.pos);
        assert_eq!(segment.start_control, p1.control_out);
        assert_eq!(segment.end, p2.pos);
        assert_eq!(segment.end_control, p2.control_in);
    }
}
