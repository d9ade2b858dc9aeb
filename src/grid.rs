//! Axis gridline generation.
//!
//! The time axis places one line per hour, shifted so lines land on
//! wall-clock hour boundaries rather than multiples of the elapsed time.
//! Magnitude axes use a fixed step per chart type with no offset.

use serde::{Deserialize, Serialize};

/// Time-axis step: one gridline per hour of elapsed time.
pub const TIME_GRID_STEP: f64 = 3600.0;

/// Magnitude-axis step for altitude charts, in meters.
pub const ALTITUDE_GRID_STEP: f64 = 100.0;

/// Magnitude-axis step for speed charts, in kph.
pub const SPEED_GRID_STEP: f64 = 10.0;

/// A single axis reference position for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub at: f64,
}

/// Generate hour-aligned time gridlines covering `[min_x, max_x]`.
///
/// `start_seconds` is the wall-clock start of the activity (seconds since
/// the Unix epoch); each line is shifted by the time remaining until the
/// next full hour so that lines fall on wall-clock hour boundaries.
pub fn time_grid(min_x: f64, max_x: f64, start_seconds: i64) -> Vec<GridLine> {
    let offset = TIME_GRID_STEP - (start_seconds as f64 + min_x).rem_euclid(TIME_GRID_STEP);

    let min_grid = (min_x / TIME_GRID_STEP).floor() * TIME_GRID_STEP;
    let max_grid = (max_x / TIME_GRID_STEP).ceil() * TIME_GRID_STEP;

    let mut lines = Vec::new();
    let mut x = min_grid;
    while x <= max_grid {
        lines.push(GridLine { at: offset + x });
        x += TIME_GRID_STEP;
    }
    lines
}

/// Generate fixed-step magnitude gridlines covering `[min_y, max_y]`,
/// aligned to multiples of `step`.
pub fn magnitude_grid(min_y: f64, max_y: f64, step: f64) -> Vec<GridLine> {
    let max_grid = (max_y / step).ceil() * step;

    let mut lines = Vec::new();
    let mut y = (min_y / step).floor() * step;
    while y <= max_grid {
        lines.push(GridLine { at: y });
        y += step;
    }
    lines
}
