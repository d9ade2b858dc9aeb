//! Gradient color mapping for chart rendering.
//!
//! Two five-segment linear gradients map a normalized scalar in `[0, 1]` to
//! an uppercase `#RRGGBB` string. Both schemes split the input into fifths
//! and interpolate one channel per fifth, so segment boundaries land on
//! exact primary/secondary colors.
//!
//! ## Example
//! ```rust
//! use track_charts::ColorScheme;
//!
//! assert_eq!(ColorScheme::LowHigh.color_at(0.0), "#FF0000");
//! assert_eq!(ColorScheme::LowHigh.color_at(1.0), "#FFFFFF");
//! ```

use serde::{Deserialize, Serialize};

/// Selects one of the two gradient schemes.
///
/// Callers must pass `val` in `[0, 1]`; out-of-range input is not clamped
/// and the resulting color is unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Low is red, high is white: red → yellow → green → cyan → blue → white.
    /// Used for speed and location-by-speed coloring.
    LowHigh,
    /// Low is black, high is red: black → blue → cyan → green → yellow → red.
    /// Used for mode and altitude coloring.
    LowHighAlt,
}

impl ColorScheme {
    /// Map a normalized value to an uppercase `#RRGGBB` hex color.
    pub fn color_at(&self, val: f64) -> String {
        let (r, g, b) = match self {
            ColorScheme::LowHigh => low_high(val),
            ColorScheme::LowHighAlt => low_high_alt(val),
        };
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

fn low_high(val: f64) -> (u8, u8, u8) {
    if val <= 1.0 / 5.0 {
        // Red to yellow
        (255, rising(val * 5.0), 0)
    } else if val <= 2.0 / 5.0 {
        // Yellow to green
        (falling((val - 1.0 / 5.0) * 5.0), 255, 0)
    } else if val <= 3.0 / 5.0 {
        // Green to cyan
        (0, 255, rising((val - 2.0 / 5.0) * 5.0))
    } else if val <= 4.0 / 5.0 {
        // Cyan to blue
        (0, falling((val - 3.0 / 5.0) * 5.0), 255)
    } else {
        // Blue to white
        let vx = (val - 4.0 / 5.0) * 5.0;
        (rising(vx), rising(vx), 255)
    }
}

fn low_high_alt(val: f64) -> (u8, u8, u8) {
    if val <= 1.0 / 5.0 {
        // Black to blue
        (0, 0, rising(val * 5.0))
    } else if val <= 2.0 / 5.0 {
        // Blue to cyan
        (0, rising((val - 1.0 / 5.0) * 5.0), 255)
    } else if val <= 3.0 / 5.0 {
        // Cyan to green
        (0, 255, falling((val - 2.0 / 5.0) * 5.0))
    } else if val <= 4.0 / 5.0 {
        // Green to yellow
        (rising((val - 3.0 / 5.0) * 5.0), 255, 0)
    } else {
        // Yellow to red
        (255, falling((val - 4.0 / 5.0) * 5.0), 0)
    }
}

/// Channel ramping 0 → 255 across one fifth.
fn rising(vx: f64) -> u8 {
    (vx * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Channel ramping 255 → 0 across one fifth.
fn falling(vx: f64) -> u8 {
    (255.0 - (vx * 255.0).round()).clamp(0.0, 255.0) as u8
}
