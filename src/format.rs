//! Fixed-width readout formatting for summary and marker values.
//!
//! The rendering layer shows these next to the charts (current altitude,
//! speed, position, mode, wall-clock time). All outputs are fixed-width so
//! the readout panel does not jitter as the marker moves.

use crate::{TrackMode, TrackSummary};

/// Altitude as a five-character comma-grouped field, e.g. `00950m`,
/// `1,234m`.
pub fn format_altitude(altitude: f64) -> String {
    let grouped = group_thousands(altitude.round() as i64);
    let padded = format!("0000{}", grouped);
    format!("{}m", &padded[padded.len() - 5..])
}

/// Speed as a five-character field with two decimals, e.g. `05.50kph`.
/// Values past 100 kph keep the last five characters.
pub fn format_speed(speed: f64) -> String {
    let fixed = format!("{:05.2}", speed);
    format!("{}kph", &fixed[fixed.len() - 5..])
}

/// Latitude with four decimals, zero-padded to eight characters.
pub fn format_latitude(latitude: f64) -> String {
    format!("{:08.4}", latitude)
}

/// Longitude with four decimals, zero-padded to eight characters.
pub fn format_longitude(longitude: f64) -> String {
    format!("{:08.4}", longitude)
}

/// Wall-clock `HH:MM` for an epoch-seconds instant shifted by a timezone
/// offset in hours.
pub fn format_clock_time(epoch_seconds: i64, tz_offset_hours: i32) -> String {
    let local = epoch_seconds + i64::from(tz_offset_hours) * 3600;
    let seconds_of_day = local.rem_euclid(86_400);
    format!(
        "{:02}:{:02}",
        seconds_of_day / 3600,
        (seconds_of_day % 3600) / 60
    )
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

impl TrackSummary {
    /// Formatted lowest altitude of the activity.
    pub fn low_altitude_label(&self) -> String {
        format_altitude(self.low_altitude)
    }

    /// Formatted highest altitude of the activity.
    pub fn high_altitude_label(&self) -> String {
        format_altitude(self.high_altitude)
    }

    /// Formatted top speed of the activity.
    pub fn top_speed_label(&self) -> String {
        format_speed(self.top_speed)
    }

    /// Formatted average speed of the activity.
    pub fn avg_speed_label(&self) -> String {
        format_speed(self.avg_speed)
    }

    /// Formatted wall-clock start time.
    pub fn start_time_label(&self, tz_offset_hours: i32) -> String {
        format_clock_time(self.start_seconds, tz_offset_hours)
    }
}

impl TrackMode {
    /// Four-character readout label.
    pub fn label(&self) -> &'static str {
        match self {
            TrackMode::Stop => "STOP",
            TrackMode::Ski => "SKI ",
            TrackMode::Lift => "LIFT",
            TrackMode::Unknown => "N/A ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_altitude_formats() {
        assert_eq!(format_altitude(950.0), "00950m");
        assert_eq!(format_altitude(1234.0), "1,234m");
        assert_eq!(format_altitude(5.0), "00005m");
        assert_eq!(format_altitude(0.0), "00000m");
    }

    #[test]
    fn test_speed_formats() {
        assert_eq!(format_speed(5.5), "05.50kph");
        assert_eq!(format_speed(12.34), "12.34kph");
        assert_eq!(format_speed(0.0), "00.00kph");
        assert_eq!(format_speed(123.45), "23.45kph");
    }

    #[test]
    fn test_coordinate_formats() {
        assert_eq!(format_latitude(45.1234), "045.1234");
        assert_eq!(format_longitude(6.5), "006.5000");
    }

    #[test]
    fn test_clock_time() {
        // 2021-01-01 00:00:00 UTC plus 8.5 hours of day.
        let midnight = 1_609_459_200;
        assert_eq!(format_clock_time(midnight, 0), "00:00");
        assert_eq!(format_clock_time(midnight + 8 * 3600 + 1800, 0), "08:30");
        assert_eq!(format_clock_time(midnight + 8 * 3600 + 1800, 1), "09:30");
        assert_eq!(format_clock_time(midnight + 23 * 3600, 2), "01:00");
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(TrackMode::Stop.label(), "STOP");
        assert_eq!(TrackMode::Ski.label(), "SKI ");
        assert_eq!(TrackMode::Lift.label(), "LIFT");
        assert_eq!(TrackMode::Unknown.label(), "N/A ");
    }
}
