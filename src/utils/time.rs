//! Time utilities: parsing HH:MM, duration computations, 12-hour labels.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// First hour shown in the week grid.
pub const FIRST_HOUR: u32 = 6;
/// Last hour shown in the week grid (inclusive).
pub const LAST_HOUR: u32 = 22;

/// Display hours of the grid: 6 AM through 10 PM, 17 rows.
pub fn hour_range() -> impl Iterator<Item = u32> {
    FIRST_HOUR..=LAST_HOUR
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Signed duration in minutes; negative when `end` precedes `start`.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes()
}

/// 12-hour label with minutes, e.g. `9:05 AM`, `12:30 PM`.
pub fn format_time(time: NaiveTime) -> String {
    let (hour, minute) = (time.hour(), time.minute());
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, minute, period)
}

/// 12-hour label for a whole hour, e.g. `6 AM`, `12 PM`.
pub fn format_hour(hour: u32) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", display_hour, period)
}

/// The selectable half-hour times within the display range, each with its
/// 12-hour label. This is the picker the original form offered.
pub fn time_options() -> Vec<(NaiveTime, String)> {
    let mut options = Vec::new();
    for hour in hour_range() {
        for minute in [0, 30] {
            // hour <= 22 and minute in {0, 30}, always representable
            let t = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
            options.push((t, format_time(t)));
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_and_rejects() {
        assert_eq!(parse_time("09:30"), Some(t(9, 30)));
        assert_eq!(parse_time("9:30"), Some(t(9, 30)));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("nope"), None);
    }

    #[test]
    fn durations_can_be_negative() {
        assert_eq!(minutes_between(t(9, 0), t(9, 30)), 30);
        assert_eq!(minutes_between(t(10, 0), t(9, 0)), -60);
        assert_eq!(minutes_between(t(9, 0), t(9, 0)), 0);
    }

    #[test]
    fn twelve_hour_labels() {
        assert_eq!(format_time(t(6, 0)), "6:00 AM");
        assert_eq!(format_time(t(9, 5)), "9:05 AM");
        assert_eq!(format_time(t(12, 30)), "12:30 PM");
        assert_eq!(format_time(t(22, 0)), "10:00 PM");
        assert_eq!(format_hour(6), "6 AM");
        assert_eq!(format_hour(12), "12 PM");
        assert_eq!(format_hour(22), "10 PM");
    }

    #[test]
    fn grid_hours_cover_six_to_twenty_two() {
        let hours: Vec<u32> = hour_range().collect();
        assert_eq!(hours.len(), 17);
        assert_eq!(hours.first(), Some(&6));
        assert_eq!(hours.last(), Some(&22));
    }

    #[test]
    fn options_are_half_hour_steps_in_order() {
        let options = time_options();
        assert_eq!(options.len(), 34);
        assert_eq!(options[0].0, t(6, 0));
        assert_eq!(options[0].1, "6:00 AM");
        assert_eq!(options[1].0, t(6, 30));
        assert_eq!(options.last().unwrap().0, t(22, 30));

        for pair in options.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}
