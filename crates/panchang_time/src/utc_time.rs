//! UTC calendar date/time with millisecond-resolved seconds.

use crate::julian::{calendar_to_jd, jd_to_calendar};

const MS_PER_DAY: f64 = 86_400_000.0;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Date on the UTC scale.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar form of a UTC Julian Date, rounded to the millisecond.
    pub fn from_jd_utc(jd_utc: f64) -> Self {
        let mut day_start = (jd_utc + 0.5).floor() - 0.5;
        let mut ms = ((jd_utc - day_start) * MS_PER_DAY).round() as i64;
        if ms >= MS_PER_DAY as i64 {
            ms -= MS_PER_DAY as i64;
            day_start += 1.0;
        }
        let (year, month, day_frac) = jd_to_calendar(day_start);
        Self {
            year,
            month,
            day: day_frac.round() as u32,
            hour: (ms / 3_600_000) as u32,
            minute: ((ms / 60_000) % 60) as u32,
            second: (ms % 60_000) as f64 / 1000.0,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn display_fractional_seconds() {
        let t = UtcTime::new(2024, 1, 15, 12, 30, 5.25);
        assert_eq!(t.to_string(), "2024-01-15T12:30:05.250Z");
    }

    #[test]
    fn jd_round_trip_keeps_fields() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        let back = UtcTime::from_jd_utc(t.to_jd_utc());
        assert_eq!((back.year, back.month, back.day), (2024, 3, 20));
        assert_eq!((back.hour, back.minute), (12, 30));
        assert!((back.second - 45.5).abs() < 1e-3);
    }

    #[test]
    fn end_of_day_rolls_over() {
        // 0.1 ms before midnight rounds up to the next day
        let jd = UtcTime::new(2023, 12, 31, 0, 0, 0.0).to_jd_utc() + 1.0 - 1e-9;
        let t = UtcTime::from_jd_utc(jd);
        assert_eq!((t.year, t.month, t.day, t.hour), (2024, 1, 1, 0));
    }
}
