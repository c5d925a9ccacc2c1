//! `Moment`: an absolute instant stored as a UTC Julian Date.
//!
//! Every astronomical query converts to TT through [`Moment::jd_tt`]; civil
//! output goes through [`UtcTime`] or chrono.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};

use crate::civil::date_to_jd;
use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, jd_to_centuries};
use crate::leap::tt_minus_utc_s;
use crate::utc_time::UtcTime;

/// JD of the Unix epoch, 1970-01-01T00:00:00Z.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// An absolute instant.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Moment {
    jd_utc: f64,
}

impl Moment {
    pub const fn from_jd_utc(jd_utc: f64) -> Self {
        Self { jd_utc }
    }

    pub fn from_utc(utc: &UtcTime) -> Self {
        Self::from_jd_utc(utc.to_jd_utc())
    }

    /// 00:00:00 UTC on a civil date.
    pub fn at_midnight(date: NaiveDate) -> Self {
        Self::from_jd_utc(date_to_jd(date))
    }

    /// A UTC time of day on a civil date.
    pub fn from_date_time(
        date: NaiveDate,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidTimeOfDay {
                hour,
                minute,
                second,
            });
        }
        let secs = hour as f64 * 3600.0 + minute as f64 * 60.0 + second;
        Ok(Self::at_midnight(date).add_seconds(secs))
    }

    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        let ms = dt.timestamp_millis() as f64;
        Self::from_jd_utc(UNIX_EPOCH_JD + ms / 86_400_000.0)
    }

    pub const fn jd_utc(self) -> f64 {
        self.jd_utc
    }

    /// Julian Date on the TT scale.
    pub fn jd_tt(self) -> f64 {
        self.jd_utc + tt_minus_utc_s(self.jd_utc) / SECONDS_PER_DAY
    }

    /// Julian centuries of TT since J2000.0.
    pub fn centuries_tt(self) -> f64 {
        jd_to_centuries(self.jd_tt())
    }

    pub fn add_days(self, days: f64) -> Self {
        Self::from_jd_utc(self.jd_utc + days)
    }

    pub fn add_seconds(self, seconds: f64) -> Self {
        self.add_days(seconds / SECONDS_PER_DAY)
    }

    /// Signed days from `earlier` to `self`.
    pub fn days_since(self, earlier: Moment) -> f64 {
        self.jd_utc - earlier.jd_utc
    }

    pub fn to_utc_time(self) -> UtcTime {
        UtcTime::from_jd_utc(self.jd_utc)
    }

    /// Millisecond-resolution chrono timestamp.
    pub fn to_datetime(self) -> Result<DateTime<Utc>, TimeError> {
        let ms = ((self.jd_utc - UNIX_EPOCH_JD) * 86_400_000.0).round();
        if !ms.is_finite() {
            return Err(TimeError::OutOfRange(self.jd_utc));
        }
        DateTime::from_timestamp_millis(ms as i64).ok_or(TimeError::OutOfRange(self.jd_utc))
    }
}

impl std::fmt::Display for Moment {
    /// ISO-8601 UTC, rounded to the whole second.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounded = (self.jd_utc * SECONDS_PER_DAY).round() / SECONDS_PER_DAY;
        let mut utc = UtcTime::from_jd_utc(rounded);
        utc.second = utc.second.round();
        utc.fmt(f)
    }
}

impl Serialize for Moment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
