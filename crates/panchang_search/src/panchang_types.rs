//! Types for the assembled panchang record.

use chrono::NaiveDate;
use panchang_ephem::GeoLocation;
use panchang_time::Moment;
use panchang_vedic::{
    Karana, KaranaInfo, Masa, Nakshatra, NakshatraInfo, Paksha, Rashi, TithiInfo, TithiName,
    Vaar, Yoga, YogaInfo,
};
use serde::Serialize;

use crate::month_types::{LunarMonths, MonthSystem};
use crate::position::LongitudeSample;

/// Tithi at sunrise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TithiRecord {
    /// 1-based (1 = Shukla Pratipada .. 30 = Amavasya).
    pub index: u8,
    pub name: TithiName,
    /// e.g. `"Pratipada (Shukla)"`.
    pub label: String,
    pub paksha: Paksha,
    /// 1..=15 within the paksha.
    pub tithi_in_paksha: u8,
}

impl From<TithiInfo> for TithiRecord {
    fn from(info: TithiInfo) -> Self {
        Self {
            index: info.index,
            name: info.name,
            label: info.label(),
            paksha: info.paksha,
            tithi_in_paksha: info.tithi_in_paksha,
        }
    }
}

/// Nakshatra of the sidereal Moon at sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraRecord {
    /// 1-based (1 = Ashwini .. 27 = Revati).
    pub index: u8,
    pub name: Nakshatra,
    /// 1..=4.
    pub pada: u8,
}

impl From<NakshatraInfo> for NakshatraRecord {
    fn from(info: NakshatraInfo) -> Self {
        Self {
            index: info.index,
            name: info.nakshatra,
            pada: info.pada,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaRecord {
    /// 1-based (1..=27).
    pub index: u8,
    pub name: Yoga,
}

impl From<YogaInfo> for YogaRecord {
    fn from(info: YogaInfo) -> Self {
        Self {
            index: info.index,
            name: info.yoga,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaRecord {
    /// Half-tithi index within the lunation (1..=60).
    pub index: u8,
    pub name: Karana,
}

impl From<KaranaInfo> for KaranaRecord {
    fn from(info: KaranaInfo) -> Self {
        Self {
            index: info.index,
            name: info.karana,
        }
    }
}

/// Which parts of a record rest on a fallback rather than a located event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ApproximationFlags {
    /// Sunrise is 06:00 UTC; every sunrise-sampled value inherits this.
    pub sunrise: bool,
    /// Sunset is 18:00 UTC.
    pub sunset: bool,
    pub amanta_month: bool,
    pub purnimanta_month: bool,
}

impl ApproximationFlags {
    pub fn any(&self) -> bool {
        self.sunrise || self.sunset || self.amanta_month || self.purnimanta_month
    }
}

/// Panchang for one civil date at one location, sampled at sunrise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangRecord {
    pub date: NaiveDate,
    pub vaar: Vaar,
    pub location: GeoLocation,
    pub month_system: MonthSystem,
    pub sunrise: Moment,
    pub sunset: Moment,
    pub tithi: TithiRecord,
    pub nakshatra: NakshatraRecord,
    pub yoga: YogaRecord,
    pub karana: KaranaRecord,
    pub moon_rashi: Rashi,
    pub sun_rashi: Rashi,
    pub lunar_month_amanta: Masa,
    pub lunar_month_purnimanta: Masa,
    /// The month under `month_system`.
    pub lunar_month: Masa,
    /// Month provenance for both conventions.
    pub months: LunarMonths,
    pub approximate: ApproximationFlags,
    /// Longitudes at sunrise.
    pub longitudes: LongitudeSample,
}

impl PanchangRecord {
    /// Whether any field rests on a fallback.
    pub fn is_approximate(&self) -> bool {
        self.approximate.any()
    }
}
