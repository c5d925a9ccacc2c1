//! Angular classification of Sun/Moon longitudes into panchang elements.
//!
//! This crate provides:
//! - Ayanamsha (sidereal offset) for a handful of reference systems
//! - Tithi and paksha from the Moon−Sun elongation
//! - Karana (half-tithi) from the same elongation
//! - Nakshatra and pada from the sidereal Moon
//! - Yoga from the sidereal Sun + Moon sum
//! - Rashi from any sidereal longitude
//! - Masa (lunar month) names and Vaar (weekday)
//!
//! Everything here is pure arithmetic on angles; no ephemeris access.

#[macro_use]
mod util;

pub mod ayanamsha;
pub mod error;
pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;
pub mod vaar;
pub mod yoga;

pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg, general_precession_longitude_deg};
pub use error::VedicError;
pub use karana::{ALL_KARANAS, Karana, KaranaInfo, karana_from_elongation, karana_from_half_index};
pub use masa::{ALL_MASAS, Masa};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, rashi_from_longitude};
pub use tithi::{ALL_TITHI_NAMES, Paksha, TITHI_SPAN, TithiInfo, TithiName, tithi_from_elongation};
pub use util::normalize_360;
pub use vaar::{ALL_VAARS, Vaar};
pub use yoga::{ALL_YOGAS, YOGA_SPAN, Yoga, YogaInfo, yoga_from_sum};
