//! Time handling for panchang computations.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions
//! - An embedded leap-second table for the UTC → TT chain
//! - `Moment`, the absolute instant every search and position query uses
//! - Greenwich/local sidereal time
//! - Civil date parsing (the source of invalid-date input errors)

pub mod civil;
pub mod error;
pub mod julian;
pub mod leap;
pub mod moment;
pub mod sidereal;
pub mod utc_time;

pub use civil::{civil_date, parse_civil_date};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries,
};
pub use leap::{TT_MINUS_TAI_S, tai_minus_utc_s, tt_minus_utc_s};
pub use moment::Moment;
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use utc_time::UtcTime;
