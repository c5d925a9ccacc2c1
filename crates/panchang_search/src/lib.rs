//! Event search and panchang assembly on top of an [`Ephemeris`] provider.
//!
//! This crate provides:
//! - Sunrise/sunset search over the local mean-solar day, with an explicit
//!   06:00/18:00 UTC fallback
//! - Lookback search for the latest new or full moon before an instant
//! - Sun/Moon longitudes with the sidereal (ayanamsha) correction
//! - Amanta and purnimanta lunar month resolution
//! - [`compute_panchang`], which assembles a full [`PanchangRecord`]
//!
//! Searches never fail the computation: a window that finds nothing, or in
//! which the provider errors, is a `NotFound` outcome and the caller falls
//! back deliberately.
//!
//! [`Ephemeris`]: panchang_ephem::Ephemeris

pub mod config;
pub mod error;
pub mod event;
pub mod event_types;
pub mod month;
pub mod month_types;
pub mod panchang;
pub mod panchang_types;
pub mod position;

pub use config::{PanchangConfig, PhaseSearchConfig, RiseSetConfig};
pub use error::SearchError;
pub use event::{
    FALLBACK_SUNRISE_HOUR, FALLBACK_SUNSET_HOUR, SUNRISE_SCAN_STEP_DAYS, last_phase_before,
    local_mean_day, phase_bucket, sunrise_sunset,
};
pub use event_types::{LunarPhase, PhaseSearch, SunriseSunset};
pub use month::{resolve_lunar_months, resolve_lunar_months_from};
pub use month_types::{
    LunarMonths, LunarPhaseAnchor, MonthAnchorTable, MonthSource, MonthSystem, ResolvedMonth,
};
pub use panchang::compute_panchang;
pub use panchang_types::{
    ApproximationFlags, KaranaRecord, NakshatraRecord, PanchangRecord, TithiRecord, YogaRecord,
};
pub use position::{LongitudeSample, longitudes_at};
