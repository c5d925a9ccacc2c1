//! Event Finder: sunrise/sunset and the latest new/full moon before an
//! instant, built on the provider's discrete-event search.
//!
//! Both searches are bounded. A failed or empty search is an explicit
//! outcome (`approximate` flags, [`PhaseSearch::NotFound`]), never an error.

use chrono::NaiveDate;
use panchang_ephem::{Body, Ephemeris, EphemerisError, GeoLocation, Observer};
use panchang_time::Moment;
use panchang_vedic::normalize_360;

use crate::config::{PhaseSearchConfig, RiseSetConfig};
use crate::error::SearchError;
use crate::event_types::{LunarPhase, PhaseSearch, SunriseSunset};

/// Coarse scan step for the horizon predicate (~58 minutes).
pub const SUNRISE_SCAN_STEP_DAYS: f64 = 0.04;

/// UTC hour used when no sunrise is found.
pub const FALLBACK_SUNRISE_HOUR: u32 = 6;

/// UTC hour used when no sunset is found.
pub const FALLBACK_SUNSET_HOUR: u32 = 18;

/// Local mean-solar day of `date`: the UTC day shifted west by
/// `longitude / 15` hours.
pub fn local_mean_day(date: NaiveDate, location: &GeoLocation) -> (Moment, Moment) {
    let start = Moment::at_midnight(date).add_days(-location.longitude_deg / 360.0);
    (start, start.add_days(1.0))
}

/// Find sunrise and sunset of `date` at `location`.
///
/// The predicate is "Sun centre above `-h0`" where `h0` comes from
/// [`RiseSetConfig::horizon_depression_deg`]. The first rising in the local
/// mean day is the sunrise and the first setting is the sunset. When either
/// is missing (polar day or night, or a provider failure) it is replaced by
/// 06:00 / 18:00 UTC of `date` and flagged approximate.
pub fn sunrise_sunset<E: Ephemeris + ?Sized>(
    eph: &E,
    date: NaiveDate,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> Result<SunriseSunset, SearchError> {
    let h0 = config.horizon_depression_deg(location.altitude_m);
    let (start, end) = local_mean_day(date, location);

    let above_horizon = |at: Moment| -> Result<u8, EphemerisError> {
        Ok(u8::from(eph.sun_altitude(at, location)? > -h0))
    };

    let events = match eph.search_discrete_events(start, end, SUNRISE_SCAN_STEP_DAYS, &above_horizon) {
        Ok(events) => events,
        Err(err) => {
            tracing::debug!(%date, error = %err, "sunrise search failed");
            Vec::new()
        }
    };

    let rising = events.iter().find(|e| e.value == 1).map(|e| e.at);
    let setting = events.iter().find(|e| e.value == 0).map(|e| e.at);

    let sunrise = match rising {
        Some(at) => at,
        None => {
            tracing::warn!(%date, lat = location.latitude_deg, "no sunrise found, using 06:00 UTC");
            Moment::from_date_time(date, FALLBACK_SUNRISE_HOUR, 0, 0.0)?
        }
    };
    let sunset = match setting {
        Some(at) => at,
        None => {
            tracing::warn!(%date, lat = location.latitude_deg, "no sunset found, using 18:00 UTC");
            Moment::from_date_time(date, FALLBACK_SUNSET_HOUR, 0, 0.0)?
        }
    };

    Ok(SunriseSunset {
        sunrise,
        sunset,
        sunrise_approximate: rising.is_none(),
        sunset_approximate: setting.is_none(),
    })
}

/// Geocentric elongation quarter at `at`: `floor((moon - sun) / 90) mod 4`.
pub fn phase_bucket<E: Ephemeris + ?Sized>(eph: &E, at: Moment) -> Result<u8, EphemerisError> {
    let sun = eph.apparent_longitude(Body::Sun, at, Observer::Geocenter)?;
    let moon = eph.apparent_longitude(Body::Moon, at, Observer::Geocenter)?;
    let elong = normalize_360(moon - sun);
    Ok(((elong / 90.0).floor() as u8).min(3))
}

/// Latest instant of `phase` at or before `reference`.
///
/// Windows from [`PhaseSearchConfig::effective_windows`] are tried from the
/// narrowest; the first window holding a qualifying event wins. A window in
/// which the provider errors counts as empty.
pub fn last_phase_before<E: Ephemeris + ?Sized>(
    eph: &E,
    reference: Moment,
    phase: LunarPhase,
    config: &PhaseSearchConfig,
) -> PhaseSearch {
    let predicate = |at: Moment| phase_bucket(eph, at);
    let target = phase.quarter();

    for window_days in config.effective_windows() {
        let start = reference.add_days(-window_days);
        match eph.search_discrete_events(start, reference, config.step_days, &predicate) {
            Ok(events) => {
                let latest = events
                    .iter()
                    .filter(|e| e.value == target && e.at <= reference)
                    .map(|e| e.at)
                    .last();
                if let Some(at) = latest {
                    return PhaseSearch::Found { at, window_days };
                }
            }
            Err(err) => {
                tracing::debug!(
                    phase = phase.name(),
                    window_days,
                    error = %err,
                    "phase search window failed"
                );
            }
        }
    }

    tracing::debug!(phase = phase.name(), %reference, "no phase found within max lookback");
    PhaseSearch::NotFound
}
