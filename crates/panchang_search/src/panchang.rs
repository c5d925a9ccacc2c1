//! Panchang Assembler.
//!
//! Sunrise is located first; everything else is sampled at that instant:
//! tithi and karana from the elongation, nakshatra and yoga from the
//! sidereal Moon and Sun, rashis, then both lunar month conventions.

use chrono::NaiveDate;
use panchang_ephem::{Ephemeris, GeoLocation, Observer};
use panchang_vedic::{
    Vaar, karana_from_elongation, nakshatra_from_longitude, rashi_from_longitude,
    tithi_from_elongation, yoga_from_sum,
};

use crate::config::PanchangConfig;
use crate::error::SearchError;
use crate::event::sunrise_sunset;
use crate::month::resolve_lunar_months_from;
use crate::month_types::MonthSystem;
use crate::panchang_types::{ApproximationFlags, PanchangRecord, TithiRecord};
use crate::position::longitudes_at;

/// Compute the panchang of `date` at `location`.
///
/// The location and configuration are validated before any ephemeris query.
/// Failed searches fall back and set [`ApproximationFlags`]; the only
/// provider failure that propagates is the longitude lookup at sunrise.
pub fn compute_panchang<E: Ephemeris + ?Sized>(
    eph: &E,
    date: NaiveDate,
    location: &GeoLocation,
    month_system: MonthSystem,
    config: &PanchangConfig,
) -> Result<PanchangRecord, SearchError> {
    location
        .validate()
        .map_err(|e| SearchError::InvalidInput(e.to_string()))?;
    config.validate()?;

    let sun_times = sunrise_sunset(eph, date, location, &config.rise_set)?;
    let sunrise = sun_times.sunrise;

    let sample = longitudes_at(
        eph,
        sunrise,
        Observer::Topocentric(*location),
        config.ayanamsha,
    )?;
    let elongation = sample.elongation_deg();

    let tithi = tithi_from_elongation(elongation);
    let karana = karana_from_elongation(elongation);
    let nakshatra = nakshatra_from_longitude(sample.sidereal_moon);
    let yoga = yoga_from_sum(sample.sidereal_sum_deg());

    let months = resolve_lunar_months_from(eph, sunrise, &sample, location, tithi.paksha, config);

    let approximate = ApproximationFlags {
        sunrise: sun_times.sunrise_approximate,
        sunset: sun_times.sunset_approximate,
        amanta_month: !months.amanta.source.is_exact(),
        purnimanta_month: !months.purnimanta.source.is_exact(),
    };
    if approximate.any() {
        tracing::info!(%date, ?approximate, "panchang uses fallback values");
    }

    Ok(PanchangRecord {
        date,
        vaar: Vaar::from_date(date),
        location: *location,
        month_system,
        sunrise,
        sunset: sun_times.sunset,
        tithi: TithiRecord::from(tithi),
        nakshatra: nakshatra.into(),
        yoga: yoga.into(),
        karana: karana.into(),
        moon_rashi: rashi_from_longitude(sample.sidereal_moon).rashi,
        sun_rashi: rashi_from_longitude(sample.sidereal_sun).rashi,
        lunar_month_amanta: months.amanta.masa,
        lunar_month_purnimanta: months.purnimanta.masa,
        lunar_month: months.month(month_system),
        months,
        approximate,
        longitudes: sample,
    })
}
