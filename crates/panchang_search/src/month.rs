//! Lunar Month Resolver: amanta and purnimanta month names for a sunrise.
//!
//! Amanta takes the sidereal Sun's rashi at the latest new moon. Purnimanta
//! takes the latest full moon's nakshatra through the [`MonthAnchorTable`]
//! and moves to the next month during Krishna paksha, because the
//! purnimanta month turns over at the full moon.
//!
//! Every missing piece degrades to a solar estimate; resolution itself
//! never fails.

use panchang_ephem::{Ephemeris, GeoLocation, Observer};
use panchang_time::Moment;
use panchang_vedic::{Masa, Paksha, nakshatra_from_longitude, rashi_from_longitude};

use crate::config::PanchangConfig;
use crate::error::SearchError;
use crate::event::last_phase_before;
use crate::event_types::{LunarPhase, PhaseSearch};
use crate::month_types::{LunarMonths, LunarPhaseAnchor, MonthSource, ResolvedMonth};
use crate::position::{LongitudeSample, longitudes_at};

/// Month named by the rashi of a sidereal solar longitude (Mesha → Chaitra).
fn solar_month(sidereal_sun: f64) -> Masa {
    Masa::from_rashi_index(rashi_from_longitude(sidereal_sun).rashi_index)
}

/// Resolve both month conventions for `sunrise`.
///
/// Only the longitude lookup at sunrise can fail.
pub fn resolve_lunar_months<E: Ephemeris + ?Sized>(
    eph: &E,
    sunrise: Moment,
    location: &GeoLocation,
    paksha: Paksha,
    config: &PanchangConfig,
) -> Result<LunarMonths, SearchError> {
    let at_sunrise = longitudes_at(
        eph,
        sunrise,
        Observer::Topocentric(*location),
        config.ayanamsha,
    )?;
    Ok(resolve_lunar_months_from(
        eph,
        sunrise,
        &at_sunrise,
        location,
        paksha,
        config,
    ))
}

/// Resolve both month conventions from a pre-computed sunrise sample.
///
/// `at_sunrise` is used only for the solar fallbacks.
pub fn resolve_lunar_months_from<E: Ephemeris + ?Sized>(
    eph: &E,
    sunrise: Moment,
    at_sunrise: &LongitudeSample,
    location: &GeoLocation,
    paksha: Paksha,
    config: &PanchangConfig,
) -> LunarMonths {
    let observer = Observer::Topocentric(*location);
    let new_moon = locate_anchor(eph, sunrise, LunarPhase::New, observer, config);
    let full_moon = locate_anchor(eph, sunrise, LunarPhase::Full, observer, config);

    let amanta = match new_moon {
        Some(anchor) => {
            let masa = solar_month(anchor.sample.sidereal_sun);
            ResolvedMonth {
                masa,
                base: masa,
                source: MonthSource::NewMoon,
                anchor: Some(anchor),
            }
        }
        None => {
            let masa = solar_month(at_sunrise.sidereal_sun);
            ResolvedMonth {
                masa,
                base: masa,
                source: MonthSource::SunriseSolar,
                anchor: None,
            }
        }
    };

    let (base, source) = match &full_moon {
        Some(anchor) => {
            let nakshatra = nakshatra_from_longitude(anchor.sample.sidereal_moon).nakshatra;
            match config.anchors.get(nakshatra) {
                Some(masa) => (masa, MonthSource::FullMoonAnchor),
                None => {
                    tracing::debug!(%nakshatra, "no anchor entry, using sidereal Sun at full moon");
                    (
                        solar_month(anchor.sample.sidereal_sun),
                        MonthSource::FullMoonSolar,
                    )
                }
            }
        }
        None => (
            solar_month(at_sunrise.sidereal_sun),
            MonthSource::SunriseSolar,
        ),
    };
    let masa = match paksha {
        Paksha::Shukla => base,
        Paksha::Krishna => base.next(),
    };

    LunarMonths {
        amanta,
        purnimanta: ResolvedMonth {
            masa,
            base,
            source,
            anchor: full_moon,
        },
    }
}

/// Latest `phase` at or before `reference` with longitudes sampled there.
///
/// A failed sample is treated like a missing phase.
fn locate_anchor<E: Ephemeris + ?Sized>(
    eph: &E,
    reference: Moment,
    phase: LunarPhase,
    observer: Observer,
    config: &PanchangConfig,
) -> Option<LunarPhaseAnchor> {
    let PhaseSearch::Found { at, window_days } =
        last_phase_before(eph, reference, phase, &config.phase_search)
    else {
        return None;
    };
    match longitudes_at(eph, at, observer, config.ayanamsha) {
        Ok(sample) => Some(LunarPhaseAnchor {
            phase,
            at,
            window_days,
            sample,
        }),
        Err(err) => {
            tracing::debug!(phase = phase.name(), %at, error = %err, "sampling at phase failed");
            None
        }
    }
}
