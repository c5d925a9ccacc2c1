//! `AnalyticEphemeris`: Sun and Moon from closed-form series.
//!
//! Accuracy is roughly 0.01° for the Sun and a few thousandths of a degree
//! (plus truncation) for the Moon over a few centuries around J2000, which
//! places lunar phases within a couple of minutes and sunrise within a few
//! seconds of a full numerical ephemeris.

pub mod frames;
pub mod moon;
pub mod nutation;
pub mod sun;

use panchang_time::{Moment, gmst_rad, local_sidereal_time_rad};

use crate::adapter::Ephemeris;
use crate::body::{Body, Observer};
use crate::error::EphemerisError;
use crate::location::GeoLocation;

use self::frames::{altitude_deg, ecliptic_to_equatorial, topocentric_ecliptic};
use self::moon::lunar_position;
use self::nutation::{mean_obliquity_deg, nutation_arcsec};
use self::sun::{aberration_deg, solar_position};

/// Series are only trusted this many Julian centuries either side of J2000.
const MAX_CENTURIES: f64 = 10.0;

/// Closed-form solar and lunar theory. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

/// Nutation and obliquity shared by every quantity at one instant.
struct EquinoxOfDate {
    t: f64,
    dpsi_deg: f64,
    true_obliquity_deg: f64,
}

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    fn equinox_of_date(at: Moment) -> Result<EquinoxOfDate, EphemerisError> {
        let t = at.centuries_tt();
        if !t.is_finite() {
            return Err(EphemerisError::NonFinite("epoch"));
        }
        if t.abs() > MAX_CENTURIES {
            return Err(EphemerisError::Unavailable(format!(
                "analytic series not valid at JD {:.1}",
                at.jd_utc()
            )));
        }
        let (dpsi_as, deps_as) = nutation_arcsec(t);
        Ok(EquinoxOfDate {
            t,
            dpsi_deg: dpsi_as / 3600.0,
            true_obliquity_deg: mean_obliquity_deg(t) + deps_as / 3600.0,
        })
    }

    /// Apparent sidereal time at the observer, radians.
    fn local_apparent_sidereal_time(at: Moment, eq: &EquinoxOfDate, location: &GeoLocation) -> f64 {
        let equation_of_equinoxes =
            (eq.dpsi_deg * eq.true_obliquity_deg.to_radians().cos()).to_radians();
        local_sidereal_time_rad(
            gmst_rad(at.jd_utc()) + equation_of_equinoxes,
            location.longitude_rad(),
        )
    }

    fn apparent_sun_longitude(eq: &EquinoxOfDate) -> f64 {
        let sun = solar_position(eq.t);
        (sun.true_longitude_deg + eq.dpsi_deg + aberration_deg(sun.distance_au)).rem_euclid(360.0)
    }

    fn apparent_moon_longitude(at: Moment, eq: &EquinoxOfDate, observer: Observer) -> f64 {
        let moon = lunar_position(eq.t);
        let lon = (moon.longitude_deg + eq.dpsi_deg).rem_euclid(360.0);
        match observer {
            Observer::Geocenter => lon,
            Observer::Topocentric(location) => {
                let lst = Self::local_apparent_sidereal_time(at, eq, &location);
                topocentric_ecliptic(
                    lon,
                    moon.latitude_deg,
                    moon.distance_km,
                    eq.true_obliquity_deg,
                    lst,
                    &location,
                )
                .0
            }
        }
    }
}

impl Ephemeris for AnalyticEphemeris {
    fn apparent_longitude(
        &self,
        body: Body,
        at: Moment,
        observer: Observer,
    ) -> Result<f64, EphemerisError> {
        if let Observer::Topocentric(location) = observer {
            location.validate()?;
        }
        let eq = Self::equinox_of_date(at)?;
        let lon = match body {
            // Solar parallax (< 9″) is below the series' own accuracy.
            Body::Sun => Self::apparent_sun_longitude(&eq),
            Body::Moon => Self::apparent_moon_longitude(at, &eq, observer),
        };
        if lon.is_finite() {
            Ok(lon)
        } else {
            Err(EphemerisError::NonFinite(body.name()))
        }
    }

    fn sun_altitude(&self, at: Moment, location: &GeoLocation) -> Result<f64, EphemerisError> {
        location.validate()?;
        let eq = Self::equinox_of_date(at)?;
        let lon = Self::apparent_sun_longitude(&eq);
        let (ra, dec) = ecliptic_to_equatorial(lon, 0.0, eq.true_obliquity_deg);
        let lst = Self::local_apparent_sidereal_time(at, &eq, location);
        let alt = altitude_deg(ra, dec, lst, location);
        if alt.is_finite() {
            Ok(alt)
        } else {
            Err(EphemerisError::NonFinite("solar altitude"))
        }
    }
}
