//! Sun/Moon longitudes with the sidereal correction applied.

use panchang_ephem::{Body, Ephemeris, EphemerisError, Observer};
use panchang_time::Moment;
use panchang_vedic::{AyanamshaSystem, ayanamsha_deg, normalize_360};
use serde::Serialize;

/// Sun and Moon longitudes at one instant, all in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LongitudeSample {
    pub tropical_sun: f64,
    pub tropical_moon: f64,
    pub sidereal_sun: f64,
    pub sidereal_moon: f64,
    /// Ayanamsha subtracted from the tropical values.
    pub ayanamsha_deg: f64,
}

impl LongitudeSample {
    /// Build from tropical longitudes and an ayanamsha.
    pub fn from_tropical(tropical_sun: f64, tropical_moon: f64, ayanamsha_deg: f64) -> Self {
        Self {
            tropical_sun: normalize_360(tropical_sun),
            tropical_moon: normalize_360(tropical_moon),
            sidereal_sun: normalize_360(tropical_sun - ayanamsha_deg),
            sidereal_moon: normalize_360(tropical_moon - ayanamsha_deg),
            ayanamsha_deg,
        }
    }

    /// Moon − Sun in [0, 360). The ayanamsha cancels.
    pub fn elongation_deg(&self) -> f64 {
        normalize_360(self.tropical_moon - self.tropical_sun)
    }

    /// Sidereal Sun + sidereal Moon in [0, 360), the yoga argument.
    pub fn sidereal_sum_deg(&self) -> f64 {
        normalize_360(self.sidereal_sun + self.sidereal_moon)
    }
}

/// Query the provider for both bodies at `at` and apply the ayanamsha of
/// `system`, evaluated in TT centuries since J2000.
pub fn longitudes_at<E: Ephemeris + ?Sized>(
    eph: &E,
    at: Moment,
    observer: Observer,
    system: AyanamshaSystem,
) -> Result<LongitudeSample, EphemerisError> {
    let sun = eph.apparent_longitude(Body::Sun, at, observer)?;
    let moon = eph.apparent_longitude(Body::Moon, at, observer)?;
    if !sun.is_finite() || !moon.is_finite() {
        return Err(EphemerisError::NonFinite("apparent longitude"));
    }
    let aya = ayanamsha_deg(system, at.centuries_tt());
    Ok(LongitudeSample::from_tropical(sun, moon, aya))
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchang_ephem::GeoLocation;

    struct Fixed {
        sun: f64,
        moon: f64,
    }

    impl Ephemeris for Fixed {
        fn apparent_longitude(
            &self,
            body: Body,
            _at: Moment,
            _observer: Observer,
        ) -> Result<f64, EphemerisError> {
            Ok(match body {
                Body::Sun => self.sun,
                Body::Moon => self.moon,
            })
        }

        fn sun_altitude(&self, _at: Moment, _loc: &GeoLocation) -> Result<f64, EphemerisError> {
            Ok(0.0)
        }
    }

    #[test]
    fn sidereal_wraps_below_zero() {
        let s = LongitudeSample::from_tropical(10.0, 200.0, 24.0);
        assert!((s.sidereal_sun - 346.0).abs() < 1e-12);
        assert!((s.sidereal_moon - 176.0).abs() < 1e-12);
        assert!((s.elongation_deg() - 190.0).abs() < 1e-12);
    }

    #[test]
    fn sum_wraps() {
        let s = LongitudeSample::from_tropical(300.0, 300.0, 0.0);
        assert!((s.sidereal_sum_deg() - 240.0).abs() < 1e-12);
    }

    #[test]
    fn applies_lahiri_at_j2000() {
        let eph = Fixed {
            sun: 100.0,
            moon: 100.0,
        };
        let at = Moment::from_jd_utc(2_451_545.0);
        let s = longitudes_at(&eph, at, Observer::Geocenter, AyanamshaSystem::Lahiri).unwrap();
        assert!((s.ayanamsha_deg - 23.853).abs() < 0.01, "{}", s.ayanamsha_deg);
        assert!((s.sidereal_sun - (100.0 - s.ayanamsha_deg)).abs() < 1e-12);
        assert_eq!(s.elongation_deg(), 0.0);
    }

    #[test]
    fn rejects_non_finite_longitude() {
        let eph = Fixed {
            sun: f64::NAN,
            moon: 0.0,
        };
        let at = Moment::from_jd_utc(2_451_545.0);
        let err = longitudes_at(&eph, at, Observer::Geocenter, AyanamshaSystem::Lahiri);
        assert!(matches!(err, Err(EphemerisError::NonFinite(_))));
    }
}
