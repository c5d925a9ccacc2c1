//! Ecliptic/equatorial rotation and topocentric lunar parallax.
//!
//! Sources: Meeus, "Astronomical Algorithms", 2nd ed., ch. 11 (observer's
//! geocentric coordinates), ch. 13 (transformations), ch. 40 (parallax in
//! ecliptical coordinates).

use crate::location::GeoLocation;

/// Earth's equatorial radius in km (IAU 1976, as used by Meeus).
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.14;

/// Polar/equatorial axis ratio b/a.
const AXIS_RATIO: f64 = 0.996_647_19;

/// Ecliptic (λ, β) → equatorial (α, δ), all in radians except inputs in degrees.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (lam, beta, eps) = (
        lon_deg.to_radians(),
        lat_deg.to_radians(),
        obliquity_deg.to_radians(),
    );
    let ra = (lam.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lam.cos());
    let dec = (beta.sin() * eps.cos() + beta.cos() * eps.sin() * lam.sin()).asin();
    (ra.rem_euclid(std::f64::consts::TAU), dec)
}

/// Observer's `(ρ sin φ', ρ cos φ')` in Earth equatorial radii.
pub fn observer_geocentric_terms(location: &GeoLocation) -> (f64, f64) {
    let phi = location.latitude_rad();
    let u = (AXIS_RATIO * phi.tan()).atan();
    let h = location.altitude_m / (EARTH_EQUATORIAL_RADIUS_KM * 1000.0);
    let rho_sin = AXIS_RATIO * u.sin() + h * phi.sin();
    let rho_cos = u.cos() + h * phi.cos();
    (rho_sin, rho_cos)
}

/// Shift a geocentric ecliptic position of a nearby body to the observer.
///
/// `lst_rad` is the local (apparent) sidereal time. Returns topocentric
/// `(λ', β')` in degrees, λ' in [0, 360).
pub fn topocentric_ecliptic(
    lon_deg: f64,
    lat_deg: f64,
    distance_km: f64,
    obliquity_deg: f64,
    lst_rad: f64,
    location: &GeoLocation,
) -> (f64, f64) {
    let (rho_sin, rho_cos) = observer_geocentric_terms(location);
    let (lam, beta, eps) = (
        lon_deg.to_radians(),
        lat_deg.to_radians(),
        obliquity_deg.to_radians(),
    );
    let sin_pi = EARTH_EQUATORIAL_RADIUS_KM / distance_km;

    let n = lam.cos() * beta.cos() - rho_cos * sin_pi * lst_rad.cos();
    let lam_topo = (lam.sin() * beta.cos()
        - sin_pi * (rho_sin * eps.sin() + rho_cos * eps.cos() * lst_rad.sin()))
    .atan2(n);
    let beta_topo = (lam_topo.cos()
        * (beta.sin() - sin_pi * (rho_sin * eps.cos() - rho_cos * eps.sin() * lst_rad.sin()))
        / n)
        .atan();

    (lam_topo.to_degrees().rem_euclid(360.0), beta_topo.to_degrees())
}

/// Altitude in degrees of a body at (α, δ) for hour angle `lst − α`.
pub fn altitude_deg(ra_rad: f64, dec_rad: f64, lst_rad: f64, location: &GeoLocation) -> f64 {
    let phi = location.latitude_rad();
    let hour_angle = lst_rad - ra_rad;
    let sin_h = phi.sin() * dec_rad.sin() + phi.cos() * dec_rad.cos() * hour_angle.cos();
    sin_h.clamp(-1.0, 1.0).asin().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_13a() {
        // Pollux: λ = 113.215630°, β = 6.684170°, ε = 23.4392911°
        // → α = 116.328942°, δ = 28.026183°
        let (ra, dec) = ecliptic_to_equatorial(113.215630, 6.684170, 23.4392911);
        assert!((ra.to_degrees() - 116.328942).abs() < 1e-5);
        assert!((dec.to_degrees() - 28.026183).abs() < 1e-5);
    }

    #[test]
    fn meeus_example_11a() {
        // Palomar: φ = 33°21′22″, H = 1706 m → ρ sin φ' = 0.546861, ρ cos φ' = 0.836339
        let loc = GeoLocation::new(33.0 + 21.0 / 60.0 + 22.0 / 3600.0, -116.8625, 1706.0);
        let (rs, rc) = observer_geocentric_terms(&loc);
        assert!((rs - 0.546861).abs() < 1e-6, "rho sin = {rs}");
        assert!((rc - 0.836339).abs() < 1e-6, "rho cos = {rc}");
    }

    #[test]
    fn parallax_vanishes_at_infinity() {
        let loc = GeoLocation::DEFAULT;
        let (lon, lat) = topocentric_ecliptic(120.0, 2.0, 1e12, 23.44, 1.3, &loc);
        assert!((lon - 120.0).abs() < 1e-6);
        assert!((lat - 2.0).abs() < 1e-6);
    }

    #[test]
    fn lunar_parallax_under_a_degree_and_a_bit() {
        let loc = GeoLocation::DEFAULT;
        for i in 0..24 {
            let lst = i as f64 * std::f64::consts::TAU / 24.0;
            let (lon, _) = topocentric_ecliptic(200.0, 0.0, 384_400.0, 23.44, lst, &loc);
            let shift = (lon - 200.0 + 180.0).rem_euclid(360.0) - 180.0;
            assert!(shift.abs() < 1.1, "shift = {shift}");
        }
    }

    #[test]
    fn zenith_altitude() {
        let loc = GeoLocation::new(20.0, 0.0, 0.0);
        let h = altitude_deg(1.0, 20f64.to_radians(), 1.0, &loc);
        assert!((h - 90.0).abs() < 1e-9);
    }
}
