//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! Functions take a Julian Date on the UT1 scale. UTC is accepted in its
//! place (|UT1 − UTC| < 0.9 s moves the Sun by well under an arcminute in
//! hour angle).
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians, [0, 2π).
///
/// θ = 2π × (0.7790572732640 + 1.00273781191135448 × Du), Du = JD − 2451545.0.
pub fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    // Split the day count so the integer turns drop out before scaling by 2π.
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du + du.fract();
    (TAU * turns.rem_euclid(1.0)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, [0, 2π).
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut1);
    let t = (jd_ut1 - J2000_JD) / DAYS_PER_CENTURY;
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - 0.0000000368 * t))));
    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and observer east longitude, [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let theta_deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!(
            (theta_deg - 280.46).abs() < 0.1,
            "ERA at J2000 = {theta_deg}°, expected ~280.46°"
        );
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT1: GMST ≈ 6h 39m 51.17s ≈ 99.97°
        let gmst_deg = gmst_rad(2_451_544.5).to_degrees();
        assert!(
            (gmst_deg - 99.97).abs() < 0.1,
            "GMST at J2000 midnight = {gmst_deg}°, expected ~99.97°"
        );
    }

    #[test]
    fn gmst_meeus_example() {
        // Meeus example 12.a: 1987 Apr 10 0h UT, GMST = 13h10m46.3668s = 197.693195°
        let gmst_deg = gmst_rad(2_446_895.5).to_degrees();
        assert!((gmst_deg - 197.693195).abs() < 0.001, "GMST = {gmst_deg}°");
    }

    #[test]
    fn gmst_advances_about_a_degree_per_day() {
        let g1 = gmst_rad(2_460_000.5).to_degrees();
        let g2 = gmst_rad(2_460_001.5).to_degrees();
        let delta = (g2 - g1).rem_euclid(360.0);
        assert!((delta - 0.9856).abs() < 0.01, "delta = {delta}");
    }

    #[test]
    fn lst_east_offset() {
        let gmst = 1.0;
        let lst = local_sidereal_time_rad(gmst, PI / 2.0);
        assert!((lst - (gmst + PI / 2.0)).abs() < 1e-15);
    }

    #[test]
    fn gmst_range() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5] {
            let g = gmst_rad(jd);
            assert!((0.0..TAU).contains(&g), "GMST out of range: {g}");
        }
    }
}
