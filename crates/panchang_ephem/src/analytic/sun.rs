//! Geocentric solar longitude from mean elements and the equation of centre.
//!
//! Source: Meeus, "Astronomical Algorithms", 2nd ed., ch. 25 (low accuracy
//! method, ~0.01°).

/// Geometric (true) geocentric solar position referred to the mean equinox
/// of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// True longitude in degrees, [0, 360).
    pub true_longitude_deg: f64,
    /// Earth-Sun distance in AU.
    pub distance_au: f64,
}

/// Solar position at `t` Julian centuries of TT since J2000.0.
pub fn solar_position(t: f64) -> SolarPosition {
    let l0 = 280.46646 + t * (36000.76983 + t * 0.0003032);
    let m = (357.52911 + t * (35999.05029 - t * 0.0001537)).to_radians();
    let e = 0.016708634 - t * (0.000042037 + t * 0.0000001267);

    let c = (1.914602 - t * (0.004817 + t * 0.000014)) * m.sin()
        + (0.019993 - t * 0.000101) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let nu = m + c.to_radians();
    let distance_au = 1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    SolarPosition {
        true_longitude_deg: (l0 + c).rem_euclid(360.0),
        distance_au,
    }
}

/// Annual aberration in longitude, degrees (negative: apparent lags true).
pub fn aberration_deg(distance_au: f64) -> f64 {
    -20.4898 / 3600.0 / distance_au
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 Oct 13.0 TD: true longitude 199.90988°, R = 0.99766 AU
        let t = (2_448_908.5 - 2_451_545.0) / 36525.0;
        let pos = solar_position(t);
        assert!(
            (pos.true_longitude_deg - 199.90988).abs() < 0.0005,
            "lon = {}",
            pos.true_longitude_deg
        );
        assert!((pos.distance_au - 0.99766).abs() < 1e-4, "R = {}", pos.distance_au);
    }

    #[test]
    fn aberration_size() {
        let a = aberration_deg(1.0);
        assert!((a * 3600.0 + 20.4898).abs() < 1e-9);
    }

    #[test]
    fn longitude_advances_about_a_degree_per_day() {
        let day = 1.0 / 36525.0;
        let a = solar_position(0.24).true_longitude_deg;
        let b = solar_position(0.24 + day).true_longitude_deg;
        let delta = (b - a).rem_euclid(360.0);
        assert!((0.95..1.03).contains(&delta), "delta = {delta}");
    }
}
