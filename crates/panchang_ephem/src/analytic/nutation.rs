//! Nutation in longitude and obliquity from the largest IAU 2000B terms.
//!
//! The thirteen leading lunisolar terms reproduce the full 77-term series to
//! about 0.05″, far below what a calendar-day classification can notice.
//!
//! Source: IERS Conventions 2010, Chapter 5, Tables 5.2e and 5.3b.

use std::f64::consts::TAU;

/// Arcseconds to radians.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// The five Delaunay arguments `[l, l', F, D, Ω]` in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// `[nl, nl', nF, nD, nΩ, S, S', C, C']`, amplitudes in 0.1 μas.
#[rustfmt::skip]
static LEADING_TERMS: [[i64; 9]; 13] = [
    [   0,   0,   0,   0,   1, -172064161,  -174666,   92052331,    9086],
    [   0,   0,   2,  -2,   2,  -13170906,    -1675,    5730336,   -3015],
    [   0,   0,   2,   0,   2,   -2276413,     -234,     978459,    -485],
    [   0,   0,   0,   0,   2,    2074554,      207,    -897492,     470],
    [   0,   1,   0,   0,   0,    1475877,    -3633,      73871,    -184],
    [   0,   1,   2,  -2,   2,    -516821,     1226,     224386,    -677],
    [   1,   0,   0,   0,   0,     711159,       73,      -6750,       0],
    [   0,   0,   2,   0,   1,    -387298,     -367,     200728,      18],
    [   1,   0,   2,   0,   2,    -301461,      -36,     129025,     -63],
    [   0,  -1,   2,  -2,   2,     215829,     -494,     -95929,     299],
    [   0,   0,   2,  -2,   1,     128227,      137,     -68982,      -9],
    [  -1,   0,   2,   0,   2,     123457,       11,     -53311,      32],
    [  -1,   0,   0,   2,   0,     156994,       10,      -1235,       0],
];

/// Nutation `(Δψ, Δε)` in arcseconds at `t` Julian centuries of TT.
pub fn nutation_arcsec(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);
    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for row in &LEADING_TERMS {
        let arg: f64 = (0..5).map(|k| row[k] as f64 * args[k]).sum();
        dpsi += (row[5] as f64 + row[6] as f64 * t) * arg.sin();
        deps += (row[7] as f64 + row[8] as f64 * t) * arg.cos();
    }
    (dpsi * 1e-7, deps * 1e-7)
}

/// Mean obliquity of the ecliptic in degrees (IAU 1980 polynomial, Meeus 22.2).
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}
