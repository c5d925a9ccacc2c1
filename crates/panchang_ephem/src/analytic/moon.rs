//! Geocentric lunar position from the principal periodic terms of ELP-2000/82.
//!
//! Uses the largest terms of Meeus' tables 47.A and 47.B (amplitudes down to
//! ~0.0005°), giving about 0.005° in longitude against the complete series.
//!
//! Source: Meeus, "Astronomical Algorithms", 2nd ed., ch. 47.

/// Geometric geocentric lunar position, mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Earth-Moon distance in km.
    pub distance_km: f64,
}

/// `[D, M, M', F, Σl (1e-6 deg), Σr (1e-3 km)]`
#[rustfmt::skip]
static LONGITUDE_DISTANCE_TERMS: [[i32; 6]; 46] = [
    [0,  0,  1,  0,  6_288_774, -20_905_355],
    [2,  0, -1,  0,  1_274_027,  -3_699_111],
    [2,  0,  0,  0,    658_314,  -2_955_968],
    [0,  0,  2,  0,    213_618,    -569_925],
    [0,  1,  0,  0,   -185_116,      48_888],
    [0,  0,  0,  2,   -114_332,      -3_149],
    [2,  0, -2,  0,     58_793,     246_158],
    [2, -1, -1,  0,     57_066,    -152_138],
    [2,  0,  1,  0,     53_322,    -170_733],
    [2, -1,  0,  0,     45_758,    -204_586],
    [0,  1, -1,  0,    -40_923,    -129_620],
    [1,  0,  0,  0,    -34_720,     108_743],
    [0,  1,  1,  0,    -30_383,     104_755],
    [2,  0,  0, -2,     15_327,      10_321],
    [0,  0,  1,  2,    -12_528,           0],
    [0,  0,  1, -2,     10_980,      79_661],
    [4,  0, -1,  0,     10_675,     -34_782],
    [0,  0,  3,  0,     10_034,     -23_210],
    [4,  0, -2,  0,      8_548,     -21_636],
    [2,  1, -1,  0,     -7_888,      24_208],
    [2,  1,  0,  0,     -6_766,      30_824],
    [1,  0, -1,  0,     -5_163,      -8_379],
    [1,  1,  0,  0,      4_987,     -16_675],
    [2, -1,  1,  0,      4_036,     -12_831],
    [2,  0,  2,  0,      3_994,     -10_445],
    [4,  0,  0,  0,      3_861,     -11_650],
    [2,  0, -3,  0,      3_665,      14_403],
    [0,  1, -2,  0,     -2_689,      -7_003],
    [2,  0, -1,  2,     -2_602,           0],
    [2, -1, -2,  0,      2_390,      10_056],
    [1,  0,  1,  0,     -2_348,       6_322],
    [2, -2,  0,  0,      2_236,      -9_884],
    [0,  1,  2,  0,     -2_120,       5_751],
    [0,  2,  0,  0,     -2_069,           0],
    [2, -2, -1,  0,      2_048,      -4_950],
    [2,  0,  1, -2,     -1_773,       4_130],
    [2,  0,  0,  2,     -1_595,           0],
    [4, -1, -1,  0,      1_215,      -3_958],
    [0,  0,  2,  2,     -1_110,           0],
    [3,  0, -1,  0,       -892,       3_258],
    [2,  1,  1,  0,       -810,       2_616],
    [4, -1, -2,  0,        759,      -1_897],
    [0,  2, -1,  0,       -713,      -2_117],
    [2,  2, -1,  0,       -700,       2_354],
    [2,  1, -2,  0,        691,           0],
    [2,  0, -1, -2,          0,       8_752],
];

/// `[D, M, M', F, Σb (1e-6 deg)]`
#[rustfmt::skip]
static LATITUDE_TERMS: [[i32; 5]; 30] = [
    [0,  0,  0,  1, 5_128_122],
    [0,  0,  1,  1,   280_602],
    [0,  0,  1, -1,   277_693],
    [2,  0,  0, -1,   173_237],
    [2,  0, -1,  1,    55_413],
    [2,  0, -1, -1,    46_271],
    [2,  0,  0,  1,    32_573],
    [0,  0,  2,  1,    17_198],
    [2,  0,  1, -1,     9_266],
    [0,  0,  2, -1,     8_822],
    [2, -1,  0, -1,     8_216],
    [2,  0, -2, -1,     4_324],
    [2,  0,  1,  1,     4_200],
    [2,  1,  0, -1,    -3_359],
    [2, -1, -1,  1,     2_463],
    [2, -1,  0,  1,     2_211],
    [2, -1, -1, -1,     2_065],
    [0,  1, -1, -1,    -1_870],
    [4,  0, -1, -1,     1_828],
    [0,  1,  0,  1,    -1_794],
    [0,  0,  0,  3,    -1_749],
    [0,  1, -1,  1,    -1_565],
    [1,  0,  0,  1,    -1_491],
    [0,  1,  1,  1,    -1_475],
    [0,  1,  1, -1,    -1_410],
    [0,  1,  0, -1,    -1_344],
    [1,  0,  0, -1,    -1_335],
    [0,  0,  3,  1,     1_107],
    [4,  0,  0, -1,     1_021],
    [4,  0, -1,  1,       833],
];

/// Eccentricity factor for terms involving the Sun's mean anomaly.
fn eccentricity_factor(e: f64, m_multiple: i32) -> f64 {
    match m_multiple.abs() {
        1 => e,
        2 => e * e,
        _ => 1.0,
    }
}

/// Lunar position at `t` Julian centuries of TT since J2000.0.
pub fn lunar_position(t: f64) -> LunarPosition {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude, elongation, anomalies, argument of latitude (degrees)
    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let a3 = (313.45 + 481266.484 * t).to_radians();
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let (d_r, m_r, mp_r, f_r, lp_r) = (
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
        lp.to_radians(),
    );

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for row in &LONGITUDE_DISTANCE_TERMS {
        let arg = row[0] as f64 * d_r + row[1] as f64 * m_r + row[2] as f64 * mp_r
            + row[3] as f64 * f_r;
        let ecc = eccentricity_factor(e, row[1]);
        sum_l += row[4] as f64 * ecc * arg.sin();
        sum_r += row[5] as f64 * ecc * arg.cos();
    }

    let mut sum_b = 0.0;
    for row in &LATITUDE_TERMS {
        let arg = row[0] as f64 * d_r + row[1] as f64 * m_r + row[2] as f64 * mp_r
            + row[3] as f64 * f_r;
        sum_b += row[4] as f64 * eccentricity_factor(e, row[1]) * arg.sin();
    }

    // Venus, Jupiter and flattening corrections
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp_r - f_r).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp_r.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f_r).sin()
        + 175.0 * (a1 + f_r).sin()
        + 127.0 * (lp_r - mp_r).sin()
        - 115.0 * (lp_r + mp_r).sin();

    LunarPosition {
        longitude_deg: (lp + sum_l / 1e6).rem_euclid(360.0),
        latitude_deg: sum_b / 1e6,
        distance_km: 385_000.56 + sum_r / 1000.0,
    }
}
