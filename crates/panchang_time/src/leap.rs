//! UTC → TT offsets from an embedded leap-second table.
//!
//! TT = UTC + (TAI − UTC) + 32.184 s. The table holds every TAI − UTC step
//! announced by the IERS since 1972. Instants before 1972 use the 1972 value;
//! instants after the last entry hold the latest value.

/// TT − TAI in seconds (exact by definition).
pub const TT_MINUS_TAI_S: f64 = 32.184;

/// `(JD UTC of the step, TAI − UTC in seconds from that instant on)`.
#[rustfmt::skip]
const LEAP_SECONDS: [(f64, f64); 28] = [
    (2_441_317.5, 10.0), // 1972-01-01
    (2_441_499.5, 11.0), // 1972-07-01
    (2_441_683.5, 12.0), // 1973-01-01
    (2_442_048.5, 13.0), // 1974-01-01
    (2_442_413.5, 14.0), // 1975-01-01
    (2_442_778.5, 15.0), // 1976-01-01
    (2_443_144.5, 16.0), // 1977-01-01
    (2_443_509.5, 17.0), // 1978-01-01
    (2_443_874.5, 18.0), // 1979-01-01
    (2_444_239.5, 19.0), // 1980-01-01
    (2_444_786.5, 20.0), // 1981-07-01
    (2_445_151.5, 21.0), // 1982-07-01
    (2_445_516.5, 22.0), // 1983-07-01
    (2_446_247.5, 23.0), // 1985-07-01
    (2_447_161.5, 24.0), // 1988-01-01
    (2_447_892.5, 25.0), // 1990-01-01
    (2_448_257.5, 26.0), // 1991-01-01
    (2_448_804.5, 27.0), // 1992-07-01
    (2_449_169.5, 28.0), // 1993-07-01
    (2_449_534.5, 29.0), // 1994-07-01
    (2_450_083.5, 30.0), // 1996-01-01
    (2_450_630.5, 31.0), // 1997-07-01
    (2_451_179.5, 32.0), // 1999-01-01
    (2_453_736.5, 33.0), // 2006-01-01
    (2_454_832.5, 34.0), // 2009-01-01
    (2_456_109.5, 35.0), // 2012-07-01
    (2_457_204.5, 36.0), // 2015-07-01
    (2_457_754.5, 37.0), // 2017-01-01
];

/// TAI − UTC in seconds at a UTC Julian Date.
pub fn tai_minus_utc_s(jd_utc: f64) -> f64 {
    let idx = LEAP_SECONDS.partition_point(|&(jd, _)| jd <= jd_utc);
    if idx == 0 {
        LEAP_SECONDS[0].1
    } else {
        LEAP_SECONDS[idx - 1].1
    }
}

/// TT − UTC in seconds at a UTC Julian Date.
pub fn tt_minus_utc_s(jd_utc: f64) -> f64 {
    tai_minus_utc_s(jd_utc) + TT_MINUS_TAI_S
}
