//! Synthetic ephemerides for search and assembly tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use panchang_ephem::{Body, DiscreteEvent, Ephemeris, EphemerisError, GeoLocation, Observer};
use panchang_time::Moment;

/// Mean daily motions (degrees/day).
pub const SUN_RATE: f64 = 0.985_647;
pub const MOON_RATE: f64 = 13.176_358;

/// 2024-01-01T00:00Z.
pub const EPOCH_JD: f64 = 2_460_310.5;

/// Uniform circular Sun and Moon, and a Sun that rises at 06:00 and sets at
/// 18:00 local mean time.
#[derive(Debug, Clone, Copy)]
pub struct LinearEphemeris {
    pub sun0: f64,
    pub moon0: f64,
}

impl LinearEphemeris {
    pub fn new(sun0: f64, moon0: f64) -> Self {
        Self { sun0, moon0 }
    }

    pub fn elongation_at(&self, jd: f64) -> f64 {
        (self.moon0 - self.sun0 + (MOON_RATE - SUN_RATE) * (jd - EPOCH_JD)).rem_euclid(360.0)
    }

    /// Latest JD ≤ `jd` with elongation equal to `target`.
    pub fn last_elongation(&self, jd: f64, target: f64) -> f64 {
        let behind = (self.elongation_at(jd) - target).rem_euclid(360.0);
        jd - behind / (MOON_RATE - SUN_RATE)
    }
}

impl Ephemeris for LinearEphemeris {
    fn apparent_longitude(
        &self,
        body: Body,
        at: Moment,
        _observer: Observer,
    ) -> Result<f64, EphemerisError> {
        let d = at.jd_utc() - EPOCH_JD;
        Ok(match body {
            Body::Sun => (self.sun0 + SUN_RATE * d).rem_euclid(360.0),
            Body::Moon => (self.moon0 + MOON_RATE * d).rem_euclid(360.0),
        })
    }

    fn sun_altitude(&self, at: Moment, location: &GeoLocation) -> Result<f64, EphemerisError> {
        let local_day = (at.jd_utc() + 0.5 + location.longitude_deg / 360.0).rem_euclid(1.0);
        Ok(-30.0 * (std::f64::consts::TAU * local_day).cos())
    }
}

/// Fixed longitudes, a Sun that never rises, and a search that always comes
/// back empty.
#[derive(Debug, Clone, Copy)]
pub struct EmptyEphemeris {
    pub sun: f64,
    pub moon: f64,
}

impl Ephemeris for EmptyEphemeris {
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

    fn sun_altitude(&self, _at: Moment, _location: &GeoLocation) -> Result<f64, EphemerisError> {
        Ok(-20.0)
    }

    fn search_discrete_events(
        &self,
        _start: Moment,
        _end: Moment,
        _step_days: f64,
        _predicate: &dyn Fn(Moment) -> Result<u8, EphemerisError>,
    ) -> Result<Vec<DiscreteEvent>, EphemerisError> {
        Ok(Vec::new())
    }
}

/// Wraps a provider and fails every search shorter than `min_span_days`.
pub struct ShortWindowsFail<E> {
    pub inner: E,
    pub min_span_days: f64,
}

impl<E: Ephemeris> Ephemeris for ShortWindowsFail<E> {
    fn apparent_longitude(
        &self,
        body: Body,
        at: Moment,
        observer: Observer,
    ) -> Result<f64, EphemerisError> {
        self.inner.apparent_longitude(body, at, observer)
    }

    fn sun_altitude(&self, at: Moment, location: &GeoLocation) -> Result<f64, EphemerisError> {
        self.inner.sun_altitude(at, location)
    }

    fn search_discrete_events(
        &self,
        start: Moment,
        end: Moment,
        step_days: f64,
        predicate: &dyn Fn(Moment) -> Result<u8, EphemerisError>,
    ) -> Result<Vec<DiscreteEvent>, EphemerisError> {
        if end.days_since(start) < self.min_span_days {
            return Err(EphemerisError::Unavailable("window too short".into()));
        }
        self.inner
            .search_discrete_events(start, end, step_days, predicate)
    }
}

/// Every query fails.
pub struct BrokenEphemeris;

impl Ephemeris for BrokenEphemeris {
    fn apparent_longitude(
        &self,
        _body: Body,
        _at: Moment,
        _observer: Observer,
    ) -> Result<f64, EphemerisError> {
        Err(EphemerisError::Unavailable("no data".into()))
    }

    fn sun_altitude(&self, _at: Moment, _location: &GeoLocation) -> Result<f64, EphemerisError> {
        Err(EphemerisError::Unavailable("no data".into()))
    }
}

/// Counts every longitude/altitude query.
pub struct CountingEphemeris<E> {
    pub inner: E,
    pub calls: AtomicUsize,
}

impl<E> CountingEphemeris<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<E: Ephemeris> Ephemeris for CountingEphemeris<E> {
    fn apparent_longitude(
        &self,
        body: Body,
        at: Moment,
        observer: Observer,
    ) -> Result<f64, EphemerisError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.apparent_longitude(body, at, observer)
    }

    fn sun_altitude(&self, at: Moment, location: &GeoLocation) -> Result<f64, EphemerisError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.sun_altitude(at, location)
    }
}
