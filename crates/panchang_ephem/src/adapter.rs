//! The contract every ephemeris provider implements.

use panchang_time::Moment;

use crate::body::{Body, Observer};
use crate::discrete::{DiscreteEvent, find_discrete};
use crate::error::EphemerisError;
use crate::location::GeoLocation;

/// Source of apparent Sun/Moon positions.
///
/// Implementations must be immutable after construction so that one provider
/// can serve concurrent calendar computations without locking.
pub trait Ephemeris: Send + Sync {
    /// Apparent tropical ecliptic longitude (true equinox of date) in
    /// degrees, normalised to [0, 360).
    fn apparent_longitude(
        &self,
        body: Body,
        at: Moment,
        observer: Observer,
    ) -> Result<f64, EphemerisError>;

    /// Geometric altitude of the Sun's centre above the horizon in degrees.
    fn sun_altitude(&self, at: Moment, location: &GeoLocation) -> Result<f64, EphemerisError>;

    /// Instants in `[start, end]` where `predicate` changes value, in time
    /// order. `step_days` must be shorter than the shortest interval between
    /// consecutive changes.
    ///
    /// The default scans and bisects with [`find_discrete`].
    fn search_discrete_events(
        &self,
        start: Moment,
        end: Moment,
        step_days: f64,
        predicate: &dyn Fn(Moment) -> Result<u8, EphemerisError>,
    ) -> Result<Vec<DiscreteEvent>, EphemerisError> {
        find_discrete(start, end, step_days, predicate)
    }
}
