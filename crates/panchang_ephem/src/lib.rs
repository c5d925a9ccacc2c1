//! Ephemeris access for panchang computations.
//!
//! This crate provides:
//! - The [`Ephemeris`] contract: apparent ecliptic longitude of the Sun and
//!   Moon, solar altitude, and discrete-event search over a time interval
//! - [`find_discrete`], the scan + bisection search every provider inherits
//! - [`AnalyticEphemeris`], a self-contained low-precision solar and lunar
//!   theory so the calendar works without kernel files
//!
//! Providers are immutable once built and may be shared between threads.

pub mod adapter;
pub mod analytic;
pub mod body;
pub mod discrete;
pub mod error;
pub mod location;

pub use adapter::Ephemeris;
pub use analytic::AnalyticEphemeris;
pub use body::{Body, Observer};
pub use discrete::{DISCRETE_CONVERGENCE_DAYS, DiscreteEvent, find_discrete};
pub use error::EphemerisError;
pub use location::GeoLocation;
