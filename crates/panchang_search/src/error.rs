//! Error types for panchang search and assembly.

use panchang_ephem::EphemerisError;
use panchang_time::TimeError;

/// Errors that end a panchang computation.
///
/// A search that finds no event is not an error; see
/// [`PhaseSearch::NotFound`](crate::PhaseSearch::NotFound) and the
/// approximation flags on the record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Bad location or configuration, rejected before any ephemeris query.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The position lookup at sunrise failed.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error("time conversion error: {0}")]
    Time(#[from] TimeError),
}
