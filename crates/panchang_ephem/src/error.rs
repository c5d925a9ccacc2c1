//! Error types for ephemeris providers.

/// Errors raised by an ephemeris provider or the discrete-event search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Latitude/longitude outside their ranges or not finite.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Search bounds reversed, non-finite, or too finely stepped.
    #[error("invalid search interval: {0}")]
    InvalidInterval(&'static str),
    /// A computation produced NaN or infinity.
    #[error("non-finite value computed for {0}")]
    NonFinite(&'static str),
    /// The provider cannot serve this request (missing data, epoch out of range).
    #[error("ephemeris unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            EphemerisError::InvalidLocation("latitude out of range").to_string(),
            "invalid location: latitude out of range"
        );
        assert_eq!(
            EphemerisError::Unavailable("epoch 1200".into()).to_string(),
            "ephemeris unavailable: epoch 1200"
        );
    }
}
