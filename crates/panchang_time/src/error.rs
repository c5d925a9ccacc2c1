//! Error types for time handling.

/// Errors from civil date parsing or calendar conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The civil date string or components do not name a real calendar day.
    #[error("invalid civil date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },
    /// Hour/minute/second outside a single civil day.
    #[error("invalid time of day {hour:02}:{minute:02}:{second}")]
    InvalidTimeOfDay { hour: u32, minute: u32, second: f64 },
    /// Julian Date cannot be represented as a calendar instant.
    #[error("julian date {0} is outside the representable calendar range")]
    OutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_date() {
        let e = TimeError::InvalidDate {
            input: "2024-02-30".into(),
            reason: "no such day".into(),
        };
        assert_eq!(e.to_string(), "invalid civil date '2024-02-30': no such day");
    }

    #[test]
    fn display_invalid_time() {
        let e = TimeError::InvalidTimeOfDay {
            hour: 25,
            minute: 0,
            second: 0.0,
        };
        assert!(e.to_string().starts_with("invalid time of day 25:00"));
    }
}
