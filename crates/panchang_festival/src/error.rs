//! Error types for rule validation.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FestivalError {
    #[error("invalid festival rule '{name}': {reason}")]
    InvalidRule { name: String, reason: String },
}
