//! Error type for the convenience wrapper.

use panchang_search::SearchError;
use panchang_time::TimeError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PanchangError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Time(#[from] TimeError),
}
