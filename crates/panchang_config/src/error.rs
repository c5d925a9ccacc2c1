//! Error types for settings loading.

use std::path::PathBuf;

use panchang_festival::FestivalError;
use panchang_search::SearchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

impl From<SearchError> for ConfigError {
    fn from(e: SearchError) -> Self {
        Self::Invalid(e.to_string())
    }
}

impl From<FestivalError> for ConfigError {
    fn from(e: FestivalError) -> Self {
        Self::Invalid(e.to_string())
    }
}
