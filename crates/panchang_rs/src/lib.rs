//! Convenience wrapper for the panchang workspace.
//!
//! [`PanchangService`] owns a shared ephemeris, the search configuration
//! and a festival rule set, and answers day and month queries that pair
//! each [`PanchangRecord`] with its festivals.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use panchang_rs::*;
//!
//! let service = PanchangService::new(Arc::new(AnalyticEphemeris::new()));
//! let date = parse_civil_date("2024-11-01").unwrap();
//! let entry = service.day(date, None).unwrap();
//! println!("{} {:?}", entry.record.tithi.label, entry.festivals);
//! ```

pub mod error;
pub mod service;

pub use error::PanchangError;
pub use service::{DayEntry, PanchangService};

// Re-exports so callers need only this crate.
pub use panchang_config::{ConfigError, Settings};
pub use panchang_ephem::{AnalyticEphemeris, Ephemeris, GeoLocation};
pub use panchang_festival::{Condition, FestivalRule, RuleSet};
pub use panchang_search::{MonthSystem, PanchangConfig, PanchangRecord};
pub use panchang_time::{Moment, parse_civil_date};
pub use panchang_vedic::{Masa, Nakshatra, Paksha, TithiName};
