//! Settings file for the panchang workspace.
//!
//! Every section is optional; a missing file section falls back to the
//! in-code defaults of [`PanchangConfig`] and the standard festival table.
//!
//! ```toml
//! month_system = "purnimanta"
//! ayanamsha = "Lahiri"
//!
//! [location]
//! latitude_deg = 19.076
//! longitude_deg = 72.8777
//!
//! [phase_search]
//! windows_days = [30, 60]
//!
//! [anchors]
//! Shatabhisha = "Bhadrapada"
//! Pushya = "none"
//!
//! [[festivals.rules]]
//! name = "Guru Purnima"
//! conditions = [
//!     { type = "tithi", name = "Purnima" },
//!     # bright-half months follow the preceding full moon
//!     { type = "lunar_month", month = "Jyeshtha" },
//! ]
//! ```

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::{FestivalSettings, Settings, load, parse};
