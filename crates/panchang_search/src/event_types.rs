//! Types for sunrise/sunset and lunar-phase search results.

use panchang_time::Moment;
use serde::Serialize;

/// Lunar phases the month resolver anchors on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LunarPhase {
    /// Amavasya: elongation crosses 0°.
    New,
    /// Purnima: elongation crosses 180°.
    Full,
}

impl LunarPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Full => "Full",
        }
    }

    /// Elongation quarter (`floor(elong / 90) mod 4`) entered at this phase.
    pub const fn quarter(self) -> u8 {
        match self {
            Self::New => 0,
            Self::Full => 2,
        }
    }
}

/// Outcome of a bounded lookback search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PhaseSearch {
    Found {
        at: Moment,
        /// Lookback of the window that produced the event.
        window_days: f64,
    },
    /// Every window was exhausted or failed.
    NotFound,
}

impl PhaseSearch {
    pub fn moment(&self) -> Option<Moment> {
        match *self {
            Self::Found { at, .. } => Some(at),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Sunrise and sunset of one civil date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunriseSunset {
    pub sunrise: Moment,
    pub sunset: Moment,
    /// Sunrise is the 06:00 UTC fallback.
    pub sunrise_approximate: bool,
    /// Sunset is the 18:00 UTC fallback.
    pub sunset_approximate: bool,
}
