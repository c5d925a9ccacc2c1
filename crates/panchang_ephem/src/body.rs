//! Bodies and observers understood by the ephemeris contract.

use serde::Serialize;

use crate::location::GeoLocation;

/// Bodies whose positions drive the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// Where a position is observed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observer {
    /// Centre of the Earth.
    Geocenter,
    /// A point on the Earth's surface (lunar parallax applied).
    Topocentric(GeoLocation),
}
