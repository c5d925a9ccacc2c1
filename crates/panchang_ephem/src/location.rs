//! Geographic observer locations.

use serde::{Deserialize, Serialize};

use crate::error::EphemerisError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    #[serde(default)]
    pub altitude_m: f64,
}

impl GeoLocation {
    /// New Delhi, used when a request names no location.
    pub const DEFAULT: GeoLocation = GeoLocation {
        latitude_deg: 28.6139,
        longitude_deg: 77.2090,
        altitude_m: 0.0,
    };

    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Construct and validate in one step.
    pub fn try_new(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
    ) -> Result<Self, EphemerisError> {
        let loc = Self::new(latitude_deg, longitude_deg, altitude_m);
        loc.validate()?;
        Ok(loc)
    }

    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(EphemerisError::InvalidLocation(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(EphemerisError::InvalidLocation(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        if !self.altitude_m.is_finite() {
            return Err(EphemerisError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::DEFAULT
    }
}
