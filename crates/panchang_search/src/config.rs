//! Typed configuration for the searches and the assembler.

use std::f64::consts::PI;

use panchang_vedic::AyanamshaSystem;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::month_types::MonthAnchorTable;

/// Mean Earth radius in meters (IAU nominal, for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Shortest interval between two phase-quarter changes is about 6.5 days.
const MAX_PHASE_STEP_DAYS: f64 = 5.0;

/// Configurable parameters for sunrise/sunset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether to apply geometric dip for observer altitude,
    /// approximated as sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Total horizon depression for sunrise/sunset in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            let dip_rad = (2.0 * altitude_m / EARTH_RADIUS_M).sqrt();
            base + dip_rad * (180.0 / PI)
        } else {
            base
        }
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.refraction_arcmin.is_finite() || !self.semidiameter_arcmin.is_finite() {
            return Err(SearchError::InvalidInput(
                "rise/set arcminute values must be finite".into(),
            ));
        }
        Ok(())
    }
}

/// Lookback windows for the new/full moon search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhaseSearchConfig {
    /// Widening lookback windows in days, tried in order.
    pub windows_days: Vec<f64>,
    /// Cap on every window, also tried once more after the list is spent.
    pub max_lookback_days: f64,
    /// Coarse scan step handed to the discrete search.
    pub step_days: f64,
}

impl Default for PhaseSearchConfig {
    fn default() -> Self {
        Self {
            windows_days: vec![30.0, 60.0, 120.0, 365.0],
            max_lookback_days: 400.0,
            step_days: 1.0,
        }
    }
}

impl PhaseSearchConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.max_lookback_days.is_finite() || self.max_lookback_days <= 0.0 {
            return Err(SearchError::InvalidInput(
                "max_lookback_days must be positive".into(),
            ));
        }
        if self
            .windows_days
            .iter()
            .any(|w| !w.is_finite() || *w <= 0.0)
        {
            return Err(SearchError::InvalidInput(
                "lookback windows must be positive".into(),
            ));
        }
        if self.windows_days.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(SearchError::InvalidInput(
                "lookback windows must be strictly ascending".into(),
            ));
        }
        if !self.step_days.is_finite()
            || self.step_days <= 0.0
            || self.step_days > MAX_PHASE_STEP_DAYS
        {
            return Err(SearchError::InvalidInput(format!(
                "phase step_days must be in (0, {MAX_PHASE_STEP_DAYS}]"
            )));
        }
        Ok(())
    }

    /// The windows actually searched, narrowest first: each configured window
    /// capped at the maximum, then the maximum itself. Repeats are dropped.
    pub fn effective_windows(&self) -> Vec<f64> {
        let mut capped: Vec<f64> = self
            .windows_days
            .iter()
            .map(|w| w.min(self.max_lookback_days))
            .chain(std::iter::once(self.max_lookback_days))
            .collect();
        capped.sort_by(f64::total_cmp);
        let mut out: Vec<f64> = Vec::with_capacity(capped.len());
        for w in capped {
            if out.last() != Some(&w) {
                out.push(w);
            }
        }
        out
    }
}

/// Everything the assembler needs besides the date and location.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanchangConfig {
    pub ayanamsha: AyanamshaSystem,
    pub rise_set: RiseSetConfig,
    pub phase_search: PhaseSearchConfig,
    /// Full-moon nakshatra to purnimanta month.
    pub anchors: MonthAnchorTable,
}

impl PanchangConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        self.rise_set.validate()?;
        self.phase_search.validate()
    }
}
