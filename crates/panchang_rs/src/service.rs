//! Day and month queries over a shared ephemeris.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use panchang_config::{ConfigError, Settings};
use panchang_ephem::{Ephemeris, GeoLocation};
use panchang_festival::RuleSet;
use panchang_search::{MonthSystem, PanchangConfig, PanchangRecord, compute_panchang};
use serde::Serialize;

use crate::error::PanchangError;

/// One civil day: the record and the festivals it triggers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayEntry {
    #[serde(flatten)]
    pub record: PanchangRecord,
    pub festivals: Vec<String>,
}

/// Shared ephemeris plus everything a query needs besides date and place.
///
/// Cloning is cheap; clones share the ephemeris.
#[derive(Debug)]
pub struct PanchangService<E: Ephemeris> {
    eph: Arc<E>,
    config: PanchangConfig,
    rules: RuleSet,
    location: GeoLocation,
    month_system: MonthSystem,
}

impl<E: Ephemeris> Clone for PanchangService<E> {
    fn clone(&self) -> Self {
        Self {
            eph: Arc::clone(&self.eph),
            config: self.config.clone(),
            rules: self.rules.clone(),
            location: self.location,
            month_system: self.month_system,
        }
    }
}

impl<E: Ephemeris> PanchangService<E> {
    /// Default configuration, the standard festival table and New Delhi.
    pub fn new(eph: Arc<E>) -> Self {
        Self {
            eph,
            config: PanchangConfig::default(),
            rules: RuleSet::standard(),
            location: GeoLocation::DEFAULT,
            month_system: MonthSystem::default(),
        }
    }

    /// Service configured from a settings file.
    pub fn from_settings(eph: Arc<E>, settings: &Settings) -> Result<Self, ConfigError> {
        Ok(Self {
            eph,
            config: settings.panchang_config()?,
            rules: settings.rule_set()?,
            location: settings.location,
            month_system: settings.month_system,
        })
    }

    pub fn with_config(mut self, config: PanchangConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = location;
        self
    }

    pub fn with_month_system(mut self, month_system: MonthSystem) -> Self {
        self.month_system = month_system;
        self
    }

    pub fn ephemeris(&self) -> &E {
        &self.eph
    }

    pub fn config(&self) -> &PanchangConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn location(&self) -> GeoLocation {
        self.location
    }

    pub fn month_system(&self) -> MonthSystem {
        self.month_system
    }

    /// Panchang record for `date`; `None` uses the service location.
    pub fn panchang(
        &self,
        date: NaiveDate,
        location: Option<&GeoLocation>,
    ) -> Result<PanchangRecord, PanchangError> {
        let location = location.copied().unwrap_or(self.location);
        Ok(compute_panchang(
            self.eph.as_ref(),
            date,
            &location,
            self.month_system,
            &self.config,
        )?)
    }

    /// Festivals observed on `date`.
    pub fn festivals(
        &self,
        date: NaiveDate,
        location: Option<&GeoLocation>,
    ) -> Result<Vec<String>, PanchangError> {
        Ok(self.day(date, location)?.festivals)
    }

    /// Record and festivals for `date`.
    pub fn day(
        &self,
        date: NaiveDate,
        location: Option<&GeoLocation>,
    ) -> Result<DayEntry, PanchangError> {
        let record = self.panchang(date, location)?;
        let festivals = self.rules.evaluate(&record, date);
        Ok(DayEntry { record, festivals })
    }

    /// One entry per civil day of `month` (1-12) in `year`.
    ///
    /// Stops at the first day that fails.
    pub fn month(
        &self,
        year: i32,
        month: u32,
        location: Option<&GeoLocation>,
    ) -> Result<Vec<DayEntry>, PanchangError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            PanchangError::InvalidInput(format!("no such month: {year}-{month:02}"))
        })?;
        let entries = first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(|d| self.day(d, location))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(year, month, days = entries.len(), "month computed");
        Ok(entries)
    }
}
