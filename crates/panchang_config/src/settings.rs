//! The settings file and its conversion into typed configuration.

use std::collections::BTreeMap;
use std::path::Path;

use panchang_ephem::GeoLocation;
use panchang_festival::{FestivalRule, RuleSet};
use panchang_search::{MonthSystem, PanchangConfig, PhaseSearchConfig, RiseSetConfig};
use panchang_vedic::{AyanamshaSystem, Masa, Nakshatra};
use serde::Deserialize;

use crate::error::ConfigError;

/// Anchor value that deletes an entry from the table.
const NO_ANCHOR: &str = "none";

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Location used when a request names none. Default: New Delhi.
    #[serde(default = "default_location")]
    pub location: GeoLocation,

    /// Month convention reported as `lunar_month`.
    #[serde(default)]
    pub month_system: MonthSystem,

    #[serde(default)]
    pub ayanamsha: AyanamshaSystem,

    #[serde(default)]
    pub rise_set: RiseSetConfig,

    #[serde(default)]
    pub phase_search: PhaseSearchConfig,

    /// Overrides of the full-moon anchor table, nakshatra name to month
    /// name, or `"none"` to drop the nakshatra.
    #[serde(default)]
    pub anchors: BTreeMap<String, String>,

    #[serde(default)]
    pub festivals: FestivalSettings,
}

/// `[festivals]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FestivalSettings {
    /// Convention the rules' lunar months are written in.
    #[serde(default)]
    pub month_system: MonthSystem,

    /// Start from the built-in table.
    #[serde(default = "default_true")]
    pub standard: bool,

    /// Rules evaluated after the built-in ones.
    #[serde(default)]
    pub rules: Vec<FestivalRule>,
}

impl Default for FestivalSettings {
    fn default() -> Self {
        Self {
            month_system: MonthSystem::default(),
            standard: default_true(),
            rules: Vec::new(),
        }
    }
}

fn default_location() -> GeoLocation {
    GeoLocation::DEFAULT
}
fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            location: default_location(),
            month_system: MonthSystem::default(),
            ayanamsha: AyanamshaSystem::default(),
            rise_set: RiseSetConfig::default(),
            phase_search: PhaseSearchConfig::default(),
            anchors: BTreeMap::new(),
            festivals: FestivalSettings::default(),
        }
    }
}

impl Settings {
    /// Search and assembly configuration with anchor overrides applied.
    pub fn panchang_config(&self) -> Result<PanchangConfig, ConfigError> {
        let mut config = PanchangConfig {
            ayanamsha: self.ayanamsha,
            rise_set: self.rise_set,
            phase_search: self.phase_search.clone(),
            ..PanchangConfig::default()
        };
        for (key, value) in &self.anchors {
            let nakshatra: Nakshatra = key
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("anchors: {e}")))?;
            if value.eq_ignore_ascii_case(NO_ANCHOR) {
                config.anchors.remove(nakshatra);
            } else {
                let masa: Masa = value
                    .parse()
                    .map_err(|e| ConfigError::Invalid(format!("anchors.{key}: {e}")))?;
                config.anchors.set(nakshatra, masa);
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// The festival rule set described by `[festivals]`.
    pub fn rule_set(&self) -> Result<RuleSet, ConfigError> {
        let fest = &self.festivals;
        if !fest.standard {
            return Ok(RuleSet::new(fest.rules.clone(), fest.month_system)?);
        }
        let mut set = RuleSet::standard();
        if set.month_system() != fest.month_system {
            return Err(ConfigError::Invalid(format!(
                "the built-in festival table uses {} months; set festivals.standard = false \
                 to write {} rules",
                set.month_system(),
                fest.month_system
            )));
        }
        set.extend(fest.rules.iter().cloned())?;
        Ok(set)
    }

    /// Check every section without keeping the results.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.location
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("location: {e}")))?;
        self.panchang_config()?;
        self.rule_set()?;
        Ok(())
    }
}

/// Parse and validate settings from TOML text.
pub fn parse(text: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = toml::from_str(text)?;
    settings.validate()?;
    Ok(settings)
}

/// Read, parse and validate a settings file.
pub fn load(path: &Path) -> Result<Settings, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse(&text)?;
    tracing::debug!(
        path = %path.display(),
        anchors = settings.anchors.len(),
        rules = settings.festivals.rules.len(),
        "loaded settings"
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_default() {
        let settings = parse("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.panchang_config().unwrap(), PanchangConfig::default());
        assert_eq!(settings.rule_set().unwrap(), RuleSet::standard());
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(matches!(parse("colour = 1"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            parse("[phase_search]\nwindow = [30]"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn anchor_none_removes() {
        let settings = parse("[anchors]\nChitra = \"none\"").unwrap();
        let config = settings.panchang_config().unwrap();
        assert_eq!(config.anchors.get(Nakshatra::Chitra), None);
        assert_eq!(config.anchors.len(), 26);
    }

    #[test]
    fn bad_anchor_names() {
        assert!(matches!(
            parse("[anchors]\nChitraa = \"Chaitra\""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            parse("[anchors]\nChitra = \"Chaitraa\""),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn amanta_rules_need_own_table() {
        let err = parse("[festivals]\nmonth_system = \"amanta\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let ok = parse("[festivals]\nmonth_system = \"amanta\"\nstandard = false").unwrap();
        let set = ok.rule_set().unwrap();
        assert!(set.rules().is_empty());
        assert_eq!(set.month_system(), MonthSystem::Amanta);
    }
}
