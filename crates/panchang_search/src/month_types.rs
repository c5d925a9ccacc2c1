//! Types for lunar month resolution.

use std::fmt;
use std::str::FromStr;

use panchang_time::Moment;
use panchang_vedic::{ALL_NAKSHATRAS, Masa, Nakshatra};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::event_types::LunarPhase;
use crate::position::LongitudeSample;

/// Lunar month naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthSystem {
    /// Month runs new moon to new moon.
    Amanta,
    /// Month runs full moon to full moon (North Indian).
    #[default]
    Purnimanta,
}

impl MonthSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Amanta => "amanta",
            Self::Purnimanta => "purnimanta",
        }
    }
}

impl fmt::Display for MonthSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MonthSystem {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amanta" => Ok(Self::Amanta),
            "purnimanta" => Ok(Self::Purnimanta),
            other => Err(SearchError::InvalidInput(format!(
                "unknown month system '{other}' (expected amanta or purnimanta)"
            ))),
        }
    }
}

/// How a month name was obtained, from most to least trustworthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthSource {
    /// Sidereal Sun at the latest new moon.
    NewMoon,
    /// Anchor table entry for the latest full moon's nakshatra.
    FullMoonAnchor,
    /// No anchor entry; sidereal Sun at the latest full moon.
    FullMoonSolar,
    /// No phase found; sidereal Sun at sunrise.
    SunriseSolar,
}

impl MonthSource {
    /// Whether the month rests on a located phase and, for purnimanta, an
    /// anchor table hit.
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::NewMoon | Self::FullMoonAnchor)
    }
}

/// A located new or full moon with the longitudes sampled there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunarPhaseAnchor {
    pub phase: LunarPhase,
    pub at: Moment,
    pub window_days: f64,
    pub sample: LongitudeSample,
}

/// One convention's month with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedMonth {
    /// Month after any paksha shift.
    pub masa: Masa,
    /// Month before the paksha shift (equal to `masa` for amanta).
    pub base: Masa,
    pub source: MonthSource,
    pub anchor: Option<LunarPhaseAnchor>,
}

/// Both conventions for the same sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunarMonths {
    pub amanta: ResolvedMonth,
    pub purnimanta: ResolvedMonth,
}

impl LunarMonths {
    pub fn get(&self, system: MonthSystem) -> &ResolvedMonth {
        match system {
            MonthSystem::Amanta => &self.amanta,
            MonthSystem::Purnimanta => &self.purnimanta,
        }
    }

    pub fn month(&self, system: MonthSystem) -> Masa {
        self.get(system).masa
    }
}

/// Full-moon nakshatra → purnimanta month.
///
/// The default covers all 27 nakshatras: each maps to the month whose
/// eponymous nakshatra lies nearest, so the full moon drifting one or two
/// nakshatras either side still names the right month. Nakshatras removed
/// from the table fall back to the sidereal Sun at the full moon.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthAnchorTable {
    entries: [Option<Masa>; 27],
}

impl MonthAnchorTable {
    pub const fn empty() -> Self {
        Self { entries: [None; 27] }
    }

    pub fn eponymous() -> Self {
        let mut table = Self::empty();
        for (nakshatra, masa) in [
            (Nakshatra::Chitra, Masa::Chaitra),
            (Nakshatra::Vishakha, Masa::Vaishakha),
            (Nakshatra::Jyeshtha, Masa::Jyeshtha),
            (Nakshatra::PurvaAshadha, Masa::Ashadha),
            (Nakshatra::UttaraAshadha, Masa::Ashadha),
            (Nakshatra::Shravana, Masa::Shravana),
            (Nakshatra::PurvaBhadrapada, Masa::Bhadrapada),
            (Nakshatra::UttaraBhadrapada, Masa::Bhadrapada),
            (Nakshatra::Ashwini, Masa::Ashwin),
            (Nakshatra::Krittika, Masa::Kartika),
            (Nakshatra::Mrigashira, Masa::Margashirsha),
            (Nakshatra::Pushya, Masa::Pausha),
            (Nakshatra::Magha, Masa::Magha),
            (Nakshatra::PurvaPhalguni, Masa::Phalguna),
            (Nakshatra::UttaraPhalguni, Masa::Phalguna),
        ] {
            table.set(nakshatra, masa);
        }
        table
    }

    /// Eponymous pairs plus their neighbours; every nakshatra has an entry.
    pub fn complete() -> Self {
        let mut table = Self::eponymous();
        for (nakshatra, masa) in [
            (Nakshatra::Revati, Masa::Ashwin),
            (Nakshatra::Bharani, Masa::Kartika),
            (Nakshatra::Rohini, Masa::Margashirsha),
            (Nakshatra::Ardra, Masa::Margashirsha),
            (Nakshatra::Punarvasu, Masa::Pausha),
            (Nakshatra::Ashlesha, Masa::Magha),
            (Nakshatra::Hasta, Masa::Chaitra),
            (Nakshatra::Swati, Masa::Chaitra),
            (Nakshatra::Anuradha, Masa::Vaishakha),
            (Nakshatra::Mula, Masa::Jyeshtha),
            (Nakshatra::Dhanishtha, Masa::Shravana),
            (Nakshatra::Shatabhisha, Masa::Shravana),
        ] {
            table.set(nakshatra, masa);
        }
        table
    }

    pub fn get(&self, nakshatra: Nakshatra) -> Option<Masa> {
        self.entries[nakshatra.index() as usize]
    }

    pub fn set(&mut self, nakshatra: Nakshatra, masa: Masa) {
        self.entries[nakshatra.index() as usize] = Some(masa);
    }

    pub fn remove(&mut self, nakshatra: Nakshatra) {
        self.entries[nakshatra.index() as usize] = None;
    }

    /// Entries in nakshatra order.
    pub fn iter(&self) -> impl Iterator<Item = (Nakshatra, Masa)> + '_ {
        ALL_NAKSHATRAS
            .iter()
            .zip(self.entries.iter())
            .filter_map(|(n, m)| m.map(|m| (*n, m)))
    }

    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MonthAnchorTable {
    fn default() -> Self {
        Self::complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_system_parse() {
        assert_eq!("Amanta".parse::<MonthSystem>().unwrap(), MonthSystem::Amanta);
        assert_eq!(
            " purnimanta ".parse::<MonthSystem>().unwrap(),
            MonthSystem::Purnimanta
        );
        assert!("solar".parse::<MonthSystem>().is_err());
        assert_eq!(MonthSystem::default(), MonthSystem::Purnimanta);
    }

    #[test]
    fn eponymous_table() {
        let t = MonthAnchorTable::eponymous();
        assert_eq!(t.len(), 15);
        assert_eq!(t.get(Nakshatra::Chitra), Some(Masa::Chaitra));
        assert_eq!(t.get(Nakshatra::UttaraPhalguni), Some(Masa::Phalguna));
        assert_eq!(t.get(Nakshatra::Rohini), None);
        // Every month is reachable
        for masa in Masa::all() {
            assert!(t.iter().any(|(_, m)| m == *masa), "{masa} missing");
        }
    }

    #[test]
    fn default_table_covers_every_nakshatra() {
        let t = MonthAnchorTable::default();
        assert_eq!(t.len(), 27);
        for (n, m) in MonthAnchorTable::eponymous().iter() {
            assert_eq!(t.get(n), Some(m), "{n} changed");
        }
        // Full moons observed off the eponymous nakshatra
        assert_eq!(t.get(Nakshatra::Revati), Some(Masa::Ashwin)); // 2025-10-07
        assert_eq!(t.get(Nakshatra::Bharani), Some(Masa::Kartika)); // 2025-11-05
        assert_eq!(t.get(Nakshatra::Hasta), Some(Masa::Chaitra)); // 2023-04-06
        assert_eq!(t.get(Nakshatra::Swati), Some(Masa::Chaitra)); // 2024-04-23
        assert_eq!(t.get(Nakshatra::Anuradha), Some(Masa::Vaishakha)); // 2024-05-23
        assert_eq!(t.get(Nakshatra::Mula), Some(Masa::Jyeshtha)); // 2024-06-22
        assert_eq!(t.get(Nakshatra::Dhanishtha), Some(Masa::Shravana)); // 2024-08-19
        assert_eq!(t.get(Nakshatra::Shatabhisha), Some(Masa::Shravana)); // 2023-08-31
        assert_eq!(t.get(Nakshatra::Ardra), Some(Masa::Margashirsha)); // 2023-12-27
        // Each month owns a contiguous arc of two or three nakshatras
        let mut counts = std::collections::HashMap::new();
        for (_, m) in t.iter() {
            *counts.entry(m).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 12);
        assert!(counts.values().all(|c| (2..=3).contains(c)));
    }

    #[test]
    fn override_and_remove() {
        let mut t = MonthAnchorTable::empty();
        assert!(t.is_empty());
        t.set(Nakshatra::Rohini, Masa::Kartika);
        assert_eq!(t.get(Nakshatra::Rohini), Some(Masa::Kartika));
        t.remove(Nakshatra::Rohini);
        assert!(t.is_empty());
    }

    #[test]
    fn exactness() {
        assert!(MonthSource::NewMoon.is_exact());
        assert!(MonthSource::FullMoonAnchor.is_exact());
        assert!(!MonthSource::FullMoonSolar.is_exact());
        assert!(!MonthSource::SunriseSolar.is_exact());
    }

    #[test]
    fn month_system_serde() {
        let json = serde_json::to_string(&MonthSystem::Amanta).unwrap();
        assert_eq!(json, "\"amanta\"");
    }
}
