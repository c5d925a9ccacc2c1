//! Predicates a festival rule is built from.

use chrono::{Datelike, NaiveDate};
use panchang_search::{MonthSystem, PanchangRecord};
use panchang_vedic::{Masa, Nakshatra, Paksha, TithiName};
use serde::{Deserialize, Serialize};

/// One test against a record and its civil date.
///
/// Serialized with a `type` tag, e.g.
/// `{ type = "lunar_month", month = "Kartika" }` in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum Condition {
    Tithi { name: TithiName },
    Paksha { paksha: Paksha },
    LunarMonth { month: Masa },
    Nakshatra { name: Nakshatra },
    /// Fixed civil month (1-12) and any of `days`.
    CivilDate { month: u32, days: Vec<u32> },
}

impl Condition {
    pub fn tithi(name: TithiName) -> Self {
        Self::Tithi { name }
    }

    pub fn paksha(paksha: Paksha) -> Self {
        Self::Paksha { paksha }
    }

    pub fn lunar_month(month: Masa) -> Self {
        Self::LunarMonth { month }
    }

    pub fn nakshatra(name: Nakshatra) -> Self {
        Self::Nakshatra { name }
    }

    pub fn civil_date(month: u32, days: &[u32]) -> Self {
        Self::CivilDate {
            month,
            days: days.to_vec(),
        }
    }

    /// Whether the condition holds. `months` picks the lunar month
    /// convention.
    pub fn matches(&self, record: &PanchangRecord, date: NaiveDate, months: MonthSystem) -> bool {
        match self {
            Self::Tithi { name } => record.tithi.name == *name,
            Self::Paksha { paksha } => record.tithi.paksha == *paksha,
            Self::LunarMonth { month } => {
                let current = match months {
                    MonthSystem::Amanta => record.lunar_month_amanta,
                    MonthSystem::Purnimanta => record.lunar_month_purnimanta,
                };
                current == *month
            }
            Self::Nakshatra { name } => record.nakshatra.name == *name,
            Self::CivilDate { month, days } => {
                date.month() == *month && days.contains(&date.day())
            }
        }
    }

    /// Reason the condition can never hold, if any.
    pub(crate) fn defect(&self) -> Option<String> {
        match self {
            Self::CivilDate { month, days } => {
                if !(1..=12).contains(month) {
                    Some(format!("civil month {month} outside 1-12"))
                } else if days.is_empty() {
                    Some("civil date lists no days".to_string())
                } else {
                    days.iter()
                        .find(|d| !(1..=31).contains(*d))
                        .map(|d| format!("civil day {d} outside 1-31"))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let json = serde_json::to_string(&Condition::lunar_month(Masa::Kartika)).unwrap();
        assert_eq!(json, r#"{"type":"lunar_month","month":"Kartika"}"#);
        let json = serde_json::to_string(&Condition::civil_date(1, &[14, 15])).unwrap();
        assert_eq!(json, r#"{"type":"civil_date","month":1,"days":[14,15]}"#);
    }

    #[test]
    fn parse_loose_names() {
        let c: Condition =
            serde_json::from_str(r#"{"type":"nakshatra","name":"purva phalguni"}"#).unwrap();
        assert_eq!(c, Condition::nakshatra(Nakshatra::PurvaPhalguni));
        let c: Condition = serde_json::from_str(r#"{"type":"paksha","paksha":"krishna"}"#).unwrap();
        assert_eq!(c, Condition::paksha(Paksha::Krishna));
    }

    #[test]
    fn rejects_unknown_names_and_fields() {
        assert!(serde_json::from_str::<Condition>(r#"{"type":"tithi","name":"Dashmi"}"#).is_err());
        assert!(serde_json::from_str::<Condition>(r#"{"type":"weekday","name":"Monday"}"#).is_err());
        assert!(
            serde_json::from_str::<Condition>(r#"{"type":"tithi","name":"Navami","x":1}"#).is_err()
        );
    }

    #[test]
    fn civil_date_defects() {
        assert!(Condition::civil_date(13, &[1]).defect().is_some());
        assert!(Condition::civil_date(1, &[]).defect().is_some());
        assert!(Condition::civil_date(1, &[0]).defect().is_some());
        assert!(Condition::civil_date(1, &[14, 15]).defect().is_none());
        assert!(Condition::tithi(TithiName::Navami).defect().is_none());
    }
}
