//! Rules and rule sets.

use std::sync::OnceLock;

use chrono::NaiveDate;
use panchang_search::{MonthSystem, PanchangRecord};
use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::error::FestivalError;
use crate::standard::standard_rules;

/// A named conjunction of conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FestivalRule {
    pub name: String,
    pub conditions: Vec<Condition>,
}

impl FestivalRule {
    pub fn new(name: impl Into<String>, conditions: Vec<Condition>) -> Self {
        Self {
            name: name.into(),
            conditions,
        }
    }

    /// All conditions hold.
    pub fn matches(&self, record: &PanchangRecord, date: NaiveDate, months: MonthSystem) -> bool {
        self.conditions
            .iter()
            .all(|c| c.matches(record, date, months))
    }

    /// A rule needs a name and at least one satisfiable condition.
    pub fn validate(&self) -> Result<(), FestivalError> {
        let invalid = |reason: String| FestivalError::InvalidRule {
            name: self.name.clone(),
            reason,
        };
        if self.name.trim().is_empty() {
            return Err(invalid("name is empty".into()));
        }
        if self.conditions.is_empty() {
            return Err(invalid("no conditions".into()));
        }
        match self.conditions.iter().find_map(Condition::defect) {
            Some(reason) => Err(invalid(reason)),
            None => Ok(()),
        }
    }
}

/// An ordered list of rules and the month convention they are written in.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    rules: Vec<FestivalRule>,
    month_system: MonthSystem,
}

impl RuleSet {
    /// Validated rules read in `month_system`.
    pub fn new(rules: Vec<FestivalRule>, month_system: MonthSystem) -> Result<Self, FestivalError> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self {
            rules,
            month_system,
        })
    }

    /// The built-in table (purnimanta).
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
            month_system: MonthSystem::Purnimanta,
        }
    }

    /// Append rules after the existing ones. Nothing is added unless every
    /// rule validates.
    pub fn extend(
        &mut self,
        rules: impl IntoIterator<Item = FestivalRule>,
    ) -> Result<(), FestivalError> {
        let rules: Vec<FestivalRule> = rules.into_iter().collect();
        for rule in &rules {
            rule.validate()?;
        }
        self.rules.extend(rules);
        Ok(())
    }

    pub fn rules(&self) -> &[FestivalRule] {
        &self.rules
    }

    pub fn month_system(&self) -> MonthSystem {
        self.month_system
    }

    /// Names of all matching rules in declaration order, each once.
    pub fn evaluate(&self, record: &PanchangRecord, date: NaiveDate) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for rule in &self.rules {
            if rule.matches(record, date, self.month_system) && !out.contains(&rule.name) {
                tracing::trace!(festival = %rule.name, %date, "rule matched");
                out.push(rule.name.clone());
            }
        }
        out
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Evaluate the standard table.
pub fn festivals_for(record: &PanchangRecord, date: NaiveDate) -> Vec<String> {
    static STANDARD: OnceLock<RuleSet> = OnceLock::new();
    STANDARD.get_or_init(RuleSet::standard).evaluate(record, date)
}
