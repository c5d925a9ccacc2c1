//! Festival Rule Engine.
//!
//! A festival is a [`FestivalRule`]: a name and a conjunction of
//! [`Condition`]s on tithi, paksha, lunar month, nakshatra, or a fixed civil
//! date. Every rule whose conditions all hold fires; declaration order only
//! decides output order.
//!
//! Lunar months are read in one convention per [`RuleSet`] (purnimanta for
//! the standard table).

pub mod condition;
pub mod error;
pub mod rules;
pub mod standard;

pub use condition::Condition;
pub use error::FestivalError;
pub use rules::{FestivalRule, RuleSet, festivals_for};
pub use standard::standard_rules;
