//! The built-in festival table, written in the purnimanta convention.
//!
//! A purnimanta month begins after a full moon, so the bright half that
//! follows carries the month of the full moon just past. Krishna-paksha
//! observances use the almanac month name; Shukla-paksha and Purnima
//! observances name the month one earlier (Holi falls on the Purnima
//! closing Magha).

use panchang_vedic::{Masa, Nakshatra, Paksha, TithiName};

use crate::condition::Condition;
use crate::rules::FestivalRule;

fn lunar(name: &str, tithi: TithiName, paksha: Option<Paksha>, month: Masa) -> FestivalRule {
    let mut conditions = vec![Condition::tithi(tithi)];
    if let Some(p) = paksha {
        conditions.push(Condition::paksha(p));
    }
    conditions.push(Condition::lunar_month(month));
    FestivalRule::new(name, conditions)
}

/// Standard observances in output order.
pub fn standard_rules() -> Vec<FestivalRule> {
    use Paksha::{Krishna, Shukla};
    use TithiName::*;

    let mut janmashtami = lunar(
        "Krishna Janmashtami",
        Ashtami,
        Some(Krishna),
        Masa::Bhadrapada,
    );
    janmashtami
        .conditions
        .push(Condition::nakshatra(Nakshatra::Rohini));

    vec![
        lunar("Diwali", Amavasya, None, Masa::Kartika),
        janmashtami,
        lunar("Holi", Purnima, None, Masa::Magha),
        lunar("Karva Chauth", Chaturthi, Some(Krishna), Masa::Kartika),
        lunar("Raksha Bandhan", Purnima, None, Masa::Ashadha),
        lunar("Ganesh Chaturthi", Chaturthi, Some(Shukla), Masa::Shravana),
        lunar("Maha Shivratri", Chaturdashi, Some(Krishna), Masa::Phalguna),
        lunar("Sharadiya Navratri Begins", Pratipada, Some(Shukla), Masa::Bhadrapada),
        lunar("Dussehra / Vijayadashami", Dashami, Some(Shukla), Masa::Bhadrapada),
        FestivalRule::new("Makar Sankranti", vec![Condition::civil_date(1, &[14, 15])]),
        lunar("Ram Navami", Navami, Some(Shukla), Masa::Phalguna),
        lunar("Chhath Puja", Shashthi, Some(Shukla), Masa::Ashwin),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_valid_and_named_uniquely() {
        let rules = standard_rules();
        assert_eq!(rules.len(), 12);
        for r in &rules {
            r.validate().unwrap();
        }
        let mut names: Vec<_> = rules.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn janmashtami_has_four_conditions() {
        let rules = standard_rules();
        let j = rules
            .iter()
            .find(|r| r.name == "Krishna Janmashtami")
            .unwrap();
        assert_eq!(j.conditions.len(), 4);
    }

    #[test]
    fn bright_half_rules_name_the_earlier_month() {
        let rules = standard_rules();
        let month_of = |name: &str| {
            rules
                .iter()
                .find(|r| r.name == name)
                .and_then(|r| {
                    r.conditions.iter().find_map(|c| match c {
                        Condition::LunarMonth { month } => Some(*month),
                        _ => None,
                    })
                })
                .unwrap()
        };
        assert_eq!(month_of("Holi"), Masa::Magha);
        assert_eq!(month_of("Ram Navami"), Masa::Phalguna);
        assert_eq!(month_of("Dussehra / Vijayadashami"), Masa::Bhadrapada);
        // Dark-half observances keep the almanac name
        assert_eq!(month_of("Diwali"), Masa::Kartika);
        assert_eq!(month_of("Maha Shivratri"), Masa::Phalguna);
    }
}
