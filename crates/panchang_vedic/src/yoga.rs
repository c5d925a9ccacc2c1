//! Yoga: 27 divisions of the sidereal Sun + Moon longitude sum.

use crate::util::{normalize_360, segment_floor};

/// Span of one yoga: 360/27 degrees.
pub const YOGA_SPAN: f64 = 360.0 / 27.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shoola,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyana,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shoola,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyana,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shoola => "Shoola",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyana => "Variyana",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }
}

named_enum!(Yoga, ALL_YOGAS, "yoga");

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// 1-based yoga index (1 = Vishkambha .. 27 = Vaidhriti).
    pub index: u8,
    pub degrees_in_yoga: f64,
}

/// Classify `sidereal_sun + sidereal_moon` in degrees (any real value; wrapped).
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let sum = normalize_360(sum_deg);
    let index0 = (segment_floor(sum * 27.0 / 360.0) as u8).min(26);
    YogaInfo {
        yoga: ALL_YOGAS[index0 as usize],
        index: index0 + 1,
        degrees_in_yoga: (sum - index0 as f64 * YOGA_SPAN).max(0.0),
    }
}
