//! Karana: half-tithi divisions of the Moon−Sun elongation.
//!
//! Each 6° of elongation is one karana, sixty per lunation. Half-indices
//! 1–56 cycle through seven movable karanas; 57–60 are the four fixed
//! karanas that close the lunation.

use crate::util::normalize_360;

/// Span of one karana in degrees of elongation.
pub const KARANA_SPAN: f64 = 6.0;

/// The eleven karanas: seven movable, four fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

const FIXED: [Karana; 4] = [
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether this is one of the four fixed karanas.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

named_enum!(Karana, ALL_KARANAS, "karana");

/// Karana lookup result.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 1-based half-tithi index within the lunation (1..=60).
    pub index: u8,
    /// Degrees of elongation already elapsed in this karana [0, 6).
    pub degrees_in_karana: f64,
}

/// Karana for a 1-based half-tithi index. Any integer is first reduced into
/// 1..=60.
pub const fn karana_from_half_index(half_index: i64) -> Karana {
    let reduced = (half_index - 1).rem_euclid(60) + 1;
    if reduced <= 56 {
        MOVABLE[((reduced - 1) % 7) as usize]
    } else {
        FIXED[(reduced - 57) as usize]
    }
}

/// Classify a Moon−Sun elongation in degrees (any real value; wrapped).
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let diff = normalize_360(elongation_deg);
    let index0 = ((diff / KARANA_SPAN).floor() as i64).min(59);
    KaranaInfo {
        karana: karana_from_half_index(index0 + 1),
        index: (index0 + 1) as u8,
        degrees_in_karana: diff - index0 as f64 * KARANA_SPAN,
    }
}
