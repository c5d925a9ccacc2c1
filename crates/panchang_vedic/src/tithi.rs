//! Tithi (lunar day) and paksha (fortnight) from the Moon−Sun elongation.
//!
//! The elongation `(moon − sun) mod 360` is cut into thirty 12° tithis.
//! Tithis 1–15 form the waxing Shukla paksha, 16–30 the waning Krishna
//! paksha. Within each paksha tithis 1–14 share the same positional names;
//! the fifteenth is Purnima (full moon) in Shukla and Amavasya (new moon) in
//! Krishna.
//!
//! Elongation is a tropical difference; the ayanamsha cancels out.

use crate::util::normalize_360;

/// Span of one tithi in degrees of elongation.
pub const TITHI_SPAN: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing (bright) half: elongation [0°, 180°).
    Shukla,
    /// Waning (dark) half: elongation [180°, 360°).
    Krishna,
}

pub const ALL_PAKSHAS: [Paksha; 2] = [Paksha::Shukla, Paksha::Krishna];

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

named_enum!(Paksha, ALL_PAKSHAS, "paksha");

/// Tithi names: fourteen positional names plus the two fortnight endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TithiName {
    Pratipada,
    Dvitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dvadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

pub const ALL_TITHI_NAMES: [TithiName; 16] = [
    TithiName::Pratipada,
    TithiName::Dvitiya,
    TithiName::Tritiya,
    TithiName::Chaturthi,
    TithiName::Panchami,
    TithiName::Shashthi,
    TithiName::Saptami,
    TithiName::Ashtami,
    TithiName::Navami,
    TithiName::Dashami,
    TithiName::Ekadashi,
    TithiName::Dvadashi,
    TithiName::Trayodashi,
    TithiName::Chaturdashi,
    TithiName::Purnima,
    TithiName::Amavasya,
];

impl TithiName {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dvitiya => "Dvitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dvadashi => "Dvadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }

    /// Name of the tithi with 1-based index `index` (1..=30).
    ///
    /// Out-of-range input is clamped into 1..=30.
    pub const fn from_index(index: u8) -> Self {
        let index = if index == 0 {
            1
        } else if index > 30 {
            30
        } else {
            index
        };
        match index {
            15 => Self::Purnima,
            30 => Self::Amavasya,
            _ => ALL_TITHI_NAMES[((index - 1) % 15) as usize],
        }
    }
}

named_enum!(TithiName, ALL_TITHI_NAMES, "tithi");

/// Tithi lookup result.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TithiInfo {
    pub name: TithiName,
    /// 1-based tithi index (1 = Shukla Pratipada .. 30 = Amavasya).
    pub index: u8,
    pub paksha: Paksha,
    /// 1-based position within the paksha (1..=15).
    pub tithi_in_paksha: u8,
    /// Degrees of elongation already elapsed in this tithi [0, 12).
    pub degrees_in_tithi: f64,
}

impl TithiInfo {
    /// Display label, e.g. `"Pratipada (Shukla)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name.name(), self.paksha.name())
    }
}

/// Classify a Moon−Sun elongation in degrees (any real value; wrapped).
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let diff = normalize_360(elongation_deg);
    let index0 = ((diff / TITHI_SPAN).floor() as u8).min(29);
    let index = index0 + 1;
    let paksha = if index <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    TithiInfo {
        name: TithiName::from_index(index),
        index,
        paksha,
        tithi_in_paksha: index0 % 15 + 1,
        degrees_in_tithi: diff - index0 as f64 * TITHI_SPAN,
    }
}
