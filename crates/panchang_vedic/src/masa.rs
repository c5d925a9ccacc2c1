//! Masa: the twelve lunar month names.
//!
//! Which month a day belongs to depends on the reckoning (new-moon-ending
//! amanta or full-moon-ending purnimanta); that resolution lives with the
//! searches. This module only fixes the table, its order, and the mapping
//! from a sidereal-Sun rashi index.

/// Lunar months in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashwin,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashwin,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashwin => "Ashwin",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    /// 0-based index (Chaitra=0 .. Phalguna=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Month at a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_MASAS[(index % 12) as usize]
    }

    /// Month named by a sidereal-Sun rashi index (Mesha=0 → Chaitra).
    pub const fn from_rashi_index(rashi_index: u8) -> Self {
        Self::from_index(rashi_index)
    }

    /// Cyclic successor (Phalguna → Chaitra).
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub const fn all() -> &'static [Masa; 12] {
        &ALL_MASAS
    }
}

named_enum!(Masa, ALL_MASAS, "masa");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_wraps() {
        assert_eq!(Masa::Chaitra.next(), Masa::Vaishakha);
        assert_eq!(Masa::Phalguna.next(), Masa::Chaitra);
    }

    #[test]
    fn twelve_successors_return_home() {
        for &m in Masa::all() {
            let mut x = m;
            for _ in 0..12 {
                x = x.next();
            }
            assert_eq!(x, m);
        }
    }

    #[test]
    fn rashi_mapping() {
        assert_eq!(Masa::from_rashi_index(0), Masa::Chaitra);
        assert_eq!(Masa::from_rashi_index(7), Masa::Kartika);
        assert_eq!(Masa::from_rashi_index(11), Masa::Phalguna);
        assert_eq!(Masa::from_rashi_index(12), Masa::Chaitra);
    }

    #[test]
    fn serde_as_name() {
        let json = serde_json::to_string(&Masa::Bhadrapada).unwrap();
        assert_eq!(json, "\"Bhadrapada\"");
        let back: Masa = serde_json::from_str("\"kartika\"").unwrap();
        assert_eq!(back, Masa::Kartika);
        assert!(serde_json::from_str::<Masa>("\"Adhika\"").is_err());
    }
}
