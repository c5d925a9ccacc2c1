//! Shared helpers for the classifiers.

/// Normalize an angle to [0, 360) degrees.
///
/// Tiny negative inputs that would round up to exactly 360.0 map to 0.0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Floor of a segment coordinate, snapping values within float noise of an
/// integer onto it so that computed boundaries (k * 40/3 degrees) open the
/// next segment.
pub(crate) fn segment_floor(x: f64) -> f64 {
    let r = x.round();
    if (x - r).abs() < 1e-11 { r } else { x.floor() }
}

/// Loose name comparison: ASCII case-insensitive, ignoring spaces,
/// hyphens and underscores ("Purva Phalguni" == "purva_phalguni").
pub(crate) fn names_match(canonical: &str, candidate: &str) -> bool {
    let squash = |s: &str| {
        s.chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect::<String>()
    };
    squash(canonical) == squash(candidate)
}

/// `Serialize` as the display name, `FromStr`/`Deserialize` from any loosely
/// matching name. The type needs `const fn name(self)` and an `ALL` table.
macro_rules! named_enum {
    ($ty:ident, $all:expr, $kind:literal) => {
        impl std::str::FromStr for $ty {
            type Err = crate::error::VedicError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $all.iter()
                    .copied()
                    .find(|v| crate::util::names_match(v.name(), s))
                    .ok_or_else(|| crate::error::VedicError::UnknownName {
                        kind: $kind,
                        name: s.to_string(),
                    })
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_360(0.0), 0.0);
    }

    #[test]
    fn normalize_360_wraps() {
        assert_eq!(normalize_360(360.0), 0.0);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-17);
        assert!((0.0..360.0).contains(&r), "r = {r}");
    }

    #[test]
    fn loose_names() {
        assert!(names_match("Purva Phalguni", "purva_phalguni"));
        assert!(names_match("Fagan-Bradley", "FaganBradley"));
        assert!(!names_match("Rohini", "Revati"));
    }
}
