//! Challenge ratings and the CR-to-XP lookup
//!
//! A challenge rating is either one of the three standard fractions (1/8, 1/4,
//! 1/2) or a whole number from 0 to 30. Catalog sources write fractional CRs as
//! strings ("1/8") and whole CRs as numbers; both forms deserialize here.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChallengeRating {
    Eighth,
    Quarter,
    Half,
    Whole(u8),
}

/// A CR that could not be parsed from its catalog representation
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid challenge rating: {0}")]
pub struct InvalidChallengeRating(pub String);

impl ChallengeRating {
    pub const MAX_WHOLE: u8 = 30;

    /// Whole-number CR, rejecting values above 30
    pub fn whole(value: u8) -> Result<Self, InvalidChallengeRating> {
        if value > Self::MAX_WHOLE {
            return Err(InvalidChallengeRating(value.to_string()));
        }
        Ok(Self::Whole(value))
    }

    /// The rating in eighths, giving all CRs a single exact ordering unit
    pub fn in_eighths(&self) -> u32 {
        match self {
            Self::Eighth => 1,
            Self::Quarter => 2,
            Self::Half => 4,
            Self::Whole(n) => u32::from(*n) * 8,
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.in_eighths() as f64 / 8.0
    }

    /// XP value for this rating
    ///
    /// Reproduces the companion's embedded table. CRs 25 through 29 have no
    /// entry and resolve to 0.
    pub fn xp(&self) -> u32 {
        match self {
            Self::Eighth => 25,
            Self::Quarter => 50,
            Self::Half => 100,
            Self::Whole(n) => match n {
                0 => 10,
                1 => 200,
                2 => 450,
                3 => 700,
                4 => 1100,
                5 => 1800,
                6 => 2300,
                7 => 2900,
                8 => 3900,
                9 => 5000,
                10 => 5900,
                11 => 7200,
                12 => 8400,
                13 => 10000,
                14 => 11500,
                15 => 13000,
                16 => 15000,
                17 => 18000,
                18 => 20000,
                19 => 22000,
                20 => 25000,
                21 => 33000,
                22 => 41000,
                23 => 50000,
                24 => 62000,
                30 => 155000,
                _ => 0,
            },
        }
    }
}

impl PartialOrd for ChallengeRating {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChallengeRating {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.in_eighths().cmp(&other.in_eighths())
    }
}

impl std::fmt::Display for ChallengeRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eighth => write!(f, "1/8"),
            Self::Quarter => write!(f, "1/4"),
            Self::Half => write!(f, "1/2"),
            Self::Whole(n) => write!(f, "{}", n),
        }
    }
}

impl std::str::FromStr for ChallengeRating {
    type Err = InvalidChallengeRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1/8" => Ok(Self::Eighth),
            "1/4" => Ok(Self::Quarter),
            "1/2" => Ok(Self::Half),
            other => other
                .parse::<u8>()
                .map_err(|_| InvalidChallengeRating(s.to_string()))
                .and_then(Self::whole),
        }
    }
}

impl Serialize for ChallengeRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Whole(n) => serializer.serialize_u8(*n),
            fraction => serializer.serialize_str(&fraction.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ChallengeRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CrVisitor;

        impl Visitor<'_> for CrVisitor {
            type Value = ChallengeRating;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a challenge rating number or fraction string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u8::try_from(v)
                    .map_err(|_| de::Error::custom(InvalidChallengeRating(v.to_string())))
                    .and_then(|n| {
                        ChallengeRating::whole(n).map_err(de::Error::custom)
                    })
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                if v < 0 {
                    return Err(de::Error::custom(InvalidChallengeRating(v.to_string())));
                }
                self.visit_u64(v as u64)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                // API sources encode fractional CRs as 0.125 / 0.25 / 0.5
                if v == 0.125 {
                    Ok(ChallengeRating::Eighth)
                } else if v == 0.25 {
                    Ok(ChallengeRating::Quarter)
                } else if v == 0.5 {
                    Ok(ChallengeRating::Half)
                } else if v.fract() == 0.0 && v >= 0.0 {
                    self.visit_u64(v as u64)
                } else {
                    Err(de::Error::custom(InvalidChallengeRating(v.to_string())))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(CrVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_parsing() {
        assert_eq!("1/8".parse::<ChallengeRating>().unwrap(), ChallengeRating::Eighth);
        assert_eq!("1/4".parse::<ChallengeRating>().unwrap(), ChallengeRating::Quarter);
        assert_eq!("1/2".parse::<ChallengeRating>().unwrap(), ChallengeRating::Half);
        assert_eq!("5".parse::<ChallengeRating>().unwrap(), ChallengeRating::Whole(5));
        assert!("3/4".parse::<ChallengeRating>().is_err());
        assert!("31".parse::<ChallengeRating>().is_err());
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(ChallengeRating::Eighth.as_f64(), 0.125);
        assert_eq!(ChallengeRating::Quarter.as_f64(), 0.25);
        assert_eq!(ChallengeRating::Half.as_f64(), 0.5);
        assert_eq!(ChallengeRating::Whole(7).as_f64(), 7.0);
    }

    #[test]
    fn test_xp_table() {
        assert_eq!(ChallengeRating::Whole(0).xp(), 10);
        assert_eq!(ChallengeRating::Eighth.xp(), 25);
        assert_eq!(ChallengeRating::Quarter.xp(), 50);
        assert_eq!(ChallengeRating::Half.xp(), 100);
        assert_eq!(ChallengeRating::Whole(1).xp(), 200);
        assert_eq!(ChallengeRating::Whole(5).xp(), 1800);
        assert_eq!(ChallengeRating::Whole(13).xp(), 10000);
        assert_eq!(ChallengeRating::Whole(20).xp(), 25000);
        assert_eq!(ChallengeRating::Whole(21).xp(), 33000);
        assert_eq!(ChallengeRating::Whole(24).xp(), 62000);
        assert_eq!(ChallengeRating::Whole(30).xp(), 155000);
        // 25..=29 have no table entry
        assert_eq!(ChallengeRating::Whole(27).xp(), 0);
    }

    #[test]
    fn test_ordering() {
        let mut ratings = vec![
            ChallengeRating::Whole(1),
            ChallengeRating::Eighth,
            ChallengeRating::Whole(0),
            ChallengeRating::Half,
            ChallengeRating::Quarter,
        ];
        ratings.sort();
        assert_eq!(
            ratings,
            vec![
                ChallengeRating::Whole(0),
                ChallengeRating::Eighth,
                ChallengeRating::Quarter,
                ChallengeRating::Half,
                ChallengeRating::Whole(1),
            ]
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let parsed: ChallengeRating = serde_json::from_str("\"1/8\"").unwrap();
        assert_eq!(parsed, ChallengeRating::Eighth);

        let parsed: ChallengeRating = serde_json::from_str("0.25").unwrap();
        assert_eq!(parsed, ChallengeRating::Quarter);

        let parsed: ChallengeRating = serde_json::from_str("17").unwrap();
        assert_eq!(parsed, ChallengeRating::Whole(17));

        assert_eq!(
            serde_json::to_string(&ChallengeRating::Half).unwrap(),
            "\"1/2\""
        );
        assert_eq!(serde_json::to_string(&ChallengeRating::Whole(4)).unwrap(), "4");
    }
}
