use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::KinvarError;

/// The two legs of a selected particle pair.
///
/// Pair-building upstream stores the chosen object indices as a two-entry
/// index vector; this enum names the slot to read instead of passing a bare
/// 0/1 position around.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Leg {
    /// The first entry of the pair index vector.
    First,
    /// The second entry of the pair index vector.
    Second,
}

impl Leg {
    /// The position of this leg within the pair index vector.
    pub fn index(&self) -> i64 {
        match self {
            Leg::First => 0,
            Leg::Second => 1,
        }
    }
}

impl Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Leg::First => write!(f, "first"),
            Leg::Second => write!(f, "second"),
        }
    }
}

impl FromStr for Leg {
    type Err = KinvarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "first" | "leading" => Ok(Self::First),
            "2" | "second" | "subleading" | "trailing" => Ok(Self::Second),
            _ => Err(KinvarError::ParseError {
                name: s.to_string(),
                object: "Leg".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn enum_displays() {
        assert_eq!(format!("{}", Leg::First), "first");
        assert_eq!(format!("{}", Leg::Second), "second");
    }

    #[test]
    fn enum_from_str() {
        assert_eq!(Leg::from_str("1").unwrap(), Leg::First);
        assert_eq!(Leg::from_str("First").unwrap(), Leg::First);
        assert_eq!(Leg::from_str("leading").unwrap(), Leg::First);
        assert_eq!(Leg::from_str("2").unwrap(), Leg::Second);
        assert_eq!(Leg::from_str("Second").unwrap(), Leg::Second);
        assert_eq!(Leg::from_str("subleading").unwrap(), Leg::Second);
        assert_eq!(Leg::from_str("trailing").unwrap(), Leg::Second);
        assert!(Leg::from_str("third").is_err());
    }

    #[test]
    fn enum_indices() {
        assert_eq!(Leg::First.index(), 0);
        assert_eq!(Leg::Second.index(), 1);
    }
}
