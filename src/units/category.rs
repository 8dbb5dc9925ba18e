use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Family of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Weight,
    Volume,
    Temperature,
    Time,
}

impl UnitCategory {
    /// Categories in the order the selector shows them
    pub const ALL: [UnitCategory; 5] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Volume,
        UnitCategory::Temperature,
        UnitCategory::Time,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Weight => "weight",
            UnitCategory::Volume => "volume",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Time => "time",
        }
    }

    /// Position in `ALL`
    pub fn index(self) -> usize {
        match self {
            UnitCategory::Length => 0,
            UnitCategory::Weight => 1,
            UnitCategory::Volume => 2,
            UnitCategory::Temperature => 3,
            UnitCategory::Time => 4,
        }
    }
}

impl FromStr for UnitCategory {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        match needle.as_str() {
            "length" | "distance" => Ok(UnitCategory::Length),
            "weight" | "mass" => Ok(UnitCategory::Weight),
            "volume" => Ok(UnitCategory::Volume),
            "temperature" | "temp" => Ok(UnitCategory::Temperature),
            "time" | "duration" => Ok(UnitCategory::Time),
            _ => Err(UnitError::UnknownCategory(s.trim().to_string())),
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("length".parse::<UnitCategory>().unwrap(), UnitCategory::Length);
        assert_eq!("Mass".parse::<UnitCategory>().unwrap(), UnitCategory::Weight);
        assert_eq!(" TIME ".parse::<UnitCategory>().unwrap(), UnitCategory::Time);
        assert!(matches!(
            "speed".parse::<UnitCategory>(),
            Err(UnitError::UnknownCategory(ref s)) if s == "speed"
        ));
    }

    #[test]
    fn test_index_matches_all() {
        for (i, category) in UnitCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(category.name().parse::<UnitCategory>().unwrap(), *category);
        }
    }
}
