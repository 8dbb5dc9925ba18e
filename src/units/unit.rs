use crate::units::category::UnitCategory;
use crate::units::error::UnitError;
use crate::units::length::LengthUnit;
use crate::units::temperature::TemperatureUnit;
use crate::units::time::TimeUnit;
use crate::units::volume::VolumeUnit;
use crate::units::weight::WeightUnit;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A unit identifier that belongs to exactly one category
pub trait UnitTag: Copy + Eq + fmt::Debug + 'static {
    const CATEGORY: UnitCategory;

    /// Every tag of the category, in picker order
    fn all() -> &'static [Self];

    /// Canonical lowercase name (e.g. "meters")
    fn name(self) -> &'static str;

    /// Short forms accepted when parsing, lowercase
    fn aliases(self) -> &'static [&'static str];

    /// Case-insensitive lookup by name or alias
    fn lookup(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|tag| tag.name() == needle || tag.aliases().iter().any(|a| *a == needle))
    }
}

/// Any unit tag, tagged with its category.
/// Used where the category is only known at runtime (CLI, config, wasm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Unit {
    Length(LengthUnit),
    Weight(WeightUnit),
    Volume(VolumeUnit),
    Temperature(TemperatureUnit),
    Time(TimeUnit),
}

impl Unit {
    pub fn category(self) -> UnitCategory {
        match self {
            Unit::Length(_) => UnitCategory::Length,
            Unit::Weight(_) => UnitCategory::Weight,
            Unit::Volume(_) => UnitCategory::Volume,
            Unit::Temperature(_) => UnitCategory::Temperature,
            Unit::Time(_) => UnitCategory::Time,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Length(u) => u.name(),
            Unit::Weight(u) => u.name(),
            Unit::Volume(u) => u.name(),
            Unit::Temperature(u) => u.name(),
            Unit::Time(u) => u.name(),
        }
    }

    /// All units of a category, in picker order
    pub fn all_in(category: UnitCategory) -> Vec<Unit> {
        match category {
            UnitCategory::Length => LengthUnit::all().iter().map(|&u| Unit::Length(u)).collect(),
            UnitCategory::Weight => WeightUnit::all().iter().map(|&u| Unit::Weight(u)).collect(),
            UnitCategory::Volume => VolumeUnit::all().iter().map(|&u| Unit::Volume(u)).collect(),
            UnitCategory::Temperature => TemperatureUnit::all()
                .iter()
                .map(|&u| Unit::Temperature(u))
                .collect(),
            UnitCategory::Time => TimeUnit::all().iter().map(|&u| Unit::Time(u)).collect(),
        }
    }

    /// Parse a unit name that must belong to `category`
    pub fn parse_in(category: UnitCategory, s: &str) -> Result<Unit, UnitError> {
        let found = match category {
            UnitCategory::Length => LengthUnit::lookup(s).map(Unit::Length),
            UnitCategory::Weight => WeightUnit::lookup(s).map(Unit::Weight),
            UnitCategory::Volume => VolumeUnit::lookup(s).map(Unit::Volume),
            UnitCategory::Temperature => TemperatureUnit::lookup(s).map(Unit::Temperature),
            UnitCategory::Time => TimeUnit::lookup(s).map(Unit::Time),
        };

        match found {
            Some(unit) => Ok(unit),
            // Distinguish "meters" under time from a typo
            None => match s.parse::<Unit>() {
                Ok(other) => Err(UnitError::UnitNotInCategory {
                    unit: other.name().to_string(),
                    category,
                }),
                Err(e) => Err(e),
            },
        }
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LengthUnit::lookup(s)
            .map(Unit::Length)
            .or_else(|| WeightUnit::lookup(s).map(Unit::Weight))
            .or_else(|| VolumeUnit::lookup(s).map(Unit::Volume))
            .or_else(|| TemperatureUnit::lookup(s).map(Unit::Temperature))
            .or_else(|| TimeUnit::lookup(s).map(Unit::Time))
            .ok_or_else(|| UnitError::UnknownUnit(s.trim().to_string()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<LengthUnit> for Unit {
    fn from(u: LengthUnit) -> Self {
        Unit::Length(u)
    }
}

impl From<WeightUnit> for Unit {
    fn from(u: WeightUnit) -> Self {
        Unit::Weight(u)
    }
}

impl From<VolumeUnit> for Unit {
    fn from(u: VolumeUnit) -> Self {
        Unit::Volume(u)
    }
}

impl From<TemperatureUnit> for Unit {
    fn from(u: TemperatureUnit) -> Self {
        Unit::Temperature(u)
    }
}

impl From<TimeUnit> for Unit {
    fn from(u: TimeUnit) -> Self {
        Unit::Time(u)
    }
}
