use crate::render::{render_default, render_two_decimals};
use crate::units::category::UnitCategory;
use crate::units::unit::UnitTag;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    /// Row/column of this unit in the factor tables
    pub fn index(self) -> usize {
        match self {
            TimeUnit::Seconds => 0,
            TimeUnit::Minutes => 1,
            TimeUnit::Hours => 2,
            TimeUnit::Days => 3,
            TimeUnit::Weeks => 4,
            TimeUnit::Months => 5,
            TimeUnit::Years => 6,
        }
    }

    /// Anchor length in seconds (30-day month, 365.2425-day year)
    pub fn seconds(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Minutes => 60.0,
            TimeUnit::Hours => 3_600.0,
            TimeUnit::Days => 86_400.0,
            TimeUnit::Weeks => 604_800.0,
            TimeUnit::Months => 2_592_000.0,
            TimeUnit::Years => 31_556_952.0,
        }
    }
}

impl UnitTag for TimeUnit {
    const CATEGORY: UnitCategory = UnitCategory::Time;

    fn all() -> &'static [Self] {
        &[
            TimeUnit::Seconds,
            TimeUnit::Minutes,
            TimeUnit::Hours,
            TimeUnit::Days,
            TimeUnit::Weeks,
            TimeUnit::Months,
            TimeUnit::Years,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TimeUnit::Seconds => &["s", "sec", "secs", "second"],
            TimeUnit::Minutes => &["min", "mins", "minute"],
            TimeUnit::Hours => &["h", "hr", "hrs", "hour"],
            TimeUnit::Days => &["d", "day"],
            TimeUnit::Weeks => &["w", "wk", "wks", "week"],
            TimeUnit::Months => &["mo", "mon", "month"],
            TimeUnit::Years => &["y", "yr", "yrs", "year"],
        }
    }
}

/// One cell of a time factor table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Identity,
    Multiply(f64),
    Divide(f64),
}

impl Step {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Step::Identity => value,
            Step::Multiply(factor) => value * factor,
            Step::Divide(factor) => value / factor,
        }
    }

    /// Net multiplier this step applies
    pub fn factor(self) -> f64 {
        match self {
            Step::Identity => 1.0,
            Step::Multiply(factor) => factor,
            Step::Divide(factor) => 1.0 / factor,
        }
    }
}

use Step::{Divide as D, Identity as I, Multiply as M};

/// Time factors of the shipped form screens, indexed [from][to].
///
/// Rows and columns follow `TimeUnit::index`. The table is not internally
/// consistent: days->months and months->days use a 30.4375-day month while
/// seconds/minutes->months use 30 days, days->years uses 365.25 days,
/// weeks->months is 10080 (minutes per week) and months->weeks is 4.3429,
/// years->hours assumes a 365-day year, hours->months and hours->years
/// reuse the minute divisors. Values are reproduced exactly, including
/// whether a cell multiplies or divides.
pub const LEGACY_TABLE: [[Step; 7]; 7] = [
    // seconds
    [I, D(60.0), D(3600.0), D(86400.0), D(604800.0), D(2592000.0), D(31556952.0)],
    // minutes
    [M(60.0), I, D(60.0), D(1440.0), D(10080.0), D(43200.0), D(525600.0)],
    // hours
    [M(3600.0), M(60.0), I, D(24.0), D(168.0), D(43200.0), D(86400.0)],
    // days
    [M(86400.0), M(1440.0), M(24.0), I, D(7.0), D(30.4375), D(365.25)],
    // weeks
    [M(604800.0), M(10080.0), M(168.0), M(7.0), I, M(10080.0), M(52.1303)],
    // months
    [M(2592000.0), M(144000.0), M(43200.0), M(30.4375), M(4.3429), I, D(12.0)],
    // years
    [M(31556952.0), M(525600.0), M(87600.0), M(365.25), M(52.1303), M(12.0), I],
];

/// Which set of time factors to convert with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeTable {
    /// `LEGACY_TABLE`, bit-for-bit
    #[default]
    Legacy,
    /// Every factor derived from the anchor seconds
    Consistent,
}

impl TimeTable {
    pub fn name(self) -> &'static str {
        match self {
            TimeTable::Legacy => "legacy",
            TimeTable::Consistent => "consistent",
        }
    }

    pub fn step(self, from: TimeUnit, to: TimeUnit) -> Step {
        if from == to {
            return Step::Identity;
        }
        match self {
            TimeTable::Legacy => LEGACY_TABLE[from.index()][to.index()],
            TimeTable::Consistent => {
                if from.seconds() >= to.seconds() {
                    Step::Multiply(from.seconds() / to.seconds())
                } else {
                    Step::Divide(to.seconds() / from.seconds())
                }
            }
        }
    }

    pub fn convert(self, value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
        self.step(from, to).apply(value)
    }

    /// Identity pairs echo the input; everything else gets two decimals
    pub fn convert_to_string(self, value: f64, from: TimeUnit, to: TimeUnit) -> String {
        if from == to {
            render_default(value)
        } else {
            render_two_decimals(self.convert(value, from, to))
        }
    }
}

impl FromStr for TimeTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" => Ok(TimeTable::Legacy),
            "consistent" => Ok(TimeTable::Consistent),
            other => Err(format!(
                "Unknown time table '{}' (expected 'legacy' or 'consistent')",
                other
            )),
        }
    }
}

// Config values go through `FromStr` so they match the CLI flag
impl<'de> Deserialize<'de> for TimeTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for TimeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert with the legacy table
pub fn convert(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    TimeTable::Legacy.convert(value, from, to)
}

pub fn convert_to_string(value: f64, from: TimeUnit, to: TimeUnit) -> String {
    TimeTable::Legacy.convert_to_string(value, from, to)
}
