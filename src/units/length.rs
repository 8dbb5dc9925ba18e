use crate::render::render_default;
use crate::units::category::UnitCategory;
use crate::units::unit::UnitTag;
use serde::{Deserialize, Serialize};

pub const FEET_PER_METER: f64 = 3.28084;
pub const INCHES_PER_METER: f64 = 39.3701;
pub const INCHES_PER_FOOT: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meters,
    Feet,
    Inches,
}

impl UnitTag for LengthUnit {
    const CATEGORY: UnitCategory = UnitCategory::Length;

    fn all() -> &'static [Self] {
        &[LengthUnit::Meters, LengthUnit::Feet, LengthUnit::Inches]
    }

    fn name(self) -> &'static str {
        match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Feet => "feet",
            LengthUnit::Inches => "inches",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            LengthUnit::Meters => &["m", "meter", "metre", "metres"],
            LengthUnit::Feet => &["ft", "foot"],
            LengthUnit::Inches => &["in", "inch"],
        }
    }
}

/// Convert a length. Reverse directions divide by the forward constant.
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    use LengthUnit::*;

    match (from, to) {
        (Meters, Feet) => value * FEET_PER_METER,
        (Feet, Meters) => value / FEET_PER_METER,
        (Meters, Inches) => value * INCHES_PER_METER,
        (Inches, Meters) => value / INCHES_PER_METER,
        (Feet, Inches) => value * INCHES_PER_FOOT,
        (Inches, Feet) => value / INCHES_PER_FOOT,
        (Meters, Meters) | (Feet, Feet) | (Inches, Inches) => value,
    }
}

pub fn convert_to_string(value: f64, from: LengthUnit, to: LengthUnit) -> String {
    render_default(convert(value, from, to))
}
