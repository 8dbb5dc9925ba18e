use crate::render::render_default;
use crate::units::category::UnitCategory;
use crate::units::unit::UnitTag;
use serde::{Deserialize, Serialize};

pub const POUNDS_PER_KILOGRAM: f64 = 2.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kilograms,
    Pounds,
}

impl UnitTag for WeightUnit {
    const CATEGORY: UnitCategory = UnitCategory::Weight;

    fn all() -> &'static [Self] {
        &[WeightUnit::Kilograms, WeightUnit::Pounds]
    }

    fn name(self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kilograms",
            WeightUnit::Pounds => "pounds",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            WeightUnit::Kilograms => &["kg", "kilogram", "kilo", "kilos"],
            WeightUnit::Pounds => &["lb", "lbs", "pound"],
        }
    }
}

pub fn convert(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    match (from, to) {
        (WeightUnit::Kilograms, WeightUnit::Pounds) => value * POUNDS_PER_KILOGRAM,
        (WeightUnit::Pounds, WeightUnit::Kilograms) => value / POUNDS_PER_KILOGRAM,
        (WeightUnit::Kilograms, WeightUnit::Kilograms)
        | (WeightUnit::Pounds, WeightUnit::Pounds) => value,
    }
}

pub fn convert_to_string(value: f64, from: WeightUnit, to: WeightUnit) -> String {
    render_default(convert(value, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilograms_to_pounds() {
        assert_eq!(convert(1.0, WeightUnit::Kilograms, WeightUnit::Pounds), 2.2);
        assert_eq!(convert_to_string(1.0, WeightUnit::Kilograms, WeightUnit::Pounds), "2.2");
    }

    #[test]
    fn test_pounds_to_kilograms() {
        assert_eq!(convert(22.0, WeightUnit::Pounds, WeightUnit::Kilograms), 22.0 / 2.2);
        assert!((convert(22.0, WeightUnit::Pounds, WeightUnit::Kilograms) - 10.0).abs() < 1e-12);
    }
}
