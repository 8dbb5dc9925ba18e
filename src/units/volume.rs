use crate::render::render_default;
use crate::units::category::UnitCategory;
use crate::units::unit::UnitTag;
use serde::{Deserialize, Serialize};

pub const GALLONS_PER_LITER: f64 = 0.264172;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    Liters,
    Gallons,
}

impl UnitTag for VolumeUnit {
    const CATEGORY: UnitCategory = UnitCategory::Volume;

    fn all() -> &'static [Self] {
        &[VolumeUnit::Liters, VolumeUnit::Gallons]
    }

    fn name(self) -> &'static str {
        match self {
            VolumeUnit::Liters => "liters",
            VolumeUnit::Gallons => "gallons",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            VolumeUnit::Liters => &["l", "liter", "litre", "litres"],
            VolumeUnit::Gallons => &["gal", "gallon"],
        }
    }
}

pub fn convert(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    match (from, to) {
        (VolumeUnit::Liters, VolumeUnit::Gallons) => value * GALLONS_PER_LITER,
        (VolumeUnit::Gallons, VolumeUnit::Liters) => value / GALLONS_PER_LITER,
        (VolumeUnit::Liters, VolumeUnit::Liters) | (VolumeUnit::Gallons, VolumeUnit::Gallons) => {
            value
        }
    }
}

pub fn convert_to_string(value: f64, from: VolumeUnit, to: VolumeUnit) -> String {
    render_default(convert(value, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liters_to_gallons() {
        assert_eq!(convert(1.0, VolumeUnit::Liters, VolumeUnit::Gallons), 0.264172);
        assert_eq!(
            convert_to_string(1.0, VolumeUnit::Liters, VolumeUnit::Gallons),
            "0.264172"
        );
    }

    #[test]
    fn test_gallons_to_liters() {
        let liters = convert(1.0, VolumeUnit::Gallons, VolumeUnit::Liters);
        assert_eq!(liters, 1.0 / GALLONS_PER_LITER);
        assert!((liters - 3.78541).abs() < 1e-4);
    }
}
