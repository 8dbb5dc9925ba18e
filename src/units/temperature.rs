use crate::render::render_default;
use crate::units::category::UnitCategory;
use crate::units::unit::UnitTag;
use serde::{Deserialize, Serialize};

const FAHRENHEIT_SCALE: f64 = 1.8;
const FAHRENHEIT_OFFSET: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl UnitTag for TemperatureUnit {
    const CATEGORY: UnitCategory = UnitCategory::Temperature;

    fn all() -> &'static [Self] {
        &[TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit]
    }

    fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TemperatureUnit::Celsius => &["c", "°c", "degc", "centigrade"],
            TemperatureUnit::Fahrenheit => &["f", "°f", "degf"],
        }
    }
}

/// Affine conversion between the two scales
pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => {
            value * FAHRENHEIT_SCALE + FAHRENHEIT_OFFSET
        }
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => {
            (value - FAHRENHEIT_OFFSET) / FAHRENHEIT_SCALE
        }
        (TemperatureUnit::Celsius, TemperatureUnit::Celsius)
        | (TemperatureUnit::Fahrenheit, TemperatureUnit::Fahrenheit) => value,
    }
}

pub fn convert_to_string(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> String {
    render_default(convert(value, from, to))
}
