// Form state behind the converter screens: selected category, the typed
// value, and a from/to selection remembered per category.

use crate::config::Config;
use crate::render::{render_default, render_plain};
use crate::request::{ConversionRequest, ConversionResult, Converter, UnitPair};
use crate::units::{
    parse_value, LengthUnit, TemperatureUnit, TimeUnit, Unit, UnitCategory, UnitError, VolumeUnit,
    WeightUnit,
};
use tracing::{debug, warn};

/// Starting selection of each screen
pub fn default_selection(category: UnitCategory) -> UnitPair {
    match category {
        UnitCategory::Length => UnitPair::Length(LengthUnit::Meters, LengthUnit::Feet),
        UnitCategory::Weight => UnitPair::Weight(WeightUnit::Kilograms, WeightUnit::Pounds),
        UnitCategory::Volume => UnitPair::Volume(VolumeUnit::Gallons, VolumeUnit::Liters),
        UnitCategory::Temperature => {
            UnitPair::Temperature(TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius)
        }
        UnitCategory::Time => UnitPair::Time(TimeUnit::Days, TimeUnit::Hours),
    }
}

#[derive(Debug, Clone)]
pub struct ConverterForm {
    category: UnitCategory,
    input: f64,
    selections: [UnitPair; 5],
    converter: Converter,
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterForm {
    pub fn new() -> Self {
        Self {
            category: UnitCategory::Length,
            input: 0.0,
            selections: UnitCategory::ALL.map(default_selection),
            converter: Converter::default(),
        }
    }

    /// Built-in defaults overridden by whatever the config sets
    pub fn with_config(config: &Config) -> Self {
        let mut form = Self::new();
        form.converter = Converter::new(config.time_table);
        for category in UnitCategory::ALL {
            if let Some((from, to)) = config.selection_or_none(category) {
                match UnitPair::new(from, to) {
                    Ok(pair) => form.selections[category.index()] = pair,
                    Err(e) => warn!(%category, error = %e, "ignoring configured default"),
                }
            }
        }
        form
    }

    pub fn category(&self) -> UnitCategory {
        self.category
    }

    /// Switch screens; each category keeps its own selection
    pub fn select_category(&mut self, category: UnitCategory) {
        debug!(%category, "category selected");
        self.category = category;
    }

    pub fn input(&self) -> f64 {
        self.input
    }

    pub fn set_input(&mut self, value: f64) {
        self.input = value;
    }

    /// Text from the value field. Invalid text leaves the input unchanged.
    pub fn set_input_text(&mut self, text: &str) -> Result<(), UnitError> {
        self.input = parse_value(text)?;
        Ok(())
    }

    pub fn selection(&self) -> UnitPair {
        self.selections[self.category.index()]
    }

    /// Pick the source unit. Picking the current target swaps the two.
    pub fn select_from(&mut self, unit: Unit) -> Result<(), UnitError> {
        self.check_category(unit)?;
        let current = self.selection();
        let to = if unit == current.to_unit() {
            current.from_unit()
        } else {
            current.to_unit()
        };
        self.selections[self.category.index()] = UnitPair::new(unit, to)?;
        Ok(())
    }

    /// Pick the target unit. Picking the current source swaps the two.
    pub fn select_to(&mut self, unit: Unit) -> Result<(), UnitError> {
        self.check_category(unit)?;
        let current = self.selection();
        let from = if unit == current.from_unit() {
            current.to_unit()
        } else {
            current.from_unit()
        };
        self.selections[self.category.index()] = UnitPair::new(from, unit)?;
        Ok(())
    }

    pub fn swap(&mut self) {
        let index = self.category.index();
        self.selections[index] = self.selections[index].swapped();
    }

    /// Entries of the "from" picker: everything except the current target
    pub fn from_options(&self) -> Vec<Unit> {
        let to = self.selection().to_unit();
        Unit::all_in(self.category)
            .into_iter()
            .filter(|u| *u != to)
            .collect()
    }

    /// Entries of the "to" picker: everything except the current source
    pub fn to_options(&self) -> Vec<Unit> {
        let from = self.selection().from_unit();
        Unit::all_in(self.category)
            .into_iter()
            .filter(|u| *u != from)
            .collect()
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest {
            pair: self.selection(),
            value: self.input,
        }
    }

    pub fn result(&self) -> ConversionResult {
        self.converter.convert(&self.request())
    }

    /// "{input} {from} is {result} {to}"
    pub fn summary(&self) -> String {
        let result = self.result();
        let input = match self.category {
            UnitCategory::Length | UnitCategory::Weight => render_default(self.input),
            _ => render_plain(self.input),
        };
        format!("{} {} is {} {}", input, result.from, result.rendered, result.to)
    }

    fn check_category(&self, unit: Unit) -> Result<(), UnitError> {
        if unit.category() == self.category {
            Ok(())
        } else {
            Err(UnitError::UnitNotInCategory {
                unit: unit.name().to_string(),
                category: self.category,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::TimeTable;

    #[test]
    fn test_defaults() {
        let form = ConverterForm::new();
        assert_eq!(form.category(), UnitCategory::Length);
        assert_eq!(form.input(), 0.0);
        assert_eq!(
            form.selection(),
            UnitPair::Length(LengthUnit::Meters, LengthUnit::Feet)
        );
        assert_eq!(form.summary(), "0.0 meters is 0.0 feet");
    }

    #[test]
    fn test_category_keeps_own_selection() {
        let mut form = ConverterForm::new();
        form.select_category(UnitCategory::Time);
        assert_eq!(form.selection(), default_selection(UnitCategory::Time));
        form.select_to(TimeUnit::Minutes.into()).unwrap();

        form.select_category(UnitCategory::Length);
        assert_eq!(form.selection().to_unit(), Unit::Length(LengthUnit::Feet));

        form.select_category(UnitCategory::Time);
        assert_eq!(form.selection().to_unit(), Unit::Time(TimeUnit::Minutes));
    }

    #[test]
    fn test_picking_opposite_unit_swaps() {
        let mut form = ConverterForm::new();
        form.select_from(LengthUnit::Feet.into()).unwrap();
        assert_eq!(
            form.selection(),
            UnitPair::Length(LengthUnit::Feet, LengthUnit::Meters)
        );

        form.select_to(LengthUnit::Feet.into()).unwrap();
        assert_eq!(
            form.selection(),
            UnitPair::Length(LengthUnit::Meters, LengthUnit::Feet)
        );

        form.select_to(LengthUnit::Inches.into()).unwrap();
        assert_eq!(
            form.selection(),
            UnitPair::Length(LengthUnit::Meters, LengthUnit::Inches)
        );
    }

    #[test]
    fn test_picker_options_exclude_other_side() {
        let form = ConverterForm::new();
        assert_eq!(
            form.from_options(),
            vec![Unit::Length(LengthUnit::Meters), Unit::Length(LengthUnit::Inches)]
        );
        assert_eq!(
            form.to_options(),
            vec![Unit::Length(LengthUnit::Feet), Unit::Length(LengthUnit::Inches)]
        );
    }

    #[test]
    fn test_rejects_unit_from_other_category() {
        let mut form = ConverterForm::new();
        let err = form.select_from(WeightUnit::Pounds.into()).unwrap_err();
        assert!(matches!(
            err,
            UnitError::UnitNotInCategory { category: UnitCategory::Length, .. }
        ));
        assert_eq!(form.selection(), default_selection(UnitCategory::Length));
    }

    #[test]
    fn test_summaries() {
        let mut form = ConverterForm::new();
        form.set_input(1.0);
        assert_eq!(form.summary(), "1.0 meters is 3.28084 feet");

        form.select_category(UnitCategory::Time);
        assert_eq!(form.summary(), "1 days is 24.00 hours");

        form.select_category(UnitCategory::Temperature);
        form.set_input(212.0);
        assert_eq!(form.summary(), "212 fahrenheit is 100.0 celsius");

        form.select_category(UnitCategory::Weight);
        form.set_input(1.0);
        assert_eq!(form.summary(), "1.0 kilograms is 2.2 pounds");
    }

    #[test]
    fn test_input_text() {
        let mut form = ConverterForm::new();
        form.set_input_text("2.5").unwrap();
        assert_eq!(form.input(), 2.5);

        assert!(form.set_input_text("2,5x").is_err());
        assert_eq!(form.input(), 2.5);
    }

    #[test]
    fn test_swap() {
        let mut form = ConverterForm::new();
        form.select_category(UnitCategory::Volume);
        form.swap();
        assert_eq!(
            form.selection(),
            UnitPair::Volume(VolumeUnit::Liters, VolumeUnit::Gallons)
        );
    }

    #[test]
    fn test_with_config() {
        let config = Config::load_from_str(
            r#"
time_table = "consistent"

[defaults.time]
from = "years"
to = "hours"
"#,
        )
        .unwrap();
        assert_eq!(config.time_table, TimeTable::Consistent);

        let mut form = ConverterForm::with_config(&config);
        form.select_category(UnitCategory::Time);
        form.set_input(1.0);
        assert_eq!(form.summary(), "1 years is 8765.82 hours");

        form.select_category(UnitCategory::Length);
        assert_eq!(form.selection(), default_selection(UnitCategory::Length));
    }
}
