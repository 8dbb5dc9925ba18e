// Dispatch a (category, from, to, value) request to the matching converter

use crate::units::{
    length, parse_value, temperature, volume, weight, LengthUnit, TemperatureUnit, TimeTable,
    TimeUnit, Unit, UnitCategory, UnitError, VolumeUnit, WeightUnit,
};
use serde::Serialize;
use tracing::debug;

/// Source and target unit of one category.
/// A cross-category pair cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitPair {
    Length(LengthUnit, LengthUnit),
    Weight(WeightUnit, WeightUnit),
    Volume(VolumeUnit, VolumeUnit),
    Temperature(TemperatureUnit, TemperatureUnit),
    Time(TimeUnit, TimeUnit),
}

impl UnitPair {
    pub fn new(from: Unit, to: Unit) -> Result<Self, UnitError> {
        match (from, to) {
            (Unit::Length(a), Unit::Length(b)) => Ok(UnitPair::Length(a, b)),
            (Unit::Weight(a), Unit::Weight(b)) => Ok(UnitPair::Weight(a, b)),
            (Unit::Volume(a), Unit::Volume(b)) => Ok(UnitPair::Volume(a, b)),
            (Unit::Temperature(a), Unit::Temperature(b)) => Ok(UnitPair::Temperature(a, b)),
            (Unit::Time(a), Unit::Time(b)) => Ok(UnitPair::Time(a, b)),
            _ => Err(UnitError::CategoryMismatch {
                from: from.name().to_string(),
                from_category: from.category(),
                to: to.name().to_string(),
                to_category: to.category(),
            }),
        }
    }

    pub fn category(&self) -> UnitCategory {
        self.from_unit().category()
    }

    pub fn from_unit(&self) -> Unit {
        match *self {
            UnitPair::Length(a, _) => Unit::Length(a),
            UnitPair::Weight(a, _) => Unit::Weight(a),
            UnitPair::Volume(a, _) => Unit::Volume(a),
            UnitPair::Temperature(a, _) => Unit::Temperature(a),
            UnitPair::Time(a, _) => Unit::Time(a),
        }
    }

    pub fn to_unit(&self) -> Unit {
        match *self {
            UnitPair::Length(_, b) => Unit::Length(b),
            UnitPair::Weight(_, b) => Unit::Weight(b),
            UnitPair::Volume(_, b) => Unit::Volume(b),
            UnitPair::Temperature(_, b) => Unit::Temperature(b),
            UnitPair::Time(_, b) => Unit::Time(b),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.from_unit() == self.to_unit()
    }

    /// Same units, opposite direction
    pub fn swapped(self) -> Self {
        match self {
            UnitPair::Length(a, b) => UnitPair::Length(b, a),
            UnitPair::Weight(a, b) => UnitPair::Weight(b, a),
            UnitPair::Volume(a, b) => UnitPair::Volume(b, a),
            UnitPair::Temperature(a, b) => UnitPair::Temperature(b, a),
            UnitPair::Time(a, b) => UnitPair::Time(b, a),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub pair: UnitPair,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(value: f64, from: Unit, to: Unit) -> Result<Self, UnitError> {
        Ok(Self {
            pair: UnitPair::new(from, to)?,
            value,
        })
    }

    /// Build a request from text. Without a category, the source unit
    /// decides it.
    pub fn parse(
        category: Option<&str>,
        value: &str,
        from: &str,
        to: &str,
    ) -> Result<Self, UnitError> {
        Self::from_names(category, parse_value(value)?, from, to)
    }

    /// Like `parse` for a value that is already a number
    pub fn from_names(
        category: Option<&str>,
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<Self, UnitError> {
        let (from, to) = match category {
            Some(c) => {
                let category: UnitCategory = c.parse()?;
                (Unit::parse_in(category, from)?, Unit::parse_in(category, to)?)
            }
            None => (from.parse::<Unit>()?, to.parse::<Unit>()?),
        };

        Self::new(value, from, to)
    }

    pub fn category(&self) -> UnitCategory {
        self.pair.category()
    }
}

/// Converted value with its display text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub category: UnitCategory,
    pub from: Unit,
    pub to: Unit,
    /// Input value, in `from`
    pub value: f64,
    /// Converted value, in `to`
    pub result: f64,
    pub rendered: String,
}

/// Runs requests against the per-category converters
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    time_table: TimeTable,
}

impl Converter {
    pub fn new(time_table: TimeTable) -> Self {
        Self { time_table }
    }

    pub fn time_table(&self) -> TimeTable {
        self.time_table
    }

    pub fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        let value = request.value;
        let (result, rendered) = match request.pair {
            UnitPair::Length(a, b) => {
                let r = length::convert(value, a, b);
                (r, length::convert_to_string(value, a, b))
            }
            UnitPair::Weight(a, b) => {
                let r = weight::convert(value, a, b);
                (r, weight::convert_to_string(value, a, b))
            }
            UnitPair::Volume(a, b) => {
                let r = volume::convert(value, a, b);
                (r, volume::convert_to_string(value, a, b))
            }
            UnitPair::Temperature(a, b) => {
                let r = temperature::convert(value, a, b);
                (r, temperature::convert_to_string(value, a, b))
            }
            UnitPair::Time(a, b) => {
                let r = self.time_table.convert(value, a, b);
                (r, self.time_table.convert_to_string(value, a, b))
            }
        };

        debug!(
            category = %request.category(),
            from = %request.pair.from_unit(),
            to = %request.pair.to_unit(),
            value,
            result,
            "converted"
        );

        ConversionResult {
            category: request.category(),
            from: request.pair.from_unit(),
            to: request.pair.to_unit(),
            value,
            result,
            rendered,
        }
    }
}

/// Convert with the legacy time table
pub fn convert(request: &ConversionRequest) -> ConversionResult {
    Converter::default().convert(request)
}
