use crate::units::category::UnitCategory;
use thiserror::Error;

/// Errors raised where text turns into categories, units and values.
/// The converters themselves cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unit '{unit}' is not a {category} unit")]
    UnitNotInCategory { unit: String, category: UnitCategory },

    #[error("Cannot convert {from} ({from_category}) to {to} ({to_category})")]
    CategoryMismatch {
        from: String,
        from_category: UnitCategory,
        to: String,
        to_category: UnitCategory,
    },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
