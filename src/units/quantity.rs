use crate::units::error::UnitError;
use crate::units::unit::Unit;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number (optional decimal, optional scientific notation), optional
    /// whitespace, then a unit word.
    /// Examples: "100 m", "3600s", "-40 °F", "1.5e3 seconds"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^(?P<value>[-+]?\d+(?:\.\d*)?(?:[eE][+-]?\d+)?|[-+]?\.\d+(?:[eE][+-]?\d+)?)\s*(?P<unit>°?[a-zA-Z]+)$"
    )
    .unwrap();
}

/// Check if a string looks like a quantity expression
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}

/// Split "3600 s" into its value and unit
pub fn parse_quantity(s: &str) -> Result<(f64, Unit), UnitError> {
    let trimmed = s.trim();
    let caps = QUANTITY_PATTERN
        .captures(trimmed)
        .ok_or_else(|| UnitError::InvalidQuantity(trimmed.to_string()))?;

    let value = parse_value(&caps["value"])?;
    let unit = caps["unit"].parse::<Unit>()?;
    Ok((value, unit))
}

/// Parse a bare number as typed into the value field
pub fn parse_value(s: &str) -> Result<f64, UnitError> {
    let trimmed = s.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(UnitError::InvalidValue(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::LengthUnit;
    use crate::units::temperature::TemperatureUnit;
    use crate::units::time::TimeUnit;

    #[test]
    fn test_quantity_detection() {
        assert!(looks_like_quantity("100 m"));
        assert!(looks_like_quantity("3600s"));
        assert!(looks_like_quantity("-40 °F"));
        assert!(looks_like_quantity("1.5e3 seconds"));
        assert!(looks_like_quantity(".5 ft"));

        assert!(!looks_like_quantity("100"));
        assert!(!looks_like_quantity("meters"));
        assert!(!looks_like_quantity("kg/s 5"));
        assert!(!looks_like_quantity(""));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(
            parse_quantity("3600 s").unwrap(),
            (3600.0, Unit::Time(TimeUnit::Seconds))
        );
        assert_eq!(
            parse_quantity("  2.5 feet ").unwrap(),
            (2.5, Unit::Length(LengthUnit::Feet))
        );
        assert_eq!(
            parse_quantity("-40°F").unwrap(),
            (-40.0, Unit::Temperature(TemperatureUnit::Fahrenheit))
        );
    }

    #[test]
    fn test_parse_quantity_errors() {
        assert!(matches!(
            parse_quantity("lots of meters"),
            Err(UnitError::InvalidQuantity(_))
        ));
        assert!(matches!(
            parse_quantity("12 parsecs"),
            Err(UnitError::UnknownUnit(ref u)) if u == "parsecs"
        ));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_value("-3").unwrap(), -3.0);
        assert!(matches!(parse_value("abc"), Err(UnitError::InvalidValue(_))));
        assert!(matches!(parse_value("inf"), Err(UnitError::InvalidValue(_))));
        assert!(matches!(parse_value("NaN"), Err(UnitError::InvalidValue(_))));
    }
}
