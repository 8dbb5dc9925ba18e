use crate::config::error::ConfigError;
use crate::units::{TimeTable, Unit, UnitCategory};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Name of the config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "unit-converter.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Which time factors to use
    #[serde(default)]
    pub time_table: TimeTable,

    // Per-category starting selection, keyed by category name
    #[serde(default)]
    pub defaults: HashMap<String, DefaultSelection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DefaultSelection {
    pub from: String,
    pub to: String,
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise `unit-converter.toml` when present
    pub fn discover(path: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => {
                let local = std::path::Path::new(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    Self::load_from_file(local)
                } else {
                    Ok(Self::empty())
                }
            }
        }
    }

    pub fn empty() -> Self {
        Self {
            time_table: TimeTable::default(),
            defaults: HashMap::new(),
        }
    }

    /// Every configured default must name a category and two distinct
    /// units of that category, and each category appears once even when
    /// spelled with a synonym (`length` and `distance`)
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for key in self.defaults.keys() {
            let category: UnitCategory = key.parse()?;
            if !seen.insert(category) {
                return Err(ConfigError::Invalid(format!(
                    "defaults.{} is set more than once",
                    category
                )));
            }
            self.selection_for(category)?;
        }
        Ok(())
    }

    /// Configured (from, to) for a category, if any
    pub fn selection_for(&self, category: UnitCategory) -> Result<Option<(Unit, Unit)>, ConfigError> {
        let entry = self
            .defaults
            .iter()
            .find(|(key, _)| key.parse::<UnitCategory>().ok() == Some(category));

        let selection = match entry {
            Some((_, selection)) => selection,
            None => return Ok(None),
        };

        let from = Unit::parse_in(category, &selection.from)?;
        let to = Unit::parse_in(category, &selection.to)?;
        if from == to {
            return Err(ConfigError::Invalid(format!(
                "defaults.{}: from and to are both '{}'",
                category, from
            )));
        }

        Ok(Some((from, to)))
    }

    /// Like `selection_for`, falling back to nothing on a bad entry
    pub fn selection_or_none(&self, category: UnitCategory) -> Option<(Unit, Unit)> {
        match self.selection_for(category) {
            Ok(selection) => selection,
            Err(e) => {
                warn!(%category, error = %e, "ignoring configured default");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{TemperatureUnit, TimeUnit, UnitError};
    use std::io::Write;

    #[test]
    fn test_empty_config() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.time_table, TimeTable::Legacy);
        assert!(config.defaults.is_empty());
        assert_eq!(config.selection_for(UnitCategory::Time).unwrap(), None);
    }

    #[test]
    fn test_full_config() {
        let config = Config::load_from_str(
            r#"
time_table = "consistent"

[defaults.time]
from = "weeks"
to = "days"

[defaults.temperature]
from = "C"
to = "F"
"#,
        )
        .unwrap();

        assert_eq!(config.time_table, TimeTable::Consistent);
        assert_eq!(
            config.selection_for(UnitCategory::Time).unwrap(),
            Some((Unit::Time(TimeUnit::Weeks), Unit::Time(TimeUnit::Days)))
        );
        assert_eq!(
            config.selection_for(UnitCategory::Temperature).unwrap(),
            Some((
                Unit::Temperature(TemperatureUnit::Celsius),
                Unit::Temperature(TemperatureUnit::Fahrenheit)
            ))
        );
        assert_eq!(config.selection_for(UnitCategory::Length).unwrap(), None);
    }

    #[test]
    fn test_rejects_unit_from_other_category() {
        let err = Config::load_from_str(
            r#"
[defaults.length]
from = "meters"
to = "pounds"
"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Unit(UnitError::UnitNotInCategory { category: UnitCategory::Length, .. })
        ));
    }

    #[test]
    fn test_rejects_same_from_and_to() {
        let err = Config::load_from_str(
            r#"
[defaults.weight]
from = "kg"
to = "kilograms"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_unknown_category_and_table() {
        let err = Config::load_from_str("[defaults.speed]\nfrom = \"m\"\nto = \"ft\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Unit(UnitError::UnknownCategory(_))));

        let err = Config::load_from_str("time_table = \"exact\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_category_set_twice_through_synonym() {
        let err = Config::load_from_str(
            r#"
[defaults.length]
from = "meters"
to = "feet"

[defaults.distance]
from = "inches"
to = "meters"
"#,
        )
        .unwrap_err();

        match err {
            ConfigError::Invalid(msg) => assert_eq!(msg, "defaults.length is set more than once"),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_synonym_key_alone_is_accepted() {
        let config = Config::load_from_str("[defaults.duration]\nfrom = \"h\"\nto = \"min\"\n").unwrap();
        assert_eq!(
            config.selection_for(UnitCategory::Time).unwrap(),
            Some((Unit::Time(TimeUnit::Hours), Unit::Time(TimeUnit::Minutes)))
        );
    }

    #[test]
    fn test_time_table_is_case_insensitive() {
        let config = Config::load_from_str("time_table = \"Consistent\"").unwrap();
        assert_eq!(config.time_table, TimeTable::Consistent);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "time_table = \"consistent\"").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.time_table, TimeTable::Consistent);

        let config = Config::discover(Some(file.path())).unwrap();
        assert_eq!(config.time_table, TimeTable::Consistent);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
