// Per-category unit tags and their converters.
// Each converter is a leaf: a closed enum plus a total function over
// (from, to) pairs. None of them can fail.

pub mod category;
pub mod error;
pub mod length;
pub mod quantity;
pub mod temperature;
pub mod time;
pub mod unit;
pub mod volume;
pub mod weight;


pub use category::UnitCategory;
pub use error::UnitError;
pub use length::LengthUnit;
pub use quantity::{looks_like_quantity, parse_quantity, parse_value};
pub use temperature::TemperatureUnit;
pub use time::{TimeTable, TimeUnit};
pub use unit::{Unit, UnitTag};
pub use volume::VolumeUnit;
pub use weight::WeightUnit;
