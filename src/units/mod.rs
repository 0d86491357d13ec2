// Power units: lookup, conversion, parsing and formatting

pub mod convert;
pub mod detector;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod processor;
pub mod types;

pub use convert::convert_power;
pub use detector::looks_like_power_string;
pub use error::PowerError;
pub use formatter::{PowerFormatter, UnitPreferences};
pub use parser::parse_power;
pub use processor::PowerProcessor;
pub use types::{UnitDescriptor, UnitsPower};
