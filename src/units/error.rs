use crate::units::types::UnitsPower;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PowerError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown power unit: {0}")]
    UnknownUnit(String),

    #[error("Power unit is not set")]
    UnsetUnit,

    #[error("Converting {value} {from} to {to} does not fit in a double")]
    Overflow {
        value: f64,
        from: UnitsPower,
        to: UnitsPower,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PowerError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        Self::UnknownUnit(unit.into())
    }
}
