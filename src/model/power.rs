use crate::model::context::Current;
use crate::units::convert::convert_power;
use crate::units::error::PowerError;
use crate::units::types::UnitsPower;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accessor interface of a power quantity, as exposed to remote callers.
///
/// Every call receives the invocation context. None of the operations
/// validate or fail.
pub trait PowerOperations {
    fn get_value(&self, current: &Current) -> f64;

    fn set_value(&mut self, value: f64, current: &Current);

    fn get_unit(&self, current: &Current) -> Option<UnitsPower>;

    fn set_unit(&mut self, unit: Option<UnitsPower>, current: &Current);

    /// Build a new instance holding the same value and unit
    fn copy(&self, current: &Current) -> Power;
}

/// A power magnitude together with its unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Power {
    value: f64,
    unit: Option<UnitsPower>,
}

impl Power {
    pub fn new(value: f64, unit: Option<UnitsPower>) -> Self {
        Self { value, unit }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Option<UnitsPower> {
        self.unit
    }

    pub fn symbol(&self) -> Option<&'static str> {
        self.unit.map(UnitsPower::symbol)
    }

    pub fn lookup_symbol(unit: UnitsPower) -> &'static str {
        unit.symbol()
    }

    /// Resolve a unit from its enum name ("MILLIWATT") or symbol ("mW")
    pub fn make_unit(unit: &str) -> Result<UnitsPower, PowerError> {
        unit.parse()
    }

    /// The same power expressed in `target`
    pub fn converted(&self, target: UnitsPower) -> Result<Power, PowerError> {
        let unit = self.unit.ok_or(PowerError::UnsetUnit)?;
        let value = convert_power(self.value, unit, target)?;
        Ok(Power::new(value, Some(target)))
    }
}

impl PowerOperations for Power {
    fn get_value(&self, _current: &Current) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64, _current: &Current) {
        self.value = value;
    }

    fn get_unit(&self, _current: &Current) -> Option<UnitsPower> {
        self.unit
    }

    fn set_unit(&mut self, unit: Option<UnitsPower>, _current: &Current) {
        self.unit = unit;
    }

    fn copy(&self, current: &Current) -> Power {
        tracing::trace!(
            operation = %current.operation,
            request_id = current.request_id,
            "copying power"
        );
        let mut copy = Power::default();
        copy.set_value(self.get_value(current), current);
        copy.set_unit(self.get_unit(current), current);
        copy
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Some(unit) => write!(f, "{} {}", self.value, unit.symbol()),
            None => write!(f, "{}", self.value),
        }
    }
}
