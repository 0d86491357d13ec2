use crate::units::detector::looks_like_power_string;
use crate::units::error::PowerError;
use crate::units::parser::parse_power;
use crate::units::types::UnitsPower;
use toml::{map::Map, Value};

/// Process TOML values to parse power strings and normalize them to one unit
pub struct PowerProcessor {
    target: UnitsPower,
}

impl PowerProcessor {
    pub fn new(target: UnitsPower) -> Self {
        Self { target }
    }

    pub fn target(&self) -> UnitsPower {
        self.target
    }

    /// Process a TOML Value, replacing power strings with their magnitude in the target unit.
    /// Inside tables the original string is kept under `_<key>_original`.
    pub fn process_value(&self, value: &Value) -> Result<Value, PowerError> {
        match value {
            Value::String(s) => match self.normalize_string(s)? {
                Some(normalized) => Ok(Value::Float(normalized)),
                None => Ok(value.clone()),
            },
            Value::Array(arr) => {
                let processed: Result<Vec<Value>, PowerError> =
                    arr.iter().map(|v| self.process_value(v)).collect();
                Ok(Value::Array(processed?))
            }
            Value::Table(table) => Ok(Value::Table(self.process_table(table)?)),
            _ => Ok(value.clone()),
        }
    }

    /// Process a table (such as a whole TOML document).
    /// Keys already present in the table are never overwritten by `_<key>_original` entries.
    pub fn process_table(&self, table: &Map<String, Value>) -> Result<Map<String, Value>, PowerError> {
        let mut processed = Map::new();

        for (key, val) in table {
            let processed_val = self.process_value(val)?;

            // If we processed a power string, also store the original
            if let (Value::String(s), Value::Float(_)) = (val, &processed_val) {
                let original_key = format!("_{}_original", key);
                if table.contains_key(&original_key) {
                    tracing::warn!(key = %key, "'{}' already exists, original not kept", original_key);
                } else {
                    processed.insert(original_key, Value::String(s.clone()));
                }
            }

            processed.insert(key.clone(), processed_val);
        }

        Ok(processed)
    }

    fn normalize_string(&self, s: &str) -> Result<Option<f64>, PowerError> {
        if !looks_like_power_string(s) {
            return Ok(None);
        }

        match parse_power(s) {
            Ok(power) => Ok(Some(power.converted(self.target)?.value())),
            Err(e) => {
                // Keep the original string if it is not a power after all
                tracing::warn!(input = %s, error = %e, "failed to parse power string");
                Ok(None)
            }
        }
    }
}

impl Default for PowerProcessor {
    fn default() -> Self {
        Self::new(UnitsPower::Watt)
    }
}
