use crate::model::power::Power;
use crate::model::validation::*;
use crate::units::error::PowerError;
use crate::units::parser::parse_power;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use toml::Value;

/// Named power quantities loaded from a TOML sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PowerSheet {
    pub entries: BTreeMap<String, Power>,
}

impl PowerSheet {
    pub fn get(&self, name: &str) -> Option<&Power> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn load_power_sheet<P: AsRef<Path>>(
    path: P,
) -> Result<(PowerSheet, ValidationResult), PowerError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading power sheet");
    let content = fs::read_to_string(path)?;
    load_power_sheet_from_str(&content)
}

/// Load a power sheet from TOML content.
/// Entries are either power strings ("5 mW") or `{ value, unit }` tables,
/// where `unit` is a name ("MILLIWATT") or a symbol ("mW") and no other
/// keys are allowed.
pub fn load_power_sheet_from_str(
    content: &str,
) -> Result<(PowerSheet, ValidationResult), PowerError> {
    let table: toml::Table = toml::from_str(content)?;
    let mut sheet = PowerSheet::default();
    let mut validation = ValidationResult::new();

    for (name, value) in table {
        match load_entry(&value) {
            Ok(power) => {
                if power.unit().is_none() {
                    validation.flag(name.as_str(), format!("Power '{}' has no unit", name));
                }
                sheet.entries.insert(name, power);
            }
            Err(e) => {
                let message = format!("Failed to parse power '{}': {}", name, e);
                validation.reject(name, message);
            }
        }
    }

    tracing::debug!(
        entries = sheet.len(),
        errors = validation.errors.len(),
        warnings = validation.warnings.len(),
        "loaded power sheet"
    );

    Ok((sheet, validation))
}

fn load_entry(value: &Value) -> Result<Power, Box<dyn std::error::Error>> {
    match value {
        Value::String(s) => Ok(parse_power(s)?),
        Value::Table(_) => Ok(value.clone().try_into::<Power>()?),
        other => Err(format!("expected a power string or table, found {}", other.type_str()).into()),
    }
}
