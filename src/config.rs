use crate::units::error::PowerError;
use crate::units::formatter::UnitPreferences;
use crate::units::types::UnitsPower;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "wattage.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Preferred unit, by name ("MILLIWATT") or symbol ("mW")
    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub auto_prefix: bool,

    #[serde(default)]
    pub precision: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PowerError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, PowerError> {
        let config: Config = toml::from_str(content)?;
        // Unknown units fail here
        config.preferred_unit()?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn preferred_unit(&self) -> Result<Option<UnitsPower>, PowerError> {
        self.display
            .unit
            .as_deref()
            .map(str::parse::<UnitsPower>)
            .transpose()
    }

    pub fn unit_preferences(&self) -> Result<UnitPreferences, PowerError> {
        Ok(UnitPreferences {
            unit: self.preferred_unit()?,
            auto_prefix: self.display.auto_prefix,
            precision: self.display.precision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = Config::empty();
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
        assert_eq!(config.unit_preferences().unwrap(), UnitPreferences::default());
    }

    #[test]
    fn test_load_full_config() {
        let config = Config::load_from_str(
            r#"
[display]
unit = "mW"
auto_prefix = true
precision = 3

[logging]
level = "debug"
json = true
"#,
        )
        .unwrap();

        let prefs = config.unit_preferences().unwrap();
        assert_eq!(prefs.unit, Some(UnitsPower::Milliwatt));
        assert!(prefs.auto_prefix);
        assert_eq!(prefs.precision, Some(3));
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::load_from_str("[display]\nunit = \"KILOWATT\"\n").unwrap();
        assert_eq!(config.preferred_unit().unwrap(), Some(UnitsPower::Kilowatt));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_unknown_unit_is_rejected() {
        let result = Config::load_from_str("[display]\nunit = \"horsepower\"\n");
        assert!(matches!(result, Err(PowerError::UnknownUnit(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::load_from_file("no/such/wattage.toml"),
            Err(PowerError::Io(_))
        ));
    }
}
