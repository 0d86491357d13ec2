use crate::model::power::Power;
use crate::units::error::PowerError;
use crate::units::types::UnitsPower;

/// Unit preferences for formatting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitPreferences {
    /// Preferred unit (highest priority)
    pub unit: Option<UnitsPower>,
    /// Pick the engineering prefix that keeps the magnitude in [1, 1000)
    pub auto_prefix: bool,
    /// Fixed number of decimals
    pub precision: Option<usize>,
}

/// Format a power with unit preferences
pub struct PowerFormatter {
    preferences: UnitPreferences,
}

impl PowerFormatter {
    pub fn new(preferences: UnitPreferences) -> Self {
        Self { preferences }
    }

    pub fn preferences(&self) -> &UnitPreferences {
        &self.preferences
    }

    /// Express a power in the unit the preferences select.
    /// Precedence: preferred unit, then auto prefix, then the power's own unit.
    pub fn resolve(&self, power: &Power) -> Result<Power, PowerError> {
        if let Some(unit) = self.preferences.unit {
            return power.converted(unit);
        }

        if self.preferences.auto_prefix {
            return auto_prefixed(power);
        }

        Ok(*power)
    }

    pub fn format(&self, power: &Power) -> Result<String, PowerError> {
        let resolved = self.resolve(power)?;

        let value = match self.preferences.precision {
            Some(precision) => format!("{:.*}", precision, resolved.value()),
            None => resolved.value().to_string(),
        };

        Ok(match resolved.symbol() {
            Some(symbol) => format!("{} {}", value, symbol),
            None => value,
        })
    }
}

impl Default for PowerFormatter {
    fn default() -> Self {
        Self::new(UnitPreferences::default())
    }
}

/// Express `power` in the engineering unit (exponent a multiple of 3) that
/// puts its magnitude in [1, 1000). Zero and non-finite values keep their
/// unit; magnitudes beyond the ladder clamp to `YW` / `yW`.
fn auto_prefixed(power: &Power) -> Result<Power, PowerError> {
    let unit = power.unit().ok_or(PowerError::UnsetUnit)?;
    let value = power.value();
    if value == 0.0 || !value.is_finite() {
        return Ok(*power);
    }

    // Decade of the magnitude in watts, computed without converting so that
    // values near the ends of the ladder cannot overflow.
    let exponent = value.abs().log10().floor() as i32 + unit.exponent();
    let resolved = power.converted(engineering_unit(exponent))?;

    // log10 of a rounded value can land one prefix off near a decade boundary
    let magnitude = resolved.value().abs();
    let step = if magnitude < 1.0 {
        -3
    } else if magnitude >= 1000.0 {
        3
    } else {
        return Ok(resolved);
    };

    let neighbour = resolved
        .unit()
        .and_then(|u| UnitsPower::from_exponent(u.exponent() + step));
    match neighbour {
        Some(next) => power.converted(next),
        None => Ok(resolved),
    }
}

/// Largest engineering unit at or below `exponent`, clamped to the ladder
fn engineering_unit(exponent: i32) -> UnitsPower {
    let engineering = (exponent.div_euclid(3) * 3).clamp(
        UnitsPower::Yoctowatt.exponent(),
        UnitsPower::Yottawatt.exponent(),
    );
    UnitsPower::from_exponent(engineering).unwrap_or(UnitsPower::Watt)
}
