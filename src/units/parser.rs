use crate::model::power::Power;
use crate::units::detector::POWER_PATTERN;
use crate::units::error::PowerError;
use crate::units::types::UnitsPower;

/// Parse a power string (e.g., "100 mW", "1.5 kW", "2 MILLIWATT")
pub fn parse_power(input: &str) -> Result<Power, PowerError> {
    let trimmed = input.trim();

    let captures = POWER_PATTERN.captures(trimmed).ok_or_else(|| {
        PowerError::parse(format!(
            "'{}' is not of the form '<number> <unit>'",
            input
        ))
    })?;

    let value = captures["value"]
        .parse::<f64>()
        .map_err(|e| PowerError::parse(format!("Failed to parse value: {}", e)))?;

    let unit: UnitsPower = captures["unit"].parse()?;

    Ok(Power::new(value, Some(unit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_powers() {
        let power = parse_power("100 mW").expect("Failed to parse 100 mW");
        assert_eq!(power.value(), 100.0);
        assert_eq!(power.unit(), Some(UnitsPower::Milliwatt));

        let power = parse_power("10.5 W").expect("Failed to parse 10.5 W");
        assert_eq!(power.value(), 10.5);
        assert_eq!(power.unit(), Some(UnitsPower::Watt));
    }

    #[test]
    fn test_parse_scientific_notation() {
        let power = parse_power("1e3W").expect("Failed to parse 1e3W");
        assert_eq!(power.value(), 1000.0);
        assert_eq!(power.unit(), Some(UnitsPower::Watt));

        let power = parse_power("1.5E-2 kW").expect("Failed to parse 1.5E-2 kW");
        assert_eq!(power.value(), 0.015);
    }

    #[test]
    fn test_parse_exa_is_not_an_exponent() {
        let power = parse_power("2 EW").expect("Failed to parse 2 EW");
        assert_eq!(power.value(), 2.0);
        assert_eq!(power.unit(), Some(UnitsPower::Exawatt));
    }

    #[test]
    fn test_parse_negative_values() {
        let power = parse_power("-2.5 kW").expect("Failed to parse -2.5 kW");
        assert_eq!(power.value(), -2.5);
        assert_eq!(power.unit(), Some(UnitsPower::Kilowatt));
    }

    #[test]
    fn test_parse_names_and_aliases() {
        let power = parse_power("5 uW").expect("Failed to parse 5 uW");
        assert_eq!(power.unit(), Some(UnitsPower::Microwatt));

        let power = parse_power("3 MILLIWATT").expect("Failed to parse 3 MILLIWATT");
        assert_eq!(power.unit(), Some(UnitsPower::Milliwatt));
    }

    #[test]
    fn test_parse_invalid_expressions() {
        assert!(matches!(parse_power(""), Err(PowerError::Parse(_))));
        assert!(matches!(parse_power("100"), Err(PowerError::Parse(_))));
        assert!(matches!(parse_power("mW"), Err(PowerError::Parse(_))));
        assert!(matches!(
            parse_power("5 bar"),
            Err(PowerError::UnknownUnit(u)) if u == "bar"
        ));
    }
}
