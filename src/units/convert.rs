use crate::units::error::PowerError;
use crate::units::types::UnitsPower;

/// Convert a magnitude from one power unit to another.
///
/// Power units differ only by a power of ten, so the magnitude is multiplied
/// (or divided) by an exact `10^n` instead of going through the watt. A finite
/// input whose result is not finite is reported as an overflow.
pub fn convert_power(value: f64, from: UnitsPower, to: UnitsPower) -> Result<f64, PowerError> {
    if from == to {
        return Ok(value);
    }

    let shift = from.exponent() - to.exponent();
    let converted = if shift > 0 {
        value * 10f64.powi(shift)
    } else {
        value / 10f64.powi(-shift)
    };

    if value.is_finite() && !converted.is_finite() {
        return Err(PowerError::Overflow { value, from, to });
    }

    tracing::debug!(value, %from, %to, converted, "converted power");
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = expected.abs() * 1e-12;
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_same_unit_is_identity() {
        assert_eq!(
            convert_power(42.5, UnitsPower::Watt, UnitsPower::Watt).unwrap(),
            42.5
        );
    }

    #[test]
    fn test_exact_decimal_steps() {
        assert_eq!(
            convert_power(1000.0, UnitsPower::Watt, UnitsPower::Kilowatt).unwrap(),
            1.0
        );
        assert_eq!(
            convert_power(1.0, UnitsPower::Kilowatt, UnitsPower::Watt).unwrap(),
            1000.0
        );
        assert_eq!(
            convert_power(5.0, UnitsPower::Milliwatt, UnitsPower::Microwatt).unwrap(),
            5000.0
        );
    }

    #[test]
    fn test_round_trip_across_ladder() {
        let value = 3.75;
        for from in UnitsPower::all() {
            for to in UnitsPower::all() {
                let there = convert_power(value, *from, *to).unwrap();
                let back = convert_power(there, *to, *from).unwrap();
                assert_close(back, value);
            }
        }
    }

    #[test]
    fn test_negative_and_zero() {
        assert_eq!(
            convert_power(-2.5, UnitsPower::Kilowatt, UnitsPower::Watt).unwrap(),
            -2500.0
        );
        assert_eq!(
            convert_power(0.0, UnitsPower::Yottawatt, UnitsPower::Yoctowatt).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = convert_power(f64::MAX, UnitsPower::Yottawatt, UnitsPower::Yoctowatt);
        match result {
            Err(PowerError::Overflow { from, to, .. }) => {
                assert_eq!(from, UnitsPower::Yottawatt);
                assert_eq!(to, UnitsPower::Yoctowatt);
            }
            other => panic!("Expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_infinite_input_passes_through() {
        let result = convert_power(f64::INFINITY, UnitsPower::Watt, UnitsPower::Kilowatt).unwrap();
        assert!(result.is_infinite());
        assert!(convert_power(f64::NAN, UnitsPower::Watt, UnitsPower::Kilowatt)
            .unwrap()
            .is_nan());
    }
}
