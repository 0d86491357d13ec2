use crate::units::error::PowerError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Static description of a power unit, shared by every quantity using it
#[derive(Debug, PartialEq, Eq)]
pub struct UnitDescriptor {
    /// Enum-style name (e.g. "MILLIWATT")
    pub name: &'static str,
    /// Display symbol (e.g. "mW")
    pub symbol: &'static str,
    /// Decimal exponent relative to the watt
    pub exponent: i32,
}

/// Recognized units of power, ordered from largest to smallest.
/// Serialized by name; deserialized from a name or a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UnitsPower {
    Yottawatt,
    Zettawatt,
    Exawatt,
    Petawatt,
    Terawatt,
    Gigawatt,
    Megawatt,
    Kilowatt,
    Hectowatt,
    Decawatt,
    Watt,
    Deciwatt,
    Centiwatt,
    Milliwatt,
    Microwatt,
    Nanowatt,
    Picowatt,
    Femtowatt,
    Attowatt,
    Zeptowatt,
    Yoctowatt,
}

static DESCRIPTORS: [UnitDescriptor; 21] = [
    UnitDescriptor { name: "YOTTAWATT", symbol: "YW", exponent: 24 },
    UnitDescriptor { name: "ZETTAWATT", symbol: "ZW", exponent: 21 },
    UnitDescriptor { name: "EXAWATT", symbol: "EW", exponent: 18 },
    UnitDescriptor { name: "PETAWATT", symbol: "PW", exponent: 15 },
    UnitDescriptor { name: "TERAWATT", symbol: "TW", exponent: 12 },
    UnitDescriptor { name: "GIGAWATT", symbol: "GW", exponent: 9 },
    UnitDescriptor { name: "MEGAWATT", symbol: "MW", exponent: 6 },
    UnitDescriptor { name: "KILOWATT", symbol: "kW", exponent: 3 },
    UnitDescriptor { name: "HECTOWATT", symbol: "hW", exponent: 2 },
    UnitDescriptor { name: "DECAWATT", symbol: "daW", exponent: 1 },
    UnitDescriptor { name: "WATT", symbol: "W", exponent: 0 },
    UnitDescriptor { name: "DECIWATT", symbol: "dW", exponent: -1 },
    UnitDescriptor { name: "CENTIWATT", symbol: "cW", exponent: -2 },
    UnitDescriptor { name: "MILLIWATT", symbol: "mW", exponent: -3 },
    UnitDescriptor { name: "MICROWATT", symbol: "µW", exponent: -6 },
    UnitDescriptor { name: "NANOWATT", symbol: "nW", exponent: -9 },
    UnitDescriptor { name: "PICOWATT", symbol: "pW", exponent: -12 },
    UnitDescriptor { name: "FEMTOWATT", symbol: "fW", exponent: -15 },
    UnitDescriptor { name: "ATTOWATT", symbol: "aW", exponent: -18 },
    UnitDescriptor { name: "ZEPTOWATT", symbol: "zW", exponent: -21 },
    UnitDescriptor { name: "YOCTOWATT", symbol: "yW", exponent: -24 },
];

const ALL: [UnitsPower; 21] = [
    UnitsPower::Yottawatt,
    UnitsPower::Zettawatt,
    UnitsPower::Exawatt,
    UnitsPower::Petawatt,
    UnitsPower::Terawatt,
    UnitsPower::Gigawatt,
    UnitsPower::Megawatt,
    UnitsPower::Kilowatt,
    UnitsPower::Hectowatt,
    UnitsPower::Decawatt,
    UnitsPower::Watt,
    UnitsPower::Deciwatt,
    UnitsPower::Centiwatt,
    UnitsPower::Milliwatt,
    UnitsPower::Microwatt,
    UnitsPower::Nanowatt,
    UnitsPower::Picowatt,
    UnitsPower::Femtowatt,
    UnitsPower::Attowatt,
    UnitsPower::Zeptowatt,
    UnitsPower::Yoctowatt,
];

impl UnitsPower {
    /// Every unit, largest first
    pub fn all() -> &'static [UnitsPower] {
        &ALL
    }

    pub fn descriptor(self) -> &'static UnitDescriptor {
        // Variants are declared in the same order as DESCRIPTORS
        &DESCRIPTORS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn symbol(self) -> &'static str {
        self.descriptor().symbol
    }

    pub fn exponent(self) -> i32 {
        self.descriptor().exponent
    }

    /// Look up a unit by symbol. Symbols are case-sensitive ("mW" is not "MW").
    pub fn from_symbol(symbol: &str) -> Option<UnitsPower> {
        let symbol = match symbol {
            "uW" | "μW" => "µW",
            other => other,
        };
        ALL.iter().copied().find(|u| u.symbol() == symbol)
    }

    /// Look up a unit by its decimal exponent relative to the watt
    pub fn from_exponent(exponent: i32) -> Option<UnitsPower> {
        ALL.iter().copied().find(|u| u.exponent() == exponent)
    }

    /// Look up a unit by its enum-style name, ignoring case
    pub fn from_name(name: &str) -> Option<UnitsPower> {
        ALL.iter()
            .copied()
            .find(|u| u.name().eq_ignore_ascii_case(name))
    }
}

impl FromStr for UnitsPower {
    type Err = PowerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        UnitsPower::from_symbol(s)
            .or_else(|| UnitsPower::from_name(s))
            .ok_or_else(|| PowerError::unknown_unit(s))
    }
}

impl<'de> Deserialize<'de> for UnitsPower {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for UnitsPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_matches_variants() {
        for (idx, unit) in UnitsPower::all().iter().enumerate() {
            assert_eq!(*unit as usize, idx);
            let json = serde_json::to_string(unit).unwrap();
            assert_eq!(json, format!("\"{}\"", unit.name()));
        }
        assert_eq!(UnitsPower::all().len(), 21);
    }

    #[test]
    fn test_exponents_descend() {
        let exps: Vec<i32> = UnitsPower::all().iter().map(|u| u.exponent()).collect();
        assert!(exps.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(UnitsPower::Watt.exponent(), 0);
    }

    #[test]
    fn test_symbol_lookup_is_case_sensitive() {
        assert_eq!(UnitsPower::from_symbol("mW"), Some(UnitsPower::Milliwatt));
        assert_eq!(UnitsPower::from_symbol("MW"), Some(UnitsPower::Megawatt));
        assert_eq!(UnitsPower::from_symbol("daW"), Some(UnitsPower::Decawatt));
        assert_eq!(UnitsPower::from_symbol("mw"), None);
    }

    #[test]
    fn test_micro_aliases() {
        assert_eq!(UnitsPower::from_symbol("µW"), Some(UnitsPower::Microwatt));
        assert_eq!(UnitsPower::from_symbol("μW"), Some(UnitsPower::Microwatt));
        assert_eq!(UnitsPower::from_symbol("uW"), Some(UnitsPower::Microwatt));
    }

    #[test]
    fn test_from_str_accepts_names_and_symbols() {
        assert_eq!("milliwatt".parse::<UnitsPower>().unwrap(), UnitsPower::Milliwatt);
        assert_eq!("KILOWATT".parse::<UnitsPower>().unwrap(), UnitsPower::Kilowatt);
        assert_eq!(" kW ".parse::<UnitsPower>().unwrap(), UnitsPower::Kilowatt);
        assert!(matches!(
            "bar".parse::<UnitsPower>(),
            Err(PowerError::UnknownUnit(u)) if u == "bar"
        ));
    }

    #[test]
    fn test_deserialize_from_name_or_symbol() {
        let unit: UnitsPower = serde_json::from_str("\"NANOWATT\"").unwrap();
        assert_eq!(unit, UnitsPower::Nanowatt);
        let unit: UnitsPower = serde_json::from_str("\"nW\"").unwrap();
        assert_eq!(unit, UnitsPower::Nanowatt);
        assert!(serde_json::from_str::<UnitsPower>("\"watts\"").is_err());
    }

    #[test]
    fn test_from_exponent() {
        assert_eq!(UnitsPower::from_exponent(3), Some(UnitsPower::Kilowatt));
        assert_eq!(UnitsPower::from_exponent(-24), Some(UnitsPower::Yoctowatt));
        assert_eq!(UnitsPower::from_exponent(4), None);
        assert_eq!(UnitsPower::from_exponent(27), None);
    }
}
