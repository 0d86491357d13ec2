use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect power strings
    /// Matches: signed number (optional decimal, optional scientific notation) + optional whitespace + unit token
    /// Examples: "100 mW", "1.5 kW", "1e3W", "-20 µW"
    pub(crate) static ref POWER_PATTERN: Regex = Regex::new(
        r"^(?P<value>[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][-+]?\d+)?)\s*(?P<unit>[a-zA-Zµμ]+)$"
    ).unwrap();
}

/// Check if a string looks like a power expression
pub fn looks_like_power_string(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    POWER_PATTERN.is_match(trimmed)
}
