// WebAssembly bindings for the wattage API
use crate::model;
use crate::units::{self, PowerFormatter, UnitPreferences};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WattageWasm {}

impl Default for WattageWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WattageWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Parse a power string (e.g. "5 mW")
    /// Returns JSON string of the quantity
    #[wasm_bindgen]
    pub fn parse(&self, quantity: &str) -> Result<String, JsValue> {
        let power = units::parse_power(quantity)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse power: {}", e)))?;

        serde_json::to_string(&power)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize power: {}", e)))
    }

    /// Convert a power string to `to` (name or symbol), or to the best SI prefix when omitted
    #[wasm_bindgen]
    pub fn convert(&self, quantity: &str, to: Option<String>) -> Result<String, JsValue> {
        let power = units::parse_power(quantity)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse power: {}", e)))?;

        let unit = to
            .as_deref()
            .map(str::parse::<units::UnitsPower>)
            .transpose()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let formatter = PowerFormatter::new(UnitPreferences {
            unit,
            auto_prefix: unit.is_none(),
            precision: None,
        });

        formatter
            .format(&power)
            .map_err(|e| JsValue::from_str(&format!("Conversion error: {}", e)))
    }

    /// Load a power sheet from TOML content
    /// Returns JSON string: {"sheet": ..., "errors": [...], "warnings": [...]}
    #[wasm_bindgen]
    pub fn load_sheet(&self, content: &str) -> Result<String, JsValue> {
        let (sheet, validation) = model::load_power_sheet_from_str(content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load power sheet: {}", e)))?;

        let messages = |issues: &[model::SheetIssue]| -> Vec<String> {
            issues.iter().map(|i| format!("[{}] {}", i.key, i.message)).collect()
        };

        let result = serde_json::json!({
            "sheet": sheet,
            "errors": messages(&validation.errors),
            "warnings": messages(&validation.warnings),
        });

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }
}
