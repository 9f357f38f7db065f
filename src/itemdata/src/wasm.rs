//! WebAssembly bindings for itemdata
//!
//! Lookups return JSON strings so callers can `JSON.parse` them directly.

use crate::classify::classify;
use crate::modules::ship_module;
use crate::ships::ship_properties;
use wasm_bindgen::prelude::*;

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

/// Look up a ship module, synthesizing a record for unknown ids
#[wasm_bindgen(js_name = moduleLookup)]
pub fn module_lookup(id: &str) -> Result<String, JsValue> {
    to_json(&ship_module(id))
}

/// Hull properties as a JSON object, or `null` for an unknown hull
#[wasm_bindgen(js_name = shipProperties)]
pub fn ship_properties_json(name: &str) -> Result<String, JsValue> {
    to_json(&ship_properties(name))
}

/// Coarse kind of a journal id: `ship`, `srv`, `fighter`, `suit`, `taxi`,
/// `vanity` or `unknown`
#[wasm_bindgen(js_name = classifyItem)]
pub fn classify_item(id: &str) -> String {
    classify(id).as_str().to_string()
}
