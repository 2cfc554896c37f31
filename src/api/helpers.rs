//! Shared helpers for WASM API operations
//!
//! Serialization at the JS boundary and invocation of caller-supplied JS
//! callbacks. Every failure is logged before it is handed back to JavaScript.

use js_sys::Function;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

// ============================================================================
// Callback Helpers
// ============================================================================

/// Call a JS callback, deserializing its return value
pub fn call_callback<T: DeserializeOwned>(
    function: &Function,
    args: &[&JsValue],
    error_context: &str,
) -> Result<T, JsValue> {
    let result = match args {
        [] => function.call0(&JsValue::NULL),
        [a] => function.call1(&JsValue::NULL, a),
        [a, b] => function.call2(&JsValue::NULL, a, b),
        [a, b, c] => function.call3(&JsValue::NULL, a, b, c),
        _ => return Err(js_error(format!("{}: too many callback arguments", error_context))),
    }
    .map_err(|e| js_error(format!("{}: callback threw {:?}", error_context, e)))?;

    deserialize(result, error_context)
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an error and convert it to a JsValue
pub fn js_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}
