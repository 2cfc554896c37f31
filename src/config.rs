//! Engine configuration
//!
//! Both settings select between the historical behaviour of the JavaScript
//! positioning helper and a corrected variant. The config arrives from
//! JavaScript as a plain object (or JSON) with camelCase keys; missing keys
//! take their defaults.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::PositionError;

/// How static ancestors' margins are folded into absolute offsets
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MarginCorrection {
    /// An ancestor contributes only when it declares both a top and a left
    /// margin
    #[default]
    Paired,
    /// Top and left margins are corrected separately
    Independent,
}

/// How the viewport maps onto the default container rect
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContainerAxes {
    /// `width = innerWidth - scrollX`, `height = innerHeight - scrollY`
    #[default]
    Natural,
    /// `width = innerHeight - scrollY`, `height = innerWidth - scrollX`
    Swapped,
}

/// Configuration for a [`crate::position::PositionEngine`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionConfig {
    pub margin_correction: MarginCorrection,
    pub container_axes: ContainerAxes,
}

impl PositionConfig {
    pub fn from_json(json: &str) -> Result<Self, PositionError> {
        serde_json::from_str(json).map_err(|e| PositionError::Config(e.to_string()))
    }

    /// Read a config from a JS object; `undefined`/`null` yields the default
    pub fn from_js(value: JsValue) -> Result<Self, PositionError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| PositionError::Config(e.to_string()))
    }
}
