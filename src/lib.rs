//! Element Positioning WASM Module
//!
//! Computes where to place a target element relative to a reference element
//! or a point, for the placements `left`, `right`, `top` and `bottom` (plus
//! any caller-registered ones), and picks the placement that keeps most of
//! the target visible.

pub mod api;
pub mod config;
pub mod error;
pub mod host;
pub mod models;
pub mod position;

// Re-export commonly used types
pub use config::{ContainerAxes, MarginCorrection, PositionConfig};
pub use error::PositionError;
pub use host::{LayoutElement, Viewport};
pub use models::*;
pub use position::PositionEngine;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Position WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", e).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
