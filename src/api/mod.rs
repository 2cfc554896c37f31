//! Position WASM API
//!
//! This module provides the JavaScript-facing API of the positioning engine.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, element conversion, callback invocation and
//!   error handling shared by the API
//! - `position`: the `Position` class, the shared default instance and the
//!   list of built-in placements

pub mod helpers;
pub mod position;

pub use position::{builtin_placements, default_position, Position};
