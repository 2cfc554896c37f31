//! Data model for element positioning
//!
//! Geometry values (offsets, rects, positions) and the built-in placement
//! names.

pub mod geometry;
pub mod placement;

pub use geometry::{js_round, AbsolutePosition, ClientRect, Offset, PlacementBox, ReferenceRect};
pub use placement::Placement;
