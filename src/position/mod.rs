//! Position calculation
//!
//! - `offset`: reference-point resolvers (relative / absolute)
//! - `formulas`: built-in placement geometry and the placement registry
//! - `scoring`: visible-area weighting for best-placement selection
//! - `engine`: [`PositionEngine`], tying the above together

pub mod engine;
pub mod formulas;
pub mod offset;
pub mod scoring;

pub use engine::PositionEngine;
pub use formulas::{PlacementFormula, PlacementRegistry};
pub use offset::{absolute_offset, relative_offset, AbsoluteOffset, OffsetResolver, RelativeOffset};
pub use scoring::{ContainerProvider, ViewportContainer, WeightedPlacement};
