//! Geometry primitives shared by the offset resolvers, placement formulas
//! and the best-placement selector.
//!
//! All values are CSS pixels stored as `f64`, the same representation the DOM
//! hands back from `offsetTop` or `getBoundingClientRect()`.

use serde::{Deserialize, Serialize};

/// Round the way `Math.round` does: halves go toward positive infinity.
///
/// `f64::round` rounds halves away from zero, which disagrees with the
/// browser for negative values (`-2.5` → `-3` instead of `-2`).
pub fn js_round(value: f64) -> f64 {
    // Adding 0.5 first loses precision just below a half and above 2^52
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// A 2D point (top/left) in pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub top: f64,
    pub left: f64,
}

impl Offset {
    pub const ZERO: Self = Self { top: 0.0, left: 0.0 };

    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

impl std::ops::Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            top: self.top + rhs.top,
            left: self.left + rhs.left,
        }
    }
}

impl std::ops::AddAssign for Offset {
    fn add_assign(&mut self, rhs: Self) {
        self.top += rhs.top;
        self.left += rhs.left;
    }
}

/// Size of the reference a target is placed against
///
/// Zero-sized when positioning against a bare point.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ReferenceRect {
    pub height: f64,
    pub width: f64,
}

impl ReferenceRect {
    pub const ZERO: Self = Self { height: 0.0, width: 0.0 };

    pub fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }
}

/// Bounding box relative to the viewport, as returned by
/// `getBoundingClientRect()`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn origin(&self) -> Offset {
        Offset::new(self.top, self.left)
    }

    /// Width and height as a placement reference
    pub fn dimensions(&self) -> ReferenceRect {
        ReferenceRect::new(self.height, self.width)
    }
}

/// Final placement of a target element, in document pixels
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct AbsolutePosition {
    pub top: f64,
    pub left: f64,
}

impl AbsolutePosition {
    pub const ZERO: Self = Self { top: 0.0, left: 0.0 };

    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Copy of this position shifted by the given deltas
    pub fn shifted(self, top: f64, left: f64) -> Self {
        Self {
            top: self.top + top,
            left: self.left + left,
        }
    }
}

/// Full box a target would occupy at a given position
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlacementBox {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl PlacementBox {
    /// Build the box from a position and the target's rendered size
    pub fn at(position: AbsolutePosition, width: f64, height: f64) -> Self {
        Self {
            top: position.top,
            bottom: position.top + height,
            left: position.left,
            right: position.left + width,
        }
    }
}
