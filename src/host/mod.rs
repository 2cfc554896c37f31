//! Host environment collaborators
//!
//! The engine never talks to the DOM directly. It measures and mutates
//! elements through [`LayoutElement`] and reads the window through
//! [`Viewport`].
//!
//! - `dom`: live browser binding over `web-sys`
//! - `measured`: in-memory element snapshots built from measurements

pub mod dom;
pub mod measured;

pub use dom::{DomElement, WindowViewport};
pub use measured::{MeasuredElement, StaticViewport};

use crate::models::ClientRect;

/// Computed `position` mode of an element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PositionMode {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl PositionMode {
    /// Parse a computed `position` value; anything unrecognised is static
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "relative" => PositionMode::Relative,
            "absolute" => PositionMode::Absolute,
            "fixed" => PositionMode::Fixed,
            "sticky" => PositionMode::Sticky,
            _ => PositionMode::Static,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, PositionMode::Static)
    }
}

/// The slice of an element's computed style the resolvers care about
///
/// Margins are kept as the raw computed strings (`"8px"`, `""`) because the
/// margin correction distinguishes "not declared" from "declared as zero".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComputedBox {
    pub position: PositionMode,
    pub margin_top: String,
    pub margin_left: String,
}

impl ComputedBox {
    pub fn margin_top_px(&self) -> Option<i64> {
        parse_css_int(&self.margin_top)
    }

    pub fn margin_left_px(&self) -> Option<i64> {
        parse_css_int(&self.margin_left)
    }
}

/// Leading-integer parse with `parseInt(value, 10)` semantics
///
/// `"12px"` → 12, `"-4.5px"` → -4, `""`/`"auto"` → `None`.
pub fn parse_css_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// An element the engine can measure and move
pub trait LayoutElement: Sized {
    /// `offsetTop`: distance to the offset parent's padding edge
    fn offset_top(&self) -> f64;

    /// `offsetLeft`
    fn offset_left(&self) -> f64;

    /// `offsetWidth`: rendered content + padding + border width
    fn offset_width(&self) -> f64;

    /// `offsetHeight`
    fn offset_height(&self) -> f64;

    /// Nearest positioned ancestor per the layout rules (`offsetParent`)
    fn offset_parent(&self) -> Option<Self>;

    /// Computed position mode and margins
    fn computed_box(&self) -> ComputedBox;

    /// Bounding box relative to the viewport
    fn bounding_rect(&self) -> ClientRect;

    /// Bounding box of the owning document's body
    fn body_rect(&self) -> ClientRect;

    /// Write the element's `top`/`left` style in pixels
    fn set_offset(&self, top: f64, left: f64);
}

/// Window size and scroll position
pub trait Viewport {
    fn inner_width(&self) -> f64;
    fn inner_height(&self) -> f64;
    fn scroll_x(&self) -> f64;
    fn scroll_y(&self) -> f64;
}

/// Viewport of an environment without a window: everything is zero
#[derive(Clone, Copy, Debug, Default)]
pub struct NullViewport;

impl Viewport for NullViewport {
    fn inner_width(&self) -> f64 {
        0.0
    }

    fn inner_height(&self) -> f64 {
        0.0
    }

    fn scroll_x(&self) -> f64 {
        0.0
    }

    fn scroll_y(&self) -> f64 {
        0.0
    }
}
