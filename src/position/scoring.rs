//! Visible-area scoring for the best-placement selector
//!
//! Each candidate placement is weighted by the fraction of the target that
//! stays inside a container rect anchored at the origin.

use serde::{Deserialize, Serialize};

use crate::config::ContainerAxes;
use crate::host::Viewport;
use crate::models::{PlacementBox, ReferenceRect};

/// Supplies the rect candidates are scored against
pub trait ContainerProvider {
    fn container(&self) -> ReferenceRect;
}

impl<F> ContainerProvider for F
where
    F: Fn() -> ReferenceRect,
{
    fn container(&self) -> ReferenceRect {
        self()
    }
}

impl ContainerProvider for ReferenceRect {
    fn container(&self) -> ReferenceRect {
        *self
    }
}

/// The visible part of the window, net of scroll
pub struct ViewportContainer<'a> {
    pub viewport: &'a dyn Viewport,
    pub axes: ContainerAxes,
}

impl ContainerProvider for ViewportContainer<'_> {
    fn container(&self) -> ReferenceRect {
        let across = self.viewport.inner_width() - self.viewport.scroll_x();
        let down = self.viewport.inner_height() - self.viewport.scroll_y();

        match self.axes {
            ContainerAxes::Natural => ReferenceRect::new(down, across),
            ContainerAxes::Swapped => ReferenceRect::new(across, down),
        }
    }
}

/// A candidate placement and its visible fraction
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WeightedPlacement {
    pub placement: String,
    pub weight: f64,
}

/// Fraction of a `width` × `height` target left visible at `placement_box`
///
/// Overflow is measured per axis against the container edges; the hidden
/// area is the product of the two overflows. A target with no area scores 0.
pub fn visible_fraction(
    placement_box: &PlacementBox,
    width: f64,
    height: f64,
    container: ReferenceRect,
) -> f64 {
    let hidden_height = if placement_box.top < 0.0 {
        -placement_box.top
    } else if placement_box.bottom > container.height {
        placement_box.bottom - container.height
    } else {
        0.0
    };

    let hidden_width = if placement_box.left < 0.0 {
        -placement_box.left
    } else if placement_box.right > container.width {
        placement_box.right - container.width
    } else {
        0.0
    };

    let area = width * height;
    if area <= 0.0 {
        return 0.0;
    }

    (area - hidden_height * hidden_width) / area
}

/// Sort candidates best first; equal weights keep their input order
///
/// A NaN weight (non-finite coordinates from a custom formula) ranks last.
pub fn rank(mut weighted: Vec<WeightedPlacement>) -> Vec<WeightedPlacement> {
    let key = |w: &WeightedPlacement| {
        if w.weight.is_nan() {
            f64::NEG_INFINITY
        } else {
            w.weight + 0.0
        }
    };
    // Vec::sort_by is stable
    weighted.sort_by(|a, b| key(b).total_cmp(&key(a)));
    weighted
}
