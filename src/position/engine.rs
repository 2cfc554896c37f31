//! The position engine
//!
//! Combines an offset resolver with a placement formula to produce absolute
//! positions, scores candidate placements, and writes results back onto
//! elements.
//!
//! ```text
//! measure (offset + rect) → formula → [score] → set_element
//! ```

use std::rc::Rc;

use super::formulas::{PlacementFormula, PlacementRegistry};
use super::offset::{absolute_offset, relative_offset, AbsoluteOffset, OffsetResolver};
use super::scoring::{rank, visible_fraction, ContainerProvider, ViewportContainer, WeightedPlacement};
use crate::config::PositionConfig;
use crate::error::PositionError;
use crate::host::{LayoutElement, NullViewport, Viewport};
use crate::models::{AbsolutePosition, Offset, PlacementBox, ReferenceRect};

/// Positions target elements relative to references or points
///
/// The registry and configuration are fixed at construction, so an engine
/// can be shared freely behind an `Rc`.
pub struct PositionEngine<E: LayoutElement> {
    registry: PlacementRegistry<E>,
    config: PositionConfig,
    viewport: Rc<dyn Viewport>,
}

impl<E: LayoutElement + 'static> PositionEngine<E> {
    /// Engine with the built-in placements and default config
    pub fn new() -> Self {
        Self::with_overrides(Vec::new())
    }

    /// Engine with `overrides` merged over the built-in placements
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, Rc<dyn PlacementFormula<E>>)>,
    {
        Self {
            registry: PlacementRegistry::with_overrides(overrides),
            config: PositionConfig::default(),
            viewport: Rc::new(NullViewport),
        }
    }
}

impl<E: LayoutElement + 'static> Default for PositionEngine<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: LayoutElement> PositionEngine<E> {
    pub fn with_config(mut self, config: PositionConfig) -> Self {
        self.config = config;
        self
    }

    /// Viewport used by the default container of the best-placement selector
    pub fn with_viewport(mut self, viewport: Rc<dyn Viewport>) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn config(&self) -> &PositionConfig {
        &self.config
    }

    pub fn registry(&self) -> &PlacementRegistry<E> {
        &self.registry
    }

    // ------------------------------------------------------------------
    // Offsets
    // ------------------------------------------------------------------

    pub fn relative_offset(&self, target: &E) -> Offset {
        relative_offset(target)
    }

    pub fn absolute_offset(&self, target: &E) -> Offset {
        absolute_offset(target, self.config.margin_correction)
    }

    /// The engine's default resolver (absolute, with the configured margin
    /// correction)
    pub fn default_resolver(&self) -> AbsoluteOffset {
        AbsoluteOffset {
            margin_correction: self.config.margin_correction,
        }
    }

    // ------------------------------------------------------------------
    // Position calculation
    // ------------------------------------------------------------------

    /// Apply the formula registered for `placement`
    pub fn try_calculate_position(
        &self,
        offset: Offset,
        rect: ReferenceRect,
        target: &E,
        placement: &str,
    ) -> Result<AbsolutePosition, PositionError> {
        let formula = self
            .registry
            .get(placement)
            .ok_or_else(|| PositionError::UnknownPlacement(placement.to_string()))?;
        formula.place(offset, target, rect)
    }

    /// Like [`Self::try_calculate_position`], but failures are logged and
    /// yield `{top: 0, left: 0}`
    pub fn calculate_position(
        &self,
        offset: Offset,
        rect: ReferenceRect,
        target: &E,
        placement: &str,
    ) -> AbsolutePosition {
        self.try_calculate_position(offset, rect, target, placement)
            .unwrap_or_else(|e| {
                log::error!("{}, defaulting to 0,0", e);
                AbsolutePosition::ZERO
            })
    }

    /// Position `target` against `reference`, measured relative to the
    /// nearest positioned ancestor
    pub fn find_relative(&self, reference: &E, target: &E, placement: &str) -> AbsolutePosition {
        self.find_position_with(reference, target, placement, &relative_offset::<E>)
    }

    /// Position `target` against `reference`, measured in document
    /// coordinates
    pub fn find_absolute(&self, reference: &E, target: &E, placement: &str) -> AbsolutePosition {
        self.find_position_with(reference, target, placement, &self.default_resolver())
    }

    /// Position with the default (absolute) resolver
    pub fn find_position(&self, reference: &E, target: &E, placement: &str) -> AbsolutePosition {
        self.find_absolute(reference, target, placement)
    }

    /// Position with a caller-supplied resolver
    pub fn find_position_with(
        &self,
        reference: &E,
        target: &E,
        placement: &str,
        resolver: &dyn OffsetResolver<E>,
    ) -> AbsolutePosition {
        let offset = resolver.resolve(reference);
        let rect = reference.bounding_rect().dimensions();
        self.calculate_position(offset, rect, target, placement)
    }

    /// Position `target` against a bare point (zero-size reference)
    pub fn find_position_at(&self, point: Offset, target: &E, placement: &str) -> AbsolutePosition {
        self.calculate_position(point, ReferenceRect::ZERO, target, placement)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    /// Box `target` would occupy at `position`
    pub fn placement_box(&self, target: &E, position: AbsolutePosition) -> PlacementBox {
        PlacementBox::at(position, target.offset_width(), target.offset_height())
    }

    pub fn add_offset(&self, position: AbsolutePosition, top: f64, left: f64) -> AbsolutePosition {
        position.shifted(top, left)
    }

    /// Write `position` into the element's `top`/`left` style
    pub fn set_element(&self, element: &E, position: AbsolutePosition) {
        element.set_offset(position.top, position.left);
    }

    // ------------------------------------------------------------------
    // Best placement
    // ------------------------------------------------------------------

    /// Container rect derived from the engine's viewport
    pub fn default_container(&self) -> ReferenceRect {
        ViewportContainer {
            viewport: self.viewport.as_ref(),
            axes: self.config.container_axes,
        }
        .container()
    }

    /// Weight every candidate by its visible fraction, best first
    ///
    /// `position_fn` computes the position of `target` for one placement.
    pub fn rank_placements<S, P>(
        &self,
        target: &E,
        placements: &[S],
        container: &dyn ContainerProvider,
        mut position_fn: P,
    ) -> Vec<WeightedPlacement>
    where
        S: AsRef<str>,
        P: FnMut(&str) -> AbsolutePosition,
    {
        let width = target.offset_width();
        let height = target.offset_height();

        let weighted = placements
            .iter()
            .map(|placement| {
                let placement = placement.as_ref();
                let position = position_fn(placement);
                let placement_box = self.placement_box(target, position);
                let weight =
                    visible_fraction(&placement_box, width, height, container.container());
                log::debug!("placement '{}' weighted {:.3}", placement, weight);
                WeightedPlacement {
                    placement: placement.to_string(),
                    weight,
                }
            })
            .collect();

        rank(weighted)
    }

    /// Best of `placements` for `target` against `reference`, scored
    /// against the viewport; `None` when `placements` is empty
    pub fn find_best_placement<S: AsRef<str>>(
        &self,
        reference: &E,
        target: &E,
        placements: &[S],
    ) -> Option<String> {
        let container = || self.default_container();
        self.find_best_placement_with(reference, target, placements, &container, |r, t, p| {
            self.find_position(r, t, p)
        })
    }

    /// Best placement with a caller-supplied container and position function
    pub fn find_best_placement_with<S, P>(
        &self,
        reference: &E,
        target: &E,
        placements: &[S],
        container: &dyn ContainerProvider,
        position_fn: P,
    ) -> Option<String>
    where
        S: AsRef<str>,
        P: Fn(&E, &E, &str) -> AbsolutePosition,
    {
        self.rank_placements(target, placements, container, |placement| {
            position_fn(reference, target, placement)
        })
        .into_iter()
        .next()
        .map(|best| best.placement)
    }

    /// Best placement around a point, scored against the viewport
    pub fn find_best_placement_at<S: AsRef<str>>(
        &self,
        point: Offset,
        target: &E,
        placements: &[S],
    ) -> Option<String> {
        let container = || self.default_container();
        self.find_best_placement_at_with(point, target, placements, &container)
    }

    /// Best placement around a point with a caller-supplied container
    pub fn find_best_placement_at_with<S: AsRef<str>>(
        &self,
        point: Offset,
        target: &E,
        placements: &[S],
        container: &dyn ContainerProvider,
    ) -> Option<String> {
        self.rank_placements(target, placements, container, |placement| {
            self.find_position_at(point, target, placement)
        })
        .into_iter()
        .next()
        .map(|best| best.placement)
    }
}
