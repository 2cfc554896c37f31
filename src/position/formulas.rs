//! Placement formulas and the registry that names them
//!
//! A formula maps `(reference offset, target, reference rect)` to the
//! target's absolute position. The four built-ins live on [`Placement`];
//! anything else is registered by name.

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::PositionError;
use crate::host::LayoutElement;
use crate::models::{js_round, AbsolutePosition, Offset, Placement, ReferenceRect};

/// Pure function from reference geometry to a target position
///
/// Implementations may read the target's rendered size but must not mutate
/// it. Only foreign formulas (JS callbacks) are expected to fail.
pub trait PlacementFormula<E: LayoutElement> {
    fn place(
        &self,
        offset: Offset,
        target: &E,
        rect: ReferenceRect,
    ) -> Result<AbsolutePosition, PositionError>;
}

impl<E, F> PlacementFormula<E> for F
where
    E: LayoutElement,
    F: Fn(Offset, &E, ReferenceRect) -> AbsolutePosition,
{
    fn place(
        &self,
        offset: Offset,
        target: &E,
        rect: ReferenceRect,
    ) -> Result<AbsolutePosition, PositionError> {
        Ok(self(offset, target, rect))
    }
}

impl<E: LayoutElement> PlacementFormula<E> for Placement {
    fn place(
        &self,
        offset: Offset,
        target: &E,
        rect: ReferenceRect,
    ) -> Result<AbsolutePosition, PositionError> {
        Ok(self.compute(offset, target.offset_width(), target.offset_height(), rect))
    }
}

impl Placement {
    /// Built-in geometry for a target of the given size
    ///
    /// `left`/`right` centre the target vertically and abut horizontally;
    /// `top`/`bottom` centre horizontally and abut vertically.
    pub fn compute(
        &self,
        offset: Offset,
        width: f64,
        height: f64,
        rect: ReferenceRect,
    ) -> AbsolutePosition {
        let centered_top =
            js_round(offset.top - js_round(height / 2.0) + js_round(rect.height / 2.0));
        let centered_left =
            js_round(offset.left - js_round(width / 2.0) + js_round(rect.width / 2.0));

        match self {
            Placement::Left => AbsolutePosition::new(centered_top, js_round(offset.left - width)),
            Placement::Right => {
                AbsolutePosition::new(centered_top, js_round(offset.left + rect.width))
            }
            Placement::Top => AbsolutePosition::new(js_round(offset.top - height), centered_left),
            Placement::Bottom => {
                AbsolutePosition::new(js_round(offset.top + rect.height), centered_left)
            }
        }
    }
}

/// Placement name → formula
///
/// Seeded with the built-ins; overrides are merged on top and only ever
/// shadow entries of the same name.
pub struct PlacementRegistry<E: LayoutElement> {
    formulas: HashMap<String, Rc<dyn PlacementFormula<E>>>,
}

impl<E: LayoutElement + 'static> PlacementRegistry<E> {
    /// Registry holding only the four built-ins
    pub fn builtin() -> Self {
        let mut formulas: HashMap<String, Rc<dyn PlacementFormula<E>>> = HashMap::new();
        for placement in Placement::ALL {
            formulas.insert(placement.as_str().to_string(), Rc::new(placement));
        }
        Self { formulas }
    }

    /// Built-ins with `overrides` merged on top
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, Rc<dyn PlacementFormula<E>>)>,
    {
        let mut registry = Self::builtin();
        registry.formulas.extend(overrides);
        registry
    }
}

impl<E: LayoutElement> PlacementRegistry<E> {
    pub fn get(&self, placement: &str) -> Option<&Rc<dyn PlacementFormula<E>>> {
        self.formulas.get(placement)
    }

    pub fn contains(&self, placement: &str) -> bool {
        self.formulas.contains_key(placement)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.formulas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}
