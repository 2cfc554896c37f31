//! JavaScript-facing `Position` class
//!
//! Mirrors the surface of the JS positioning helper: camelCase methods,
//! plain `{top, left}` objects in and out, and optional callback arguments
//! for offset, container and position functions.

use std::collections::HashMap;
use std::rc::Rc;

use js_sys::{Array, Function, Object};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::helpers::{call_callback, deserialize, js_error, serialize};
use crate::config::PositionConfig;
use crate::error::PositionError;
use crate::host::{DomElement, LayoutElement, WindowViewport};
use crate::models::{AbsolutePosition, Offset, Placement, ReferenceRect};
use crate::position::{PlacementFormula, PositionEngine};

/// A placement formula implemented in JavaScript, as seen by the scorer
///
/// Called as `fn(referenceOffset, target, referenceRect)`. Scoring needs a
/// `{top, left}` back; the `find*` methods hand the raw result to the caller
/// instead (see [`Position::place`]).
struct JsPlacementFormula {
    placement: String,
    function: Function,
}

impl JsPlacementFormula {
    fn failure(&self, message: impl Into<String>) -> PositionError {
        PositionError::Formula {
            placement: self.placement.clone(),
            message: message.into(),
        }
    }
}

impl PlacementFormula<DomElement> for JsPlacementFormula {
    fn place(
        &self,
        offset: Offset,
        target: &DomElement,
        rect: ReferenceRect,
    ) -> Result<AbsolutePosition, PositionError> {
        let offset = serde_wasm_bindgen::to_value(&offset).map_err(|e| self.failure(e.to_string()))?;
        let rect = serde_wasm_bindgen::to_value(&rect).map_err(|e| self.failure(e.to_string()))?;

        let result = self
            .function
            .call3(&JsValue::NULL, &offset, target.element(), &rect)
            .map_err(|e| self.failure(format!("{:?}", e)))?;

        serde_wasm_bindgen::from_value(result).map_err(|e| self.failure(e.to_string()))
    }
}

/// Read `{name: function}` overrides from a JS object
fn parse_overrides(overrides: JsValue) -> Result<Vec<JsPlacementFormula>, JsValue> {
    if overrides.is_undefined() || overrides.is_null() {
        return Ok(Vec::new());
    }
    let object: Object = overrides
        .dyn_into()
        .map_err(|_| js_error("Placement overrides must be an object"))?;

    let mut parsed = Vec::new();
    for entry in Object::entries(&object).iter() {
        let pair: Array = entry.unchecked_into();
        let placement = pair
            .get(0)
            .as_string()
            .ok_or_else(|| js_error("Placement names must be strings"))?;
        let function: Function = pair
            .get(1)
            .dyn_into()
            .map_err(|_| js_error(format!("Placement '{}' must be a function", placement)))?;

        parsed.push(JsPlacementFormula { placement, function });
    }
    Ok(parsed)
}

thread_local! {
    static DEFAULT_ENGINE: Rc<PositionEngine<DomElement>> = Rc::new(
        PositionEngine::new().with_viewport(Rc::new(WindowViewport::new())),
    );
    static NO_OVERRIDES: Rc<HashMap<String, Function>> = Rc::new(HashMap::new());
}

/// Positions elements relative to other elements or to points
#[wasm_bindgen]
pub struct Position {
    engine: Rc<PositionEngine<DomElement>>,
    js_overrides: Rc<HashMap<String, Function>>,
}

#[wasm_bindgen]
impl Position {
    /// Create a position helper
    ///
    /// `overrides` maps placement names to `fn(offset, target, rect)`;
    /// they are merged over the built-in placements. Whatever an override
    /// returns comes back from the `find*` methods untouched. `config` is an
    /// optional `{marginCorrection, containerAxes}` object.
    #[wasm_bindgen(constructor)]
    pub fn new(overrides: JsValue, config: JsValue) -> Result<Position, JsValue> {
        let overrides = parse_overrides(overrides)?;
        let config = PositionConfig::from_js(config).map_err(|e| js_error(e.to_string()))?;

        let js_overrides: HashMap<String, Function> = overrides
            .iter()
            .map(|formula| (formula.placement.clone(), formula.function.clone()))
            .collect();
        let formulas = overrides.into_iter().map(|formula| {
            let placement = formula.placement.clone();
            (placement, Rc::new(formula) as Rc<dyn PlacementFormula<DomElement>>)
        });

        let engine = PositionEngine::with_overrides(formulas)
            .with_config(config)
            .with_viewport(Rc::new(WindowViewport::new()));

        Ok(Position {
            engine: Rc::new(engine),
            js_overrides: Rc::new(js_overrides),
        })
    }

    #[wasm_bindgen(js_name = getRelativeOffset)]
    pub fn get_relative_offset(&self, target: Element) -> Result<JsValue, JsValue> {
        let target = DomElement::from_element(target);
        serialize(&self.engine.relative_offset(&target), "Failed to serialize offset")
    }

    #[wasm_bindgen(js_name = getAbsoluteOffset)]
    pub fn get_absolute_offset(&self, target: Element) -> Result<JsValue, JsValue> {
        let target = DomElement::from_element(target);
        serialize(&self.engine.absolute_offset(&target), "Failed to serialize offset")
    }

    /// Position relative to the nearest positioned ancestor of `reference`
    #[wasm_bindgen(js_name = findRelative)]
    pub fn find_relative(
        &self,
        reference: Element,
        target: Element,
        placement: &str,
    ) -> Result<JsValue, JsValue> {
        let reference = DomElement::from_element(reference);
        let target = DomElement::from_element(target);
        let offset = self.engine.relative_offset(&reference);
        self.place(offset, reference.bounding_rect().dimensions(), &target, placement)
    }

    /// Position in document coordinates
    #[wasm_bindgen(js_name = findAbsolute)]
    pub fn find_absolute(
        &self,
        reference: Element,
        target: Element,
        placement: &str,
    ) -> Result<JsValue, JsValue> {
        let reference = DomElement::from_element(reference);
        let target = DomElement::from_element(target);
        let offset = self.engine.absolute_offset(&reference);
        self.place(offset, reference.bounding_rect().dimensions(), &target, placement)
    }

    /// Position `target` against `reference`
    ///
    /// `offsetFunction(reference)` replaces the default absolute offset
    /// resolver when given.
    #[wasm_bindgen(js_name = findPosition)]
    pub fn find_position(
        &self,
        reference: Element,
        target: Element,
        placement: &str,
        offset_function: Option<Function>,
    ) -> Result<JsValue, JsValue> {
        let reference = DomElement::from_element(reference);
        let target = DomElement::from_element(target);

        let offset = match offset_function {
            Some(function) => {
                let reference_js: &JsValue = reference.element().as_ref();
                call_callback(&function, &[reference_js], "offsetFunction")?
            }
            None => self.engine.absolute_offset(&reference),
        };
        self.place(offset, reference.bounding_rect().dimensions(), &target, placement)
    }

    /// Position `target` against the point `{top, left}`
    #[wasm_bindgen(js_name = findPositionAt)]
    pub fn find_position_at(
        &self,
        point: JsValue,
        target: Element,
        placement: &str,
    ) -> Result<JsValue, JsValue> {
        let point: Offset = deserialize(point, "Failed to deserialize point")?;
        let target = DomElement::from_element(target);
        self.place(point, ReferenceRect::ZERO, &target, placement)
    }

    /// `{top, bottom, left, right}` of `target` placed at `position`
    #[wasm_bindgen(js_name = getPlacementBox)]
    pub fn get_placement_box(&self, target: Element, position: JsValue) -> Result<JsValue, JsValue> {
        let target = DomElement::from_element(target);
        let position: AbsolutePosition = deserialize(position, "Failed to deserialize position")?;
        serialize(
            &self.engine.placement_box(&target, position),
            "Failed to serialize placement box",
        )
    }

    /// New position shifted by `top`/`left` (default 0)
    #[wasm_bindgen(js_name = addOffset)]
    pub fn add_offset(
        &self,
        position: JsValue,
        top: Option<f64>,
        left: Option<f64>,
    ) -> Result<JsValue, JsValue> {
        let position: AbsolutePosition = deserialize(position, "Failed to deserialize position")?;
        let shifted = self
            .engine
            .add_offset(position, top.unwrap_or(0.0), left.unwrap_or(0.0));
        serialize(&shifted, "Failed to serialize position")
    }

    /// Write `position` into the element's `top`/`left` style
    #[wasm_bindgen(js_name = setElement)]
    pub fn set_element(&self, element: Element, position: JsValue) -> Result<(), JsValue> {
        let element = DomElement::from_element(element);
        let position: AbsolutePosition = deserialize(position, "Failed to deserialize position")?;
        self.engine.set_element(&element, position);
        Ok(())
    }

    /// Pick the placement that leaves most of `target` visible
    ///
    /// `containerFunction()` returns `{width, height}`;
    /// `positionFunction(reference, target, placement)` returns `{top, left}`.
    /// Returns `undefined` for an empty candidate list.
    #[wasm_bindgen(js_name = findBestPlacement)]
    pub fn find_best_placement(
        &self,
        reference: Element,
        target: Element,
        placements: Vec<String>,
        container_function: Option<Function>,
        position_function: Option<Function>,
    ) -> Result<Option<String>, JsValue> {
        let reference_js: JsValue = reference.clone().into();
        let target_js: JsValue = target.clone().into();
        let reference = DomElement::from_element(reference);
        let target = DomElement::from_element(target);
        let container = self.container(container_function)?;

        let best = match position_function {
            Some(function) => {
                let mut positions = HashMap::new();
                for placement in &placements {
                    let pos: AbsolutePosition = call_callback(
                        &function,
                        &[&reference_js, &target_js, &JsValue::from_str(placement)],
                        "positionFunction",
                    )?;
                    positions.insert(placement.clone(), pos);
                }
                self.engine.find_best_placement_with(
                    &reference,
                    &target,
                    &placements,
                    &container,
                    |_, _, placement| positions.get(placement).copied().unwrap_or_default(),
                )
            }
            None => self.engine.find_best_placement_with(
                &reference,
                &target,
                &placements,
                &container,
                |r, t, p| self.engine.find_position(r, t, p),
            ),
        };
        Ok(best)
    }

    /// Pick the best placement around the point `{top, left}`
    #[wasm_bindgen(js_name = findBestPlacementAt)]
    pub fn find_best_placement_at(
        &self,
        point: JsValue,
        target: Element,
        placements: Vec<String>,
        container_function: Option<Function>,
    ) -> Result<Option<String>, JsValue> {
        let point: Offset = deserialize(point, "Failed to deserialize point")?;
        let target = DomElement::from_element(target);
        let container = self.container(container_function)?;

        Ok(self
            .engine
            .find_best_placement_at_with(point, &target, &placements, &container))
    }
}

impl Position {
    /// Run one placement: JS overrides return their result as-is, everything
    /// else goes through the engine
    fn place(
        &self,
        offset: Offset,
        rect: ReferenceRect,
        target: &DomElement,
        placement: &str,
    ) -> Result<JsValue, JsValue> {
        let Some(function) = self.js_overrides.get(placement) else {
            let pos = self.engine.calculate_position(offset, rect, target, placement);
            return serialize(&pos, "Failed to serialize position");
        };

        let offset = serialize(&offset, "Failed to serialize offset")?;
        let rect = serialize(&rect, "Failed to serialize reference rect")?;
        match function.call3(&JsValue::NULL, &offset, target.element(), &rect) {
            Ok(result) => Ok(result),
            Err(e) => {
                let error = PositionError::Formula {
                    placement: placement.to_string(),
                    message: format!("{:?}", e),
                };
                log::error!("{}, defaulting to 0,0", error);
                serialize(&AbsolutePosition::ZERO, "Failed to serialize position")
            }
        }
    }

    /// Read the container once per call: from the callback, or the viewport
    fn container(&self, container_function: Option<Function>) -> Result<ReferenceRect, JsValue> {
        match container_function {
            Some(function) => call_callback(&function, &[], "containerFunction"),
            None => Ok(self.engine.default_container()),
        }
    }
}

/// The shared default instance (built-in placements, default config)
#[wasm_bindgen(js_name = defaultPosition)]
pub fn default_position() -> Position {
    Position {
        engine: DEFAULT_ENGINE.with(Rc::clone),
        js_overrides: NO_OVERRIDES.with(Rc::clone),
    }
}

/// Names of the built-in placements
#[wasm_bindgen(js_name = builtinPlacements)]
pub fn builtin_placements() -> Vec<String> {
    Placement::ALL.iter().map(|p| p.as_str().to_string()).collect()
}
