//! Live browser binding
//!
//! Implements the host traits over `web-sys` so the engine can measure and
//! move real DOM elements.

use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, SvgElement, Window};

use super::{ComputedBox, LayoutElement, PositionMode, Viewport};
use crate::models::ClientRect;

/// A DOM element as seen by the engine
///
/// HTML elements report their offset metrics. Anything else (SVG content)
/// has none, so it is measured from its bounding rect and borrows the offset
/// parent of its nearest HTML ancestor.
#[derive(Clone, Debug, PartialEq)]
pub struct DomElement(Element);

impl DomElement {
    pub fn from_element(element: Element) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }

    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }

    fn style(&self) -> Option<CssStyleDeclaration> {
        self.html()
            .map(HtmlElement::style)
            .or_else(|| self.0.dyn_ref::<SvgElement>().map(SvgElement::style))
    }
}

fn to_client_rect(element: &Element) -> ClientRect {
    let rect = element.get_bounding_client_rect();
    ClientRect::new(rect.top(), rect.left(), rect.width(), rect.height())
}

fn is_positioned(element: &Element) -> bool {
    !DomElement(element.clone()).computed_box().position.is_static()
}

/// The element `offsetParent` would name if `element` were HTML: its nearest
/// HTML ancestor when that one is positioned or is the body, otherwise that
/// ancestor's own offset parent
fn borrowed_offset_parent(element: &Element) -> Option<Element> {
    let mut ancestor = element.parent_element();
    while let Some(node) = ancestor {
        if let Some(html) = node.dyn_ref::<HtmlElement>() {
            if node.tag_name().eq_ignore_ascii_case("body") || is_positioned(&node) {
                return Some(node.clone());
            }
            return html.offset_parent();
        }
        ancestor = node.parent_element();
    }
    None
}

impl LayoutElement for DomElement {
    fn offset_top(&self) -> f64 {
        self.html().map_or(0.0, |e| f64::from(e.offset_top()))
    }

    fn offset_left(&self) -> f64 {
        self.html().map_or(0.0, |e| f64::from(e.offset_left()))
    }

    fn offset_width(&self) -> f64 {
        match self.html() {
            Some(e) => f64::from(e.offset_width()),
            None => self.bounding_rect().width,
        }
    }

    fn offset_height(&self) -> f64 {
        match self.html() {
            Some(e) => f64::from(e.offset_height()),
            None => self.bounding_rect().height,
        }
    }

    fn offset_parent(&self) -> Option<Self> {
        match self.html() {
            Some(e) => e.offset_parent(),
            None => borrowed_offset_parent(&self.0),
        }
        .map(Self)
    }

    fn computed_box(&self) -> ComputedBox {
        let style = web_sys::window()
            .and_then(|window| window.get_computed_style(&self.0).ok().flatten());

        match style {
            Some(style) => {
                let read = |name: &str| style.get_property_value(name).unwrap_or_default();
                ComputedBox {
                    position: PositionMode::from_css(&read("position")),
                    margin_top: read("margin-top"),
                    margin_left: read("margin-left"),
                }
            }
            None => ComputedBox::default(),
        }
    }

    fn bounding_rect(&self) -> ClientRect {
        to_client_rect(&self.0)
    }

    fn body_rect(&self) -> ClientRect {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .map(|body| to_client_rect(&body))
            .unwrap_or_default()
    }

    fn set_offset(&self, top: f64, left: f64) {
        let Some(style) = self.style() else {
            log::error!("Element <{}> has no inline style", self.0.tag_name());
            return;
        };
        for (property, value) in [("top", top), ("left", left)] {
            if let Err(e) = style.set_property(property, &format!("{}px", value)) {
                log::error!("Failed to set {} on element: {:?}", property, e);
            }
        }
    }
}

/// The browser window; reads as zero when no window exists
#[derive(Clone, Debug)]
pub struct WindowViewport {
    window: Option<Window>,
}

impl WindowViewport {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }

    fn read(&self, f: impl Fn(&Window) -> Option<f64>) -> f64 {
        self.window.as_ref().and_then(f).unwrap_or(0.0)
    }
}

impl Default for WindowViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport for WindowViewport {
    fn inner_width(&self) -> f64 {
        self.read(|w| w.inner_width().ok().and_then(|v| v.as_f64()))
    }

    fn inner_height(&self) -> f64 {
        self.read(|w| w.inner_height().ok().and_then(|v| v.as_f64()))
    }

    fn scroll_x(&self) -> f64 {
        self.read(|w| w.scroll_x().ok())
    }

    fn scroll_y(&self) -> f64 {
        self.read(|w| w.scroll_y().ok())
    }
}
