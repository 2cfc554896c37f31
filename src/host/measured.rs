//! In-memory elements built from measurements
//!
//! A `MeasuredElement` answers the same questions a live DOM element does,
//! from numbers captured up front. It lets the engine run outside a browser
//! (native tests, precomputed layouts) with the same code paths.

use std::cell::Cell;
use std::rc::Rc;

use super::{ComputedBox, LayoutElement, PositionMode, Viewport};
use crate::models::{AbsolutePosition, ClientRect, Offset};

struct MeasuredNode {
    offset: Offset,
    width: f64,
    height: f64,
    computed: ComputedBox,
    offset_parent: Option<MeasuredElement>,
    body: ClientRect,
    rect: Cell<ClientRect>,
    style: Cell<Option<AbsolutePosition>>,
}

/// Shared handle to a measured element; clones point at the same node
#[derive(Clone)]
pub struct MeasuredElement(Rc<MeasuredNode>);

impl MeasuredElement {
    pub fn builder() -> MeasuredElementBuilder {
        MeasuredElementBuilder::default()
    }

    /// Last `top`/`left` written through [`LayoutElement::set_offset`]
    pub fn style_offset(&self) -> Option<AbsolutePosition> {
        self.0.style.get()
    }

    /// Origin `top`/`left` styles are measured from: the nearest non-static
    /// offset parent, or the document origin when there is none
    fn containing_origin(&self) -> Offset {
        let mut parent = self.0.offset_parent.clone();
        while let Some(node) = parent {
            if !node.0.computed.position.is_static() {
                return node.bounding_rect().origin();
            }
            parent = node.0.offset_parent.clone();
        }
        Offset::ZERO
    }
}

impl std::fmt::Debug for MeasuredElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasuredElement")
            .field("offset", &self.0.offset)
            .field("width", &self.0.width)
            .field("height", &self.0.height)
            .field("position", &self.0.computed.position)
            .field("rect", &self.0.rect.get())
            .finish()
    }
}

impl LayoutElement for MeasuredElement {
    fn offset_top(&self) -> f64 {
        self.0.offset.top
    }

    fn offset_left(&self) -> f64 {
        self.0.offset.left
    }

    fn offset_width(&self) -> f64 {
        self.0.width
    }

    fn offset_height(&self) -> f64 {
        self.0.height
    }

    fn offset_parent(&self) -> Option<Self> {
        self.0.offset_parent.clone()
    }

    fn computed_box(&self) -> ComputedBox {
        self.0.computed.clone()
    }

    fn bounding_rect(&self) -> ClientRect {
        self.0.rect.get()
    }

    fn body_rect(&self) -> ClientRect {
        self.0.body
    }

    fn set_offset(&self, top: f64, left: f64) {
        self.0.style.set(Some(AbsolutePosition::new(top, left)));

        // Only out-of-flow boxes move with their offsets
        if matches!(
            self.0.computed.position,
            PositionMode::Absolute | PositionMode::Fixed
        ) {
            let origin = self.containing_origin();
            let mut rect = self.0.rect.get();
            rect.top = origin.top + top;
            rect.left = origin.left + left;
            self.0.rect.set(rect);
        }
    }
}

/// Builder for [`MeasuredElement`]
#[derive(Default)]
pub struct MeasuredElementBuilder {
    offset: Offset,
    width: f64,
    height: f64,
    computed: ComputedBox,
    offset_parent: Option<MeasuredElement>,
    body: Option<ClientRect>,
    rect: Option<ClientRect>,
}

impl MeasuredElementBuilder {
    /// `offsetTop`/`offsetLeft`
    pub fn offset(mut self, top: f64, left: f64) -> Self {
        self.offset = Offset::new(top, left);
        self
    }

    /// `offsetWidth`/`offsetHeight`
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn position(mut self, mode: PositionMode) -> Self {
        self.computed.position = mode;
        self
    }

    /// Computed margins as CSS strings; pass `""` for "not declared"
    pub fn margins(mut self, top: &str, left: &str) -> Self {
        self.computed.margin_top = top.to_string();
        self.computed.margin_left = left.to_string();
        self
    }

    pub fn offset_parent(mut self, parent: &MeasuredElement) -> Self {
        self.offset_parent = Some(parent.clone());
        self
    }

    /// Body bounding box; inherited from the offset parent when unset
    pub fn body(mut self, rect: ClientRect) -> Self {
        self.body = Some(rect);
        self
    }

    /// Viewport bounding box; derived from the offset parent's box and the
    /// element offset when unset
    pub fn rect(mut self, rect: ClientRect) -> Self {
        self.rect = Some(rect);
        self
    }

    pub fn build(self) -> MeasuredElement {
        let parent_rect = self.offset_parent.as_ref().map(|p| p.bounding_rect());
        let rect = self.rect.unwrap_or_else(|| {
            let origin = parent_rect.map(|r| r.origin()).unwrap_or(Offset::ZERO);
            ClientRect::new(
                origin.top + self.offset.top,
                origin.left + self.offset.left,
                self.width,
                self.height,
            )
        });
        let body = self
            .body
            .or_else(|| self.offset_parent.as_ref().map(|p| p.body_rect()))
            .unwrap_or_default();

        MeasuredElement(Rc::new(MeasuredNode {
            offset: self.offset,
            width: self.width,
            height: self.height,
            computed: self.computed,
            offset_parent: self.offset_parent,
            body,
            rect: Cell::new(rect),
            style: Cell::new(None),
        }))
    }
}

/// Fixed window size and scroll position
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StaticViewport {
    pub inner_width: f64,
    pub inner_height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl StaticViewport {
    pub fn new(inner_width: f64, inner_height: f64) -> Self {
        Self {
            inner_width,
            inner_height,
            ..Self::default()
        }
    }

    pub fn scrolled(mut self, scroll_x: f64, scroll_y: f64) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }
}

impl Viewport for StaticViewport {
    fn inner_width(&self) -> f64 {
        self.inner_width
    }

    fn inner_height(&self) -> f64 {
        self.inner_height
    }

    fn scroll_x(&self) -> f64 {
        self.scroll_x
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
}
