// Shared fixtures: a page with an 8px body margin, a 100x100 reference in
// normal flow and a 100x50 absolutely positioned target.

#![allow(dead_code)]

use position_wasm::host::{MeasuredElement, PositionMode};
use position_wasm::ClientRect;

pub const BODY: ClientRect = ClientRect {
    top: 8.0,
    left: 8.0,
    width: 784.0,
    height: 600.0,
};

pub struct Page {
    pub body: MeasuredElement,
    pub reference: MeasuredElement,
    pub target: MeasuredElement,
}

pub fn body() -> MeasuredElement {
    MeasuredElement::builder()
        .margins("8px", "8px")
        .rect(BODY)
        .body(BODY)
        .build()
}

pub fn page() -> Page {
    let body = body();
    let reference = MeasuredElement::builder()
        .offset(8.0, 8.0)
        .size(100.0, 100.0)
        .offset_parent(&body)
        .rect(ClientRect::new(8.0, 8.0, 100.0, 100.0))
        .build();
    let target = target_in(&body);

    Page {
        body,
        reference,
        target,
    }
}

pub fn target_in(parent: &MeasuredElement) -> MeasuredElement {
    MeasuredElement::builder()
        .size(100.0, 50.0)
        .position(PositionMode::Absolute)
        .offset_parent(parent)
        .rect(ClientRect::new(108.0, 8.0, 100.0, 50.0))
        .build()
}

/// A reference of the given size at a fixed viewport position on a page
/// without body margins
pub fn reference_at(top: f64, left: f64, width: f64, height: f64) -> (MeasuredElement, MeasuredElement) {
    let origin = ClientRect::new(0.0, 0.0, 800.0, 600.0);
    let body = MeasuredElement::builder().rect(origin).body(origin).build();
    let reference = MeasuredElement::builder()
        .offset(top, left)
        .size(width, height)
        .offset_parent(&body)
        .rect(ClientRect::new(top, left, width, height))
        .build();
    let target = MeasuredElement::builder()
        .size(100.0, 50.0)
        .position(PositionMode::Absolute)
        .offset_parent(&body)
        .build();

    (reference, target)
}
