//! Browser tests for the JS-facing `Position` class
//!
//! Run with `wasm-pack test --headless --chrome` (or `--firefox`).

#![cfg(target_arch = "wasm32")]

use position_wasm::api::{builtin_placements, default_position, Position};
use position_wasm::host::WindowViewport;
use position_wasm::Viewport;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

struct Fixture {
    container: HtmlElement,
    reference: Element,
    target: Element,
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.container.remove();
    }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn styled(tag: &str, styles: &[(&str, &str)]) -> HtmlElement {
    let element: HtmlElement = document().create_element(tag).unwrap().unchecked_into();
    let style = element.style();
    style.set_property("box-sizing", "border-box").unwrap();
    for (name, value) in styles {
        style.set_property(name, value).unwrap();
    }
    element
}

fn fixture() -> Fixture {
    let container = styled("div", &[]);
    let reference = styled(
        "div",
        &[("width", "100px"), ("height", "100px"), ("border", "1px solid blue")],
    );
    reference.set_text_content(Some("reference element"));
    let target = styled(
        "div",
        &[
            ("width", "100px"),
            ("height", "50px"),
            ("border", "1px solid gray"),
            ("position", "absolute"),
        ],
    );
    target.set_text_content(Some("target element"));

    container.append_child(&reference).unwrap();
    container.append_child(&target).unwrap();
    document().body().unwrap().append_child(&container).unwrap();

    Fixture {
        container,
        reference: reference.unchecked_into(),
        target: target.unchecked_into(),
    }
}

fn point(top: f64, left: f64) -> JsValue {
    serde_wasm_bindgen::to_value(&position_wasm::Offset::new(top, left)).unwrap()
}

fn place(fixture: &Fixture, placement: &str) {
    let position = default_position();
    let pos = position
        .find_position(fixture.reference.clone(), fixture.target.clone(), placement, None)
        .unwrap();
    position.set_element(fixture.target.clone(), pos).unwrap();
}

#[wasm_bindgen_test]
fn test_builtin_placements_listed() {
    assert_eq!(builtin_placements(), vec!["left", "right", "top", "bottom"]);
}

#[wasm_bindgen_test]
fn test_position_bottom() {
    let fixture = fixture();
    place(&fixture, "bottom");
    assert_eq!(
        fixture.reference.get_bounding_client_rect().bottom(),
        fixture.target.get_bounding_client_rect().top()
    );
}

#[wasm_bindgen_test]
fn test_position_left() {
    let fixture = fixture();
    place(&fixture, "left");
    assert_eq!(
        fixture.reference.get_bounding_client_rect().left(),
        fixture.target.get_bounding_client_rect().right()
    );
}

#[wasm_bindgen_test]
fn test_position_right() {
    let fixture = fixture();
    place(&fixture, "right");
    assert_eq!(
        fixture.reference.get_bounding_client_rect().right(),
        fixture.target.get_bounding_client_rect().left()
    );
}

#[wasm_bindgen_test]
fn test_position_top() {
    let fixture = fixture();
    place(&fixture, "top");
    assert_eq!(
        fixture.reference.get_bounding_client_rect().top(),
        fixture.target.get_bounding_client_rect().bottom()
    );
}

#[wasm_bindgen_test]
fn test_custom_placement() {
    let fixture = fixture();
    let overrides = js_sys::Object::new();
    let custom = js_sys::Function::new_no_args("return { top: 42, left: 42 };");
    js_sys::Reflect::set(&overrides, &"custom".into(), &custom).unwrap();

    let instance = Position::new(overrides.into(), JsValue::UNDEFINED).unwrap();
    let pos = instance
        .find_position(fixture.reference.clone(), fixture.target.clone(), "custom", None)
        .unwrap();
    let pos: position_wasm::AbsolutePosition = serde_wasm_bindgen::from_value(pos).unwrap();

    assert_eq!(pos, position_wasm::AbsolutePosition::new(42.0, 42.0));
}

#[wasm_bindgen_test]
fn test_custom_placement_result_is_passed_through() {
    let fixture = fixture();
    let overrides = js_sys::Object::new();
    let custom = js_sys::Function::new_no_args("return { top: 7, note: 'kept' };");
    js_sys::Reflect::set(&overrides, &"custom".into(), &custom).unwrap();

    let instance = Position::new(overrides.into(), JsValue::UNDEFINED).unwrap();
    let pos = instance
        .find_position(fixture.reference.clone(), fixture.target.clone(), "custom", None)
        .unwrap();

    let get = |key: &str| js_sys::Reflect::get(&pos, &key.into()).unwrap();
    assert_eq!(get("top").as_f64(), Some(7.0));
    assert_eq!(get("note").as_string().as_deref(), Some("kept"));
    assert!(get("left").is_undefined());

    // Built-ins on the same instance still come back as {top, left}
    let bottom = instance
        .find_position(fixture.reference.clone(), fixture.target.clone(), "bottom", None)
        .unwrap();
    let bottom: position_wasm::AbsolutePosition = serde_wasm_bindgen::from_value(bottom).unwrap();
    assert!(bottom.top > 0.0);
}

#[wasm_bindgen_test]
fn test_position_below_svg_reference() {
    let fixture = fixture();
    let svg = document()
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
        .unwrap();
    svg.set_attribute("width", "40").unwrap();
    svg.set_attribute("height", "30").unwrap();
    svg.set_attribute("style", "display: block").unwrap();
    fixture
        .container
        .insert_before(&svg, Some(&fixture.target))
        .unwrap();

    let position = default_position();
    let pos = position
        .find_position(svg.clone(), fixture.target.clone(), "bottom", None)
        .unwrap();
    position.set_element(fixture.target.clone(), pos).unwrap();

    let reference = svg.get_bounding_client_rect();
    let target = fixture.target.get_bounding_client_rect();
    assert_eq!(reference.bottom(), target.top());
    assert_eq!(
        reference.left() + reference.width() / 2.0,
        target.left() + target.width() / 2.0
    );
}

#[wasm_bindgen_test]
fn test_default_window_viewport_reads_the_window() {
    let viewport = WindowViewport::default();
    let window = web_sys::window().unwrap();

    assert_eq!(
        viewport.inner_width(),
        window.inner_width().unwrap().as_f64().unwrap()
    );
    assert!(viewport.inner_height() > 0.0);
}

#[wasm_bindgen_test]
fn test_position_at_points() {
    let fixture = fixture();
    let position = default_position();

    let checks: [(&str, fn(&web_sys::DomRect) -> f64); 4] = [
        ("top", |r| r.bottom()),
        ("left", |r| r.right()),
        ("right", |r| r.left()),
        ("bottom", |r| r.top()),
    ];

    for (placement, edge) in checks {
        let pos = position
            .find_position_at(point(100.0, 100.0), fixture.target.clone(), placement)
            .unwrap();
        position.set_element(fixture.target.clone(), pos).unwrap();
        assert_eq!(edge(&fixture.target.get_bounding_client_rect()), 100.0, "{}", placement);
    }
}

#[wasm_bindgen_test]
fn test_unknown_placement_returns_zero() {
    let fixture = fixture();
    let pos = default_position()
        .find_position(fixture.reference.clone(), fixture.target.clone(), "nowhere", None)
        .unwrap();
    let pos: position_wasm::AbsolutePosition = serde_wasm_bindgen::from_value(pos).unwrap();

    assert_eq!(pos, position_wasm::AbsolutePosition::ZERO);
}

#[wasm_bindgen_test]
fn test_best_placement_with_container_function() {
    let fixture = fixture();
    let container = js_sys::Function::new_no_args("return { width: 10000, height: 10000 };");

    let best = default_position()
        .find_best_placement(
            fixture.reference.clone(),
            fixture.target.clone(),
            vec!["bottom".to_string(), "right".to_string()],
            Some(container),
            None,
        )
        .unwrap();

    assert_eq!(best.as_deref(), Some("bottom"));
}
