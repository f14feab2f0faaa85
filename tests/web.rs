//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use page_effects::{start_contact_animation, start_hero_slider, ParticleConfig, Surface};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn append(parent: &Element, tag: &str, id: Option<&str>, class: &str) -> Element {
    let element = document().create_element(tag).unwrap();
    if let Some(id) = id {
        element.set_id(id);
    }
    element.set_class_name(class);
    parent.append_child(&element).unwrap();
    element
}

fn body() -> Element {
    document().body().unwrap().unchecked_into::<Element>()
}

fn dispatch(target: &Element, event: &str) {
    target.dispatch_event(&MouseEvent::new(event).unwrap()).unwrap();
}

#[allow(deprecated)]
fn dispatch_move(target: &Element, client_x: i32, client_y: i32) {
    let mut init = MouseEventInit::new();
    init.client_x(client_x);
    init.client_y(client_y);
    let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn missing_canvas_is_silently_skipped() {
    let config = r#"{"canvas_id": "no-such-canvas"}"#.to_string();
    let animation = start_contact_animation(Some(config)).unwrap();
    assert!(animation.is_none());
}

#[wasm_bindgen_test]
fn non_canvas_element_is_rejected() {
    append(&body(), "div", Some("not-a-canvas"), "");
    let config = r#"{"canvas_id": "not-a-canvas"}"#.to_string();
    assert!(start_contact_animation(Some(config)).is_err());
}

#[wasm_bindgen_test]
fn animation_starts_and_stops() {
    let canvas = append(&body(), "canvas", Some("contact-test"), "");
    let canvas: HtmlElement = canvas.unchecked_into();
    let config = r#"{"canvas_id": "contact-test"}"#.to_string();
    let animation = start_contact_animation(Some(config)).unwrap().unwrap();

    let expected = Surface::from_layout(canvas.offset_width(), canvas.offset_height())
        .particle_count(
            ParticleConfig::default().area_per_particle,
            ParticleConfig::default().max_particles,
        );
    assert_eq!(animation.particle_count(), expected);
    assert!(animation.is_active());

    animation.stop().unwrap();
    assert!(!animation.is_active());
    animation.resume().unwrap();
    assert!(animation.is_active());
    animation.stop().unwrap();
}

#[wasm_bindgen_test]
fn slider_rotates_through_slides() {
    let hero = append(&body(), "section", None, "hero-test");
    let slides: Vec<Element> = (0..3)
        .map(|_| append(&hero, "div", None, "slide-test"))
        .collect();
    let config = r#"{"slide_selector": ".slide-test", "hero_selector": ".hero-test"}"#;
    let slider = start_hero_slider(Some(config.to_string())).unwrap().unwrap();

    assert_eq!(slider.slide_count(), 3);
    assert!(slider.is_running());
    assert!(slides[0].class_list().contains("active"));

    slider.advance().unwrap();
    assert_eq!(slider.current_index(), 1);
    assert!(!slides[0].class_list().contains("active"));
    assert!(slides[1].class_list().contains("active"));

    slider.advance().unwrap();
    slider.advance().unwrap();
    assert_eq!(slider.current_index(), 0);

    slider.stop();
    assert!(!slider.is_running());
    slider.start().unwrap();
    assert!(slider.is_running());
    slider.stop();
}

#[wasm_bindgen_test]
fn slider_without_slides_is_a_no_op() {
    let config = r#"{"slide_selector": ".nothing-here"}"#.to_string();
    assert!(start_hero_slider(Some(config)).unwrap().is_none());
}

#[wasm_bindgen_test]
fn canvas_hover_toggles_pointer() {
    let canvas = append(&body(), "canvas", Some("hover-test"), "");
    let config = r#"{"canvas_id": "hover-test"}"#.to_string();
    let animation = start_contact_animation(Some(config)).unwrap().unwrap();
    assert!(!animation.pointer().hovering);

    dispatch(&canvas, "mouseenter");
    assert!(animation.pointer().hovering);

    dispatch(&canvas, "mouseleave");
    assert!(!animation.pointer().hovering);
    animation.stop().unwrap();
}

#[wasm_bindgen_test]
fn mouse_move_is_translated_to_canvas_space() {
    let canvas = append(&body(), "canvas", Some("move-test"), "");
    let config = r#"{"canvas_id": "move-test"}"#.to_string();
    let animation = start_contact_animation(Some(config)).unwrap().unwrap();

    dispatch_move(&canvas, 40, 30);
    let rect = canvas.get_bounding_client_rect();
    let pos = animation.pointer().pos;
    assert!((pos[0] - (40.0 - rect.left())).abs() < 1e-9);
    assert!((pos[1] - (30.0 - rect.top())).abs() < 1e-9);
    animation.stop().unwrap();
}

#[wasm_bindgen_test]
fn animation_outlives_its_handle() {
    let canvas = append(&body(), "canvas", Some("lifetime-test"), "");
    let config = r#"{"canvas_id": "lifetime-test"}"#.to_string();
    let animation = start_contact_animation(Some(config)).unwrap().unwrap();
    let kept = animation.clone();
    drop(animation);

    assert!(kept.is_active());
    dispatch(&canvas, "mouseenter");
    assert!(kept.pointer().hovering);
    kept.stop().unwrap();
    assert!(!kept.is_active());
}

#[wasm_bindgen_test]
fn hero_hover_pauses_and_resumes_slider() {
    let hero = append(&body(), "section", None, "hero-hover");
    for _ in 0..3 {
        append(&hero, "div", None, "slide-hover");
    }
    let config = r#"{"slide_selector": ".slide-hover", "hero_selector": ".hero-hover"}"#;
    let slider = start_hero_slider(Some(config.to_string())).unwrap().unwrap();
    assert!(slider.is_running());

    dispatch(&hero, "mouseenter");
    assert!(!slider.is_running());
    assert_eq!(slider.current_index(), 0);

    dispatch(&hero, "mouseleave");
    assert!(slider.is_running());
    slider.stop();
}

#[wasm_bindgen_test]
fn slider_outlives_its_handle() {
    let hero = append(&body(), "section", None, "hero-lifetime");
    for _ in 0..2 {
        append(&hero, "div", None, "slide-lifetime");
    }
    let config = r#"{"slide_selector": ".slide-lifetime", "hero_selector": ".hero-lifetime"}"#;
    let slider = start_hero_slider(Some(config.to_string())).unwrap().unwrap();
    let kept = slider.clone();
    drop(slider);

    assert!(kept.is_running());
    dispatch(&hero, "mouseenter");
    assert!(!kept.is_running());
    dispatch(&hero, "mouseleave");
    assert!(kept.is_running());
    kept.stop();
}
