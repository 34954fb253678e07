//! WASM build test
//!
//! Checks that the exported API works inside a browser.

#![cfg(target_arch = "wasm32")]

use scale_tool_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_build_scale() {
    let result = build_scale("C", "major");
    assert!(result.is_ok());
}

#[wasm_bindgen_test]
fn test_build_scale_rejects_unknown_type() {
    let result = build_scale("C", "garbage");
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_list_scale_types() {
    assert_eq!(list_scale_types().length(), 16);
    assert_eq!(list_root_notes().length(), 21);
}

#[wasm_bindgen_test]
fn test_is_valid_note() {
    assert!(is_valid_note("Eb"));
    assert!(!is_valid_note("H"));
}

#[wasm_bindgen_test]
fn test_render_fretboard_default_config() {
    let text = render_fretboard("A", "minor", JsValue::UNDEFINED).unwrap();
    assert!(text.starts_with("     E   A   D   G   B   E"));
}
