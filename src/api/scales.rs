//! WASM API for scale spelling and fretboard rendering
//!
//! Each `#[wasm_bindgen]` export is a thin wrapper that logs the call and
//! converts errors to `JsValue`. The work happens in the plain functions
//! below them, which native tests call directly.

use wasm_bindgen::prelude::*;

use super::helpers::{
    describe_error, describe_fretboard_error, deserialize, serialize, validation_error,
};
use super::types::{ChromaticResult, ScaleResult};
use crate::models::{valid_roots, ChromaticScale, DiatonicScale, Note, ScaleType};
use crate::renderers::{Fretboard, FretboardConfig};
use crate::{wasm_error, wasm_info};

// ============================================================================
// Engine calls
// ============================================================================

pub fn scale_result(root: &str, scale_type: &str) -> Result<ScaleResult, String> {
    let scale = DiatonicScale::new(root, scale_type).map_err(|e| describe_error(&e))?;
    Ok(ScaleResult::from(&scale))
}

pub fn chromatic_result(root: &str) -> Result<ChromaticResult, String> {
    let note: Note = root.parse().map_err(|e| describe_error(&e))?;
    Ok(ChromaticResult::new(note, &ChromaticScale::from_note(note)))
}

pub fn scale_json(root: &str, scale_type: &str) -> Result<String, String> {
    let result = scale_result(root, scale_type)?;
    serde_json::to_string_pretty(&result).map_err(|e| format!("Failed to encode scale: {}", e))
}

pub fn fretboard_text(
    root: &str,
    scale_type: &str,
    config: &FretboardConfig,
) -> Result<String, String> {
    let scale = DiatonicScale::new(root, scale_type).map_err(|e| describe_error(&e))?;
    let fretboard = Fretboard::from_config(config).map_err(|e| describe_fretboard_error(&e))?;
    Ok(fretboard.render(&scale))
}

// ============================================================================
// JavaScript exports
// ============================================================================

/// Spell a scale
///
/// # Returns
/// `{ root, scale_type, notes }` with notes as display strings
#[wasm_bindgen(js_name = buildScale)]
pub fn build_scale(root: &str, scale_type: &str) -> Result<JsValue, JsValue> {
    wasm_info!("buildScale called: root={}, scale_type={}", root, scale_type);

    let result = scale_result(root, scale_type).map_err(validation_error)?;
    serialize(&result, "Failed to serialize scale")
}

/// The twelve-note cycle starting at `root`
#[wasm_bindgen(js_name = chromaticScale)]
pub fn chromatic_scale(root: &str) -> Result<JsValue, JsValue> {
    wasm_info!("chromaticScale called: root={}", root);

    let result = chromatic_result(root).map_err(validation_error)?;
    serialize(&result, "Failed to serialize chromatic scale")
}

/// Names accepted by `buildScale`
#[wasm_bindgen(js_name = listScaleTypes)]
pub fn list_scale_types() -> js_sys::Array {
    ScaleType::names().into_iter().map(JsValue::from_str).collect()
}

/// Root spellings offered in selectors and help text
#[wasm_bindgen(js_name = listRootNotes)]
pub fn list_root_notes() -> js_sys::Array {
    valid_roots().iter().map(|root| JsValue::from_str(root)).collect()
}

#[wasm_bindgen(js_name = isValidNote)]
pub fn is_valid_note(text: &str) -> bool {
    Note::is_valid(text)
}

/// Spelled scale as pretty-printed JSON
#[wasm_bindgen(js_name = exportScaleJson)]
pub fn export_scale_json(root: &str, scale_type: &str) -> Result<String, JsValue> {
    wasm_info!("exportScaleJson called: root={}, scale_type={}", root, scale_type);

    scale_json(root, scale_type).map_err(validation_error)
}

/// Fretboard diagram for a scale
///
/// # Parameters
/// - `config`: `{ tuning, frets, blank }`, any field optional; `undefined`
///   or `null` uses a 12-fret standard-tuned guitar
#[wasm_bindgen(js_name = renderFretboard)]
pub fn render_fretboard(root: &str, scale_type: &str, config: JsValue) -> Result<String, JsValue> {
    wasm_info!("renderFretboard called: root={}, scale_type={}", root, scale_type);

    let config: FretboardConfig = if config.is_undefined() || config.is_null() {
        FretboardConfig::default()
    } else {
        deserialize(config, "Invalid fretboard config")?
    };

    fretboard_text(root, scale_type, &config).map_err(|msg| {
        wasm_error!("renderFretboard failed: {}", msg);
        JsValue::from_str(&msg)
    })
}
