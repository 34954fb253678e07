//! Shared helpers for WASM API operations
//!
//! This module contains common patterns for console logging, serialization,
//! deserialization and turning engine errors into user-facing messages.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{valid_roots, ScaleError, ScaleType};
use crate::renderers::FretboardError;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Error Message Helpers
// ============================================================================

/// User-facing message for an engine error
///
/// Bad roots and unknown scale names list every valid alternative.
pub fn describe_error(err: &ScaleError) -> String {
    match err {
        ScaleError::MalformedNote { .. } => {
            format!("{}. Valid root notes: {}", err, valid_roots().join(", "))
        }
        ScaleError::UnknownScale { .. } => {
            format!("{}. Valid scale types: {}", err, ScaleType::names().join(", "))
        }
        ScaleError::NotFound { .. } => err.to_string(),
    }
}

pub fn describe_fretboard_error(err: &FretboardError) -> String {
    match err {
        FretboardError::Scale(inner) => describe_error(inner),
        other => other.to_string(),
    }
}

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log_error(&msg);
    JsValue::from_str(&msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_bad_root_lists_roots() {
        let msg = describe_error(&ScaleError::malformed_note("H"));
        assert!(msg.starts_with("the note 'H' is not part of the Western scale"));
        assert!(msg.contains("C#"));
        assert!(msg.contains("Bb"));
    }

    #[test]
    fn test_describe_unknown_scale_lists_scales() {
        let msg = describe_error(&ScaleError::unknown_scale("garbage"));
        assert!(msg.contains("'garbage'"));
        assert!(msg.contains("harmonic_minor"));
        assert!(msg.contains("pentatonic_blues"));
    }

    #[test]
    fn test_describe_fretboard_error() {
        assert_eq!(
            describe_fretboard_error(&FretboardError::NoFrets),
            "please specify the length of the fretboard in frets"
        );
        let msg = describe_fretboard_error(&FretboardError::Scale(ScaleError::malformed_note("X")));
        assert!(msg.contains("Valid root notes"));
    }
}
