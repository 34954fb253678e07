//! Scale tool WASM API
//!
//! This module provides the JavaScript-facing API for the scale engine.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, serialization and error message helpers
//! - `types`: Result payloads handed to JavaScript
//! - `scales`: Scale, chromatic and fretboard exports

pub mod helpers;
pub mod types;
pub mod scales;

// Re-export all public functions to keep the public API flat
pub use scales::*;
pub use types::{ChromaticResult, ScaleResult};
