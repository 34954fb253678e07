//! Scale Tool WASM Module
//!
//! Spells diatonic and chromatic scales from a root note and a scale-type
//! formula, and renders fretboard diagrams annotated with scale membership.

pub mod models;
pub mod renderers;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use models::*;
pub use renderers::{Fretboard, FretboardConfig, FretboardError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if console_log::init_with_level(log::Level::Debug).is_err() {
            return;
        }
    }

    log::info!("Scale tool WASM module initialized");
}
