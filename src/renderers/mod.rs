//! Renderers module for the scale tool
//!
//! This module contains rendering logic that turns a spelled scale into
//! output for display.

pub mod fretboard;

// Re-export commonly used types
pub use fretboard::{Fretboard, FretboardConfig, FretboardError};
