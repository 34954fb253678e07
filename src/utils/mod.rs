//! Utility modules for the scale tool
//!
//! Shared helpers used by the note model, the scale engine and the API.

pub mod pitch_utils;

// Re-export commonly used helpers
pub use pitch_utils::*;
