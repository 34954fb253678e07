//! Models module for the scale tool
//!
//! This module contains the note model and the scale engine built on it:
//! the chromatic cycle, the scale-type formula table, diatonic spelling and
//! the per-semitone tone stream consumed by the fretboard renderer.

pub mod letter;
pub mod note;
pub mod errors;
pub mod chromatic;
pub mod scale_type;
pub mod diatonic;
pub mod scale_tone;

// Re-export commonly used types
pub use letter::Letter;
pub use note::{valid_roots, Note, Spelling};
pub use errors::ScaleError;
pub use chromatic::{ChromaticScale, CHROMATIC_LENGTH};
pub use scale_type::{Degree, ScaleType};
pub use diatonic::{major_reference, DiatonicScale};
pub use scale_tone::{ScaleTone, ScaleTones};
