//! Shared types for the WASM API
//!
//! Result payloads handed to JavaScript. Notes serialize as display
//! strings ("E♭").

use serde::{Deserialize, Serialize};

use crate::models::{ChromaticScale, DiatonicScale, Note, ScaleType};

/// A spelled scale
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScaleResult {
    pub root: Note,
    pub scale_type: ScaleType,
    pub notes: Vec<Note>,
}

/// A chromatic cycle starting at its root
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChromaticResult {
    pub root: Note,
    pub uses_flats: bool,
    pub notes: Vec<Note>,
}

impl From<&DiatonicScale> for ScaleResult {
    fn from(scale: &DiatonicScale) -> Self {
        Self {
            root: scale.root(),
            scale_type: scale.scale_type(),
            notes: scale.notes().to_vec(),
        }
    }
}

impl ChromaticResult {
    pub fn new(root: Note, chromatic: &ChromaticScale) -> Self {
        Self {
            root,
            uses_flats: chromatic.uses_flats(),
            notes: chromatic.iter().collect(),
        }
    }
}
