//! Diatonic scale spelling
//!
//! A scale is spelled in two passes:
//!
//! 1. A major reference scale is built from the root by walking seven letters
//!    in strict rotation. Each letter's accidental is the running difference
//!    between the major step pattern and the natural step between letters,
//!    so the reference never repeats or skips a letter.
//! 2. Each formula degree is located in the chromatic cycle by semitone
//!    distance, then re-lettered to match the reference degree at the same
//!    position. Only the spelling changes; the pitch is kept.
//!
//! Formulas that list the same degree twice (the blues scales) reuse a
//! letter, and far-flat roots can pile up double or triple flats. That output
//! is kept as spelled rather than corrected.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

use super::chromatic::ChromaticScale;
use super::errors::ScaleError;
use super::note::Note;
use super::scale_tone::ScaleTones;
use super::scale_type::ScaleType;

/// Semitone steps between consecutive degrees of the major scale
pub const MAJOR_STEPS: [i8; 7] = [2, 2, 1, 2, 2, 2, 1];

#[derive(Debug, Clone, Serialize)]
pub struct DiatonicScale {
    root: Note,
    scale_type: ScaleType,
    notes: Vec<Note>,
}

/// Spell the major scale on `root`, one letter per degree
pub fn major_reference(root: Note) -> [Note; 7] {
    let mut notes = [root; 7];
    let mut letter = root.letter();
    let mut accidental = root.accidental();

    for (degree, step) in MAJOR_STEPS.iter().take(6).enumerate() {
        letter = letter.next();
        accidental = accidental.saturating_add(step - letter.step_from_prev());
        notes[degree + 1] = Note::new(letter, accidental);
    }

    notes
}

impl DiatonicScale {
    /// Build a scale from root text and a scale-type name
    ///
    /// Both inputs are validated before any spelling work starts.
    pub fn new(root: &str, scale_name: &str) -> Result<Self, ScaleError> {
        let root: Note = root.parse()?;
        let scale_type: ScaleType = scale_name.parse()?;
        Ok(Self::from_parts(root, scale_type))
    }

    pub fn from_parts(root: Note, scale_type: ScaleType) -> Self {
        log::debug!("Building {} scale on {}", scale_type, root);

        let chromatic = ChromaticScale::from_note(root);
        let reference = major_reference(root);

        let notes: Vec<Note> = scale_type
            .degrees()
            .iter()
            .map(|degree| {
                let pitch = chromatic.get(degree.semitones() as isize);
                pitch.respell(reference[degree.parent_index()].letter())
            })
            .collect();

        let letters: HashSet<_> = notes.iter().map(Note::letter).collect();
        if letters.len() < notes.len() {
            log::warn!(
                "{} {} reuses a letter: {}",
                root,
                scale_type,
                format_notes(&notes)
            );
        }

        Self {
            root,
            scale_type,
            notes,
        }
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Note> {
        self.notes.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// First position holding a note equal to `note` (any spelling alias)
    pub fn index(&self, note: &Note) -> Result<usize, ScaleError> {
        self.notes
            .iter()
            .position(|candidate| candidate == note)
            .ok_or_else(|| ScaleError::NotFound {
                note: note.to_string(),
            })
    }

    /// Like `index`, parsing the note text first
    pub fn index_of(&self, note: &str) -> Result<usize, ScaleError> {
        let note: Note = note.parse()?;
        self.index(&note)
    }

    /// The scale member sounding at `pitch_class`, if any
    pub fn tone_at(&self, pitch_class: u8) -> Option<Note> {
        self.notes
            .iter()
            .find(|note| note.pitch_class() == pitch_class % 12)
            .copied()
    }

    /// Per-semitone membership stream starting at `start`
    pub fn tones(&self, start: Note) -> ScaleTones<'_> {
        ScaleTones::new(self, start)
    }
}

impl Index<usize> for DiatonicScale {
    type Output = Note;

    fn index(&self, position: usize) -> &Note {
        &self.notes[position]
    }
}

impl<'a> IntoIterator for &'a DiatonicScale {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

fn format_notes(notes: &[Note]) -> String {
    let names: Vec<String> = notes.iter().map(|note| note.to_string()).collect();
    format!("[{}]", names.join(", "))
}

impl fmt::Display for DiatonicScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_notes(&self.notes))
    }
}
