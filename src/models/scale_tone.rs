//! Pull-based stream of scale membership, one entry per semitone
//!
//! Starting from any note, each `next()` advances a semitone and reports
//! either the spelled scale tone at that pitch or `ScaleTone::Blank`. The
//! stream never ends and repeats every twelve entries; `restart` rewinds it.

use super::chromatic::CHROMATIC_LENGTH;
use super::diatonic::DiatonicScale;
use super::note::Note;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleTone {
    /// Pitch belongs to the scale, spelled as the scale spells it
    Tone(Note),

    /// Pitch is not in the scale
    Blank,
}

impl ScaleTone {
    pub fn note(&self) -> Option<Note> {
        match self {
            ScaleTone::Tone(note) => Some(*note),
            ScaleTone::Blank => None,
        }
    }

    pub fn is_tone(&self) -> bool {
        matches!(self, ScaleTone::Tone(_))
    }
}

#[derive(Debug, Clone)]
pub struct ScaleTones<'a> {
    scale: &'a DiatonicScale,
    start: Note,
    position: usize,
}

impl<'a> ScaleTones<'a> {
    pub fn new(scale: &'a DiatonicScale, start: Note) -> Self {
        Self {
            scale,
            start,
            position: 0,
        }
    }

    pub fn start(&self) -> Note {
        self.start
    }

    /// Rewind to the starting note
    pub fn restart(&mut self) {
        self.position = 0;
    }

    /// Entry `offset` semitones above the start, without advancing
    pub fn peek_at(&self, offset: usize) -> ScaleTone {
        let pitch_class = (self.start.pitch_class() as usize + offset) % CHROMATIC_LENGTH;
        match self.scale.tone_at(pitch_class as u8) {
            Some(note) => ScaleTone::Tone(note),
            None => ScaleTone::Blank,
        }
    }
}

impl Iterator for ScaleTones<'_> {
    type Item = ScaleTone;

    fn next(&mut self) -> Option<ScaleTone> {
        let tone = self.peek_at(self.position);
        self.position = (self.position + 1) % CHROMATIC_LENGTH;
        Some(tone)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
