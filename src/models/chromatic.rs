//! Twelve-note chromatic cycle rotated to a root
//!
//! The table is generated once in A..G order and never reordered; a
//! `pointer` marks the root so that index 0 always yields it. Lookups wrap
//! in both directions, so index -1 is the note a semitone below the root.

use std::fmt;

use super::errors::ScaleError;
use super::letter::Letter;
use super::note::Note;

/// Number of pitch classes in the cycle
pub const CHROMATIC_LENGTH: usize = 12;

#[derive(Debug, Clone)]
pub struct ChromaticScale {
    notes: Vec<Note>,
    pointer: usize,
    use_flats: bool,
}

impl ChromaticScale {
    /// Build the cycle for a root given as text
    pub fn new(root: &str) -> Result<Self, ScaleError> {
        let root: Note = root.parse()?;
        Ok(Self::from_note(root))
    }

    /// Build the cycle for an already-parsed root
    ///
    /// A flat-spelled root biases the whole cycle to flats; anything else
    /// uses sharps. The sharp after B and after E is skipped since C and F
    /// already sit a half step above them.
    pub fn from_note(root: Note) -> Self {
        let use_flats = root.accidental() < 0;
        let mut notes = Vec::with_capacity(CHROMATIC_LENGTH);

        for letter in Letter::ALL {
            notes.push(Note::new(letter, 0));
            if !letter.next().follows_half_step() {
                let sharp = Note::new(letter, 1);
                notes.push(if use_flats { sharp.step_up() } else { sharp });
            }
        }

        // Every pitch class appears exactly once, so the root always resolves,
        // including spellings outside the table such as B♯ or C♭.
        let pointer = notes
            .iter()
            .position(|note| note.same_pitch(&root))
            .unwrap_or(0);

        log::debug!(
            "Chromatic cycle for {}: pointer={}, flats={}",
            root,
            pointer,
            use_flats
        );

        Self {
            notes,
            pointer,
            use_flats,
        }
    }

    /// Note `index` semitones above the root, wrapping either way
    pub fn get(&self, index: isize) -> Note {
        let position = (self.pointer as isize + index).rem_euclid(CHROMATIC_LENGTH as isize);
        self.notes[position as usize]
    }

    pub fn len(&self) -> usize {
        CHROMATIC_LENGTH
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn uses_flats(&self) -> bool {
        self.use_flats
    }

    /// The cycle in rotation order, starting at the root
    pub fn iter(&self) -> impl Iterator<Item = Note> + '_ {
        (0..CHROMATIC_LENGTH as isize).map(move |i| self.get(i))
    }
}

impl fmt::Display for ChromaticScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|note| note.to_string()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_items(scale: &ChromaticScale, items: &[(isize, &str)]) {
        for (index, expected) in items {
            assert_eq!(scale.get(*index).to_string(), *expected, "index {}", index);
        }
    }

    #[test]
    fn test_c_cycle() {
        let s = ChromaticScale::new("C").unwrap();
        assert_eq!(
            s.to_string(),
            "[C, C\u{266f}, D, D\u{266f}, E, F, F\u{266f}, G, G\u{266f}, A, A\u{266f}, B]"
        );
        assert_items(
            &s,
            &[(0, "C"), (1, "C♯"), (4, "E"), (-1, "B"), (12, "C"), (-12, "C"), (-3, "A")],
        );
    }

    #[test]
    fn test_c_sharp_cycle() {
        let s = ChromaticScale::new("C#").unwrap();
        assert_eq!(
            s.to_string(),
            "[C\u{266f}, D, D\u{266f}, E, F, F\u{266f}, G, G\u{266f}, A, A\u{266f}, B, C]"
        );
        assert_items(
            &s,
            &[(0, "C♯"), (1, "D"), (4, "F"), (-1, "C"), (12, "C♯"), (-12, "C♯"), (-5, "G♯")],
        );
    }

    #[test]
    fn test_d_flat_cycle() {
        let s = ChromaticScale::new("Db").unwrap();
        assert!(s.uses_flats());
        assert_eq!(
            s.to_string(),
            "[D\u{266d}, D, E\u{266d}, E, F, G\u{266d}, G, A\u{266d}, A, B\u{266d}, B, C]"
        );
        assert_items(
            &s,
            &[(0, "D♭"), (1, "D"), (5, "G♭"), (-1, "C"), (12, "D♭"), (-12, "D♭"), (-4, "A")],
        );
    }

    #[test]
    fn test_root_outside_table() {
        // B♯ and C♭ have no slot of their own; they land on C and B
        let b_sharp = ChromaticScale::new("B#").unwrap();
        assert_eq!(b_sharp.get(0).to_string(), "C");

        let c_flat = ChromaticScale::new("Cb").unwrap();
        assert!(c_flat.uses_flats());
        assert_eq!(c_flat.get(0).to_string(), "B");
        assert_eq!(c_flat.get(1).to_string(), "C");
    }

    #[test]
    fn test_every_root_wraps() {
        for letter in Letter::ALL {
            for accidental in -1..=1 {
                let root = Note::new(letter, accidental);
                let s = ChromaticScale::from_note(root);
                assert_eq!(s.len(), 12);
                assert!(s.get(0).same_pitch(&root));
                assert!(s.get(12).same_pitch(&s.get(0)));
                assert!(s.get(-12).same_pitch(&s.get(0)));
                assert_eq!(s.get(-1).pitch_class(), (root.pitch_class() + 11) % 12);
            }
        }
    }

    #[test]
    fn test_malformed_root() {
        assert_eq!(
            ChromaticScale::new("2").unwrap_err(),
            ScaleError::malformed_note("2")
        );
    }
}
