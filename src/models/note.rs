//! Enharmonic note model
//!
//! A `Note` is a letter plus a signed accidental count (positive = sharps,
//! negative = flats). Each note carries its two neighbouring spellings:
//! the flat alias (letter stepped up, e.g. C♯ → D♭) and the sharp alias
//! (letter stepped down, e.g. D♭ → C♯). `==` accepts any of the three
//! spellings, so `C♯ == D♭ == B♯♯`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ScaleError;
use super::letter::Letter;
use crate::utils::pitch_utils::{accidental_ascii, accidental_glyphs, accidental_offset};

/// A bare (letter, accidental) pair
pub type Spelling = (Letter, i8);

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    letter: Letter,
    accidental: i8,
    flat_alias: Spelling,
    sharp_alias: Spelling,
}

/// Re-spell one letter higher without changing pitch (C♯ → D♭)
pub fn step_up((letter, accidental): Spelling) -> Spelling {
    let next = letter.next();
    (next, accidental.saturating_sub(next.step_from_prev()))
}

/// Re-spell one letter lower without changing pitch (D♭ → C♯)
pub fn step_down((letter, accidental): Spelling) -> Spelling {
    (letter.prev(), accidental.saturating_add(letter.step_from_prev()))
}

/// Every root spelling offered to users: each letter natural, sharp and flat
pub fn valid_roots() -> Vec<String> {
    Letter::ALL
        .iter()
        .flat_map(|letter| {
            [0, 1, -1]
                .into_iter()
                .map(move |accidental| format!("{}{}", letter, accidental_ascii(accidental)))
        })
        .collect()
}

impl Note {
    pub fn new(letter: Letter, accidental: i8) -> Self {
        Self {
            letter,
            accidental,
            flat_alias: step_up((letter, accidental)),
            sharp_alias: step_down((letter, accidental)),
        }
    }

    /// Parse note text into a (letter, accidental) pair
    ///
    /// The first character must be a letter A-G (either case); every following
    /// character must be a sharp (`#`, `♯`) or flat (`b`, `♭`). Mixed markers
    /// accumulate, so "C#b" is plain C.
    pub fn parse(text: &str) -> Result<Spelling, ScaleError> {
        let mut chars = text.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| ScaleError::malformed_note(text))?;

        let mut accidental: i8 = 0;
        for marker in chars {
            let offset = accidental_offset(marker).ok_or_else(|| ScaleError::malformed_note(text))?;
            accidental = accidental
                .checked_add(offset)
                .ok_or_else(|| ScaleError::malformed_note(text))?;
        }

        Ok((letter, accidental))
    }

    /// True iff `parse` would succeed
    pub fn is_valid(text: &str) -> bool {
        Self::parse(text).is_ok()
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> i8 {
        self.accidental
    }

    pub fn spelling(&self) -> Spelling {
        (self.letter, self.accidental)
    }

    /// Spelling one letter up (C♯ → D♭)
    pub fn flat_alias(&self) -> Spelling {
        self.flat_alias
    }

    /// Spelling one letter down (D♭ → C♯)
    pub fn sharp_alias(&self) -> Spelling {
        self.sharp_alias
    }

    pub fn step_up(&self) -> Note {
        let (letter, accidental) = self.flat_alias;
        Note::new(letter, accidental)
    }

    pub fn step_down(&self) -> Note {
        let (letter, accidental) = self.sharp_alias;
        Note::new(letter, accidental)
    }

    /// Pitch class 0-11 with C = 0
    pub fn pitch_class(&self) -> u8 {
        (self.letter.natural_semitone() as i16 + self.accidental as i16).rem_euclid(12) as u8
    }

    /// Same sounding pitch class, whatever the spelling
    pub fn same_pitch(&self, other: &Note) -> bool {
        self.pitch_class() == other.pitch_class()
    }

    /// Re-spell this pitch on `letter`, stepping the shorter way round
    pub fn respell(&self, letter: Letter) -> Note {
        let up = self.letter.steps_to(letter);
        let mut spelling = self.spelling();
        if up <= 3 {
            for _ in 0..up {
                spelling = step_up(spelling);
            }
        } else {
            for _ in 0..(7 - up) {
                spelling = step_down(spelling);
            }
        }
        Note::new(spelling.0, spelling.1)
    }

    fn matches_spelling(&self, spelling: Spelling) -> bool {
        spelling == self.spelling() || spelling == self.sharp_alias || spelling == self.flat_alias
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Note) -> bool {
        self.matches_spelling(other.spelling())
    }
}

impl PartialEq<Spelling> for Note {
    fn eq(&self, other: &Spelling) -> bool {
        self.matches_spelling(*other)
    }
}

impl PartialEq<str> for Note {
    fn eq(&self, other: &str) -> bool {
        Note::parse(other).map_or(false, |spelling| self.matches_spelling(spelling))
    }
}

impl PartialEq<&str> for Note {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl FromStr for Note {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (letter, accidental) = Note::parse(s)?;
        Ok(Note::new(letter, accidental))
    }
}

impl TryFrom<String> for Note {
    type Error = ScaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> String {
        note.to_string()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, accidental_glyphs(self.accidental))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Letter::*;

    #[test]
    fn test_parse() {
        let cases = [
            ("D", (D, 0)),
            ("C", (C, 0)),
            ("Eb", (E, -1)),
            ("G#", (G, 1)),
            ("G♭", (G, -1)),
            ("F♯♯", (F, 2)),
            ("Bbb", (B, -2)),
            ("C#b", (C, 0)),
            ("a", (A, 0)),
        ];
        for (text, expected) in cases {
            assert_eq!(Note::parse(text).unwrap(), expected, "parsing {}", text);
        }
    }

    #[test]
    fn test_parse_errors() {
        for text in ["H", "", "2", "B%", "C# ", "Cx"] {
            assert_eq!(
                Note::parse(text),
                Err(ScaleError::malformed_note(text)),
                "parsing {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_overflow_is_malformed() {
        let text = format!("C{}", "#".repeat(200));
        assert!(Note::parse(&text).is_err());
    }

    #[test]
    fn test_is_valid() {
        for text in ["H", "B%", "2"] {
            assert!(!Note::is_valid(text));
        }
        for text in ["C#", "Bbb", "E#", "G\u{266d}"] {
            assert!(Note::is_valid(text));
        }
    }

    #[test]
    fn test_step_down() {
        let cases = [
            ((D, 0), (C, 2)),
            ((C, 0), (B, 1)),
            ((F, 1), (E, 2)),
            ((E, -1), (D, 1)),
            ((A, -1), (G, 1)),
        ];
        for (input, expected) in cases {
            assert_eq!(step_down(input), expected);
        }
    }

    #[test]
    fn test_step_up() {
        let cases = [
            ((C, 2), (D, 0)),
            ((B, 1), (C, 0)),
            ((E, 2), (F, 1)),
            ((D, 1), (E, -1)),
            ((G, 1), (A, -1)),
        ];
        for (input, expected) in cases {
            assert_eq!(step_up(input), expected);
        }
    }

    #[test]
    fn test_step_round_trip_preserves_pitch() {
        for letter in Letter::ALL {
            for accidental in -2..=2 {
                let note = Note::new(letter, accidental);
                assert_eq!(note.step_up().step_down().spelling(), note.spelling());
                assert_eq!(note.step_down().step_up().spelling(), note.spelling());
                assert!(note.step_up().same_pitch(&note));
                assert!(note.step_down().same_pitch(&note));
            }
        }
    }

    #[test]
    fn test_eq_across_spellings() {
        let c_sharp = Note::new(C, 1);
        let d_flat = Note::new(D, -1);

        assert!(c_sharp == "C#");
        assert!(c_sharp == "Db");
        assert!(c_sharp == "B##");
        assert!(c_sharp == d_flat);
        assert!(d_flat == c_sharp);
        assert!(c_sharp == (C, 1));
        assert!(c_sharp == (D, -1));

        assert!(c_sharp != "C");
        assert!(c_sharp != "F");
        assert!(c_sharp != (D, 2));
        assert!(c_sharp != "not a note");
    }

    #[test]
    fn test_pitch_class() {
        assert_eq!(Note::new(C, 0).pitch_class(), 0);
        assert_eq!(Note::new(B, 1).pitch_class(), 0);
        assert_eq!(Note::new(C, -1).pitch_class(), 11);
        assert_eq!(Note::new(A, 0).pitch_class(), 9);
        assert_eq!(Note::new(G, 2).pitch_class(), 9);
    }

    #[test]
    fn test_respell() {
        assert_eq!(Note::new(D, 1).respell(E).spelling(), (E, -1));
        assert_eq!(Note::new(C, 0).respell(B).spelling(), (B, 1));
        assert_eq!(Note::new(A, 0).respell(B).spelling(), (B, -2));
        assert_eq!(Note::new(F, 1).respell(F).spelling(), (F, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Note::new(C, 0).to_string(), "C");
        assert_eq!(Note::new(C, 1).to_string(), "C\u{266f}");
        assert_eq!(Note::new(E, -1).to_string(), "E\u{266d}");
        assert_eq!(Note::new(F, 2).to_string(), "F♯♯");
    }

    #[test]
    fn test_from_str_uppercases_letter() {
        let note: Note = "eb".parse().unwrap();
        assert_eq!(note.spelling(), (E, -1));
        assert_eq!(note.to_string(), "E♭");
    }

    #[test]
    fn test_valid_roots() {
        let roots = valid_roots();
        assert_eq!(roots.len(), 21);
        assert_eq!(&roots[..3], &["A", "A#", "Ab"]);
        assert!(roots.iter().all(|root| Note::is_valid(root)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let note = Note::new(B, -1);
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, "\"B♭\"");

        let parsed: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.spelling(), (B, -1));

        assert!(serde_json::from_str::<Note>("\"H\"").is_err());
    }
}
