/// The seven staff letters of Western notation
///
/// Letters are ordered A through G and wrap (G → A). Natural pitches are
/// measured in semitones above C, so the irregular half-steps B–C and E–F
/// fall out of the table instead of being special-cased by callers.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// All letters in staff order, starting at A
    pub const ALL: [Letter; 7] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
    ];

    /// Parse a single letter character (case-insensitive)
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
        }
    }

    /// Position in the A..G rotation (A = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    /// The next letter up, wrapping G → A
    pub fn next(self) -> Letter {
        Letter::ALL[(self.index() + 1) % 7]
    }

    /// The next letter down, wrapping A → G
    pub fn prev(self) -> Letter {
        Letter::ALL[(self.index() + 6) % 7]
    }

    /// Semitones above C for the natural (unaltered) letter
    pub fn natural_semitone(self) -> i8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// True for C and F, which sit only a half step above the previous letter
    pub fn follows_half_step(self) -> bool {
        matches!(self, Letter::C | Letter::F)
    }

    /// Semitones between the natural previous letter and this one (1 or 2)
    pub fn step_from_prev(self) -> i8 {
        if self.follows_half_step() {
            1
        } else {
            2
        }
    }

    /// Number of letter steps upward from `self` to `target` (0..=6)
    pub fn steps_to(self, target: Letter) -> usize {
        (target.index() + 7 - self.index()) % 7
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_case_insensitive() {
        assert_eq!(Letter::from_char('c'), Some(Letter::C));
        assert_eq!(Letter::from_char('G'), Some(Letter::G));
        assert_eq!(Letter::from_char('H'), None);
        assert_eq!(Letter::from_char('2'), None);
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(Letter::G.next(), Letter::A);
        assert_eq!(Letter::A.prev(), Letter::G);
        for letter in Letter::ALL {
            assert_eq!(letter.next().prev(), letter);
        }
    }

    #[test]
    fn test_half_steps() {
        let half: Vec<Letter> = Letter::ALL
            .iter()
            .copied()
            .filter(|l| l.follows_half_step())
            .collect();
        assert_eq!(half, vec![Letter::C, Letter::F]);
        assert_eq!(Letter::C.step_from_prev(), 1);
        assert_eq!(Letter::D.step_from_prev(), 2);
    }

    #[test]
    fn test_steps_to() {
        assert_eq!(Letter::C.steps_to(Letter::E), 2);
        assert_eq!(Letter::C.steps_to(Letter::B), 6);
        assert_eq!(Letter::G.steps_to(Letter::A), 1);
        assert_eq!(Letter::D.steps_to(Letter::D), 0);
    }

    #[test]
    fn test_natural_semitones_sum_to_octave() {
        // Walking A..G and back to A covers exactly one octave
        let total: i8 = Letter::ALL.iter().map(|l| l.next().step_from_prev()).sum();
        assert_eq!(total, 12);
    }
}
