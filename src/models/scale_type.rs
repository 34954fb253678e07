//! Enumeration of the supported scale types and their degree formulas
//!
//! Each formula is a comma-separated list of degree specifiers relative to
//! the major scale on the same root: "b3" is the third degree lowered a
//! semitone, "#4" the fourth raised a semitone.
//!
//! Names are matched case-insensitively; spaces and hyphens count as
//! underscores ("Melodic Minor" → melodic_minor).

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::errors::ScaleError;
use crate::utils::pitch_utils::{accidental_offset, normalize_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Major,
    Minor,
    MelodicMinor,
    HarmonicMinor,
    MajorBlues,
    MinorBlues,
    PentatonicMajor,
    PentatonicMinor,
    PentatonicBlues,
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

/// One formula entry: a scale step (1-based) and a semitone shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degree {
    pub step: u8,
    pub shift: i8,
}

/// Semitones above the root for each degree of the major scale
pub const MAJOR_SEMITONES: [i8; 7] = [0, 2, 4, 5, 7, 9, 11];

impl Degree {
    /// Parse a specifier such as "1", "b3" or "#5"
    pub fn parse(specifier: &str) -> Option<Degree> {
        let specifier = specifier.trim();
        let digits_at = specifier.find(|c: char| c.is_ascii_digit())?;
        let (markers, digits) = specifier.split_at(digits_at);

        let mut shift: i8 = 0;
        for marker in markers.chars() {
            shift = shift.checked_add(accidental_offset(marker)?)?;
        }

        let step: u8 = digits.parse().ok()?;
        if step == 0 {
            return None;
        }
        Some(Degree { step, shift })
    }

    /// Index into a seven-note parent scale, wrapping (step 9 → index 1)
    pub fn parent_index(&self) -> usize {
        (self.step as usize - 1) % 7
    }

    /// Semitones above the root, ignoring octaves
    pub fn semitones(&self) -> i8 {
        MAJOR_SEMITONES[self.parent_index()] + self.shift
    }
}

impl ScaleType {
    /// Every scale type, in the order shown to users
    pub const ALL: [ScaleType; 16] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::MelodicMinor,
        ScaleType::HarmonicMinor,
        ScaleType::MajorBlues,
        ScaleType::MinorBlues,
        ScaleType::PentatonicMajor,
        ScaleType::PentatonicMinor,
        ScaleType::PentatonicBlues,
        ScaleType::Ionian,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Aeolian,
        ScaleType::Locrian,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
            ScaleType::MelodicMinor => "melodic_minor",
            ScaleType::HarmonicMinor => "harmonic_minor",
            ScaleType::MajorBlues => "major_blues",
            ScaleType::MinorBlues => "minor_blues",
            ScaleType::PentatonicMajor => "pentatonic_major",
            ScaleType::PentatonicMinor => "pentatonic_minor",
            ScaleType::PentatonicBlues => "pentatonic_blues",
            ScaleType::Ionian => "ionian",
            ScaleType::Dorian => "dorian",
            ScaleType::Phrygian => "phrygian",
            ScaleType::Lydian => "lydian",
            ScaleType::Mixolydian => "mixolydian",
            ScaleType::Aeolian => "aeolian",
            ScaleType::Locrian => "locrian",
        }
    }

    /// Degree specifiers relative to the major scale
    pub fn formula(&self) -> &'static str {
        match self {
            ScaleType::Major | ScaleType::Ionian => "1,2,3,4,5,6,7",
            ScaleType::Minor | ScaleType::Aeolian => "1,2,b3,4,5,b6,b7",
            ScaleType::MelodicMinor => "1,2,b3,4,5,6,7",
            ScaleType::HarmonicMinor => "1,2,b3,4,5,b6,7",
            ScaleType::MajorBlues => "1,2,b3,3,5,6",
            ScaleType::MinorBlues | ScaleType::PentatonicBlues => "1,b3,4,b5,5,b7",
            ScaleType::PentatonicMajor => "1,2,3,5,6",
            ScaleType::PentatonicMinor => "1,b3,4,5,b7",
            ScaleType::Dorian => "1,2,b3,4,5,6,b7",
            ScaleType::Phrygian => "1,b2,b3,4,5,b6,b7",
            ScaleType::Lydian => "1,2,3,#4,5,6,7",
            ScaleType::Mixolydian => "1,2,3,4,5,6,b7",
            ScaleType::Locrian => "1,b2,b3,4,b5,b6,b7",
        }
    }

    /// Parsed formula
    pub fn degrees(&self) -> &'static [Degree] {
        DEGREES.get(self).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of every scale type
    pub fn names() -> Vec<&'static str> {
        ScaleType::ALL.iter().map(ScaleType::as_str).collect()
    }
}

lazy_static! {
    static ref DEGREES: HashMap<ScaleType, Vec<Degree>> = ScaleType::ALL
        .iter()
        .map(|scale_type| {
            let degrees = scale_type
                .formula()
                .split(',')
                .map(|specifier| Degree::parse(specifier).expect("built-in scale formulas are well-formed"))
                .collect();
            (*scale_type, degrees)
        })
        .collect();
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScaleType {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize_name(s);
        ScaleType::ALL
            .iter()
            .copied()
            .find(|scale_type| scale_type.as_str() == name)
            .ok_or_else(|| ScaleError::unknown_scale(s))
    }
}
