//! Fretboard text renderer
//!
//! Draws a vertical fretboard: one column per string (lowest first), one row
//! per fret starting with the open strings, followed by the nut. Each string
//! pulls one entry from its own `ScaleTones` stream per fret.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{DiatonicScale, Note, ScaleError, ScaleTone};

/// Width of one string column
const CELL_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FretboardError {
    #[error("please specify a tuning, from lowest string to highest")]
    EmptyTuning,

    #[error("please specify the length of the fretboard in frets")]
    NoFrets,

    #[error(transparent)]
    Scale(#[from] ScaleError),
}

/// Fretboard settings as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FretboardConfig {
    /// Open-string notes, lowest string first
    pub tuning: Vec<String>,

    /// Number of frets drawn below the nut
    pub frets: usize,

    /// Cell marker for positions outside the scale
    pub blank: String,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        Self {
            tuning: ["E", "A", "D", "G", "B", "E"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            frets: 12,
            blank: "\u{2502}".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Fretboard {
    tuning: Vec<Note>,
    frets: usize,
    blank: String,
}

impl Fretboard {
    pub fn new(tuning: Vec<Note>, frets: usize) -> Result<Self, FretboardError> {
        if tuning.is_empty() {
            return Err(FretboardError::EmptyTuning);
        }
        if frets == 0 {
            return Err(FretboardError::NoFrets);
        }
        Ok(Self {
            tuning,
            frets,
            blank: FretboardConfig::default().blank,
        })
    }

    pub fn from_config(config: &FretboardConfig) -> Result<Self, FretboardError> {
        let tuning = config
            .tuning
            .iter()
            .map(|name| name.parse::<Note>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut fretboard = Self::new(tuning, config.frets)?;
        fretboard.blank = config.blank.clone();
        Ok(fretboard)
    }

    pub fn tuning(&self) -> &[Note] {
        &self.tuning
    }

    pub fn frets(&self) -> usize {
        self.frets
    }

    /// Scale membership per fret (rows) and string (columns), open strings first
    pub fn grid(&self, scale: &DiatonicScale) -> Vec<Vec<ScaleTone>> {
        let mut strings: Vec<_> = self.tuning.iter().map(|open| scale.tones(*open)).collect();

        (0..=self.frets)
            .map(|_| {
                strings
                    .iter_mut()
                    .map(|tones| tones.next().unwrap_or(ScaleTone::Blank))
                    .collect()
            })
            .collect()
    }

    /// Render the fretboard as text, one line per fret
    pub fn render(&self, scale: &DiatonicScale) -> String {
        log::debug!(
            "Rendering {} {} on {} strings x {} frets",
            scale.root(),
            scale.scale_type(),
            self.tuning.len(),
            self.frets
        );

        let mut lines = Vec::with_capacity(self.frets + 3);

        let header: String = self.tuning.iter().map(|open| self.cell(&open.to_string())).collect();
        lines.push(format!("{:width$}{}", "", header, width = CELL_WIDTH).trim_end().to_string());

        for (fret, row) in self.grid(scale).iter().enumerate() {
            let cells: String = row
                .iter()
                .map(|tone| match tone {
                    ScaleTone::Tone(note) => self.cell(&note.to_string()),
                    ScaleTone::Blank => self.cell(&self.blank),
                })
                .collect();
            lines.push(format!("{:>3} {}", fret, cells).trim_end().to_string());

            if fret == 0 {
                lines.push(self.nut_line());
            }
        }

        lines.join("\n")
    }

    fn cell(&self, text: &str) -> String {
        format!("{:^width$}", text, width = CELL_WIDTH)
    }

    fn nut_line(&self) -> String {
        let segment = "\u{2501}".repeat(CELL_WIDTH - 1);
        let inner = vec![segment; self.tuning.len()].join("\u{252f}");
        format!("{:width$}\u{250d}{}\u{2511}", "", inner, width = CELL_WIDTH)
    }
}
