//! Shared pitch utility functions
//!
//! Accidental glyph parsing and rendering used by the note model, and name
//! normalization for user-supplied scale names.

/// Unicode sharp sign used for display
pub const SHARP_GLYPH: char = '\u{266f}';

/// Unicode flat sign used for display
pub const FLAT_GLYPH: char = '\u{266d}';

/// Semitone offset of a single accidental marker
///
/// ASCII `#`/`b` and the Unicode glyphs are accepted identically.
pub fn accidental_offset(marker: char) -> Option<i8> {
    match marker {
        '#' | SHARP_GLYPH => Some(1),
        'b' | FLAT_GLYPH => Some(-1),
        _ => None,
    }
}

/// Render an accidental count as Unicode glyphs, one per semitone
pub fn accidental_glyphs(accidental: i8) -> String {
    accidental_markers(accidental, SHARP_GLYPH, FLAT_GLYPH)
}

/// Render an accidental count with ASCII markers (`#`, `b`)
pub fn accidental_ascii(accidental: i8) -> String {
    accidental_markers(accidental, '#', 'b')
}

fn accidental_markers(accidental: i8, sharp: char, flat: char) -> String {
    let marker = if accidental < 0 { flat } else { sharp };
    std::iter::repeat(marker)
        .take(accidental.unsigned_abs() as usize)
        .collect()
}

/// Normalize a scale name for lookup: trimmed, lowercase, words joined by `_`
///
/// "Melodic Minor", "melodic-minor" and "MELODIC_MINOR" all normalize to
/// "melodic_minor".
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}
