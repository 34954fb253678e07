//! Error types for the scale engine
//!
//! All failures are local validation errors raised while parsing input or
//! querying a finished scale. Construction is all-or-nothing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// Note text is not a letter A-G followed by sharps/flats
    #[error("the note '{note}' is not part of the Western scale")]
    MalformedNote { note: String },

    /// Scale-type name is not in the formula table
    #[error("the scale '{scale}' isn't one that has been implemented")]
    UnknownScale { scale: String },

    /// Index lookup for a note that the scale doesn't contain
    #[error("the note '{note}' is not in this scale")]
    NotFound { note: String },
}

impl ScaleError {
    pub fn malformed_note(note: impl Into<String>) -> Self {
        ScaleError::MalformedNote { note: note.into() }
    }

    pub fn unknown_scale(scale: impl Into<String>) -> Self {
        ScaleError::UnknownScale { scale: scale.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_value() {
        assert_eq!(
            ScaleError::malformed_note("H#").to_string(),
            "the note 'H#' is not part of the Western scale"
        );
        assert!(ScaleError::unknown_scale("garbage").to_string().contains("'garbage'"));
    }
}
