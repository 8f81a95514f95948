//! Error types.

/// Result type defaulting to [`YomiError`].
pub type Result<T, E = YomiError> = std::result::Result<T, E>;

/// Errors produced while splitting or classifying readings.
#[derive(Debug, thiserror::Error)]
pub enum YomiError {
    /// The character has no entry in the lexicon.
    #[error("readings for kanji '{0}' are not known")]
    UnknownKanji(char),

    /// The kanji is known but none of its readings is equivalent to the given one.
    #[error("reading '{reading}' for kanji '{kanji}' is not known")]
    UnknownReading { kanji: char, reading: String },

    /// A repetition mark (々) was found with no character before it.
    #[error("repetition mark '々' follows nothing")]
    RepetitionWithoutAntecedent,

    /// The reading cannot be split over the word.
    #[error("reading '{reading}' does not match '{word}'")]
    NoMatch { word: String, reading: String },

    /// A lexicon key that isn't a single character.
    #[error("lexicon key '{0}' must be exactly one character")]
    InvalidEntry(String),

    #[error(transparent)]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
