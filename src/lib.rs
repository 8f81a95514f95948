#![doc = include_str!("../README.md")]

mod canonical;
mod errors;
mod guess;
mod joyo;
mod lexicon;
mod pattern;
mod phonology;
mod split;
mod utils;

pub use self::canonical::{CanonicalReading, ReadingKind};
pub use self::errors::{Result, YomiError};
pub use self::guess::Guess;
pub use self::lexicon::{KanjiTable, Lexicon, Readings};
pub use self::pattern::{Body, Capture, CompiledPattern, Element, PatternCompiler, Slot};
pub use self::phonology::{expand, is_equivalent, voicing_class, GEMINATING};
pub use self::split::{Annotation, ReadingSplit, SplitSegment};

/// Finds the dictionary form and type of a reading of `kanji` as it appears in a word,
/// undoing rendaku and sokuon.
/// Fails with [`YomiError::UnknownKanji`] if the lexicon has no entry for the kanji and
/// with [`YomiError::UnknownReading`] if none of its readings fit.
pub fn canonical_reading<L>(kanji: char, reading: &str, lexicon: &L) -> Result<CanonicalReading>
where
    L: Lexicon + ?Sized,
{
    canonical::canonicalize(kanji, reading, lexicon)
}

/// Splits the reading over the characters of the word, assigning each kanji one of its
/// candidate readings from the lexicon. Longer candidates are preferred.
/// Characters the lexicon doesn't know, such as okurigana, must appear in the reading as-is.
pub fn reading_split<'a, L>(
    word: &str,
    reading: &'a str,
    lexicon: &L,
) -> Result<ReadingSplit<'a>>
where
    L: Lexicon + ?Sized,
{
    PatternCompiler::new(lexicon)
        .compile(word)?
        .match_reading(reading)
}

/// Returns true if `reading` is one of the joyo readings of `kanji`.
pub fn is_standard_reading<L>(kanji: char, reading: &str, joyo_lexicon: &L) -> bool
where
    L: Lexicon + ?Sized,
{
    joyo::is_standard(kanji, reading, joyo_lexicon)
}

/// Splits the reading over the kanji of `text` without any knowledge of kanji readings.
/// Returns [`Guess::Ambiguous`] rather than picking one of several possible splits.
pub fn guess_split<'a>(text: &str, reading: &'a str) -> Result<Guess<'a>> {
    guess::guess(text, reading, &KanjiTable::new())
}

/// Like [`guess_split`], but kanji found in the lexicon are restricted to their candidate readings.
pub fn guess_split_with_lexicon<'a, L>(
    text: &str,
    reading: &'a str,
    lexicon: &L,
) -> Result<Guess<'a>>
where
    L: Lexicon + ?Sized,
{
    guess::guess(text, reading, lexicon)
}
