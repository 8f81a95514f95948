//! Splits readings over kanji without relying on known readings.
//!
//! Every kanji the lexicon can't help with takes any run of hiragana. The text is matched twice,
//! once with each such kanji taking as much of the reading as possible and once taking as
//! little as possible. If both agree the split is the only one possible, otherwise
//! the split is ambiguous.

use crate::{
    errors::Result,
    lexicon::Lexicon,
    pattern::{Capture, PatternCompiler},
};
use std::collections::HashMap;

/// The outcome of guessing a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess<'a> {
    /// The reading of each kanji.
    /// A kanji that appears more than once maps to the reading of its last occurrence.
    Split(HashMap<char, &'a str>),
    /// More than one split fits the reading.
    Ambiguous,
}

impl<'a> Guess<'a> {
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::Ambiguous)
    }

    pub fn split(self) -> Option<HashMap<char, &'a str>> {
        match self {
            Self::Split(split) => Some(split),
            Self::Ambiguous => None,
        }
    }
}

/// Splits the reading over the kanji of `text`, using the lexicon's candidates where it has any.
pub fn guess<'a, L>(text: &str, reading: &'a str, lexicon: &L) -> Result<Guess<'a>>
where
    L: Lexicon + ?Sized,
{
    let compiler = PatternCompiler::new(lexicon);
    let maximal = compiler
        .compile_guessing(text, Capture::Greedy)?
        .match_reading(reading)?;
    let minimal = compiler
        .compile_guessing(text, Capture::Lazy)?
        .match_reading(reading)?;

    let ambiguous = maximal
        .segments()
        .iter()
        .zip(minimal.segments())
        .any(|(max, min)| max.reading != min.reading);
    if ambiguous {
        log::debug!(
            "'{reading}' splits over '{text}' as both {} and {}",
            maximal,
            minimal
        );
        return Ok(Guess::Ambiguous);
    }
    Ok(Guess::Split(maximal.kanji_readings()))
}
