//! Compiles a word into an anchored pattern over its reading, one capture slot per character.

use crate::{
    errors::{Result, YomiError},
    lexicon::Lexicon,
    phonology,
    split::{ReadingSplit, SplitSegment},
    utils::{self, REPETITION_MARK},
};
use regex::Regex;
use std::{cmp::Reverse, collections::HashMap};

/// Identifies the capture slot of a single character of the word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    /// The character of the word this slot belongs to.
    pub character: char,
    /// The character itself for its first occurrence in the word, then the character
    /// followed by the occurrence count (`日`, `日2`, `日3`...).
    /// None for punctuation and digits.
    pub name: Option<String>,
}

/// How much of the reading a free slot prefers to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capture {
    Greedy,
    Lazy,
}

/// What a slot matches.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Body {
    /// The character itself.
    Literal(char),
    /// Any surface form of one of the candidate readings, tried longest first.
    Alternation(Vec<String>),
    /// One or more hiragana.
    Free(Capture),
}

impl Body {
    fn to_regex(&self) -> String {
        match self {
            Self::Literal(c) => regex::escape(c.encode_utf8(&mut [0; 4])),
            Self::Alternation(candidates) => candidates
                .iter()
                .map(|candidate| phonology::expand(candidate))
                .collect::<Vec<_>>()
                .join("|"),
            Self::Free(Capture::Greedy) => r"\p{Hiragana}+".to_string(),
            Self::Free(Capture::Lazy) => r"\p{Hiragana}+?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Element {
    pub slot: Slot,
    pub body: Body,
}

/// A word compiled against a lexicon, ready to be matched against readings.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    word: String,
    elements: Vec<Element>,
    regex: Regex,
}

impl CompiledPattern {
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.elements.iter().map(|element| &element.slot)
    }

    /// The regular expression the pattern was compiled to.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Splits the reading over the word's slots.
    /// The whole reading has to match.
    pub fn match_reading<'a>(&self, reading: &'a str) -> Result<ReadingSplit<'a>> {
        let Some(captures) = self.regex.captures(reading) else {
            log::trace!("'{reading}' does not match {}", self.regex.as_str());
            return Err(YomiError::NoMatch {
                word: self.word.clone(),
                reading: reading.to_string(),
            });
        };
        // every element is exactly one capture group, in order
        let segments = self
            .elements
            .iter()
            .enumerate()
            .map(|(idx, element)| SplitSegment {
                slot: element.slot.clone(),
                reading: captures.get(idx + 1).map_or("", |m| m.as_str()),
            })
            .collect();
        Ok(ReadingSplit::new(segments))
    }
}

/// Turns words into [`CompiledPattern`]s using the candidate readings of a lexicon.
#[derive(Debug, Clone, Copy)]
pub struct PatternCompiler<L> {
    lexicon: L,
}

impl<L: Lexicon> PatternCompiler<L> {
    pub fn new(lexicon: L) -> Self {
        Self { lexicon }
    }

    /// Compiles the word so that each character known to the lexicon matches one of its
    /// candidate readings and every other character matches itself.
    pub fn compile(&self, word: &str) -> Result<CompiledPattern> {
        self.build(word, None)
    }

    /// Like [`PatternCompiler::compile`], but kanji missing from the lexicon match any run of
    /// hiragana, preferring as much or as little of the reading as `capture` says.
    pub fn compile_guessing(&self, word: &str, capture: Capture) -> Result<CompiledPattern> {
        self.build(word, Some(capture))
    }

    fn build(&self, word: &str, unknown_kanji: Option<Capture>) -> Result<CompiledPattern> {
        let mut elements: Vec<Element> = Vec::new();
        let mut occurrences: HashMap<char, usize> = HashMap::new();

        for c in word.chars() {
            let known = self.lexicon.readings(c).filter(|r| !r.is_empty());
            let body = match (unknown_kanji, known) {
                // when guessing, 々 is a kanji of its own rather than a repetition
                (Some(capture), None) if utils::is_kanji(c) => Body::Free(capture),
                _ if c == REPETITION_MARK => elements
                    .last()
                    .map(|previous| previous.body.clone())
                    .ok_or(YomiError::RepetitionWithoutAntecedent)?,
                (_, Some(readings)) => {
                    let mut candidates = readings
                        .candidates()
                        .map(str::to_string)
                        .collect::<Vec<_>>();
                    // stable, so equally long candidates keep table order
                    candidates.sort_by_key(|candidate| Reverse(candidate.chars().count()));
                    Body::Alternation(candidates)
                }
                // okurigana, punctuation and such must match as-is
                _ => Body::Literal(c),
            };

            let count = occurrences.entry(c).or_insert(0);
            *count += 1;
            let name = utils::can_name_slot(c).then(|| {
                if *count == 1 {
                    c.to_string()
                } else {
                    format!("{c}{count}")
                }
            });

            elements.push(Element {
                slot: Slot { character: c, name },
                body,
            });
        }

        let mut source = String::from("^");
        for element in &elements {
            source.push('(');
            source.push_str(&element.body.to_regex());
            source.push(')');
        }
        source.push('$');
        log::debug!("compiled '{word}' to {source}");

        Ok(CompiledPattern {
            word: word.to_string(),
            elements,
            regex: Regex::new(&source)?,
        })
    }
}
