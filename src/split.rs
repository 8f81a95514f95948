use crate::{
    canonical::{self, CanonicalReading},
    joyo,
    lexicon::Lexicon,
    pattern::Slot,
    utils::{self, REPETITION_MARK},
};
use std::{collections::HashMap, fmt::Display};

/// A reading split over the characters of a word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReadingSplit<'a> {
    segments: Vec<SplitSegment<'a>>,
}

/// The part of the reading captured by one character's slot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SplitSegment<'a> {
    pub slot: Slot,
    pub reading: &'a str,
}

impl<'a> ReadingSplit<'a> {
    pub(crate) fn new(segments: Vec<SplitSegment<'a>>) -> Self {
        Self { segments }
    }

    /// The segments in word order.
    pub fn segments(&self) -> &[SplitSegment<'a>] {
        &self.segments
    }

    /// Returns the reading captured by the slot with the given name.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.segments
            .iter()
            .find(|segment| segment.slot.name.as_deref() == Some(name))
            .map(|segment| segment.reading)
    }

    /// Maps every named slot to its reading.
    pub fn to_map(&self) -> HashMap<String, &'a str> {
        self.segments
            .iter()
            .filter_map(|segment| Some((segment.slot.name.clone()?, segment.reading)))
            .collect()
    }

    /// Maps every kanji to its reading.
    /// A kanji that appears more than once maps to the reading of its last occurrence.
    pub fn kanji_readings(&self) -> HashMap<char, &'a str> {
        self.segments
            .iter()
            .filter(|segment| utils::is_kanji(segment.slot.character))
            .map(|segment| (segment.slot.character, segment.reading))
            .collect()
    }

    /// Resolves each kanji's reading to its dictionary form and checks it against the joyo table.
    /// 々 is resolved as the kanji it repeats.
    pub fn annotate<L, J>(&self, lexicon: &L, joyo_lexicon: &J) -> Vec<Annotation<'_, 'a>>
    where
        L: Lexicon + ?Sized,
        J: Lexicon + ?Sized,
    {
        let mut previous_kanji = None;
        let mut annotations = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            let character = segment.slot.character;
            let kanji = if character == REPETITION_MARK {
                previous_kanji
            } else if utils::is_kanji(character) {
                Some(character)
            } else {
                None
            };
            previous_kanji = kanji;

            let Some(kanji) = kanji else {
                annotations.push(Annotation {
                    segment,
                    canonical: None,
                    standard: false,
                });
                continue;
            };
            let canonical = match canonical::canonicalize(kanji, segment.reading, lexicon) {
                Ok(canonical) => Some(canonical),
                Err(err) => {
                    log::debug!("{err}");
                    None
                }
            };
            let standard = {
                let reading = canonical
                    .as_ref()
                    .map_or(segment.reading, |canonical| canonical.reading.as_str());
                joyo::is_standard(kanji, reading, joyo_lexicon)
            };
            annotations.push(Annotation {
                segment,
                canonical,
                standard,
            });
        }
        annotations
    }
}

/// Prints the word with its readings using HTML ruby tags.
/// Characters that read as themselves get an empty annotation.
impl Display for ReadingSplit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<ruby>")?;
        for segment in &self.segments {
            write!(f, "{}", segment.slot.character)?;
            write!(f, "<rt>")?;
            if !reads_as_itself(segment) {
                write!(f, "{}", segment.reading)?;
            }
            write!(f, "</rt>")?;
        }
        write!(f, "</ruby>")?;
        Ok(())
    }
}

fn reads_as_itself(segment: &SplitSegment<'_>) -> bool {
    let mut chars = segment.reading.chars();
    chars.next() == Some(segment.slot.character) && chars.next().is_none()
}

/// Dictionary information about one segment of a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation<'s, 'a> {
    pub segment: &'s SplitSegment<'a>,
    /// None for kana and other non-kanji, and for readings the lexicon doesn't know.
    pub canonical: Option<CanonicalReading>,
    /// Whether the reading is a joyo reading of the kanji.
    pub standard: bool,
}
