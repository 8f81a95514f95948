//! Kanji reading tables.

use crate::errors::{Result, YomiError};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs::File, io::Read, path::Path};
use wana_kana::ConvertJapanese;

/// The candidate readings of a single kanji, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readings {
    #[serde(default)]
    pub onyomi: Vec<String>,
    #[serde(default)]
    pub kunyomi: Vec<String>,
}

impl Readings {
    /// On-yomi followed by kun-yomi.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.onyomi
            .iter()
            .chain(self.kunyomi.iter())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.onyomi.is_empty() && self.kunyomi.is_empty()
    }
}

/// Source of candidate readings for kanji.
pub trait Lexicon {
    /// Returns the readings for the character, or None if it has no entry.
    fn readings(&self, kanji: char) -> Option<&Readings>;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn readings(&self, kanji: char) -> Option<&Readings> {
        (**self).readings(kanji)
    }
}

impl Lexicon for HashMap<char, Readings> {
    fn readings(&self, kanji: char) -> Option<&Readings> {
        self.get(&kanji)
    }
}

/// An in-memory reading table.
///
/// Readings are stored in hiragana; katakana input (as on-yomi are commonly written) is converted on insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanjiTable {
    entries: HashMap<char, Readings>,
}

impl KanjiTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds readings for the kanji, appending to any it already has.
    pub fn insert<I, J, S, T>(&mut self, kanji: char, onyomi: I, kunyomi: J)
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let entry = self.entries.entry(kanji).or_default();
        entry.onyomi.extend(onyomi.into_iter().filter_map(normalize));
        entry.kunyomi.extend(kunyomi.into_iter().filter_map(normalize));
    }

    /// Parses a table of the form `{"花": {"onyomi": ["カ"], "kunyomi": ["はな"]}}`.
    /// Either list may be omitted.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, Readings> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: HashMap<String, Readings> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let table = Self::from_reader(std::io::BufReader::new(file))?;
        log::debug!(
            "loaded {} kanji from {}",
            table.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    fn from_raw(raw: HashMap<String, Readings>) -> Result<Self> {
        let mut table = Self::new();
        for (key, readings) in raw {
            let mut chars = key.chars();
            let kanji = match (chars.next(), chars.next()) {
                (Some(kanji), None) => kanji,
                _ => return Err(YomiError::InvalidEntry(key)),
            };
            table.insert(kanji, readings.onyomi, readings.kunyomi);
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lexicon for KanjiTable {
    fn readings(&self, kanji: char) -> Option<&Readings> {
        self.entries.get(&kanji)
    }
}

fn normalize(reading: impl AsRef<str>) -> Option<String> {
    let reading = reading.as_ref().trim();
    if reading.is_empty() {
        None
    } else {
        Some(reading.to_hiragana())
    }
}
