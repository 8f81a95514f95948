//! Resolves a reading found in text to the dictionary reading it derives from.

use crate::{
    errors::{Result, YomiError},
    lexicon::Lexicon,
    phonology,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Whether a reading is Sino-Japanese (on) or native (kun).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReadingKind {
    On,
    Kun,
}

impl Display for ReadingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => write!(f, "On"),
            Self::Kun => write!(f, "Kun"),
        }
    }
}

/// A reading as listed in the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalReading {
    pub reading: String,
    pub kind: ReadingKind,
}

/// Finds the lexicon reading of `kanji` that `observed` is a surface form of.
/// On-yomi are tried before kun-yomi, each in table order.
pub fn canonicalize<L>(kanji: char, observed: &str, lexicon: &L) -> Result<CanonicalReading>
where
    L: Lexicon + ?Sized,
{
    let readings = lexicon
        .readings(kanji)
        .ok_or(YomiError::UnknownKanji(kanji))?;

    let onyomi = readings.onyomi.iter().map(|r| (r, ReadingKind::On));
    let kunyomi = readings.kunyomi.iter().map(|r| (r, ReadingKind::Kun));
    for (reading, kind) in onyomi.chain(kunyomi) {
        log::trace!("comparing '{observed}' to {kind} reading '{reading}' of '{kanji}'");
        if phonology::is_equivalent(reading, observed) {
            return Ok(CanonicalReading {
                reading: reading.clone(),
                kind,
            });
        }
    }

    Err(YomiError::UnknownReading {
        kanji,
        reading: observed.to_string(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lexicon::KanjiTable;

    fn lexicon() -> KanjiTable {
        let mut table = KanjiTable::new();
        table.insert('花', ["カ", "ケ"], ["はな"]);
        table.insert('国', ["コク"], ["くに"]);
        table.insert('生', ["セイ", "ショウ"], ["い", "う", "なま", "き"]);
        table.insert('〇', Vec::<String>::new(), Vec::<String>::new());
        table
    }

    fn canonical(reading: &str, kind: ReadingKind) -> CanonicalReading {
        CanonicalReading {
            reading: reading.to_string(),
            kind,
        }
    }

    #[test]
    fn resolves_rendaku() {
        let lexicon = lexicon();
        assert_eq!(
            canonicalize('花', "ばな", &lexicon).unwrap(),
            canonical("はな", ReadingKind::Kun)
        );
        assert_eq!(
            canonicalize('花', "が", &lexicon).unwrap(),
            canonical("か", ReadingKind::On)
        );
    }

    #[test]
    fn resolves_sokuon() {
        let lexicon = lexicon();
        assert_eq!(
            canonicalize('国', "こっ", &lexicon).unwrap(),
            canonical("こく", ReadingKind::On)
        );
        assert_eq!(
            canonicalize('国', "ぐに", &lexicon).unwrap(),
            canonical("くに", ReadingKind::Kun)
        );
    }

    #[test]
    fn prefers_onyomi() {
        let mut lexicon = KanjiTable::new();
        lexicon.insert('下', ["カ", "ゲ"], ["か", "した"]);
        assert_eq!(
            canonicalize('下', "か", &lexicon).unwrap(),
            canonical("か", ReadingKind::On)
        );
    }

    #[test]
    fn every_candidate_is_its_own_canonical_form() {
        let lexicon = lexicon();
        for kanji in ['花', '国', '生'] {
            let readings = lexicon.readings(kanji).unwrap();
            for reading in &readings.onyomi {
                let found = canonicalize(kanji, reading, &lexicon).unwrap();
                assert_eq!(found, canonical(reading, ReadingKind::On));
            }
            for reading in &readings.kunyomi {
                let found = canonicalize(kanji, reading, &lexicon).unwrap();
                // an earlier candidate may already cover this spelling
                assert!(phonology::is_equivalent(&found.reading, reading));
                if !readings.onyomi.iter().any(|on| phonology::is_equivalent(on, reading)) {
                    assert_eq!(found.kind, ReadingKind::Kun);
                }
            }
        }
    }

    #[test]
    fn unknown_kanji() {
        let lexicon = lexicon();
        let err = canonicalize('見', "み", &lexicon).unwrap_err();
        assert!(matches!(err, YomiError::UnknownKanji('見')));
    }

    #[test]
    fn unknown_reading() {
        let lexicon = lexicon();
        let err = canonicalize('花', "はなび", &lexicon).unwrap_err();
        assert!(matches!(err, YomiError::UnknownReading { kanji: '花', .. }));
        // known, but without any readings
        let err = canonicalize('〇', "れい", &lexicon).unwrap_err();
        assert!(matches!(err, YomiError::UnknownReading { kanji: '〇', .. }));
    }

    #[test]
    fn is_idempotent() {
        let lexicon = lexicon();
        let first = canonicalize('花', "ばな", &lexicon).unwrap();
        let second = canonicalize('花', "ばな", &lexicon).unwrap();
        assert_eq!(first, second);
    }
}
