//! Checks readings against the joyo (standard use) reading table.

use crate::lexicon::Lexicon;

// the u-column syllable of verb stems that end in the i-column (書き → 書く)
fn i_to_u(syllable: char) -> Option<char> {
    match syllable {
        'い' => Some('う'),
        'き' => Some('く'),
        'し' => Some('す'),
        'ち' => Some('つ'),
        'に' => Some('ぬ'),
        'ひ' => Some('ふ'),
        'み' => Some('む'),
        'り' => Some('る'),
        _ => None,
    }
}

/// Returns true if `reading` is a joyo reading of `kanji`.
///
/// The joyo table doesn't mark okurigana boundaries, so besides exact matches this accepts
/// a continuative form of a kun-yomi (かき for かく) and any proper prefix of a kun-yomi.
/// Kanji missing from the table have no joyo readings.
pub fn is_standard<L>(kanji: char, reading: &str, joyo: &L) -> bool
where
    L: Lexicon + ?Sized,
{
    let Some(readings) = joyo.readings(kanji) else {
        return false;
    };
    if readings.onyomi.iter().any(|on| on == reading) {
        return true;
    }
    if readings.kunyomi.iter().any(|kun| kun == reading) {
        return true;
    }

    let mut chars = reading.chars();
    if let Some(u) = chars.next_back().and_then(i_to_u) {
        // at least two syllables
        if !chars.as_str().is_empty() {
            let shifted = format!("{}{u}", chars.as_str());
            if readings.kunyomi.contains(&shifted) {
                log::trace!("'{reading}' is a continuative form of '{shifted}'");
                return true;
            }
        }
    }

    readings
        .kunyomi
        .iter()
        .any(|kun| kun.len() > reading.len() && kun.starts_with(reading))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lexicon::KanjiTable;

    fn joyo() -> KanjiTable {
        let mut table = KanjiTable::new();
        table.insert('書', ["ショ"], ["かく"]);
        table.insert('生', ["セイ", "ショウ"], ["いきる", "うまれる", "なま"]);
        table.insert('死', ["シ"], ["しぬ"]);
        table
    }

    #[test]
    fn exact_readings() {
        let joyo = joyo();
        assert!(is_standard('書', "しょ", &joyo));
        assert!(is_standard('書', "かく", &joyo));
        assert!(is_standard('生', "なま", &joyo));
    }

    #[test]
    fn continuative_forms() {
        let joyo = joyo();
        assert!(is_standard('書', "かき", &joyo));
        assert!(is_standard('死', "しに", &joyo));
        // a single syllable is never shifted
        let mut table = KanjiTable::new();
        table.insert('得', Vec::<String>::new(), ["う"]);
        assert!(!is_standard('得', "い", &table));
    }

    #[test]
    fn okurigana_prefixes() {
        let joyo = joyo();
        assert!(is_standard('生', "い", &joyo));
        assert!(is_standard('生', "うま", &joyo));
        assert!(is_standard('書', "か", &joyo));
        assert!(!is_standard('生', "いきるる", &joyo));
        // the empty reading is a prefix of every kun-yomi
        assert!(is_standard('生', "", &joyo));
        let mut table = KanjiTable::new();
        table.insert('銀', ["ギン"], Vec::<String>::new());
        assert!(!is_standard('銀', "", &table));
    }

    #[test]
    fn non_standard_readings() {
        let joyo = joyo();
        assert!(!is_standard('書', "ふみ", &joyo));
        assert!(!is_standard('花', "はな", &joyo));
    }
}
