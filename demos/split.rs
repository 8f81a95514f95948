//! `yomisplit::reading_split` assigns each kanji one of its known readings,
//! allowing for rendaku and sokuon at the boundaries.

use yomisplit::KanjiTable;

fn main() {
    env_logger::init();

    let lexicon = KanjiTable::from_json(
        r#"{
            "国": {"onyomi": ["コク"], "kunyomi": ["くに"]},
            "歌": {"onyomi": ["カ"], "kunyomi": ["うた"]},
            "花": {"onyomi": ["カ", "ケ"], "kunyomi": ["はな"]},
            "火": {"onyomi": ["カ"], "kunyomi": ["ひ", "ほ"]}
        }"#,
    )
    .unwrap();

    for (word, reading) in [("国歌", "こっか"), ("花火", "はなび")] {
        let split = yomisplit::reading_split(word, reading, &lexicon).unwrap();
        println!("{split}");
        for segment in split.segments() {
            let kanji = segment.slot.character;
            let canonical = yomisplit::canonical_reading(kanji, segment.reading, &lexicon).unwrap();
            println!(
                "  {kanji} {} -> {} ({})",
                segment.reading, canonical.reading, canonical.kind
            );
        }
    }
}
