//! Surface alternations of a reading at morpheme boundaries.
//!
//! A reading may change at its start through sequential voicing (rendaku), including
//! /h/ → /b/ and /h/ → /p/ (handakuten) and the yotsugana homographs (ち → ぢ/じ, つ → づ/ず),
//! and at its end through gemination (sokuon), where a final つ, ち or く becomes っ or drops.

use crate::utils::SOKUON;

/// Syllables that may geminate at the end of a reading.
pub const GEMINATING: [char; 3] = ['つ', 'ち', 'く'];

/// Returns the forms a reading-initial syllable may take, the syllable itself first.
/// None for syllables that never voice.
pub fn voicing_class(syllable: char) -> Option<&'static [char]> {
    let class: &'static [char] = match syllable {
        // ka
        'か' => &['か', 'が'],
        'き' => &['き', 'ぎ'],
        'く' => &['く', 'ぐ'],
        'け' => &['け', 'げ'],
        'こ' => &['こ', 'ご'],
        // sa
        'さ' => &['さ', 'ざ'],
        'し' => &['し', 'じ'],
        'す' => &['す', 'ず'],
        'せ' => &['せ', 'ぜ'],
        'そ' => &['そ', 'ぞ'],
        // ta, with yotsugana
        'た' => &['た', 'だ'],
        'ち' => &['ち', 'ぢ', 'じ'],
        'つ' => &['つ', 'づ', 'ず'],
        'て' => &['て', 'で'],
        'と' => &['と', 'ど'],
        // ha
        'は' => &['は', 'ば', 'ぱ'],
        'ひ' => &['ひ', 'び', 'ぴ'],
        'ふ' => &['ふ', 'ぶ', 'ぷ'],
        'へ' => &['へ', 'べ', 'ぺ'],
        'ほ' => &['ほ', 'ぼ', 'ぽ'],
        _ => return None,
    };
    Some(class)
}

/// Builds an unanchored regular expression fragment matching every surface form of `reading`.
///
/// The first syllable expands to its voicing class, middle syllables are literal, and a final
/// geminating syllable becomes optional or replaceable by っ. Single-syllable readings
/// only get the voicing expansion.
pub fn expand(reading: &str) -> String {
    let mut fragment = String::new();
    let mut syllables = reading.chars();
    let Some(first) = syllables.next() else {
        return fragment;
    };

    match voicing_class(first) {
        Some(class) => {
            fragment.push('[');
            fragment.extend(class);
            fragment.push(']');
        }
        None => push_literal(&mut fragment, first),
    }

    if let Some(last) = syllables.next_back() {
        for middle in syllables {
            push_literal(&mut fragment, middle);
        }
        if GEMINATING.contains(&last) {
            fragment.push('[');
            fragment.push(last);
            fragment.push(SOKUON);
            fragment.push_str("]?");
        } else {
            push_literal(&mut fragment, last);
        }
    }
    fragment
}

/// Checks whether `observed` is a surface form of `canonical`,
/// i.e. whether the anchored expansion of `canonical` matches `observed`.
pub fn is_equivalent(canonical: &str, observed: &str) -> bool {
    let mut canonical_chars = canonical.chars();
    let mut observed_chars = observed.chars();

    let Some(first) = canonical_chars.next() else {
        // both empty
        return observed.is_empty();
    };
    let Some(observed_first) = observed_chars.next() else {
        return false;
    };
    if !voices_to(first, observed_first) {
        return false;
    }

    let Some(last) = canonical_chars.next_back() else {
        // single syllable
        return observed_chars.next().is_none();
    };
    let Some(rest) = observed_chars.as_str().strip_prefix(canonical_chars.as_str()) else {
        return false;
    };

    let geminating = GEMINATING.contains(&last);
    let mut rest = rest.chars();
    match (rest.next(), rest.next()) {
        (None, _) => geminating,
        (Some(observed_last), None) => {
            observed_last == last || (geminating && observed_last == SOKUON)
        }
        _ => false,
    }
}

fn voices_to(syllable: char, surface: char) -> bool {
    syllable == surface || voicing_class(syllable).map_or(false, |class| class.contains(&surface))
}

fn push_literal(fragment: &mut String, c: char) {
    fragment.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
}

#[cfg(test)]
mod test {
    use super::*;
    use regex::Regex;

    fn anchored(reading: &str) -> Regex {
        Regex::new(&format!("^(?:{})$", expand(reading))).unwrap()
    }

    fn all_hiragana() -> impl Iterator<Item = char> {
        '\u{3041}'..='\u{3096}'
    }

    #[test]
    fn expands_voicing_classes_exactly() {
        for syllable in all_hiragana() {
            let Some(class) = voicing_class(syllable) else {
                continue;
            };
            let regex = anchored(&syllable.to_string());
            for candidate in all_hiragana() {
                assert_eq!(
                    regex.is_match(&candidate.to_string()),
                    class.contains(&candidate),
                    "{syllable} against {candidate}"
                );
            }
        }
    }

    #[test]
    fn unvoiceable_syllables_stay_literal() {
        assert_eq!(expand("な"), "な");
        assert_eq!(expand("が"), "が");
        assert!(voicing_class('ん').is_none());
    }

    #[test]
    fn expands_gemination() {
        assert_eq!(expand("こく"), "[こご][くっ]?");
        assert_eq!(expand("はな"), "[はばぱ]な");
        assert_eq!(expand("あいつ"), "あい[つっ]?");
        // single syllables never geminate
        assert_eq!(expand("つ"), "[つづず]");
    }

    #[test]
    fn empty_reading() {
        assert_eq!(expand(""), "");
        assert!(is_equivalent("", ""));
        assert!(!is_equivalent("", "は"));
        assert!(!is_equivalent("は", ""));
    }

    #[test]
    fn handles_rendaku() {
        assert!(is_equivalent("はな", "ばな"));
        assert!(is_equivalent("はな", "ぱな"));
        assert!(is_equivalent("ひ", "び"));
        assert!(is_equivalent("ちから", "ぢから"));
        assert!(is_equivalent("つき", "ずき"));
        assert!(!is_equivalent("ばな", "はな"));
        assert!(!is_equivalent("はな", "はなし"));
    }

    #[test]
    fn handles_sokuon() {
        assert!(is_equivalent("こく", "こっ"));
        assert!(is_equivalent("こく", "こ"));
        assert!(is_equivalent("とつ", "とっ"));
        assert!(is_equivalent("いち", "いっ"));
        assert!(!is_equivalent("かん", "かっ"));
        assert!(!is_equivalent("く", "っ"));
    }

    #[test]
    fn agrees_with_expansion() {
        let pairs = [
            ("はな", "ばな"),
            ("こく", "ごっ"),
            ("こく", "こ"),
            ("こく", "こくっ"),
            ("がく", "かく"),
            ("ちち", "じっ"),
            ("あいつ", "あい"),
            ("あいつ", "あ"),
            ("み", "み"),
            ("み", "みみ"),
        ];
        for (canonical, observed) in pairs {
            assert_eq!(
                is_equivalent(canonical, observed),
                anchored(canonical).is_match(observed),
                "{canonical} against {observed}"
            );
        }
    }
}
