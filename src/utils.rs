//! Character classification

use once_cell::sync::Lazy;
use regex::Regex;

static HAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\p{Han}$").unwrap());
// characters that can't name a slot: non-word characters and decimal digits
static UNNAMEABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\W\d]$").unwrap());

/// The kanji repetition mark.
pub const REPETITION_MARK: char = '々';

/// The small tsu marking gemination.
pub const SOKUON: char = 'っ';

/// Any character of the Han script, 々 and 〇 included.
pub fn is_kanji(c: char) -> bool {
    HAN.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Punctuation and digits can't serve as slot names.
pub fn can_name_slot(c: char) -> bool {
    !UNNAMEABLE.is_match(c.encode_utf8(&mut [0; 4]))
}
