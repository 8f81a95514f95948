//! `yomisplit::guess_split` needs no kanji reading information,
//! but refuses to pick between equally valid splits.

use yomisplit::Guess;

fn main() {
    env_logger::init();

    for (text, reading) in [("食べる", "たべる"), ("物の怪", "もののけ"), ("花見", "はなみ")] {
        match yomisplit::guess_split(text, reading) {
            Ok(Guess::Split(split)) => println!("{text}: {split:?}"),
            Ok(Guess::Ambiguous) => println!("{text}: ambiguous"),
            Err(err) => println!("{text}: {err}"),
        }
    }
}
