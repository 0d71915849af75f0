//! Tag text normalization.
//!
//! Raw tag values may carry any Unicode. Playlist titles are reduced to plain
//! ASCII: diacritics are folded to their base letters first, and whatever
//! still isn't ASCII is dropped by a printable-range filter. Control
//! characters never survive, so a title always stays on one line.

use unaccent::unaccent;

/// Normalize raw tag text for display in a playlist title.
pub fn normalize(text: &str) -> String {
    let folded = unaccent(text);
    match transliterate(&folded) {
        Some(ascii) => ascii,
        None => printable_filter(&folded),
    }
}

/// Accept the folded text only when nothing outside ASCII survived.
/// ASCII control characters become spaces.
fn transliterate(folded: &str) -> Option<String> {
    if !folded.is_ascii() {
        return None;
    }
    Some(
        folded
            .chars()
            .map(|c| if c.is_ascii_control() { ' ' } else { c })
            .collect(),
    )
}

/// Keep characters with code points in `32..=122`; drop everything else.
pub fn printable_filter(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let o = u32::from(*c);
            o > 31 && o < 123
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_diacritics() {
        assert_eq!(normalize("Café"), "Cafe");
        assert_eq!(normalize("Été"), "Ete");
        assert_eq!(normalize("Déjà Vu"), "Deja Vu");
    }

    #[test]
    fn normalize_leaves_plain_ascii_alone() {
        assert_eq!(normalize("Plain {braces} ~ok~"), "Plain {braces} ~ok~");
    }

    #[test]
    fn normalize_falls_back_to_filter_for_unfoldable_text() {
        assert_eq!(normalize("Motörhead 東京"), "Motorhead ");
    }

    #[test]
    fn normalize_turns_control_characters_into_spaces() {
        assert_eq!(normalize("Part 1\nPart 2"), "Part 1 Part 2");
        assert_eq!(normalize("a\tb\r\u{7f}c"), "a b  c");
        assert_eq!(normalize("Déjà\nVu"), "Deja Vu");
    }

    #[test]
    fn printable_filter_drops_controls_and_upper_ascii_symbols() {
        assert_eq!(printable_filter("a\tb\u{7f}c{|}~d"), "abcd");
        assert_eq!(printable_filter("日本"), "");
        assert_eq!(printable_filter(""), "");
    }
}
