//! Greedy word wrapping against a measured width

use crate::types::Font;

/// Width measurement for a run of text in a given font and size.
///
/// The layout engines never measure glyphs themselves; the canvas (or a
/// test double) provides this.
pub trait TextMeasure {
    /// Advance width of `text` in points
    fn measure(&self, text: &str, font: Font, size: f32) -> f32;
}

/// Wrap `text` into lines no wider than `max_width`.
///
/// Words are split on whitespace and packed greedily. A word that is wider
/// than `max_width` on its own still gets a line to itself; nothing is
/// hyphenated or dropped.
pub fn wrap_text<M: TextMeasure + ?Sized>(
    text: &str,
    font: Font,
    font_size: f32,
    max_width: f32,
    measure: &M,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measure.measure(&candidate, font, font_size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is one point wide
    struct Monospace;

    impl TextMeasure for Monospace {
        fn measure(&self, text: &str, _font: Font, _size: f32) -> f32 {
            text.chars().count() as f32
        }
    }

    fn wrap(text: &str, max_width: f32) -> Vec<String> {
        wrap_text(text, Font::Helvetica, 16.0, max_width, &Monospace)
    }

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap("the cat sat", 11.0), vec!["the cat sat"]);
    }

    #[test]
    fn greedy_breaks() {
        assert_eq!(
            wrap("the cat sat on the mat", 7.0),
            vec!["the cat", "sat on", "the mat"]
        );
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        assert_eq!(
            wrap("a hippopotamus b", 5.0),
            vec!["a", "hippopotamus", "b"]
        );
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(wrap("  one \n two\tthree ", 100.0), vec!["one two three"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap("", 10.0).is_empty());
        assert!(wrap("   ", 10.0).is_empty());
    }

    #[test]
    fn tokens_are_preserved_in_order() {
        let text = "Once upon a time a very small dragon lived under the old stone bridge";
        for max_width in [1.0, 5.0, 12.0, 30.0, 200.0] {
            let lines = wrap(text, max_width);
            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
            let original: Vec<&str> = text.split_whitespace().collect();
            assert_eq!(rejoined, original, "max_width = {max_width}");
        }
    }
}
