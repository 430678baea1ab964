//! Display-width word wrapping.
//!
//! The page is a pre-wrapped document: sections wrap their text for the
//! current content width and the renderer only slices lines. Wrapping is
//! greedy on words, measured in display columns (wide characters count as
//! two), with oversized words hard-broken at grapheme boundaries.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Wraps `text` to at most `width` display columns per line.
///
/// Always returns at least one (possibly empty) line for a positive width,
/// so callers can rely on `wrap_text(s, w).len()` as a stable row count.
/// A zero width yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            // Hard-break a word that cannot fit on any line.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for grapheme in word.graphemes(true) {
                let grapheme_width = grapheme.width();
                if current_width + grapheme_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push_str(grapheme);
                current_width += grapheme_width;
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            word_width + 1
        };
        if current_width + needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn no_line_exceeds_width() {
        use unicode_width::UnicodeWidthStr;

        let text = "I'm a Web Developer passionate about crafting interactive and beautiful web experiences.";
        for width in [10, 24, 37, 80] {
            for line in wrap_text(text, width) {
                assert!(line.width() <= width, "{line:?} wider than {width}");
            }
        }
    }

    #[test]
    fn oversized_word_is_hard_broken() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wide_characters_count_double() {
        use unicode_width::UnicodeWidthStr;

        let lines = wrap_text("你好 世界 你好", 5);
        for line in &lines {
            assert!(line.width() <= 5);
        }
        assert!(lines.len() >= 2);
    }

    #[test]
    fn empty_text_yields_one_blank_line() {
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("   ", 10), vec![""]);
    }

    #[test]
    fn zero_width_yields_nothing() {
        assert!(wrap_text("anything", 0).is_empty());
    }
}
