//! Text truncation helpers.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Truncates `text` to `max_width` display columns, appending `…` when cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut result = String::new();
    let mut used = 0usize;
    for grapheme in text.graphemes(true) {
        let grapheme_width = grapheme.width();
        if used + grapheme_width > budget {
            break;
        }
        result.push_str(grapheme);
        used += grapheme_width;
    }
    result.push('…');
    result
}

/// Truncates `text` keeping the end visible, prefixing `…` when cut.
///
/// Input lines use this so the caret end of a long value stays on screen.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut kept: Vec<&str> = Vec::new();
    let mut used = 0usize;
    for grapheme in text.graphemes(true).rev() {
        let grapheme_width = grapheme.width();
        if used + grapheme_width > budget {
            break;
        }
        kept.push(grapheme);
        used += grapheme_width;
    }

    let mut result = String::from("…");
    result.extend(kept.iter().rev().copied());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
        assert_eq!(truncate_start_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
    }

    #[test]
    fn start_truncation_keeps_the_end() {
        assert_eq!(truncate_start_with_ellipsis("hello world", 8), "…o world");
    }

    #[test]
    fn wide_characters_are_measured_in_columns() {
        // Each CJK character is two columns wide.
        let cut = truncate_with_ellipsis("你好世界", 5);
        assert!(cut.width() <= 5);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn zero_width_yields_empty() {
        assert_eq!(truncate_with_ellipsis("abc", 0), "");
        assert_eq!(truncate_start_with_ellipsis("abc", 0), "");
    }
}
