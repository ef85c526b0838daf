pub mod category;

use std::iter::once;

use crate::normalizer::category::{is_cjk_ideograph, is_control, is_whitespace};

/// Removes invalid and control characters and replaces all sorts of whitespace by ` `.
pub fn clean_text(sequence: &str) -> String {
    sequence
        .chars()
        .filter(|&c| c != '\0' && c != '\u{fffd}' && !is_control(c))
        .map(|c| if is_whitespace(c) { ' ' } else { c })
        .collect()
}

/// Puts spaces around CJK ideographs so they get split.
pub fn tokenize_chinese_chars(sequence: &str) -> String {
    let mut normalized = String::with_capacity(sequence.len());
    normalized.extend(sequence.chars().flat_map(|c| {
        let (left, right) = if is_cjk_ideograph(c) {
            (Some(' '), Some(' '))
        } else {
            (None, None)
        };
        left.into_iter().chain(once(c)).chain(right)
    }));
    normalized
}

/// A Bert normalizer.
///
/// Always cleans the text and optionally separates chinese characters.
#[derive(Clone, Copy, Debug)]
pub struct Normalizer {
    handle_chinese_chars: bool,
}

impl Default for Normalizer {
    /// Creates a normalizer which separates chinese characters.
    fn default() -> Self {
        Self::new(true)
    }
}

impl Normalizer {
    /// Creates a normalizer.
    pub fn new(handle_chinese_chars: bool) -> Self {
        Self {
            handle_chinese_chars,
        }
    }

    /// Normalizes the sequence.
    pub fn normalize(&self, sequence: &str) -> String {
        let normalized = clean_text(sequence);
        if self.handle_chinese_chars {
            tokenize_chinese_chars(&normalized)
        } else {
            normalized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("Hello\u{0}World\u{fffd}!"), "HelloWorld!");
        assert_eq!(clean_text("a\tb\nc\rd\u{a0}e"), "a b c d e");
        assert_eq!(clean_text("zero\u{200b}width"), "zerowidth");
        assert_eq!(clean_text("\u{7}\u{1b}"), "");
        assert_eq!(clean_text("a\u{378}b\u{ffff}c\u{e000}d"), "abcd");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_clean_text_keeps_length() {
        let sequence = "  Ünïcödé\u{3000}\u{feff}text ";
        let cleaned = clean_text(sequence);
        assert!(cleaned.chars().count() <= sequence.chars().count());
        assert_eq!(cleaned, "  Ünïcödé text ");
    }

    #[test]
    fn test_tokenize_chinese_chars() {
        assert_eq!(tokenize_chinese_chars("ab"), "ab");
        assert_eq!(tokenize_chinese_chars("野口 Rika"), " 野  口  Rika");
        assert_eq!(tokenize_chinese_chars("한국어"), "한국어");
        assert_eq!(tokenize_chinese_chars("ひらがな"), "ひらがな");
    }

    #[test]
    fn test_normalize() {
        let sequence = "所有\tdata";
        assert_eq!(Normalizer::new(true).normalize(sequence), " 所  有  data");
        assert_eq!(Normalizer::new(false).normalize(sequence), "所有 data");
        assert_eq!(Normalizer::default().normalize("\u{7}所"), " 所 ");
    }
}
