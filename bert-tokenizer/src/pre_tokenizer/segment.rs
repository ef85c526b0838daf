use std::collections::HashSet;

use unicode_normalization_alignments::UnicodeNormalization;

use crate::normalizer::category::{is_combining_mark, is_punctuation, is_whitespace};

/// Splits the sequence on runs of whitespace.
///
/// Whitespace is what [`is_whitespace`] accepts, hence a no-break space separates words while a
/// vertical tab doesn't. Leading and trailing whitespace is ignored, hence an empty or blank
/// sequence has no words.
pub fn whitespace_tokenize(sequence: &str) -> Vec<&str> {
    sequence
        .split(is_whitespace)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Decomposes the word canonically and removes all non-spacing marks.
///
/// The word is not recomposed afterwards.
pub fn strip_accents(word: &str) -> String {
    word.nfd()
        .map(|(c, _)| c)
        .filter(|&c| !is_combining_mark(c))
        .collect()
}

/// Splits the word on punctuation characters.
///
/// Each punctuation character is isolated into its own piece, while runs of other characters
/// stay together. Words which must never be split are kept as they are.
pub fn split_on_punctuation<'w>(word: &'w str, never_split: &HashSet<String>) -> Vec<&'w str> {
    if never_split.contains(word) {
        return vec![word];
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    for (idx, c) in word.char_indices().filter(|&(_, c)| is_punctuation(c)) {
        if start < idx {
            pieces.push(&word[start..idx]);
        }
        start = idx + c.len_utf8();
        pieces.push(&word[idx..start]);
    }
    if start < word.len() {
        pieces.push(&word[start..]);
    }

    pieces
}
