pub mod segment;

use std::{borrow::Cow, collections::HashSet};

use crate::{
    normalizer::Normalizer,
    pre_tokenizer::segment::{split_on_punctuation, strip_accents, whitespace_tokenize},
    tokenizer::Tokenize,
};

/// A Bert basic tokenizer.
///
/// Cleans the sequence, optionally separates chinese characters, splits it on whitespace,
/// optionally lowercases and strips accents of the words and finally splits them on
/// punctuation. Words which are in the never split set are neither lowercased nor split.
#[derive(Clone, Debug)]
pub struct BasicTokenizer {
    normalizer: Normalizer,
    lowercase: bool,
    never_split: HashSet<String>,
}

impl Default for BasicTokenizer {
    /// Creates a lowercasing basic tokenizer which separates chinese characters.
    fn default() -> Self {
        Self::new(true, true, HashSet::new())
    }
}

impl BasicTokenizer {
    /// Creates a basic tokenizer.
    pub fn new(lowercase: bool, chinese_chars: bool, never_split: HashSet<String>) -> Self {
        Self {
            normalizer: Normalizer::new(chinese_chars),
            lowercase,
            never_split,
        }
    }

    fn normalize_word<'w>(&self, word: &'w str) -> Cow<'w, str> {
        if self.lowercase && !self.never_split.contains(word) {
            strip_accents(&word.to_lowercase()).into()
        } else {
            word.into()
        }
    }
}

impl Tokenize for BasicTokenizer {
    fn tokenize(&self, sequence: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(sequence);
        let pieces = whitespace_tokenize(&normalized)
            .into_iter()
            .flat_map(|word| {
                let word = self.normalize_word(word);
                split_on_punctuation(&word, &self.never_split)
                    .into_iter()
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
            .join(" ");

        whitespace_tokenize(&pieces)
            .into_iter()
            .map(String::from)
            .collect()
    }
}
