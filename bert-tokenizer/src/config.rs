use std::collections::HashSet;

use crate::SmallString;

/// The maximum number of tokens per sequence of the Bert models.
///
/// The tokenizer neither truncates nor pads the tokenized sequences to this length.
pub const MAX_LEN: usize = 512;

/// The special tokens of a Bert vocabulary.
#[derive(Clone, Debug, PartialEq)]
pub struct SpecialTokens {
    unk: SmallString,
    sep: SmallString,
    pad: SmallString,
    cls: SmallString,
    mask: SmallString,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self::new("[UNK]", "[SEP]", "[PAD]", "[CLS]", "[MASK]")
    }
}

impl SpecialTokens {
    /// Creates the special tokens.
    pub fn new(
        unk: impl AsRef<str>,
        sep: impl AsRef<str>,
        pad: impl AsRef<str>,
        cls: impl AsRef<str>,
        mask: impl AsRef<str>,
    ) -> Self {
        Self {
            unk: unk.as_ref().into(),
            sep: sep.as_ref().into(),
            pad: pad.as_ref().into(),
            cls: cls.as_ref().into(),
            mask: mask.as_ref().into(),
        }
    }

    /// The token for unknown words.
    pub fn unk(&self) -> &str {
        self.unk.as_str()
    }

    /// The token which separates sequences.
    pub fn sep(&self) -> &str {
        self.sep.as_str()
    }

    /// The token for padding.
    pub fn pad(&self) -> &str {
        self.pad.as_str()
    }

    /// The token which classifies sequences.
    pub fn cls(&self) -> &str {
        self.cls.as_str()
    }

    /// The token for masking.
    pub fn mask(&self) -> &str {
        self.mask.as_str()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        IntoIterator::into_iter([self.unk(), self.sep(), self.pad(), self.cls(), self.mask()])
    }
}

/// The configuration of a [`Tokenizer`].
///
/// [`Tokenizer`]: crate::Tokenizer
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to lowercase the words and strip their accents.
    pub lowercase: bool,
    /// Whether to run the basic tokenizer before the word piece model.
    pub basic_tokenize: bool,
    /// Whether to separate CJK ideographs by whitespace.
    pub chinese_chars: bool,
    /// The words which are neither lowercased nor split by the basic tokenizer.
    pub never_split: HashSet<String>,
    /// The special tokens.
    pub special_tokens: SpecialTokens,
    /// The maximum number of characters per word, longer words are unknown.
    pub max_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lowercase: true,
            basic_tokenize: true,
            chinese_chars: true,
            never_split: HashSet::new(),
            special_tokens: SpecialTokens::default(),
            max_chars: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = Config::default();
        assert!(config.lowercase);
        assert!(config.basic_tokenize);
        assert!(config.chinese_chars);
        assert!(config.never_split.is_empty());
        assert_eq!(config.max_chars, 100);

        let special_tokens = config.special_tokens;
        assert_eq!(special_tokens.unk(), "[UNK]");
        assert_eq!(special_tokens.sep(), "[SEP]");
        assert_eq!(special_tokens.pad(), "[PAD]");
        assert_eq!(special_tokens.cls(), "[CLS]");
        assert_eq!(special_tokens.mask(), "[MASK]");
    }

    #[test]
    fn test_special_tokens_iter() {
        let special_tokens = SpecialTokens::new("<unk>", "<sep>", "<pad>", "<cls>", "<mask>");
        assert_eq!(
            special_tokens.iter().collect::<Vec<_>>(),
            ["<unk>", "<sep>", "<pad>", "<cls>", "<mask>"],
        );
    }
}
