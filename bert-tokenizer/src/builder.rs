use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use displaydoc::Display;
use log::{debug, warn};
use num_traits::{FromPrimitive, ToPrimitive};
use thiserror::Error;

use crate::{
    config::{Config, SpecialTokens},
    model::{
        vocab::{Vocab, VocabError},
        WordPiece,
    },
    post_tokenizer::PostTokenizer,
    pre_tokenizer::BasicTokenizer,
    tokenizer::Tokenizer,
};

/// A builder to create a [`Tokenizer`].
pub struct Builder<N> {
    vocab: Vocab<N>,
    config: Config,
}

/// The potential errors of the builder.
#[derive(Debug, Display, Error)]
pub enum BuilderError {
    /// Failed to load the vocabulary: {0}
    Vocab(#[from] VocabError),
}

impl<N> Builder<N>
where
    N: FromPrimitive + ToPrimitive + Copy,
{
    /// Creates a [`Tokenizer`] builder from a vocabulary file.
    ///
    /// The default settings are the same as for [`new()`].
    ///
    /// [`new()`]: Builder::new
    pub fn from_file(vocab: impl AsRef<Path>) -> Result<Self, BuilderError> {
        let vocab = File::open(vocab).map_err(VocabError::Io)?;
        Self::new(BufReader::new(vocab))
    }

    /// Creates a [`Tokenizer`] builder from a vocabulary with one token per line.
    ///
    /// The default settings are the same as for [`from_vocab()`].
    ///
    /// [`from_vocab()`]: Builder::from_vocab
    pub fn new(vocab: impl BufRead) -> Result<Self, BuilderError> {
        Ok(Self::from_vocab(Vocab::parse(vocab)?))
    }

    /// Creates a [`Tokenizer`] builder from the lines of a vocabulary.
    ///
    /// The default settings are the same as for [`from_vocab()`].
    ///
    /// [`from_vocab()`]: Builder::from_vocab
    pub fn from_lines<I>(lines: I) -> Result<Self, BuilderError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Ok(Self::from_vocab(Vocab::from_lines(lines)?))
    }
}

impl<N> Builder<N> {
    /// Creates a [`Tokenizer`] builder from a parsed vocabulary.
    ///
    /// The default settings are:
    /// - Lowercasing and accent stripping.
    /// - The basic tokenizer runs before the word piece model.
    /// - Chinese characters are separated.
    /// - No words are exempt from lowercasing and splitting.
    /// - The special tokens `"[UNK]"`, `"[SEP]"`, `"[PAD]"`, `"[CLS]"` and `"[MASK]"`.
    /// - `100` maximum characters per word.
    pub fn from_vocab(vocab: Vocab<N>) -> Self {
        Self {
            vocab,
            config: Config::default(),
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Configures the lowercasing and accent stripping.
    ///
    /// Defaults to `true`.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.config.lowercase = lowercase;
        self
    }

    /// Configures the basic tokenizer.
    ///
    /// If disabled, the word piece model runs directly on the whitespace separated words of the
    /// raw sequence. Defaults to `true`.
    pub fn with_basic_tokenize(mut self, basic_tokenize: bool) -> Self {
        self.config.basic_tokenize = basic_tokenize;
        self
    }

    /// Configures the separation of chinese characters.
    ///
    /// Defaults to `true`.
    pub fn with_chinese_chars(mut self, chinese_chars: bool) -> Self {
        self.config.chinese_chars = chinese_chars;
        self
    }

    /// Configures the words which are neither lowercased nor split on punctuation.
    ///
    /// Defaults to none.
    pub fn with_never_split(
        mut self,
        never_split: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.config.never_split = never_split
            .into_iter()
            .map(Into::into)
            .collect::<HashSet<_>>();
        self
    }

    /// Configures the special tokens.
    ///
    /// Defaults to `"[UNK]"`, `"[SEP]"`, `"[PAD]"`, `"[CLS]"` and `"[MASK]"`.
    pub fn with_special_tokens(mut self, special_tokens: SpecialTokens) -> Self {
        self.config.special_tokens = special_tokens;
        self
    }

    /// Configures the maximum number of characters per word.
    ///
    /// Longer words are replaced by the unknown token. Defaults to `100`.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.config.max_chars = max_chars;
        self
    }

    /// Builds the tokenizer.
    ///
    /// Special tokens which are missing from the vocabulary are only reported, looking up their
    /// ids fails later on.
    pub fn build(self) -> Tokenizer<N> {
        let Self { vocab, config } = self;
        for token in config.special_tokens.iter() {
            if !vocab.contains(token) {
                warn!("The special token '{}' is missing from the vocabulary", token);
            }
        }

        let basic_tokenizer = config.basic_tokenize.then(|| {
            BasicTokenizer::new(
                config.lowercase,
                config.chinese_chars,
                config.never_split.clone(),
            )
        });
        let special_tokens = &config.special_tokens;
        let model = WordPiece::new(vocab, special_tokens.unk(), config.max_chars);
        let post_tokenizer = PostTokenizer::new(special_tokens.cls(), special_tokens.sep());
        debug!("Built a tokenizer with {:?}", config);

        Tokenizer {
            basic_tokenizer,
            model,
            post_tokenizer,
            config,
        }
    }
}
