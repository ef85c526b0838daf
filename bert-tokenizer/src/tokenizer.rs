use std::{fmt, iter::repeat};

use displaydoc::Display;
use num_traits::{FromPrimitive, Num, ToPrimitive};
use thiserror::Error;

use crate::{
    config::Config,
    model::{vocab::Vocab, WordPiece, CONTINUING_SUBWORD_PREFIX},
    post_tokenizer::PostTokenizer,
    pre_tokenizer::BasicTokenizer,
};

/// Splits a sequence into tokens.
pub trait Tokenize {
    /// Tokenizes the sequence.
    fn tokenize(&self, sequence: &str) -> Vec<String>;
}

/// The potential errors of the tokenizer.
#[derive(Debug, Display, Error, PartialEq)]
pub enum TokenizerError {
    /// The token '{0}' doesn't exist in the vocabulary
    UnknownToken(String),
    /// The id {0} doesn't exist in the vocabulary
    UnknownId(String),
}

/// A Bert tokenizer.
///
/// Can be created via the [`Builder`] and consists of an optional Bert basic tokenizer, a Bert word
/// piece model and a Bert post-tokenizer.
///
/// [`Builder`]: crate::Builder
#[derive(Clone, Debug)]
pub struct Tokenizer<N> {
    pub(crate) basic_tokenizer: Option<BasicTokenizer>,
    pub(crate) model: WordPiece<N>,
    pub(crate) post_tokenizer: PostTokenizer,
    pub(crate) config: Config,
}

impl<N> Tokenize for Tokenizer<N> {
    fn tokenize(&self, sequence: &str) -> Vec<String> {
        match self.basic_tokenizer {
            Some(ref basic_tokenizer) => basic_tokenizer
                .tokenize(sequence)
                .iter()
                .flat_map(|word| self.model.tokenize(word))
                .collect(),
            None => self.model.tokenize(sequence),
        }
    }
}

impl<N> Tokenizer<N> {
    /// Gets the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the vocabulary.
    pub fn vocab(&self) -> &Vocab<N> {
        self.model.vocab()
    }

    /// The number of distinct tokens in the vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.model.vocab().len()
    }

    /// Encloses the tokens by the class and separation tokens.
    pub fn add_special_tokens(&self, tokens: Vec<String>) -> Vec<String> {
        self.post_tokenizer.post_tokenize(tokens)
    }

    /// Joins the tokens by whitespace and removes the continuing subword prefixes.
    ///
    /// This doesn't restore the original spacing or casing of the sequence.
    pub fn convert_tokens_to_string(&self, tokens: &[impl AsRef<str>]) -> String {
        tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                token
                    .strip_prefix(CONTINUING_SUBWORD_PREFIX)
                    .unwrap_or(token)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Derives the attention mask from the ids.
    ///
    /// All ids up to the first zero id are masked by one, the zero id and everything after it are
    /// kept as they are. This assumes that the id zero is reserved for padding, a vocabulary with
    /// a real token at line zero produces wrong masks.
    pub fn convert_tokens_to_masks(&self, ids: &[N]) -> Vec<N>
    where
        N: Num + Copy,
    {
        let padding = ids.iter().position(N::is_zero).unwrap_or(ids.len());
        repeat(N::one())
            .take(padding)
            .chain(ids[padding..].iter().copied())
            .collect()
    }
}

impl<N> Tokenizer<N>
where
    N: FromPrimitive + ToPrimitive + Copy,
{
    /// Looks up the ids of the tokens.
    ///
    /// # Errors
    /// Fails if a token doesn't exist in the vocabulary.
    pub fn convert_tokens_to_ids(
        &self,
        tokens: &[impl AsRef<str>],
    ) -> Result<Vec<N>, TokenizerError> {
        tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                self.vocab()
                    .id_of(token)
                    .ok_or_else(|| TokenizerError::UnknownToken(token.to_string()))
            })
            .collect()
    }

    /// Looks up the tokens of the ids.
    ///
    /// # Errors
    /// Fails if an id doesn't exist in the vocabulary.
    pub fn convert_ids_to_tokens(&self, ids: &[N]) -> Result<Vec<String>, TokenizerError>
    where
        N: fmt::Display,
    {
        ids.iter()
            .map(|&id| {
                self.vocab()
                    .token_of(id)
                    .map(String::from)
                    .ok_or_else(|| TokenizerError::UnknownId(id.to_string()))
            })
            .collect()
    }
}
