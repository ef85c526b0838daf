use std::{collections::HashMap, io::BufRead};

use displaydoc::Display;
use log::debug;
use num_traits::{FromPrimitive, ToPrimitive};
use thiserror::Error;

/// A word piece vocabulary.
///
/// Maps tokens to ids and vice versa. The id of a token is the index of its line in the
/// vocabulary source and the token is the content of its line without the line terminator.
/// Empty lines don't yield a token but still count towards the ids of the following tokens. If a
/// token is listed more than once, its last occurrence wins.
#[derive(Clone, Debug)]
pub struct Vocab<N> {
    ids: HashMap<String, N>,
    tokens: Vec<Option<String>>,
}

/// The potential errors of the vocabulary.
#[derive(Debug, Display, Error)]
pub enum VocabError {
    /// Failed to read the vocabulary: {0}
    Io(#[from] std::io::Error),
    /// The vocabulary line {0} overflows the numerical data type of the ids
    IdOverflow(usize),
}

impl<N> Vocab<N>
where
    N: FromPrimitive + ToPrimitive + Copy,
{
    /// Reads the vocabulary with one token per line.
    pub fn parse(vocab: impl BufRead) -> Result<Self, VocabError> {
        let lines = vocab.lines().collect::<Result<Vec<_>, _>>()?;
        Self::from_lines(lines)
    }

    /// Creates the vocabulary from its lines.
    pub fn from_lines<I>(lines: I) -> Result<Self, VocabError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let lines = lines.into_iter();
        let mut ids = HashMap::with_capacity(lines.size_hint().0);
        let mut tokens = Vec::with_capacity(lines.size_hint().0);

        for (idx, line) in lines.enumerate() {
            let token = line.as_ref().trim_end_matches(&['\r', '\n'][..]);
            let id = N::from_usize(idx).ok_or(VocabError::IdOverflow(idx))?;
            if token.is_empty() {
                tokens.push(None);
                continue;
            }
            if let Some(duplicate) = ids.insert(token.to_string(), id) {
                if let Some(slot) = duplicate.to_usize().and_then(|idx| tokens.get_mut(idx)) {
                    *slot = None;
                }
            }
            tokens.push(Some(token.to_string()));
        }
        debug!("Loaded a vocabulary with {} tokens", ids.len());

        Ok(Self { ids, tokens })
    }

    /// Gets the id of the token.
    pub fn id_of(&self, token: &str) -> Option<N> {
        self.ids.get(token).copied()
    }

    /// Gets the token of the id.
    pub fn token_of(&self, id: N) -> Option<&str> {
        id.to_usize()
            .and_then(|idx| self.tokens.get(idx))
            .and_then(Option::as_deref)
    }
}

impl<N> Vocab<N> {
    /// Checks whether the token is part of the vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }

    /// The number of distinct tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Checks whether the vocabulary has no tokens.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
