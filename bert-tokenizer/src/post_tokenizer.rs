use std::iter::once;

use crate::SmallString;

/// A Bert post-tokenizer.
///
/// Encloses a tokenized sequence by the class and separation tokens.
#[derive(Clone, Debug)]
pub struct PostTokenizer {
    cls_token: SmallString,
    sep_token: SmallString,
}

impl PostTokenizer {
    pub(crate) fn new(cls: impl AsRef<str>, sep: impl AsRef<str>) -> Self {
        Self {
            cls_token: cls.as_ref().into(),
            sep_token: sep.as_ref().into(),
        }
    }

    pub(crate) fn post_tokenize(&self, tokens: Vec<String>) -> Vec<String> {
        once(self.cls_token.to_string())
            .chain(tokens)
            .chain(once(self.sep_token.to_string()))
            .collect()
    }
}
