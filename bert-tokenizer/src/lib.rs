#![cfg_attr(doc, forbid(broken_intra_doc_links, private_intra_doc_links))]
//! A Bert tokenizer which converts sequences into word piece tokens and their ids.
//!
//! The tokenizer is based on a word piece vocabulary and consists of a basic tokenizer, which
//! cleans the sequence and splits it into words, and a word piece model, which splits the words
//! greedily into the longest known subwords. The ids can be of any numerical data type which
//! implements [`Num`]` + `[`FromPrimitive`]` + `[`ToPrimitive`]` + `[`Copy`].
//!
//! The basic tokenizer is configurable by:
//! - Lowercasing characters and stripping their accents.
//! - Separating Chinese characters by whitespace so they get split.
//! - A set of words which are never split or lowercased.
//!
//! Control characters are always removed and all sorts of whitespace replaced by ` `. The basic
//! tokenizer can be skipped altogether, in which case the word piece model runs on the raw
//! whitespace separated words.
//!
//! The word piece model is configurable by:
//! - The unknown token.
//! - The maximum number of characters per word.
//!
//! ```no_run
//! use bert_tokenizer::{Builder, Tokenize};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tokenizer = Builder::<u32>::from_file("vocab.txt")?
//!         .with_lowercase(true)
//!         .with_chinese_chars(true)
//!         .with_max_chars(100)
//!         .build();
//!
//!     let tokens = tokenizer.tokenize("This is a sequence.");
//!     let ids = tokenizer.convert_tokens_to_ids(&tokens)?;
//!     let masks = tokenizer.convert_tokens_to_masks(&ids);
//!
//!     Ok(())
//! }
//! ```
//!
//! [`Num`]: num_traits::Num
//! [`FromPrimitive`]: num_traits::FromPrimitive
//! [`ToPrimitive`]: num_traits::ToPrimitive

mod builder;
mod config;
mod model;
mod normalizer;
mod post_tokenizer;
mod pre_tokenizer;
mod tokenizer;

pub use crate::{
    builder::{Builder, BuilderError},
    config::{Config, SpecialTokens, MAX_LEN},
    model::{
        vocab::{Vocab, VocabError},
        WordPiece,
        CONTINUING_SUBWORD_PREFIX,
    },
    normalizer::{
        category::{is_cjk_ideograph, is_combining_mark, is_control, is_punctuation, is_whitespace},
        clean_text,
        tokenize_chinese_chars,
        Normalizer,
    },
    pre_tokenizer::{
        segment::{split_on_punctuation, strip_accents, whitespace_tokenize},
        BasicTokenizer,
    },
    tokenizer::{Tokenize, Tokenizer, TokenizerError},
};

/// A stack allocated string with a maximum length of eight bytes.
type SmallString = smallstr::SmallString<[u8; 8]>;
