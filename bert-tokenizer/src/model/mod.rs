pub mod vocab;

use std::borrow::Cow;

use log::trace;

use crate::{
    model::vocab::Vocab,
    pre_tokenizer::segment::whitespace_tokenize,
    tokenizer::Tokenize,
    SmallString,
};

/// The prefix which marks a subword as the continuation of the previous one.
pub const CONTINUING_SUBWORD_PREFIX: &str = "##";

/// A Bert word piece model.
///
/// Splits each whitespace separated word greedily into the longest subwords of the vocabulary.
/// Words which can't be split completely or which are too long are replaced by the unknown token.
#[derive(Clone, Debug)]
pub struct WordPiece<N> {
    vocab: Vocab<N>,
    unk_token: SmallString,
    max_chars: usize,
}

impl<N> WordPiece<N> {
    /// Creates a word piece model.
    pub fn new(vocab: Vocab<N>, unk: impl AsRef<str>, max_chars: usize) -> Self {
        Self {
            vocab,
            unk_token: unk.as_ref().into(),
            max_chars,
        }
    }

    /// Gets the vocabulary.
    pub fn vocab(&self) -> &Vocab<N> {
        &self.vocab
    }

    /// Gets the unknown token.
    pub fn unk_token(&self) -> &str {
        self.unk_token.as_str()
    }

    fn unknown(&self, word: &str) -> Vec<String> {
        trace!("Replaced the word '{}' by the unknown token", word);
        vec![self.unk_token.to_string()]
    }

    fn tokenize_word(&self, word: &str) -> Vec<String> {
        if word.chars().count() > self.max_chars {
            return self.unknown(word);
        }

        let mut start = 0;
        let mut sub_tokens = Vec::new();
        while start < word.len() {
            let mut end = word.len();
            let mut sub_token = None;

            while start < end {
                let substr: Cow<str> = if start > 0 {
                    Cow::Owned(format!("{}{}", CONTINUING_SUBWORD_PREFIX, &word[start..end]))
                } else {
                    Cow::Borrowed(&word[start..end])
                };
                if self.vocab.contains(substr.as_ref()) {
                    sub_token = Some(substr.into_owned());
                    break;
                }
                end -= word[start..end].chars().last().map_or(1, char::len_utf8);
            }

            match sub_token {
                Some(sub_token) => sub_tokens.push(sub_token),
                None => return self.unknown(word),
            }
            start = end;
        }

        sub_tokens
    }
}

impl<N> Tokenize for WordPiece<N> {
    fn tokenize(&self, sequence: &str) -> Vec<String> {
        whitespace_tokenize(sequence)
            .into_iter()
            .flat_map(|word| self.tokenize_word(word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::iter::{once, repeat};

    use rstest::rstest;

    use super::*;

    fn word_piece(tokens: &[&str], max_chars: usize) -> WordPiece<u32> {
        let vocab = Vocab::from_lines(once(&"[UNK]").chain(tokens)).unwrap();
        WordPiece::new(vocab, "[UNK]", max_chars)
    }

    #[rstest(
        sequence,
        expected,
        case("unaffable", &["un", "##aff", "##able"]),
        case("unaff", &["un", "##aff"]),
        case("un", &["un"]),
        case("able", &["[UNK]"]),
        case("unaffablex", &["[UNK]"]),
        case("unaffable un", &["un", "##aff", "##able", "un"]),
        case("  unaffable\tun  ", &["un", "##aff", "##able", "un"]),
        case("", &[]),
        case("   ", &[])
    )]
    fn test_greedy_longest_match(sequence: &str, expected: &[&str]) {
        let model = word_piece(&["un", "##aff", "##able"], 100);
        assert_eq!(model.tokenize(sequence), expected);
    }

    #[test]
    fn test_longest_match_wins() {
        let model = word_piece(&["un", "##aff", "##able", "unaffable", "unaff"], 100);
        assert_eq!(model.tokenize("unaffable"), ["unaffable"]);
        assert_eq!(model.tokenize("unaffables"), ["[UNK]"]);

        let model = word_piece(&["un", "##aff", "##able", "unaff"], 100);
        assert_eq!(model.tokenize("unaffable"), ["unaff", "##able"]);
    }

    #[test]
    fn test_unknown_word() {
        let model = word_piece(&["a"], 100);
        assert_eq!(model.tokenize("xyz"), ["[UNK]"]);
        assert_eq!(model.tokenize("ax"), ["[UNK]"]);
        assert_eq!(model.tokenize("a xyz a"), ["a", "[UNK]", "a"]);
    }

    #[test]
    fn test_max_chars() {
        let model = word_piece(&["a", "##a"], 100);
        let word = repeat('a').take(101).collect::<String>();
        assert_eq!(model.tokenize(&word), ["[UNK]"]);

        let word = repeat('a').take(100).collect::<String>();
        let tokens = model.tokenize(&word);
        assert_eq!(tokens.len(), 100);
        assert_eq!(tokens[0], "a");
        assert!(tokens[1..].iter().all(|token| token == "##a"));
    }

    #[test]
    fn test_max_chars_counts_chars() {
        let model = word_piece(&["caf", "##\u{e9}"], 4);
        assert_eq!(model.tokenize("caf\u{e9}"), ["caf", "##\u{e9}"]);
        assert_eq!(model.tokenize("caf\u{e9}\u{e9}"), ["[UNK]"]);
    }

    #[test]
    fn test_multibyte() {
        let model = word_piece(&["\u{6570}", "\u{6570}\u{636e}", "##\u{636e}"], 100);
        assert_eq!(model.tokenize("\u{6570}\u{636e}"), ["\u{6570}\u{636e}"]);
        assert_eq!(
            model.tokenize("\u{6570}\u{636e}\u{636e}"),
            ["\u{6570}\u{636e}", "##\u{636e}"],
        );
        assert_eq!(model.tokenize("\u{636e}"), ["[UNK]"]);
    }

    #[test]
    fn test_tokens_are_known() {
        let tokens = ["the", "##re", "is", "a", "##n", "unaff", "##able", "!"];
        let model = word_piece(&tokens, 10);
        let sequence = "there is an unaffable ! thereisan xyz aaaaaaaaaaaaaaaaaaaa";
        for token in model.tokenize(sequence) {
            assert!(model.vocab().contains(&token) || token == model.unk_token());
        }
    }
}
