//! Classification of single characters.

use unicode_categories::UnicodeCategories;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Checks whether the character is a control character.
///
/// This covers the categories Cc, Cf, Cn, Co and Cs as well as enclosing marks, cf.
/// <https://unicode.org/reports/tr44/> (Table 12). Unassigned code points are judged by the
/// Unicode version of the general category tables. `\t`, `\n` and `\r` are technically control
/// characters but we count them as whitespace.
pub fn is_control(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => false,
        _ => matches!(
            get_general_category(c),
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Unassigned
                | GeneralCategory::PrivateUse
                | GeneralCategory::Surrogate
                | GeneralCategory::EnclosingMark
        ),
    }
}

/// Checks whether the character is a whitespace character.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r') || c.is_separator_space()
}

/// Checks whether the character is a punctuation character.
///
/// All non-alphanumeric ascii characters are treated as punctuation, even if they are not part
/// of the Unicode punctuation categories, eg. `^`, `$` and `` ` ``.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_punctuation()
}

/// Checks whether the character is a CJK ideograph.
///
/// This defines a "chinese character" as anything in the CJK Unicode block:
///   <https://en.wikipedia.org/wiki/CJK_Unified_Ideographs_(Unicode_block)>
///
/// Note that the CJK Unicode block is NOT all Japanese and Korean characters, despite its name.
/// The modern Korean Hangul alphabet is a different block, as is Japanese Hiragana and Katakana.
/// Those alphabets are used to write space-separated words, so they are not treated specially
/// and handled like for all of the other languages.
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(
        c,
        '\u{4E00}'..='\u{9FFF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{20000}'..='\u{2A6DF}'
            | '\u{2A700}'..='\u{2B73F}'
            | '\u{2B740}'..='\u{2B81F}'
            | '\u{2B820}'..='\u{2CEAF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{2F800}'..='\u{2FA1F}'
    )
}

/// Checks whether the character is a non-spacing combining mark.
pub fn is_combining_mark(c: char) -> bool {
    c.is_mark_nonspacing()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest(
        c,
        expected,
        case('\u{0}', true),
        case('\u{7}', true),
        case('\u{7f}', true),
        case('\u{200b}', true), // zero width space, Cf
        case('\u{e000}', true), // private use
        case('\u{378}', true),  // unassigned
        case('\u{ffff}', true), // noncharacter
        case('\u{10ffff}', true),
        case('\u{20dd}', true), // combining enclosing circle
        case('\t', false),
        case('\n', false),
        case('\r', false),
        case(' ', false),
        case('a', false),
        case('\u{301}', false)
    )]
    fn test_is_control(c: char, expected: bool) {
        assert_eq!(is_control(c), expected);
    }

    #[rstest(
        c,
        expected,
        case(' ', true),
        case('\t', true),
        case('\n', true),
        case('\r', true),
        case('\u{a0}', true),
        case('\u{3000}', true),
        case('\u{2028}', false),
        case('\u{b}', false),
        case('a', false),
        case('-', false)
    )]
    fn test_is_whitespace(c: char, expected: bool) {
        assert_eq!(is_whitespace(c), expected);
    }

    #[test]
    fn test_is_punctuation_ascii() {
        let ascii = (33..=47).chain(58..=64).chain(91..=96).chain(123..=126);
        assert!(ascii.map(char::from).all(is_punctuation));
        assert!(('0'..='9').chain('a'..='z').chain('A'..='Z').all(|c| !is_punctuation(c)));
        assert!(!is_punctuation(' '));
    }

    #[rstest(
        c,
        expected,
        case('\u{2014}', true), // em dash
        case('\u{201c}', true), // left double quotation mark
        case('\u{201d}', true), // right double quotation mark
        case('\u{3002}', true), // ideographic full stop
        case('\u{ff0c}', true), // fullwidth comma
        case('\u{a1}', true),   // inverted exclamation mark
        case('\u{20ac}', false), // euro sign is a symbol
        case('\u{e9}', false)
    )]
    fn test_is_punctuation_unicode(c: char, expected: bool) {
        assert_eq!(is_punctuation(c), expected);
    }

    #[rstest(
        c,
        expected,
        case('\u{4e00}', true),
        case('\u{9fff}', true),
        case('\u{3400}', true),
        case('\u{20000}', true),
        case('\u{2b820}', true),
        case('\u{f900}', true),
        case('\u{2fa1f}', true),
        case('\u{ac00}', false), // hangul
        case('\u{3042}', false), // hiragana
        case('\u{30a2}', false), // katakana
        case('a', false)
    )]
    fn test_is_cjk_ideograph(c: char, expected: bool) {
        assert_eq!(is_cjk_ideograph(c), expected);
    }

    #[test]
    fn test_is_combining_mark() {
        assert!(is_combining_mark('\u{301}'));
        assert!(is_combining_mark('\u{308}'));
        assert!(!is_combining_mark('e'));
        assert!(!is_combining_mark('\u{20dd}'));
    }
}
