//! Character classification
//!
//! Every spacing decision downstream keys off the category pair of two
//! adjacent characters, so classification is a total, pure function of the
//! code point.

use crate::types::Category;

/// Classify a character
///
/// Unlisted code points fall into [`Category::Other`] and never take part in
/// spacing rules.
pub fn classify(ch: char) -> Category {
    if ch.is_whitespace() {
        Category::Whitespace
    } else if is_digit(ch) {
        Category::Digit
    } else if is_latin_letter(ch) {
        Category::LatinLetter
    } else if ch.is_ascii_punctuation() {
        Category::AsciiPunctuation
    } else if is_chinese(ch) {
        Category::Chinese
    } else if is_chinese_punctuation(ch) {
        Category::ChinesePunctuation
    } else {
        Category::Other
    }
}

#[inline]
fn is_digit(ch: char) -> bool {
    matches!(ch, '0'..='9' | '０'..='９')
}

#[inline]
fn is_latin_letter(ch: char) -> bool {
    match ch {
        'a'..='z' | 'A'..='Z' | 'ａ'..='ｚ' | 'Ａ'..='Ｚ' => true,
        '\u{00D7}' | '\u{00F7}' => false,
        '\u{00C0}'..='\u{024F}' => true,
        _ => false,
    }
}

#[inline]
fn is_chinese(ch: char) -> bool {
    matches!(ch,
        '\u{4E00}'..='\u{9FFF}'     // CJK Unified Ideographs
        | '\u{3400}'..='\u{4DBF}'   // Extension A
        | '\u{F900}'..='\u{FAFF}'   // Compatibility Ideographs
        | '\u{20000}'..='\u{3134F}' // Extensions B-G
    )
}

#[inline]
fn is_chinese_punctuation(ch: char) -> bool {
    matches!(ch,
        '\u{3001}'..='\u{303F}'   // CJK Symbols and Punctuation
        | '\u{2010}'..='\u{2027}' // dashes, curly quotes, ellipsis
        | '\u{FF01}'..='\u{FF0F}'
        | '\u{FF1A}'..='\u{FF20}'
        | '\u{FF3B}'..='\u{FF40}'
        | '\u{FF5B}'..='\u{FF65}'
        | '\u{FE30}'..='\u{FE4F}' // CJK Compatibility Forms
        | '\u{00B7}'
    )
}

/// Line terminators; state never carries across these
#[inline]
pub fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Whitespace that is not a line break
#[inline]
pub fn is_horizontal_space(ch: char) -> bool {
    ch.is_whitespace() && !is_line_break(ch)
}

/// Punctuation that hugs the content before it: `, . : ; ? !`
#[inline]
pub fn is_closing_punctuation(ch: char) -> bool {
    matches!(ch, ',' | '.' | ':' | ';' | '?' | '!')
}

/// ASCII opening brackets
#[inline]
pub fn is_opening_bracket(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{')
}

/// ASCII closing brackets
#[inline]
pub fn is_closing_bracket(ch: char) -> bool {
    matches!(ch, ')' | ']' | '}')
}

/// Opening punctuation of either script, used as quote context
#[inline]
pub fn is_opening_punctuation(ch: char) -> bool {
    is_opening_bracket(ch)
        || matches!(
            ch,
            '（' | '［' | '｛' | '【' | '《' | '〈' | '「' | '『' | '〔' | '“' | '‘'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_categories() {
        assert_eq!(classify('中'), Category::Chinese);
        assert_eq!(classify('a'), Category::LatinLetter);
        assert_eq!(classify('Z'), Category::LatinLetter);
        assert_eq!(classify('7'), Category::Digit);
        assert_eq!(classify(','), Category::AsciiPunctuation);
        assert_eq!(classify('，'), Category::ChinesePunctuation);
        assert_eq!(classify(' '), Category::Whitespace);
        assert_eq!(classify('\n'), Category::Whitespace);
    }

    #[test]
    fn test_full_width_forms() {
        assert_eq!(classify('３'), Category::Digit);
        assert_eq!(classify('Ａ'), Category::LatinLetter);
        assert_eq!(classify('！'), Category::ChinesePunctuation);
        assert_eq!(classify('：'), Category::ChinesePunctuation);
        assert_eq!(classify('（'), Category::ChinesePunctuation);
        assert_eq!(classify('～'), Category::ChinesePunctuation);
        // Ideographic space is whitespace, not punctuation
        assert_eq!(classify('\u{3000}'), Category::Whitespace);
    }

    #[test]
    fn test_general_punctuation_block() {
        assert_eq!(classify('“'), Category::ChinesePunctuation);
        assert_eq!(classify('’'), Category::ChinesePunctuation);
        assert_eq!(classify('…'), Category::ChinesePunctuation);
        assert_eq!(classify('—'), Category::ChinesePunctuation);
    }

    #[test]
    fn test_latin_extended() {
        assert_eq!(classify('é'), Category::LatinLetter);
        assert_eq!(classify('ß'), Category::LatinLetter);
        assert_eq!(classify('×'), Category::Other);
        assert_eq!(classify('÷'), Category::Other);
    }

    #[test]
    fn test_extension_ideographs() {
        assert_eq!(classify('㐀'), Category::Chinese);
        assert_eq!(classify('\u{20000}'), Category::Chinese);
    }

    #[test]
    fn test_unclassified_is_other() {
        assert_eq!(classify('あ'), Category::Other);
        assert_eq!(classify('한'), Category::Other);
        assert_eq!(classify('😀'), Category::Other);
        assert_eq!(classify('€'), Category::Other);
    }

    #[test]
    fn test_helper_predicates() {
        assert!(is_line_break('\n'));
        assert!(is_line_break('\r'));
        assert!(!is_line_break(' '));
        assert!(is_horizontal_space('\t'));
        assert!(is_horizontal_space('\u{3000}'));
        assert!(!is_horizontal_space('\n'));

        for ch in [',', '.', ':', ';', '?', '!'] {
            assert!(is_closing_punctuation(ch), "{ch}");
        }
        assert!(!is_closing_punctuation('('));
        assert!(is_opening_bracket('['));
        assert!(is_closing_bracket('}'));
        assert!(is_opening_punctuation('「'));
        assert!(!is_opening_punctuation(')'));
    }
}
