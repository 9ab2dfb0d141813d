//! Value types shared by the normalization passes
//!
//! Everything here lives for a single pipeline run. Nothing is cached
//! between calls, so categories and spans are always recomputed from the
//! current text.

use std::ops::Range;

/// Category of a single code point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// CJK unified ideograph
    Chinese,
    /// ASCII, Latin-1/Extended or full-width Latin letter
    LatinLetter,
    /// ASCII or full-width digit
    Digit,
    /// Half-width ASCII punctuation
    AsciiPunctuation,
    /// Full-width / CJK punctuation
    ChinesePunctuation,
    /// Any whitespace, including line breaks and the ideographic space
    Whitespace,
    /// Everything else (kana, emoji, symbols, ...)
    Other,
}

impl Category {
    /// Latin letter or digit
    #[inline]
    pub fn is_alphanumeric(self) -> bool {
        matches!(self, Category::LatinLetter | Category::Digit)
    }

    /// Chinese, Latin letter or digit
    #[inline]
    pub fn is_content(self) -> bool {
        matches!(
            self,
            Category::Chinese | Category::LatinLetter | Category::Digit
        )
    }
}

/// Kind of ASCII quote character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteKind {
    /// `"`
    Double,
    /// `'`
    Single,
}

impl QuoteKind {
    /// Quote kind for an ASCII quote character
    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '"' => Some(QuoteKind::Double),
            '\'' => Some(QuoteKind::Single),
            _ => None,
        }
    }

    /// The ASCII character for this kind
    pub fn as_char(self) -> char {
        match self {
            QuoteKind::Double => '"',
            QuoteKind::Single => '\'',
        }
    }
}

/// Direction assigned to an ASCII quote character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteRole {
    /// Starts a quoted region
    Opening,
    /// Ends the innermost open region of the same kind
    Closing,
    /// No local evidence either way; resolved against the oldest open quote
    Ambiguous,
}

/// One annotated quote position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteMark {
    /// Character index of the quote
    pub index: usize,
    /// Which quote character
    pub kind: QuoteKind,
    /// Role assigned by the tracker
    pub role: QuoteRole,
    /// Stack depth the quote opened at or closed. `None` for an ambiguous
    /// quote that had nothing to close.
    pub depth: Option<usize>,
}

/// Family a marker span belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerFamily {
    /// Identical multi-character delimiters such as `**`
    Symmetric,
    /// A matched pair of ASCII quotes
    Quote(QuoteKind),
}

/// Half-open interval `[start, end)` over the character sequence covering
/// one paired-marker region, delimiters included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSpan {
    /// Marker family
    pub family: MarkerFamily,
    /// Index of the first character of the opening delimiter
    pub start: usize,
    /// One past the last character of the closing delimiter
    pub end: usize,
    /// Length of each delimiter in characters
    pub delimiter_len: usize,
}

impl MarkerSpan {
    /// Span delimited by a symmetric marker of `delimiter_len` characters
    pub fn symmetric(start: usize, end: usize, delimiter_len: usize) -> Self {
        Self {
            family: MarkerFamily::Symmetric,
            start,
            end,
            delimiter_len,
        }
    }

    /// Span delimited by a pair of quotes
    pub fn quote(kind: QuoteKind, start: usize, end: usize) -> Self {
        Self {
            family: MarkerFamily::Quote(kind),
            start,
            end,
            delimiter_len: 1,
        }
    }

    /// Character range of the opening delimiter
    pub fn open_range(&self) -> Range<usize> {
        self.start..self.start + self.delimiter_len
    }

    /// Character range of the closing delimiter
    pub fn close_range(&self) -> Range<usize> {
        self.end - self.delimiter_len..self.end
    }

    /// Character range between the delimiters
    pub fn interior(&self) -> Range<usize> {
        self.start + self.delimiter_len..self.end - self.delimiter_len
    }
}

/// A maximal run of at least two identical punctuation characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsecutiveRun {
    /// The repeated character
    pub ch: char,
    /// Number of repetitions
    pub len: usize,
    /// Character index of the first repetition
    pub start: usize,
}
