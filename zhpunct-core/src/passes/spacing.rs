//! Boundary spacing
//!
//! Two phases over the character buffer:
//!
//! 1. **Removal**: horizontal whitespace between Chinese text (or a closing
//!    bracket, quote or delimiter) and following closing punctuation is
//!    dropped, as is trailing whitespace at line ends. A run of blanks after
//!    sentence punctuation in Chinese prose shrinks to one.
//! 2. **Insertion**: a single space is inserted at Chinese/Latin/digit
//!    boundaries, around bracket and quote groups, and after sentence
//!    punctuation in Chinese prose.
//!
//! Both phases only ever add or remove whitespace, so marker spans are
//! carried through by index remapping rather than re-resolved.

use crate::classifier::{
    classify, is_closing_bracket, is_closing_punctuation, is_horizontal_space, is_line_break,
    is_opening_bracket,
};
use crate::passes::markers::MarkerSpans;
use crate::types::Category;

/// Output of the spacing engine
#[derive(Debug, Clone)]
pub struct Spaced {
    /// Respaced characters
    pub chars: Vec<char>,
    /// Marker spans moved onto `chars`
    pub spans: MarkerSpans,
}

/// Inserts and removes single spaces at script boundaries
#[derive(Debug, Clone, Copy)]
pub struct SpacingEngine {
    trim_trailing_whitespace: bool,
}

impl SpacingEngine {
    /// Create an engine
    pub fn new(trim_trailing_whitespace: bool) -> Self {
        Self {
            trim_trailing_whitespace,
        }
    }

    /// Respace `chars`, keeping `spans` aligned with the result
    pub fn space(&self, chars: &[char], spans: &MarkerSpans) -> Spaced {
        let (trimmed, map) = self.remove_spaces(chars, spans);
        let spans = spans.remap(&map, trimmed.len());

        let (spaced, map) = insert_spaces(&trimmed, &spans);
        let spans = spans.remap(&map, spaced.len());

        Spaced {
            chars: spaced,
            spans,
        }
    }

    /// Phase 1. Returns the kept characters and an old-to-new index map.
    fn remove_spaces(&self, chars: &[char], spans: &MarkerSpans) -> (Vec<char>, Vec<usize>) {
        let n = chars.len();
        let mut drop = vec![false; n];
        let mut i = 0;

        while i < n {
            if !is_horizontal_space(chars[i]) {
                i += 1;
                continue;
            }

            let start = i;
            while i < n && is_horizontal_space(chars[i]) {
                i += 1;
            }

            let at_line_end = i == n || is_line_break(chars[i]);
            let before_closing_punct = i < n
                && is_closing_punctuation(chars[i])
                && start > 0
                && hugs_punctuation(chars, spans, start - 1);

            let after_prose_punct = !at_line_end
                && start > 0
                && is_closing_punctuation(chars[start - 1])
                && continues_prose(chars, start - 1, i);

            if (at_line_end && self.trim_trailing_whitespace) || before_closing_punct {
                drop[start..i].iter_mut().for_each(|d| *d = true);
            } else if after_prose_punct {
                drop[start + 1..i].iter_mut().for_each(|d| *d = true);
            }
        }

        let mut kept = Vec::with_capacity(n);
        let mut map = Vec::with_capacity(n);
        for (&ch, &dropped) in chars.iter().zip(&drop) {
            map.push(kept.len());
            if !dropped {
                kept.push(ch);
            }
        }

        (kept, map)
    }
}

impl Default for SpacingEngine {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Characters that closing punctuation attaches to directly
fn hugs_punctuation(chars: &[char], spans: &MarkerSpans, index: usize) -> bool {
    let ch = chars[index];
    classify(ch) == Category::Chinese || is_closing_bracket(ch) || spans.close_ends_at(index)
}

/// Last non-blank character before the run of closing punctuation that
/// ends at `punct`, or `None` at the start of a line
fn content_before_punctuation(chars: &[char], punct: usize) -> Option<char> {
    let mut run_start = punct;
    while run_start > 0 && is_closing_punctuation(chars[run_start - 1]) {
        run_start -= 1;
    }
    chars[..run_start]
        .iter()
        .rev()
        .copied()
        .find(|&c| !is_horizontal_space(c))
        .filter(|&c| !is_line_break(c))
}

/// Punctuation at `punct` sits in Chinese prose: it follows non-Latin,
/// non-digit content, or `next` is Chinese
fn continues_prose(chars: &[char], punct: usize, next: usize) -> bool {
    match content_before_punctuation(chars, punct) {
        Some(before) => {
            !classify(before).is_alphanumeric() || classify(chars[next]) == Category::Chinese
        }
        None => false,
    }
}

/// Phase 2. Returns the spaced characters and an old-to-new index map.
fn insert_spaces(chars: &[char], spans: &MarkerSpans) -> (Vec<char>, Vec<usize>) {
    let ctx = Context { chars, spans };
    let mut out = Vec::with_capacity(chars.len() + chars.len() / 8);
    let mut map = Vec::with_capacity(chars.len());

    for (i, &ch) in chars.iter().enumerate() {
        map.push(out.len());
        out.push(ch);
        if i + 1 < chars.len() && ctx.needs_space(i) {
            out.push(' ');
        }
    }

    (out, map)
}

/// Read-only view used by the insertion rules
struct Context<'a> {
    chars: &'a [char],
    spans: &'a MarkerSpans,
}

impl Context<'_> {
    fn category(&self, index: usize) -> Category {
        classify(self.chars[index])
    }

    /// ASCII opening bracket, or a quote that opens a resolved pair
    fn opens_group(&self, index: usize) -> bool {
        let ch = self.chars[index];
        is_opening_bracket(ch) || (is_quote(ch) && self.spans.opens_at(index))
    }

    /// ASCII closing bracket, or a quote that closes a resolved pair
    fn closes_group(&self, index: usize) -> bool {
        let ch = self.chars[index];
        is_closing_bracket(ch) || (is_quote(ch) && self.spans.closes_at(index))
    }

    /// First non-blank character after `index` on the same line
    fn content_after(&self, index: usize) -> Option<char> {
        self.chars[index + 1..]
            .iter()
            .copied()
            .find(|&c| !is_horizontal_space(c))
    }

    /// Last non-blank character before `index` on the same line
    fn content_before(&self, index: usize) -> Option<char> {
        self.chars[..index]
            .iter()
            .rev()
            .copied()
            .find(|&c| !is_horizontal_space(c))
    }

    /// Whether one space belongs between `i` and `i + 1`
    fn needs_space(&self, i: usize) -> bool {
        let (a, b) = (self.category(i), self.category(i + 1));
        if a == Category::Whitespace || b == Category::Whitespace {
            return false;
        }

        let is_chinese = |c: Option<char>| c.map(classify) == Some(Category::Chinese);

        // Chinese next to Latin or digits
        if (a == Category::Chinese && b.is_alphanumeric())
            || (a.is_alphanumeric() && b == Category::Chinese)
        {
            return true;
        }

        // Before an opening bracket or quote
        if self.opens_group(i + 1)
            && (a == Category::Chinese
                || (a.is_alphanumeric() && is_chinese(self.content_after(i + 1))))
        {
            return true;
        }

        // After a closing bracket or quote
        if self.closes_group(i)
            && (b == Category::Chinese
                || (b.is_alphanumeric() && is_chinese(self.content_before(i))))
        {
            return true;
        }

        let (ca, cb) = (self.chars[i], self.chars[i + 1]);
        is_closing_punctuation(ca) && !is_closing_punctuation(cb) && self.after_punctuation(i)
    }

    /// Space after sentence punctuation at `i`, followed by `i + 1`
    fn after_punctuation(&self, i: usize) -> bool {
        let next = i + 1;
        if self.spans.closes_at(next) || self.closes_group(next) {
            return false;
        }

        let Some(before) = content_before_punctuation(self.chars, i) else {
            return false;
        };
        let before_alnum = classify(before).is_alphanumeric();

        match self.category(next) {
            Category::Chinese => true,
            Category::LatinLetter | Category::Digit => self.chars[i] != '.' && !before_alnum,
            _ => !before_alnum && (self.opens_group(next) || self.spans.opens_at(next)),
        }
    }
}

#[inline]
fn is_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'')
}
