//! Paired marker resolution
//!
//! Symmetric delimiters are paired first. Quote pairs are then built from
//! the tracker's roles and dropped if they would straddle a symmetric span,
//! so the final set never partially overlaps.

use crate::classifier::is_line_break;
use crate::tables::DelimiterSet;
use crate::types::{MarkerSpan, QuoteKind, QuoteMark, QuoteRole};

const OPEN_START: u8 = 1;
const OPEN_END: u8 = 1 << 1;
const CLOSE_START: u8 = 1 << 2;
const CLOSE_END: u8 = 1 << 3;

/// Resolved spans plus a per-character index of delimiter boundaries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSpans {
    spans: Vec<MarkerSpan>,
    flags: Vec<u8>,
}

impl MarkerSpans {
    /// Index spans over a text of `len` characters
    pub fn new(mut spans: Vec<MarkerSpan>, len: usize) -> Self {
        spans.sort_by_key(|s| (s.start, std::cmp::Reverse(s.end)));

        let mut flags = vec![0u8; len];
        for span in &spans {
            let open = span.open_range();
            let close = span.close_range();
            flags[open.start] |= OPEN_START;
            flags[open.end - 1] |= OPEN_END;
            flags[close.start] |= CLOSE_START;
            flags[close.end - 1] |= CLOSE_END;
        }

        Self { spans, flags }
    }

    fn has(&self, index: usize, flag: u8) -> bool {
        self.flags.get(index).is_some_and(|f| f & flag != 0)
    }

    /// `index` is the first character of an opening delimiter
    #[inline]
    pub fn opens_at(&self, index: usize) -> bool {
        self.has(index, OPEN_START)
    }

    /// `index` is the last character of an opening delimiter
    #[inline]
    pub fn open_ends_at(&self, index: usize) -> bool {
        self.has(index, OPEN_END)
    }

    /// `index` is the first character of a closing delimiter
    #[inline]
    pub fn closes_at(&self, index: usize) -> bool {
        self.has(index, CLOSE_START)
    }

    /// `index` is the last character of a closing delimiter
    #[inline]
    pub fn close_ends_at(&self, index: usize) -> bool {
        self.has(index, CLOSE_END)
    }

    /// Spans ordered by start, outer before inner
    pub fn iter(&self) -> std::slice::Iter<'_, MarkerSpan> {
        self.spans.iter()
    }

    /// Number of spans
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True when no span was resolved
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Move every span through an old-index to new-index map
    ///
    /// Delimiter characters must survive the edit that produced `map`.
    pub fn remap(&self, map: &[usize], new_len: usize) -> Self {
        let spans = self
            .spans
            .iter()
            .map(|span| MarkerSpan {
                start: map[span.start],
                end: map[span.end - 1] + 1,
                ..*span
            })
            .collect();
        Self::new(spans, new_len)
    }
}

impl<'a> IntoIterator for &'a MarkerSpans {
    type Item = &'a MarkerSpan;
    type IntoIter = std::slice::Iter<'a, MarkerSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Locates symmetric and quote marker spans
#[derive(Debug, Clone, Copy)]
pub struct MarkerResolver<'a> {
    delimiters: &'a DelimiterSet,
}

impl<'a> MarkerResolver<'a> {
    /// Create a resolver over a delimiter set
    pub fn new(delimiters: &'a DelimiterSet) -> Self {
        Self { delimiters }
    }

    /// Resolve all spans in `chars` given the tracker's quote marks
    pub fn resolve(&self, chars: &[char], quotes: &[QuoteMark]) -> MarkerSpans {
        let mut spans = self.symmetric_spans(chars);
        let quote_spans = quote_spans(chars, quotes, &spans);
        spans.extend(quote_spans);
        MarkerSpans::new(spans, chars.len())
    }

    /// Pair symmetric delimiters line by line
    ///
    /// A delimiter closes the most recent pending opener with the same text
    /// and discards anything opened after it. An empty or whitespace-only
    /// interior consumes the pair without producing a span.
    pub fn symmetric_spans(&self, chars: &[char]) -> Vec<MarkerSpan> {
        let mut spans = Vec::new();
        if self.delimiters.is_empty() {
            return spans;
        }

        let mut pending: Vec<(usize, usize)> = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            if is_line_break(chars[pos]) {
                pending.clear();
                pos += 1;
                continue;
            }

            let Some((id, len)) = self.delimiters.match_at(chars, pos) else {
                pos += 1;
                continue;
            };

            match pending.iter().rposition(|&(pid, _)| pid == id) {
                Some(slot) => {
                    let open = pending[slot].1;
                    pending.truncate(slot);
                    let interior = &chars[open + len..pos];
                    if interior.iter().any(|c| !c.is_whitespace()) {
                        spans.push(MarkerSpan::symmetric(open, pos + len, len));
                    }
                }
                None => pending.push((id, pos)),
            }

            pos += len;
        }

        spans
    }
}

/// Pair quote marks at equal depth on the same line
fn quote_spans(chars: &[char], quotes: &[QuoteMark], symmetric: &[MarkerSpan]) -> Vec<MarkerSpan> {
    let regions = symmetric_regions(symmetric, chars.len());
    let breaks: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| is_line_break(**c))
        .map(|(i, _)| i)
        .collect();
    let line_of = |index: usize| breaks.partition_point(|&b| b < index);

    let mut spans = Vec::new();
    // Unmatched opener at each depth; deeper entries are dropped on close
    let mut pending: Vec<Option<(QuoteKind, usize)>> = Vec::new();
    let mut current_line = 0;

    for mark in quotes {
        let line = line_of(mark.index);
        if line != current_line {
            pending.clear();
            current_line = line;
        }

        let Some(depth) = mark.depth else {
            continue;
        };

        match mark.role {
            QuoteRole::Opening => {
                pending.resize(depth, None);
                pending.push(Some((mark.kind, mark.index)));
            }
            QuoteRole::Closing | QuoteRole::Ambiguous => {
                if let Some(Some((kind, open))) = pending.get(depth).copied() {
                    if kind == mark.kind && regions[open] == regions[mark.index] {
                        spans.push(MarkerSpan::quote(mark.kind, open, mark.index + 1));
                    }
                }
                pending.truncate(depth);
            }
        }
    }

    spans
}

/// Innermost symmetric span around each character, `0` outside all spans
///
/// Symmetric spans nest and a delimiter never nests inside itself, so each
/// character is written at most once per configured delimiter. Two positions
/// share a region exactly when no span contains one but not the other.
fn symmetric_regions(symmetric: &[MarkerSpan], len: usize) -> Vec<usize> {
    let mut ordered: Vec<&MarkerSpan> = symmetric.iter().collect();
    ordered.sort_by_key(|s| (s.start, std::cmp::Reverse(s.end)));

    let mut regions = vec![0; len];
    for (id, span) in ordered.into_iter().enumerate() {
        regions[span.start..span.end].fill(id + 1);
    }
    regions
}
