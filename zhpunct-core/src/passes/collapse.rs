//! Consecutive punctuation run collapsing
//!
//! Runs strictly after mapping, so `。。。`, `...` and `…` all arrive here as
//! plain ASCII periods.

use crate::types::ConsecutiveRun;
use std::borrow::Cow;
use std::iter;

/// Find every maximal run of two or more identical ASCII punctuation
/// characters
pub fn find_runs(chars: &[char]) -> Vec<ConsecutiveRun> {
    let mut runs = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let len = chars[i..].iter().take_while(|&&c| c == ch).count();
        if len >= 2 && ch.is_ascii_punctuation() {
            runs.push(ConsecutiveRun { ch, len, start: i });
        }
        i += len;
    }

    runs
}

/// Canonicalizes runs of repeated `.`, `?`, `!`
#[derive(Debug, Clone, Copy)]
pub struct RunCollapser<'a> {
    targets: &'a [char],
    length: usize,
}

impl<'a> RunCollapser<'a> {
    /// Collapse runs of any `targets` character to exactly `length` copies
    pub fn new(targets: &'a [char], length: usize) -> Self {
        Self { targets, length }
    }

    /// Rewrite every qualifying run; other text is untouched
    pub fn collapse<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let chars: Vec<char> = text.chars().collect();
        let runs: Vec<ConsecutiveRun> = find_runs(&chars)
            .into_iter()
            .filter(|run| self.targets.contains(&run.ch) && run.len != self.length)
            .collect();

        if runs.is_empty() {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for run in runs {
            out.extend(&chars[cursor..run.start]);
            out.extend(iter::repeat(run.ch).take(self.length));
            cursor = run.start + run.len;
        }
        out.extend(&chars[cursor..]);

        Cow::Owned(out)
    }
}
