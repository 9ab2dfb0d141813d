//! Quote direction tracking
//!
//! ASCII `"` and `'` carry no direction of their own. The tracker walks the
//! text once, keeps a stack of open quote kinds, and assigns each quote a
//! [`QuoteRole`] from the stack plus the characters on either side. State
//! is reset at every line break.
//!
//! Horizontal whitespace is invisible to the tracker: the neighbours of a
//! quote are the nearest non-blank characters on its line. Roles therefore
//! depend only on the non-blank text, and respacing a line never changes
//! them.

use crate::character_window::CharacterWindow;
use crate::classifier::{is_horizontal_space, is_line_break, is_opening_punctuation};
use crate::types::{Category, QuoteKind, QuoteMark, QuoteRole};
use smallvec::SmallVec;

/// Outcome of one quote decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// Push a new open quote
    Open,
    /// Close the stack entry at this position and everything above it
    Close(usize),
    /// No local evidence; closes the oldest open entry of the same kind, if
    /// there is one
    Ambiguous(Option<usize>),
}

/// Finite-state tracker over a stack of open quote kinds
#[derive(Debug, Clone, Default)]
pub struct QuoteStateTracker {
    stack: SmallVec<[QuoteKind; 8]>,
    /// Kind of the quote that opened on the previous visible character
    prev_opened: Option<QuoteKind>,
}

impl QuoteStateTracker {
    /// Create a tracker with an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all open quotes
    pub fn reset(&mut self) {
        self.stack.clear();
        self.prev_opened = None;
    }

    /// Feed one character; returns a mark when the character is a quote
    ///
    /// The window's neighbours should skip horizontal whitespace, as
    /// [`annotate`] does. Blank characters fed directly are ignored.
    pub fn step(&mut self, window: &CharacterWindow) -> Option<QuoteMark> {
        let ch = window.current_char()?;

        if is_line_break(ch) {
            self.reset();
            return None;
        }
        if is_horizontal_space(ch) {
            return None;
        }

        let Some(kind) = QuoteKind::from_char(ch) else {
            self.prev_opened = None;
            return None;
        };

        if kind == QuoteKind::Single && self.is_apostrophe(window) {
            self.prev_opened = None;
            return None;
        }

        let transition = self.decide(kind, window);
        Some(self.apply(kind, transition, window.char_index()))
    }

    /// `'` between two Latin letters (`don't`) is not a quote, unless a
    /// single quote is waiting to close
    fn is_apostrophe(&self, window: &CharacterWindow) -> bool {
        self.stack.last() != Some(&QuoteKind::Single)
            && window.prev_category() == Some(Category::LatinLetter)
            && window.next_category() == Some(Category::LatinLetter)
    }

    /// The rule table, checked in order
    fn decide(&self, kind: QuoteKind, window: &CharacterWindow) -> Transition {
        let prev_category = window.prev_category();
        let next_category = window.next_category();

        // Rule 1: nothing open, or the left side says "start"
        let after_opener = window.prev_char().is_some_and(is_opening_punctuation)
            || self.prev_opened.is_some_and(|k| k != kind);
        if self.stack.is_empty() || window.is_at_line_start() || after_opener {
            return Transition::Open;
        }

        // Rule 2: innermost open quote is this kind
        if self.stack.last() == Some(&kind) {
            return Transition::Close(self.stack.len() - 1);
        }

        // Rule 3: the right side starts a word, or the left side ends one
        // and this kind is open further down
        if matches!(
            next_category,
            Some(Category::Chinese) | Some(Category::LatinLetter)
        ) {
            return Transition::Open;
        }
        if prev_category.is_some_and(Category::is_content) {
            if let Some(pos) = self.stack.iter().rposition(|&k| k == kind) {
                return Transition::Close(pos);
            }
        }

        // Rule 4: FIFO, the oldest unmatched quote of this kind closes first
        Transition::Ambiguous(self.stack.iter().position(|&k| k == kind))
    }

    fn apply(&mut self, kind: QuoteKind, transition: Transition, index: usize) -> QuoteMark {
        let (role, depth) = match transition {
            Transition::Open => {
                let depth = self.stack.len();
                self.stack.push(kind);
                (QuoteRole::Opening, Some(depth))
            }
            Transition::Close(pos) => {
                self.stack.truncate(pos);
                (QuoteRole::Closing, Some(pos))
            }
            Transition::Ambiguous(pos) => {
                if let Some(pos) = pos {
                    self.stack.truncate(pos);
                }
                (QuoteRole::Ambiguous, pos)
            }
        };

        self.prev_opened = (role == QuoteRole::Opening).then_some(kind);

        QuoteMark {
            index,
            kind,
            role,
            depth,
        }
    }
}

/// Annotate every quote character with its role
pub fn annotate(chars: &[char]) -> Vec<QuoteMark> {
    let visible: Vec<(usize, char)> = chars
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, ch)| !is_horizontal_space(ch))
        .collect();

    let mut tracker = QuoteStateTracker::new();
    let mut window = CharacterWindow::new();
    let mut marks = Vec::new();

    for (pos, &(index, ch)) in visible.iter().enumerate() {
        let next = visible.get(pos + 1).map(|&(_, next)| next);
        window.advance(index, ch, next);
        if let Some(mark) = tracker.step(&window) {
            marks.push(mark);
        }
    }

    marks
}
