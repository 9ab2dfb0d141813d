//! Character window for local context lookups
//!
//! The quote tracker only needs the characters on either side of the one it
//! is looking at. The caller decides which characters count as neighbours,
//! so the window carries the text index of the current character explicitly.

use crate::classifier::{classify, is_line_break};
use crate::types::Category;

/// Sliding window of characters: [prev, current, next]
///
/// All operations are O(1).
#[derive(Debug, Clone)]
pub struct CharacterWindow {
    chars: [Option<char>; 3],
    /// Text index of the current character
    index: usize,
}

impl CharacterWindow {
    /// Create a window positioned before the first character
    pub fn new() -> Self {
        Self {
            chars: [None; 3],
            index: 0,
        }
    }

    /// Move onto the character at `index`, supplying the lookahead
    pub fn advance(&mut self, index: usize, current_char: char, next_char: Option<char>) {
        self.chars[0] = self.chars[1];
        self.chars[1] = Some(current_char);
        self.chars[2] = next_char;
        self.index = index;
    }

    /// Previous character
    pub fn prev_char(&self) -> Option<char> {
        self.chars[0]
    }

    /// Current character
    pub fn current_char(&self) -> Option<char> {
        self.chars[1]
    }

    /// Next character
    pub fn next_char(&self) -> Option<char> {
        self.chars[2]
    }

    /// Text index of the current character
    pub fn char_index(&self) -> usize {
        self.index
    }

    /// Category of the previous character
    pub fn prev_category(&self) -> Option<Category> {
        self.prev_char().map(classify)
    }

    /// Category of the next character
    pub fn next_category(&self) -> Option<Category> {
        self.next_char().map(classify)
    }

    /// True at the start of the text or right after a line break
    pub fn is_at_line_start(&self) -> bool {
        match self.prev_char() {
            None => true,
            Some(ch) => is_line_break(ch),
        }
    }
}

impl Default for CharacterWindow {
    fn default() -> Self {
        Self::new()
    }
}
