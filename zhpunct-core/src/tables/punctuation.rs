//! Full-width to ASCII punctuation table with O(1) lookup

use std::collections::HashMap;

/// Built-in replacements, in the order they are rendered
const STANDARD_PAIRS: &[(char, &str)] = &[
    ('，', ","),
    ('、', ","),
    ('。', "."),
    ('．', "."),
    ('；', ";"),
    ('：', ":"),
    ('？', "?"),
    ('！', "!"),
    ('（', "("),
    ('）', ")"),
    ('【', "["),
    ('】', "]"),
    ('“', "\""),
    ('”', "\""),
    ('‘', "'"),
    ('’', "'"),
    ('…', "..."),
    ('～', "~"),
    ('\u{3000}', " "),
];

/// Immutable mapping from a Chinese punctuation character to its ASCII
/// replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationMap {
    map: HashMap<char, String>,
}

impl PunctuationMap {
    /// Create from explicit pairs
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        Self {
            map: pairs.into_iter().map(|(ch, to)| (ch, to.into())).collect(),
        }
    }

    /// The built-in Chinese/English table
    pub fn standard() -> Self {
        Self::new(STANDARD_PAIRS.iter().copied())
    }

    /// An empty table
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Look up the replacement for a character
    #[inline]
    pub fn get(&self, ch: char) -> Option<&str> {
        self.map.get(&ch).map(String::as_str)
    }

    /// Whether the character has a replacement
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.map.contains_key(&ch)
    }

    /// Add or replace an entry
    pub fn insert(&mut self, ch: char, replacement: impl Into<String>) {
        self.map.insert(ch, replacement.into());
    }

    /// Remove an entry
    pub fn remove(&mut self, ch: char) -> Option<String> {
        self.map.remove(&ch)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when there are no entries
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Entries sorted by source character
    pub fn sorted_entries(&self) -> Vec<(char, &str)> {
        let mut entries: Vec<_> = self
            .map
            .iter()
            .map(|(ch, to)| (*ch, to.as_str()))
            .collect();
        entries.sort_unstable_by_key(|(ch, _)| *ch);
        entries
    }
}

impl Default for PunctuationMap {
    fn default() -> Self {
        Self::standard()
    }
}
