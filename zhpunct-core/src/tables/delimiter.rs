//! Symmetric marker delimiters (`**` and friends)
//!
//! Delimiters are matched longest-first so that `**` wins over `*` when both
//! are configured.

/// Set of symmetric delimiters, stored as character sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    /// Sorted by descending length
    delimiters: Vec<Vec<char>>,
}

impl DelimiterSet {
    /// Create from delimiter strings
    pub fn new<I, S>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut delimiters: Vec<Vec<char>> = delimiters
            .into_iter()
            .map(|d| d.as_ref().chars().collect::<Vec<char>>())
            .filter(|d| !d.is_empty())
            .collect();
        delimiters.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        delimiters.dedup();
        Self { delimiters }
    }

    /// Find the delimiter starting at `pos`, returning its id and length
    #[inline]
    pub fn match_at(&self, chars: &[char], pos: usize) -> Option<(usize, usize)> {
        let rest = chars.get(pos..)?;
        self.delimiters
            .iter()
            .enumerate()
            .find(|(_, delim)| rest.starts_with(delim))
            .map(|(id, delim)| (id, delim.len()))
    }

    /// True when no delimiter is configured
    pub fn is_empty(&self) -> bool {
        self.delimiters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_longest_match_wins() {
        let set = DelimiterSet::new(["*", "**"]);
        let text = chars("**a*");
        assert_eq!(set.match_at(&text, 0), Some((0, 2)));
        assert_eq!(set.match_at(&text, 1), Some((1, 1)));
        assert_eq!(set.match_at(&text, 2), None);
        assert_eq!(set.match_at(&text, 3), Some((1, 1)));
        assert_eq!(set.match_at(&text, 4), None);
    }

    #[test]
    fn test_empty_and_duplicate_delimiters_are_dropped() {
        let set = DelimiterSet::new(["", "~~", "~~"]);
        assert_eq!(set, DelimiterSet::new(["~~"]));
        assert_eq!(set.match_at(&chars("~~"), 0), Some((0, 2)));
        assert!(DelimiterSet::new([""]).is_empty());
        assert!(DelimiterSet::new(Vec::<String>::new()).is_empty());
    }
}
