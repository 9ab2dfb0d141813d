//! Full-width punctuation substitution
//!
//! Content-only: every mapped character is replaced by its ASCII form and
//! nothing else moves. Marker resolution later runs on the mapped text.

use crate::tables::PunctuationMap;
use std::borrow::Cow;

/// Replaces Chinese punctuation with ASCII equivalents
#[derive(Debug, Clone, Copy)]
pub struct PunctuationMapper<'a> {
    table: &'a PunctuationMap,
}

impl<'a> PunctuationMapper<'a> {
    /// Create a mapper over a table
    pub fn new(table: &'a PunctuationMap) -> Self {
        Self { table }
    }

    /// Map every character that has a replacement
    ///
    /// Returns the input unchanged (borrowed) when nothing needs mapping.
    pub fn map<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let Some(first) = text.char_indices().find(|(_, ch)| self.table.contains(*ch)) else {
            return Cow::Borrowed(text);
        };

        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..first.0]);
        for ch in text[first.0..].chars() {
            match self.table.get(ch) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(ch),
            }
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(text: &str) -> String {
        let table = PunctuationMap::standard();
        PunctuationMapper::new(&table).map(text).into_owned()
    }

    #[test]
    fn test_basic_mapping() {
        assert_eq!(map("你好，世界。"), "你好,世界.");
        assert_eq!(map("标题：内容；下一项"), "标题:内容;下一项");
        assert_eq!(map("真的？太好了！"), "真的?太好了!");
        assert_eq!(map("苹果、香蕉"), "苹果,香蕉");
        assert_eq!(map("（括号）【方括号】"), "(括号)[方括号]");
        assert_eq!(map("“引用”和‘单引’"), "\"引用\"和'单引'");
    }

    #[test]
    fn test_ellipsis_expands_to_three_periods() {
        assert_eq!(map("等等…"), "等等...");
        assert_eq!(map("等等……"), "等等......");
    }

    #[test]
    fn test_unmapped_text_is_borrowed() {
        let table = PunctuationMap::standard();
        let mapper = PunctuationMapper::new(&table);
        assert!(matches!(mapper.map("plain ascii, text."), Cow::Borrowed(_)));
        assert!(matches!(mapper.map("《三体》"), Cow::Borrowed(_)));
        assert!(matches!(mapper.map(""), Cow::Borrowed(_)));
    }

    #[test]
    fn test_markers_are_content() {
        // Marker delimiters are not special to the mapper
        assert_eq!(map("**参考资料：**"), "**参考资料:**");
    }

    #[test]
    fn test_custom_table() {
        let table = PunctuationMap::new([('《', "<"), ('》', ">")]);
        let mapper = PunctuationMapper::new(&table);
        assert_eq!(mapper.map("《三体》，"), "<三体>，");
    }
}
