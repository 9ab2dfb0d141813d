//! The normalization pipeline
//!
//! map -> collapse -> quote roles -> marker spans -> spacing -> strip
//!
//! Ordering is load-bearing: markers are resolved on mapped text, spacing
//! consults the resolved spans, and stripping runs last so nothing can
//! reintroduce interior whitespace.

use crate::config::NormalizerConfig;
use crate::passes::{annotate, strip, MarkerResolver, PunctuationMapper, RunCollapser, SpacingEngine};
use crate::tables::DelimiterSet;

/// Punctuation normalizer bound to one configuration
///
/// Holds no per-call state, so a single instance can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    delimiters: DelimiterSet,
}

impl Normalizer {
    /// Create a normalizer from a validated configuration
    pub fn new(config: NormalizerConfig) -> Self {
        let delimiters = DelimiterSet::new(&config.delimiters);
        Self { config, delimiters }
    }

    /// The configuration in use
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize punctuation and spacing in `text`
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mapped = PunctuationMapper::new(&self.config.punctuation).map(text);
        log::trace!("mapped: {mapped:?}");

        let collapsed =
            RunCollapser::new(&self.config.collapse_chars, self.config.collapse_length)
                .collapse(&mapped)
                .into_owned();
        log::trace!("collapsed: {collapsed:?}");

        let chars: Vec<char> = collapsed.chars().collect();
        let quotes = annotate(&chars);
        let spans = MarkerResolver::new(&self.delimiters).resolve(&chars, &quotes);
        log::trace!("{} quote marks, {} marker spans", quotes.len(), spans.len());

        let spaced = SpacingEngine::new(self.config.trim_trailing_whitespace)
            .space(&chars, &spans);
        let output = strip(&spaced.chars, &spaced.spans);

        log::debug!(
            "normalized {} chars into {} chars ({} spans)",
            chars.len(),
            output.chars().count(),
            spaced.spans.len()
        );
        output
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

/// Normalize `text` with the default configuration
pub fn normalize(text: &str) -> String {
    Normalizer::default().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(normalize("连续感叹！！！下一句"), "连续感叹!!! 下一句");
        assert_eq!(normalize("从\"A\"到\"B\"只需1天。"), "从 \"A\" 到 \"B\" 只需 1 天.");
        assert_eq!(
            normalize("注意：**这很着急，也很重要。**"),
            "注意: **这很着急, 也很重要.**"
        );
        assert_eq!(normalize("\"Python\"是"), "\"Python\" 是");
        assert_eq!(normalize("**参考资源：**"), "**参考资源:**");
    }

    #[test]
    fn test_curly_quotes_become_pairs() {
        assert_eq!(normalize("他说“你好”然后走了"), "他说 \"你好\" 然后走了");
    }

    #[test]
    fn test_ellipsis_collapses() {
        assert_eq!(normalize("等等……然后"), "等等... 然后");
        assert_eq!(normalize("什么？？？？"), "什么???");
    }

    #[test]
    fn test_bold_interior_is_stripped() {
        assert_eq!(normalize("** 参考资料： **"), "**参考资料:**");
    }

    #[test]
    fn test_lines_are_independent() {
        assert_eq!(
            normalize("第一行，结束。  \n“第二行\n第三行”"),
            "第一行, 结束.\n\"第二行\n第三行\""
        );
    }

    #[test]
    fn test_custom_config() {
        let config = NormalizerConfig::builder()
            .map('《', "<")
            .map('》', ">")
            .delimiters(["~~"])
            .build()
            .unwrap();
        let normalizer = Normalizer::new(config);
        assert_eq!(normalizer.normalize("看《三体》"), "看<三体>");
        assert_eq!(normalizer.normalize("~~ 删除 ~~"), "~~删除~~");
        assert_eq!(normalizer.config().delimiters(), &["~~".to_string()]);
    }

    #[test]
    fn test_normalizer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Normalizer>();
    }
}
