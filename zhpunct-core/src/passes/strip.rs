//! Interior whitespace stripping for paired markers

use crate::passes::markers::MarkerSpans;

/// Remove whitespace directly after each opening delimiter and directly
/// before each closing delimiter, then render the text
///
/// Spans never contain a line break, so only horizontal whitespace is ever
/// removed.
pub fn strip(chars: &[char], spans: &MarkerSpans) -> String {
    let mut drop = vec![false; chars.len()];

    for span in spans {
        let interior = span.interior();

        let leading = chars[interior.clone()]
            .iter()
            .take_while(|c| c.is_whitespace())
            .count();
        let trailing = chars[interior.clone()]
            .iter()
            .rev()
            .take_while(|c| c.is_whitespace())
            .count();

        drop[interior.start..interior.start + leading]
            .iter_mut()
            .for_each(|d| *d = true);
        drop[interior.end - trailing..interior.end]
            .iter_mut()
            .for_each(|d| *d = true);
    }

    chars
        .iter()
        .zip(&drop)
        .filter_map(|(&ch, &dropped)| (!dropped).then_some(ch))
        .collect()
}
