use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

const ELLIPSIS: char = '…';

/// Shorten `input` to at most `max_graphemes` clusters, ending with an
/// ellipsis when anything was cut.
pub(in crate::tui) fn truncate_with_ellipsis(input: &str, max_graphemes: usize) -> Cow<'_, str> {
    if max_graphemes == 0 {
        return Cow::Owned(String::new());
    }

    let mut graphemes = input.grapheme_indices(true);
    let Some((cut, _)) = graphemes.nth(max_graphemes - 1) else {
        return Cow::Borrowed(input);
    };
    if graphemes.next().is_none() {
        return Cow::Borrowed(input);
    }

    let mut truncated = input[..cut].to_owned();
    truncated.push(ELLIPSIS);
    Cow::Owned(truncated)
}

pub(in crate::tui) const fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
