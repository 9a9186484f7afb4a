//! Unicode measurement: display widths and grapheme boundaries.
//!
//! All column arithmetic in this crate and its users goes through these
//! functions; byte or `char` counts are never used as widths.

use unicode_segmentation::{Graphemes, UnicodeSegmentation};
use unicode_width::UnicodeWidthStr;

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Width of a single grapheme cluster.
///
/// Clusters made only of zero-width code points measure 0.
pub fn grapheme_width(grapheme: &str) -> usize {
    grapheme.width()
}

/// Extended grapheme clusters of `s`, in order.
///
/// The iterator is lazy and cheap to create, so callers restart it by
/// calling this again.
pub fn graphemes(s: &str) -> Graphemes<'_> {
    s.graphemes(true)
}

/// The longest prefix of `s` whose display width is at most `max_width`.
///
/// Cuts only at grapheme boundaries, so a double-width grapheme that would
/// straddle the limit is left out entirely. Returns the prefix and its width.
pub fn prefix_by_width(s: &str, max_width: usize) -> (&str, usize) {
    let mut width = 0;
    let mut end = 0;
    for (offset, grapheme) in s.grapheme_indices(true) {
        let gw = grapheme_width(grapheme);
        if width + gw > max_width {
            return (&s[..offset], width);
        }
        width += gw;
        end = offset + grapheme.len();
    }
    (&s[..end], width)
}

/// The longest prefix of `s` at most `max_len` bytes long that ends on a
/// grapheme boundary.
pub fn prefix_by_len(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = 0;
    for (offset, grapheme) in s.grapheme_indices(true) {
        if offset + grapheme.len() > max_len {
            break;
        }
        end = offset + grapheme.len();
    }
    &s[..end]
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available_width - text_width) / 2,
        TextAlign::Right => available_width - text_width,
    }
}
