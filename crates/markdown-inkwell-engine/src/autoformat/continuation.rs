//! Newline interception: auto-indent and list continuation.
//!
//! Runs before a typed newline is committed, and returns the text that
//! should be inserted instead of the bare `\n`. The host applies the
//! result as one edit so continuation is a single undo step.

use crate::autoformat::list_line::{BulletLine, FormatPatterns, OrderedLine, next_ordinal};
use crate::text::{clamp_offset, is_newline};

/// Compute the replacement for `inserted` (typically `"\n"`) typed over
/// `text[dstart..dend]`.
///
/// Returns `None` when the insertion is not a newline; the host inserts
/// the text as typed. Otherwise the replacement is the newline, the
/// previous line's leading whitespace, and, inside a non-empty list item,
/// the continuation marker (same bullet, or ordinal + 1).
pub fn auto_indent(
    inserted: &str,
    text: &str,
    dstart: usize,
    dend: usize,
    patterns: &FormatPatterns,
) -> Option<String> {
    if !is_newline(inserted) {
        return None;
    }
    let dstart = clamp_offset(text, dstart);
    let dend = clamp_offset(text, dend).max(dstart);

    let ordered = OrderedLine::new(text, dstart, patterns);
    let bullet = BulletLine::new(text, dstart, patterns);
    let line = &ordered.list;

    let mut result = String::from(inserted);
    result.push_str(&line.line[..line.indent.min(line.line.len())]);

    // A marker whose group runs to the end of the line is an empty item;
    // continuing it would just stack empty markers, so only the indent is
    // carried and the list handler terminates the item afterwards.
    if let Some(marker) = &ordered.marker {
        if line.line_end != marker.group_end && dend >= marker.group_end {
            if let Some(next) = next_ordinal(marker.value) {
                result.push_str(&next);
                result.push(marker.delimiter);
                result.push(' ');
            }
            return Some(result);
        }
    } else if let Some(marker) = &bullet.marker {
        if line.line_end != marker.group_end && dend >= marker.group_end {
            result.push_str(&marker.new_item_prefix);
            return Some(result);
        }
    }

    Some(result)
}
