//! Ordered-list renumbering.
//!
//! After a structural edit inside an ordered run, the run's ordinals are
//! rewritten to increase by one from the first item's own base (a list
//! may legitimately start at `5.`). The walk covers exactly one nesting
//! level: it stops at the first blank line, indent change, or
//! non-ordered line.

use crate::autoformat::list_line::{FormatPatterns, OrderedLine};
use crate::edit::{TextEdit, apply_edits};
use crate::text::{clamp_offset, line_end};

/// Renumber the ordered run containing `from`.
///
/// The returned edits are sequenced and replace only the ordinal digits
/// of lines whose ordinal is out of sequence. Running the pass again on
/// its own output yields no edits.
pub fn renumber(text: &str, from: usize, patterns: &FormatPatterns) -> Vec<TextEdit> {
    let mut edits = Vec::new();
    let mut work = text.to_string();
    let from = clamp_offset(text, from);

    // The line at `from` must itself be part of an ordered run.
    let start_line = OrderedLine::new(&work, from, patterns);
    let Some(start_marker) = &start_line.marker else {
        return edits;
    };
    let indent = start_line.list.indent;
    let delimiter = start_marker.delimiter;

    // Walk backward to the first item of the run so a mid-run edit
    // renumbers against the run's true base.
    let mut run_start = start_line.list.line_start;
    while run_start > 0 {
        let prev = OrderedLine::new(&work, run_start - 1, patterns);
        let matches_run = prev
            .marker
            .as_ref()
            .is_some_and(|m| prev.list.indent == indent && m.delimiter == delimiter);
        if !matches_run {
            break;
        }
        run_start = prev.list.line_start;
    }

    let first = OrderedLine::new(&work, run_start, patterns);
    let Some(base) = first.marker.as_ref().and_then(|m| m.value.parse::<u64>().ok()) else {
        // Unparseable base ordinal: leave the run alone.
        return edits;
    };

    let mut pos = run_start;
    let mut k = 0u64;
    loop {
        let item = {
            let line = OrderedLine::new(&work, pos, patterns);
            match &line.marker {
                Some(m) if line.list.indent == indent && m.delimiter == delimiter => Some((
                    line.list.line_start,
                    m.num_start,
                    m.num_end,
                    m.value.parse::<u64>().ok(),
                )),
                _ => None,
            }
        };
        let Some((line_start, num_start, num_end, value)) = item else {
            break;
        };
        let Some(expected) = base.checked_add(k) else {
            tracing::warn!(base, k, "ordinal overflow during renumber, stopping walk");
            break;
        };
        let Some(value) = value else {
            break;
        };

        if value != expected {
            let replacement = expected.to_string();
            edits.push(TextEdit::new(num_start..num_end, replacement.clone()));
            work.replace_range(num_start..num_end, &replacement);
        }

        k += 1;
        let end = line_end(&work, line_start);
        if end >= work.len() {
            break;
        }
        pos = end + 1;
    }

    edits
}

/// Convenience wrapper applying the renumber edits.
pub fn renumbered(text: &str, from: usize, patterns: &FormatPatterns) -> String {
    apply_edits(text, &renumber(text, from, patterns))
}
