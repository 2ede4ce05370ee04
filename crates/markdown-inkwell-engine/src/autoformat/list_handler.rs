//! Edit-observing list state machine.
//!
//! Watches each buffer mutation (before/after pairs) and produces the
//! follow-up edits the continuation filter cannot express on its own:
//! deleting the orphaned marker line when Enter is pressed on an empty
//! list item, and renumbering an ordered run after a structural change.

use std::ops::Range;

use crate::autoformat::list_line::{BulletLine, FormatPatterns, OrderedLine};
use crate::autoformat::renumber::renumber;
use crate::edit::{EditEvent, TextEdit, apply_edits};
use crate::text::{clamp_offset, line_end};

#[derive(Debug)]
pub struct ListHandler {
    patterns: FormatPatterns,
    trigger_reorder: bool,
    reorder_position: usize,
    before_line_end: Option<usize>,
    pending_removal: Option<Range<usize>>,
}

impl ListHandler {
    pub fn new(patterns: FormatPatterns) -> Self {
        Self {
            patterns,
            trigger_reorder: false,
            reorder_position: 0,
            before_line_end: None,
            pending_removal: None,
        }
    }

    /// Observe the text as it is about to change: `old_text[start..end]`
    /// is being replaced.
    pub fn before_change(&mut self, old_text: &str, start: usize, end: usize) {
        let start = clamp_offset(old_text, start);
        let end = clamp_offset(old_text, end).max(start);
        self.trigger_reorder = old_text[start..end].contains('\n');
        self.reorder_position = start;
        self.before_line_end = Some(line_end(old_text, start));
    }

    /// Observe the text right after the change was applied.
    pub fn on_change(&mut self, new_text: &str, edit: &EditEvent) {
        let start = clamp_offset(new_text, edit.start);
        let insert_end = clamp_offset(new_text, start + edit.inserted).max(start);
        self.trigger_reorder = self.trigger_reorder || new_text[start..insert_end].contains('\n');

        // Enter pressed at the end of an empty list item: the line that
        // held the cursor ended exactly at its marker group, so mark that
        // marker line for removal (two Enters exit the list).
        if let Some(before_line_end) = self.before_line_end.take()
            && edit.inserted > 0
            && new_text[start..].starts_with('\n')
        {
            let ordered = OrderedLine::new(new_text, start, &self.patterns);
            let bullet = BulletLine::new(new_text, start, &self.patterns);

            let marker_end = |group_end: usize| before_line_end == group_end;
            if ordered.marker.as_ref().is_some_and(|m| marker_end(m.group_end)) {
                self.pending_removal =
                    Some(ordered.list.line_start..(ordered.list.line_end + 1).min(new_text.len()));
            } else if bullet.marker.as_ref().is_some_and(|m| marker_end(m.group_end)) {
                self.pending_removal =
                    Some(bullet.list.line_start..(bullet.list.line_end + 1).min(new_text.len()));
            } else {
                self.reorder_position = start;
            }
        }
    }

    /// Produce the follow-up edits for the change observed by the last
    /// `before_change`/`on_change` pair. Edits are sequenced: each one's
    /// offsets assume the earlier ones are applied. Resets the handler
    /// for the next edit.
    pub fn after_change(&mut self, text: &str) -> Vec<TextEdit> {
        let mut edits = Vec::new();
        let mut working: Option<String> = None;

        if let Some(range) = self.pending_removal.take() {
            tracing::debug!(?range, "terminating empty list item");
            if self.reorder_position >= range.end {
                self.reorder_position -= range.len();
            } else if self.reorder_position > range.start {
                self.reorder_position = range.start;
            }
            let removal = TextEdit::delete(range);
            working = Some(apply_edits(text, std::slice::from_ref(&removal)));
            edits.push(removal);
        }

        if self.trigger_reorder {
            let base = working.as_deref().unwrap_or(text);
            if self.reorder_position < base.len() {
                edits.extend(renumber(base, self.reorder_position, &self.patterns));
            }
        }

        self.trigger_reorder = false;
        self.before_line_end = None;
        edits
    }
}

impl Default for ListHandler {
    fn default() -> Self {
        Self::new(FormatPatterns::markdown())
    }
}
