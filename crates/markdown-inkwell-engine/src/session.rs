//! The host-facing façade of the engine.
//!
//! One `Session` per open document. The host text widget owns the buffer
//! and calls in with fresh text on every event; the session owns only the
//! per-document machinery: the list handler, the debouncer, and a
//! revision counter that lets the host reject highlight results computed
//! for an older buffer state.
//!
//! Call order per edit: `on_before_text_change` (may rewrite the inserted
//! text), apply the edit, `on_after_text_change` (returns follow-up edits
//! plus a highlight decision). List continuation therefore always
//! completes before highlighting is scheduled for the same edit.

use std::time::Instant;

use crate::actions::{self, markdown, run_replace_action};
use crate::autoformat::{ListHandler, auto_indent, renumber};
use crate::config::EngineConfig;
use crate::edit::{EditEvent, TextEdit, apply_edits};
use crate::highlight::debounce::{Debouncer, Trigger};
use crate::highlight::spans::{StyleSpan, generate_spans};

/// Toolbar operations, dispatched out-of-band from typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Bold,
    Italic,
    Strikethrough,
    InlineCode,
    Heading(u8),
    Quote,
    UnorderedList,
    CheckboxList,
    OrderedList,
    HorizontalRule,
    Indent,
    Deindent,
}

/// A computed span set, stamped with the revision it was computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightPass {
    pub revision: u64,
    pub spans: Vec<StyleSpan>,
}

/// Highlight decision for one edit.
#[derive(Debug, Clone, PartialEq)]
pub enum HighlightOutcome {
    /// Small document: spans computed synchronously, apply now.
    Immediate(HighlightPass),
    /// Large document: call `poll_highlight` once the deadline passes.
    Scheduled(Instant),
}

/// Everything the host must do after reporting an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct AfterChange {
    /// Sequenced follow-up buffer edits (empty-item termination,
    /// renumbering).
    pub edits: Vec<TextEdit>,
    pub highlight: HighlightOutcome,
}

/// Result of a toggle action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub text: String,
    pub sel_start: usize,
    pub sel_end: usize,
    pub highlight: HighlightOutcome,
}

#[derive(Debug)]
pub struct Session {
    config: EngineConfig,
    list_handler: ListHandler,
    debouncer: Debouncer,
    revision: u64,
}

impl Session {
    pub fn new(config: EngineConfig) -> Self {
        let debouncer = Debouncer::new(&config.highlight);
        Self {
            config,
            list_handler: ListHandler::default(),
            debouncer,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The text `inserted` is about to replace
    /// `text[change_start..change_end]`. Returns the replacement the host
    /// should commit instead (newline continuation), or `None` to insert
    /// as typed.
    pub fn on_before_text_change(
        &mut self,
        text: &str,
        change_start: usize,
        change_end: usize,
        inserted: &str,
    ) -> Option<String> {
        self.list_handler.before_change(text, change_start, change_end);
        auto_indent(
            inserted,
            text,
            change_start,
            change_end,
            &crate::autoformat::FormatPatterns::markdown(),
        )
    }

    /// The edit has been applied; `text` is the new buffer content.
    pub fn on_after_text_change(
        &mut self,
        text: &str,
        edit: EditEvent,
        now: Instant,
    ) -> AfterChange {
        self.revision += 1;
        self.list_handler.on_change(text, &edit);
        let edits = self.list_handler.after_change(text);

        let highlight = match self.debouncer.on_edit(now, text.len()) {
            Trigger::Immediate => {
                // Highlight the post-continuation text, never the
                // intermediate state.
                let spans = if edits.is_empty() {
                    generate_spans(text, &self.config.highlight)
                } else {
                    generate_spans(&apply_edits(text, &edits), &self.config.highlight)
                };
                HighlightOutcome::Immediate(HighlightPass {
                    revision: self.revision,
                    spans,
                })
            }
            Trigger::Scheduled(deadline) => HighlightOutcome::Scheduled(deadline),
        };

        AfterChange { edits, highlight }
    }

    /// Host-requested full highlight, e.g. when a document is first
    /// shown. Synchronous, and supersedes any pending debounced pass.
    pub fn request_highlight(&mut self, text: &str) -> HighlightPass {
        self.debouncer.cancel();
        HighlightPass {
            revision: self.revision,
            spans: generate_spans(text, &self.config.highlight),
        }
    }

    /// Host timer callback for a scheduled highlight. Returns spans only
    /// when a pending deadline has actually elapsed; stale timers are
    /// no-ops.
    pub fn poll_highlight(&mut self, text: &str, now: Instant) -> Option<HighlightPass> {
        if !self.debouncer.fire(now) {
            return None;
        }
        Some(HighlightPass {
            revision: self.revision,
            spans: generate_spans(text, &self.config.highlight),
        })
    }

    /// True when a highlight pass still matches the buffer revision it
    /// was computed for; the host must drop stale passes instead of
    /// applying them.
    pub fn is_current(&self, pass: &HighlightPass) -> bool {
        pass.revision == self.revision
    }

    /// Run a toolbar action against the current text and selection. The
    /// result text replaces the buffer wholesale; the usual
    /// before/after-change reporting is skipped for it.
    pub fn invoke_action(
        &mut self,
        action: ToggleAction,
        text: &str,
        sel_start: usize,
        sel_end: usize,
        now: Instant,
    ) -> ActionOutcome {
        let bullet = self.config.format.bullet;
        let indent = self.config.format.indent_width;

        let (new_text, new_start, new_end) = match action {
            ToggleAction::Bold => actions::surround(text, sel_start, sel_end, "**", "**", true),
            ToggleAction::Italic => actions::surround(text, sel_start, sel_end, "_", "_", true),
            ToggleAction::Strikethrough => {
                actions::surround(text, sel_start, sel_end, "~~", "~~", true)
            }
            ToggleAction::InlineCode => actions::surround(text, sel_start, sel_end, "`", "`", true),
            ToggleAction::HorizontalRule => {
                let (new_text, cursor) = actions::insert_unpaired(text, sel_start, "----\n");
                (new_text, cursor, cursor)
            }
            ToggleAction::Heading(level) => prefixed(
                text,
                sel_start,
                sel_end,
                &markdown::set_or_unset_heading(level as usize),
            ),
            ToggleAction::Quote => prefixed(text, sel_start, sel_end, &markdown::toggle_quote()),
            ToggleAction::UnorderedList => prefixed(
                text,
                sel_start,
                sel_end,
                &markdown::toggle_unordered_list(bullet),
            ),
            ToggleAction::CheckboxList => prefixed(
                text,
                sel_start,
                sel_end,
                &markdown::toggle_checkbox_list(bullet),
            ),
            ToggleAction::OrderedList => {
                let (toggled, s, e) =
                    prefixed(text, sel_start, sel_end, &markdown::toggle_ordered_list());
                // Keep the surrounding run consistent with the new item.
                let edits = renumber(&toggled, s, &crate::autoformat::FormatPatterns::markdown());
                (apply_edits(&toggled, &edits), s, e)
            }
            ToggleAction::Indent => {
                prefixed(text, sel_start, sel_end, &markdown::indent_lines(indent))
            }
            ToggleAction::Deindent => {
                prefixed(text, sel_start, sel_end, &markdown::deindent_lines(indent))
            }
        };

        self.revision += 1;
        let highlight = match self.debouncer.on_edit(now, new_text.len()) {
            Trigger::Immediate => HighlightOutcome::Immediate(HighlightPass {
                revision: self.revision,
                spans: generate_spans(&new_text, &self.config.highlight),
            }),
            Trigger::Scheduled(deadline) => HighlightOutcome::Scheduled(deadline),
        };

        ActionOutcome {
            text: new_text,
            sel_start: new_start,
            sel_end: new_end,
            highlight,
        }
    }

    /// Editor teardown or document switch: drop any pending highlight.
    pub fn close(&mut self) {
        self.debouncer.cancel();
    }
}

fn prefixed(
    text: &str,
    sel_start: usize,
    sel_end: usize,
    patterns: &[crate::actions::ReplacePattern],
) -> (String, usize, usize) {
    let outcome = run_replace_action(text, sel_start, sel_end, patterns);
    (outcome.text, outcome.sel_start, outcome.sel_end)
}
