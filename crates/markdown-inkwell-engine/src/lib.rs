pub mod actions;
pub mod autoformat;
pub mod config;
pub mod edit;
pub mod highlight;
pub mod session;
pub mod text;

// Re-export key types for easier usage
pub use actions::{ReplaceOutcome, ReplacePattern, run_replace_action, surround};
pub use autoformat::{FormatPatterns, ListHandler, auto_indent, renumber, renumbered};
pub use config::{EngineConfig, FormatConfig, HighlightConfig};
pub use edit::{EditEvent, TextEdit, apply_edits};
pub use highlight::{
    Debouncer, PatternEntry, PatternKind, SpanStyle, StyleSpan, Trigger, generate_spans,
    pattern_table,
};
pub use session::{
    ActionOutcome, AfterChange, HighlightOutcome, HighlightPass, Session, ToggleAction,
};
