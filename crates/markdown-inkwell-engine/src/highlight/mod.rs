pub mod debounce;
pub mod patterns;
pub mod spans;

pub use debounce::{Debouncer, Trigger};
pub use patterns::{PatternEntry, PatternKind, pattern_table};
pub use spans::{SpanStyle, StyleSpan, generate_spans};
