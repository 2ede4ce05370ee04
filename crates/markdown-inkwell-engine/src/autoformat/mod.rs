pub mod continuation;
pub mod list_handler;
pub mod list_line;
pub mod renumber;

pub use continuation::auto_indent;
pub use list_handler::ListHandler;
pub use list_line::{BulletLine, FormatPatterns, ListLine, OrderedLine, next_ordinal};
pub use renumber::{renumber, renumbered};
