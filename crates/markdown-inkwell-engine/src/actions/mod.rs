pub mod inline;
pub mod markdown;
pub mod replace;

pub use inline::{insert_unpaired, surround};
pub use replace::{ReplaceOutcome, ReplacePattern, run_replace_action};
