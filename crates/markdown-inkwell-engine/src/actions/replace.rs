//! Line-oriented regex replace actions.
//!
//! A toggle action is a list of `(pattern, replacement)` pairs; for each
//! selected line the first pattern that matches decides the rewrite and
//! the rest are skipped. The selection is carried across the length
//! changes so the caret stays on the text the user was editing.

use std::borrow::Cow;

use regex::Regex;

use crate::text::{clamp_selection, line_end, line_start};

/// One search/replace rule of a toggle action.
#[derive(Debug, Clone)]
pub struct ReplacePattern {
    pub regex: Regex,
    pub replacement: String,
    pub replace_all: bool,
}

impl ReplacePattern {
    pub fn new(regex: &Regex, replacement: impl Into<String>) -> Self {
        Self {
            regex: regex.clone(),
            replacement: replacement.into(),
            replace_all: false,
        }
    }

    pub fn new_replace_all(regex: &Regex, replacement: impl Into<String>) -> Self {
        Self {
            replace_all: true,
            ..Self::new(regex, replacement)
        }
    }

    /// A `$0` replacement matches without rewriting; it exists to stop
    /// the pattern chain early.
    fn is_same_replace(&self) -> bool {
        self.replacement == "$0"
    }

    fn apply<'t>(&self, line: &'t str) -> Cow<'t, str> {
        if self.replace_all {
            self.regex.replace_all(line, self.replacement.as_str())
        } else {
            self.regex.replace(line, self.replacement.as_str())
        }
    }
}

/// Result of a toggle action: the rewritten document and the carried
/// selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceOutcome {
    pub text: String,
    pub sel_start: usize,
    pub sel_end: usize,
}

/// Run a replace-pattern chain over every line touched by the selection.
pub fn run_replace_action(
    text: &str,
    sel_start: usize,
    sel_end: usize,
    patterns: &[ReplacePattern],
) -> ReplaceOutcome {
    let (sel_start, sel_end) = clamp_selection(text, sel_start, sel_end);
    let first_line = line_start(text, sel_start);

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first_line]);
    let mut new_start = sel_start as isize;
    let mut new_end = sel_end as isize;

    let mut pos = first_line;
    loop {
        let end = line_end(text, pos);
        let line = &text[pos..end];

        let mut new_line: Cow<'_, str> = Cow::Borrowed(line);
        for pattern in patterns {
            if pattern.regex.is_match(line) {
                if !pattern.is_same_replace() {
                    new_line = pattern.apply(line);
                }
                break;
            }
        }

        let delta = new_line.len() as isize - line.len() as isize;
        if delta != 0 {
            for offset in [&mut new_start, &mut new_end] {
                if *offset >= end as isize {
                    *offset += delta;
                } else if *offset > pos as isize {
                    *offset = (*offset + delta).clamp(pos as isize, end as isize + delta);
                }
            }
        }
        out.push_str(&new_line);

        if end >= text.len() {
            break;
        }
        out.push('\n');
        pos = end + 1;
        if pos > sel_end {
            out.push_str(&text[pos..]);
            break;
        }
    }

    let (sel_start, sel_end) =
        clamp_selection(&out, new_start.max(0) as usize, new_end.max(0) as usize);
    ReplaceOutcome {
        text: out,
        sel_start,
        sel_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::LazyLock;

    static PLAIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s*)").unwrap());
    static DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s*)(- )").unwrap());

    fn add_dash() -> Vec<ReplacePattern> {
        vec![
            ReplacePattern::new(&DASH, "$1"),
            ReplacePattern::new(&PLAIN, "$1- "),
        ]
    }

    #[test]
    fn test_single_line_toggle_on_and_off() {
        let on = run_replace_action("hello", 3, 3, &add_dash());
        assert_eq!(on.text, "- hello");
        assert_eq!((on.sel_start, on.sel_end), (5, 5));

        let off = run_replace_action(&on.text, on.sel_start, on.sel_end, &add_dash());
        assert_eq!(off.text, "hello");
        assert_eq!((off.sel_start, off.sel_end), (3, 3));
    }

    #[test]
    fn test_first_matching_pattern_wins() {
        let outcome = run_replace_action("- already", 0, 0, &add_dash());
        assert_eq!(outcome.text, "already");
    }

    #[test]
    fn test_multi_line_selection_touches_every_line() {
        let text = "one\ntwo\nthree";
        let outcome = run_replace_action(text, 1, 9, &add_dash());
        assert_eq!(outcome.text, "- one\n- two\n- three");
    }

    #[test]
    fn test_lines_outside_selection_are_untouched() {
        let text = "one\ntwo\nthree";
        let outcome = run_replace_action(text, 0, 2, &add_dash());
        assert_eq!(outcome.text, "- one\ntwo\nthree");
    }

    #[test]
    fn test_same_replace_stops_the_chain() {
        let patterns = vec![
            ReplacePattern::new(&DASH, "$0"),
            ReplacePattern::new(&PLAIN, "$1- "),
        ];
        let outcome = run_replace_action("- keep", 0, 0, &patterns);
        assert_eq!(outcome.text, "- keep");
    }

    #[test]
    fn test_selection_out_of_bounds_is_clamped() {
        let outcome = run_replace_action("x", 50, 90, &add_dash());
        assert_eq!(outcome.text, "- x");
    }
}
