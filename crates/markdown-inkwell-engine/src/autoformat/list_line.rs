//! Read-only views of one line, classified against the list prefix
//! patterns.
//!
//! Descriptors are recomputed from the text on every inspection and never
//! cached across edits; stale line boundaries after an insert or delete
//! are the classic source of bugs in this kind of machinery.

use regex::Regex;

use crate::actions::markdown::{PREFIX_CHECKBOX_LIST, PREFIX_ORDERED_LIST, PREFIX_UNORDERED_LIST};
use crate::text::{first_non_indent, line_end, line_start};

/// List markers indented deeper than this are not treated as list items,
/// matching the 16-column ceiling of the highlight marker patterns.
pub const MAX_LIST_INDENT: usize = 16;

/// The prefix patterns the list machinery classifies lines with.
#[derive(Debug, Clone)]
pub struct FormatPatterns {
    pub unordered: &'static Regex,
    pub checkbox: &'static Regex,
    pub ordered: &'static Regex,
}

impl FormatPatterns {
    pub fn markdown() -> Self {
        Self {
            unordered: &PREFIX_UNORDERED_LIST,
            checkbox: &PREFIX_CHECKBOX_LIST,
            ordered: &PREFIX_ORDERED_LIST,
        }
    }
}

impl Default for FormatPatterns {
    fn default() -> Self {
        Self::markdown()
    }
}

/// Bounds and indentation of the line containing a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub line_start: usize,
    pub line_end: usize,
    pub line: &'a str,
    /// Byte width of the leading space/tab run.
    pub indent: usize,
    /// Whitespace-only line.
    pub is_empty: bool,
}

impl<'a> ListLine<'a> {
    pub fn new(text: &'a str, position: usize) -> Self {
        let start = line_start(text, position);
        let end = line_end(text, position);
        let indent = first_non_indent(text, start) - start;
        Self {
            line_start: start,
            line_end: end,
            line: &text[start..end],
            indent,
            is_empty: end - start == indent,
        }
    }
}

/// Ordered-list facts about a line. Offsets are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMarker<'a> {
    pub delimiter: char,
    /// The ordinal digits.
    pub value: &'a str,
    pub num_start: usize,
    pub num_end: usize,
    /// Full marker group: digits, delimiter and trailing space.
    pub group_start: usize,
    pub group_end: usize,
}

#[derive(Debug, Clone)]
pub struct OrderedLine<'a> {
    pub list: ListLine<'a>,
    pub marker: Option<OrderedMarker<'a>>,
}

impl<'a> OrderedLine<'a> {
    pub fn new(text: &'a str, position: usize, patterns: &FormatPatterns) -> Self {
        let list = ListLine::new(text, position);
        let marker = if list.indent <= MAX_LIST_INDENT {
            patterns.ordered.captures(list.line).and_then(|caps| {
                let (full, value, delim) = (caps.get(2)?, caps.get(3)?, caps.get(4)?);
                Some(OrderedMarker {
                    delimiter: delim.as_str().chars().next().unwrap_or('.'),
                    value: value.as_str(),
                    num_start: list.line_start + value.start(),
                    num_end: list.line_start + value.end(),
                    group_start: list.line_start + full.start(),
                    group_end: list.line_start + full.end(),
                })
            })
        } else {
            None
        };
        Self { list, marker }
    }
}

/// Unordered or checkbox facts about a line; both continue as unordered
/// items, a checkbox always as an unchecked one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletMarker {
    /// Prefix a continuation line gets (bullet plus space, checkbox reset
    /// to `[ ]`).
    pub new_item_prefix: String,
    pub group_start: usize,
    pub group_end: usize,
}

#[derive(Debug, Clone)]
pub struct BulletLine<'a> {
    pub list: ListLine<'a>,
    pub marker: Option<BulletMarker>,
}

impl<'a> BulletLine<'a> {
    pub fn new(text: &'a str, position: usize, patterns: &FormatPatterns) -> Self {
        let list = ListLine::new(text, position);
        if list.indent > MAX_LIST_INDENT {
            return Self { list, marker: None };
        }

        // Checkbox first: a checklist line also matches the plain
        // unordered pattern.
        let marker = if let Some(caps) = patterns.checkbox.captures(list.line) {
            caps.get(2).and_then(|full| {
                let (left, right) = (caps.get(3)?, caps.get(4)?);
                Some(BulletMarker {
                    new_item_prefix: format!("{} {}", left.as_str(), right.as_str()),
                    group_start: list.line_start + full.start(),
                    group_end: list.line_start + full.end(),
                })
            })
        } else {
            patterns.unordered.captures(list.line).and_then(|caps| {
                let full = caps.get(2)?;
                Some(BulletMarker {
                    new_item_prefix: full.as_str().to_string(),
                    group_start: list.line_start + full.start(),
                    group_end: list.line_start + full.end(),
                })
            })
        };
        Self { list, marker }
    }
}

/// Ordinal after `value`, or None when the digits do not parse (absurdly
/// long numbers degrade to no numeric continuation).
pub fn next_ordinal(value: &str) -> Option<String> {
    value
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_add(1))
        .map(|n| n.to_string())
}
