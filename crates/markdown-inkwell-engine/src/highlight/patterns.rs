//! The fixed battery of markdown patterns and the ordered table mapping
//! them to styles.
//!
//! The `regex` crate has no lookaround or backreferences, so where the
//! classic editor patterns relied on them the boundary characters are
//! consumed capture groups instead, and delimiter symmetry (`**…**` vs
//! `**…__`) is validated in code by the span generator.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::HighlightConfig;
use crate::highlight::spans::SpanStyle;

/// Bare http/https URL.
pub static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s<>\[\]]+").expect("invalid URL pattern"));

/// ATX heading (groups 1/2) or Setext heading with its underline
/// (groups 3/4).
pub static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(^(#{1,6})[^\S\n][^\n]+$)|(^\S[^\n]*\n(={2,}|-{2,})[ \t]*$)")
        .expect("invalid heading pattern")
});

/// `[text](target)` and `![text](target)`; the target may contain one
/// level of nested parentheses.
pub static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!)?\[([^\]]*)\]\(([^()]*(?:\([^()]*\)[^()]*)*)\)").expect("invalid link pattern")
});

/// Bullet or checkbox list marker, up to 16 columns of indent.
pub static LIST_UNORDERED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]{0,16}([*+-])( \[[ xX]\])? ").expect("invalid unordered list pattern")
});

/// Ordered list marker, up to 16 columns of indent.
pub static LIST_ORDERED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]{0,16}(\d+)([.)]) ").expect("invalid ordered list pattern")
});

/// Line-leading block quote angle.
pub static QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>").expect("invalid quote pattern"));

/// `~~…~~`, non-greedy, non-space before the closing run.
pub static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~(.*?\S)~~").expect("invalid strikethrough pattern"));

/// Double-emphasis: boundary (group 1), opening run (2), content (3),
/// closing run (4). The generator rejects matches whose runs differ.
pub static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(^|[\s\[\{\(])(\*{2,3}|_{2,3})(\S|\S.*?\S)(\*{2,3}|_{2,3})")
        .expect("invalid bold pattern")
});

/// Single-char emphasis with the same group layout as [`BOLD`]. The
/// content may not begin or end with an emphasis delimiter, which keeps
/// `**bold**` and `snake_case_names` out.
pub static ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(^|[\s\[\{\(])([*_])([^*_\s]|[^*_\s].*?[^*_\s])([*_])")
        .expect("invalid italic pattern")
});

/// Inline code between single backticks, or a 4-space-indented line that
/// is not itself a list item.
pub static CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)`[^`\n]+`|^[^\S\n]{4}(?:[^0-9*+\-\n][^\n]*)?$").expect("invalid code pattern")
});

/// Two or more trailing spaces before a newline (hard line break). The
/// styled run is group 1; the leading non-space is only an anchor.
pub static DOUBLESPACE_LINE_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S([^\S\n]{2,})\n").expect("invalid line ending pattern"));

pub const COLOR_HEADING: u32 = 0xFF_EF6D00;
pub const COLOR_LINK: u32 = 0xFF_1EA3FE;
pub const COLOR_LIST: u32 = 0xFF_DAA521;
pub const COLOR_QUOTE: u32 = 0xFF_88B04C;
pub const COLOR_CODEBLOCK: u32 = 0x44_8C8C8C;

/// What a table entry matched, for the generator's kind-specific span
/// emission (heading scaling, emphasis validation, group selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Url,
    Heading,
    Link,
    ListUnordered,
    ListOrdered,
    LineEnding,
    Bold,
    Italic,
    Quote,
    Strikethrough,
    Code,
}

/// One row of the pattern table.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    pub kind: PatternKind,
    pub regex: &'static Regex,
    pub style: SpanStyle,
}

impl PatternEntry {
    fn new(kind: PatternKind, regex: &'static Regex, style: SpanStyle) -> Self {
        Self { kind, regex, style }
    }
}

/// Build the ordered pattern table for one highlight pass.
///
/// The order is load-bearing: heading color precedes emphasis so a bold
/// heading keeps both styles, and the two code rows come last so their
/// shading sits under nothing else. Pure function of the config.
pub fn pattern_table(config: &HighlightConfig) -> Vec<PatternEntry> {
    let mut table = vec![
        PatternEntry::new(PatternKind::Url, &URL, SpanStyle::Foreground(COLOR_LINK)),
        PatternEntry::new(
            PatternKind::Heading,
            &HEADING,
            SpanStyle::Foreground(COLOR_HEADING),
        ),
        PatternEntry::new(PatternKind::Link, &LINK, SpanStyle::Foreground(COLOR_LINK)),
        PatternEntry::new(
            PatternKind::ListUnordered,
            &LIST_UNORDERED,
            SpanStyle::Foreground(COLOR_LIST),
        ),
        PatternEntry::new(
            PatternKind::ListOrdered,
            &LIST_ORDERED,
            SpanStyle::Foreground(COLOR_LIST),
        ),
    ];

    if config.highlight_line_endings {
        table.push(PatternEntry::new(
            PatternKind::LineEnding,
            &DOUBLESPACE_LINE_ENDING,
            SpanStyle::Background(COLOR_CODEBLOCK),
        ));
    }

    table.push(PatternEntry::new(PatternKind::Bold, &BOLD, SpanStyle::Bold));
    table.push(PatternEntry::new(
        PatternKind::Italic,
        &ITALIC,
        SpanStyle::Italic,
    ));
    table.push(PatternEntry::new(
        PatternKind::Quote,
        &QUOTE,
        SpanStyle::Foreground(COLOR_QUOTE),
    ));
    table.push(PatternEntry::new(
        PatternKind::Strikethrough,
        &STRIKETHROUGH,
        SpanStyle::Strikethrough,
    ));

    if config.monospace_code {
        table.push(PatternEntry::new(PatternKind::Code, &CODE, SpanStyle::Monospace));
    }
    if config.highlight_code_blocks {
        table.push(PatternEntry::new(
            PatternKind::Code,
            &CODE,
            SpanStyle::Background(COLOR_CODEBLOCK),
        ));
    }

    table
}
