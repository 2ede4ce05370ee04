//! The markdown prefix patterns and the replace-pattern generators for
//! the line-prefix toggle actions.

use std::sync::LazyLock;

use regex::Regex;

use crate::actions::replace::ReplacePattern;

pub static PREFIX_ORDERED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)((\d+)([.)])(\s))").expect("invalid ordered prefix"));
pub static PREFIX_ATX_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s{0,3})(#{1,6}\s)").expect("invalid heading prefix"));
pub static PREFIX_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(>\s)").expect("invalid quote prefix"));
pub static PREFIX_CHECKED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(([-*+])\s\[[xX]\]\s)").expect("invalid checked prefix"));
pub static PREFIX_CHECKBOX_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)(([-*+]\s\[)[\sxX](\]\s))").expect("invalid checkbox prefix")
});
pub static PREFIX_UNCHECKED_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)(([-*+])\s\[\s\]\s)").expect("invalid unchecked prefix")
});
pub static PREFIX_UNORDERED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(([-*+])\s)").expect("invalid unordered prefix"));
pub static PREFIX_LEADING_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)").expect("invalid leading space prefix"));

/// All recognizable prefixes, in match precedence order. Unordered must
/// come after the checkbox variants or a checklist line would toggle as a
/// plain list.
pub fn prefix_patterns() -> [&'static Regex; 7] {
    [
        &PREFIX_ORDERED_LIST,
        &PREFIX_ATX_HEADING,
        &PREFIX_QUOTE,
        &PREFIX_CHECKED_LIST,
        &PREFIX_UNCHECKED_LIST,
        &PREFIX_UNORDERED_LIST,
        &PREFIX_LEADING_SPACE,
    ]
}

/// Lines matching `target` get `alternative`; lines matching any other
/// recognizable prefix get `target_replacement`.
fn replace_with_target_pattern_or_alternative(
    target: &Regex,
    target_replacement: &str,
    alternative: &str,
) -> Vec<ReplacePattern> {
    prefix_patterns()
        .into_iter()
        .map(|pattern| {
            if pattern.as_str() == target.as_str() {
                ReplacePattern::new(pattern, alternative)
            } else {
                ReplacePattern::new(pattern, target_replacement)
            }
        })
        .collect()
}

/// Toggle-off keeps only the whitespace before the prefix.
fn replace_with_target_prefix_or_remove(
    target: &Regex,
    target_replacement: &str,
) -> Vec<ReplacePattern> {
    replace_with_target_pattern_or_alternative(target, target_replacement, "$1")
}

/// Set or unset an ATX heading of `level` on each selected line: same
/// level toggles off, other heading levels are re-leveled, any other
/// prefix is replaced by the heading.
pub fn set_or_unset_heading(level: usize) -> Vec<ReplacePattern> {
    let level = level.clamp(1, 6);
    let heading = "#".repeat(level);

    let exact = Regex::new(&format!(r"^(\s{{0,3}}){heading} ")).expect("heading level pattern");
    let mut patterns = vec![
        ReplacePattern::new(&exact, "$1"),
        ReplacePattern::new(&PREFIX_ATX_HEADING, format!("$1{heading} ")),
    ];
    for pattern in prefix_patterns() {
        patterns.push(ReplacePattern::new(pattern, format!("{heading}$1 ")));
    }
    patterns
}

pub fn toggle_unordered_list(bullet: char) -> Vec<ReplacePattern> {
    replace_with_target_prefix_or_remove(&PREFIX_UNORDERED_LIST, &format!("$1{bullet} "))
}

/// Unchecked lines become checked; everything else becomes an unchecked
/// checkbox.
pub fn toggle_checkbox_list(bullet: char) -> Vec<ReplacePattern> {
    replace_with_target_pattern_or_alternative(
        &PREFIX_UNCHECKED_LIST,
        &format!("$1{bullet} [ ] "),
        &format!("$1{bullet} [x] "),
    )
}

pub fn toggle_ordered_list() -> Vec<ReplacePattern> {
    replace_with_target_prefix_or_remove(&PREFIX_ORDERED_LIST, "${1}1. ")
}

pub fn toggle_quote() -> Vec<ReplacePattern> {
    replace_with_target_pattern_or_alternative(&PREFIX_QUOTE, ">$1 ", "")
}

pub fn indent_lines(width: usize) -> Vec<ReplacePattern> {
    let start = Regex::new("^").expect("line start pattern");
    vec![ReplacePattern::new(&start, " ".repeat(width))]
}

pub fn deindent_lines(width: usize) -> Vec<ReplacePattern> {
    let leading = Regex::new(&format!(r"^\s{{1,{width}}}")).expect("leading indent pattern");
    vec![ReplacePattern::new(&leading, "")]
}
