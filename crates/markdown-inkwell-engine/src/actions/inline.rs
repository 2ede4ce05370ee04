//! Inline marker toggles: wrap a selection in `**`/`_`/`~~`/`` ` `` or
//! strip an existing wrapping, plus single-sided insertions.

use crate::text::clamp_selection;

/// Toggle `open`/`close` around `text[sel_start..sel_end]`.
///
/// Three cases, tried in order: the markers sit immediately around the
/// selection (strip them), the markers sit just inside the selection
/// (strip them, keep the selection around the content), otherwise wrap.
/// With `trim`, leading/trailing whitespace of the selection stays
/// outside the inserted markers. Returns the new text and selection.
pub fn surround(
    text: &str,
    sel_start: usize,
    sel_end: usize,
    open: &str,
    close: &str,
    trim: bool,
) -> (String, usize, usize) {
    let (ss, se) = clamp_selection(text, sel_start, sel_end);
    let (ol, cl) = (open.len(), close.len());
    let selection = &text[ss..se];

    // Markers around the selection.
    if ss >= ol
        && se + cl <= text.len()
        && text.get(ss - ol..ss) == Some(open)
        && text.get(se..se + cl) == Some(close)
    {
        let new_text = format!("{}{}{}", &text[..ss - ol], selection, &text[se + cl..]);
        return (new_text, ss - ol, se - ol);
    }

    // Markers within the selection.
    if se - ss >= ol + cl && selection.starts_with(open) && selection.ends_with(close) {
        let inner = &selection[ol..selection.len() - cl];
        let new_text = format!("{}{}{}", &text[..ss], inner, &text[se..]);
        return (new_text, ss, se - ol - cl);
    }

    let replacement = if trim && !selection.is_empty() {
        let first = selection
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(selection.len());
        let last = selection
            .rfind(|c: char| !c.is_whitespace())
            .map_or(first, |i| i + selection[i..].chars().next().map_or(1, char::len_utf8));
        format!(
            "{}{}{}{}{}",
            &selection[..first],
            open,
            &selection[first..last],
            close,
            &selection[last..]
        )
    } else {
        format!("{open}{selection}{close}")
    };

    let new_text = format!("{}{}{}", &text[..ss], replacement, &text[se..]);
    (new_text, ss + ol, se + ol)
}

/// Insert a one-sided marker (horizontal rule and friends) once, before
/// the selection. Never wraps.
pub fn insert_unpaired(text: &str, sel_start: usize, marker: &str) -> (String, usize) {
    let (at, _) = clamp_selection(text, sel_start, sel_start);
    let new_text = format!("{}{}{}", &text[..at], marker, &text[at..]);
    (new_text, at + marker.len())
}
