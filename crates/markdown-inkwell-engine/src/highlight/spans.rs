//! Span generation: one pass of the pattern table over the document text.

use std::mem::discriminant;
use std::time::{Duration, Instant};

use crate::config::HighlightConfig;
use crate::highlight::patterns::{self, PatternEntry, PatternKind};

/// Wall-clock budget for one full pass. A pathological input/pattern
/// combination aborts the pass and keeps whatever was accumulated.
const SCAN_BUDGET: Duration = Duration::from_millis(250);

/// Relative text scale applied to bare URLs.
const URL_TEXT_SCALE: f32 = 0.85;

/// A visual style over a byte range of the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpanStyle {
    /// ARGB foreground color.
    Foreground(u32),
    /// ARGB background color.
    Background(u32),
    Bold,
    Italic,
    Strikethrough,
    Monospace,
    /// Relative font size factor (headings, shrunken URLs).
    TextScale(f32),
}

/// A derived, disposable style annotation. Offsets are byte offsets,
/// `end` exclusive. The whole set is recomputed on every pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSpan {
    pub start: usize,
    pub end: usize,
    pub style: SpanStyle,
}

impl StyleSpan {
    fn new(start: usize, end: usize, style: SpanStyle) -> Self {
        Self { start, end, style }
    }
}

/// Run every pattern of the table over `text` and return the style spans,
/// sorted by start offset.
///
/// Pure: identical `(text, config)` always produces the identical span
/// sequence. Never panics on any input; oversized documents degrade per
/// the config thresholds.
pub fn generate_spans(text: &str, config: &HighlightConfig) -> Vec<StyleSpan> {
    if text.is_empty() || text.len() > config.disable_above {
        return Vec::new();
    }
    let downgraded = text.len() > config.downgrade_above;

    let deadline = Instant::now() + SCAN_BUDGET;
    let mut spans = Vec::new();

    for entry in patterns::pattern_table(config) {
        if downgraded && matches!(entry.style, SpanStyle::Background(_)) {
            continue;
        }
        if Instant::now() > deadline {
            tracing::warn!(
                len = text.len(),
                kind = ?entry.kind,
                "highlight pass exceeded budget, returning partial span set"
            );
            break;
        }
        scan_entry(text, &entry, config, &mut spans);
    }

    spans.sort_by_key(|s| (s.start, s.end));
    spans
}

fn scan_entry(text: &str, entry: &PatternEntry, config: &HighlightConfig, out: &mut Vec<StyleSpan>) {
    match entry.kind {
        PatternKind::Bold | PatternKind::Italic => {
            for caps in entry.regex.captures_iter(text) {
                let (Some(open), Some(close)) = (caps.get(2), caps.get(4)) else {
                    continue;
                };
                // The regex cannot backreference the opening run, so
                // asymmetric pairs like `**x__` land here and are dropped.
                if open.as_str() != close.as_str() {
                    continue;
                }
                push_span(out, StyleSpan::new(open.start(), close.end(), entry.style));
                if entry.kind == PatternKind::Bold && open.len() == 3 {
                    push_span(out, StyleSpan::new(open.start(), close.end(), SpanStyle::Italic));
                }
            }
        }
        PatternKind::Heading => {
            for caps in entry.regex.captures_iter(text) {
                let Some(whole) = caps.get(0) else { continue };
                push_span(out, StyleSpan::new(whole.start(), whole.end(), entry.style));
                if config.bigger_headings {
                    let level = match (caps.get(2), caps.get(4)) {
                        (Some(hashes), _) => hashes.len(),
                        (None, Some(underline)) if underline.as_str().starts_with('=') => 1,
                        (None, Some(_)) => 2,
                        (None, None) => continue,
                    };
                    let scale = (1.8 - 0.2 * level as f32).max(0.8);
                    push_span(
                        out,
                        StyleSpan::new(whole.start(), whole.end(), SpanStyle::TextScale(scale)),
                    );
                }
            }
        }
        PatternKind::LineEnding => {
            for caps in entry.regex.captures_iter(text) {
                if let Some(run) = caps.get(1) {
                    push_span(out, StyleSpan::new(run.start(), run.end(), entry.style));
                }
            }
        }
        PatternKind::Url => {
            for m in entry.regex.find_iter(text) {
                push_span(out, StyleSpan::new(m.start(), m.end(), entry.style));
                push_span(out, StyleSpan::new(m.start(), m.end(), SpanStyle::Italic));
                push_span(
                    out,
                    StyleSpan::new(m.start(), m.end(), SpanStyle::TextScale(URL_TEXT_SCALE)),
                );
            }
        }
        _ => {
            for m in entry.regex.find_iter(text) {
                push_span(out, StyleSpan::new(m.start(), m.end(), entry.style));
            }
        }
    }
}

/// Insert a span, trimming earlier spans of the same style kind out of its
/// range. Later patterns win where the same kind of style overlaps, which
/// keeps the per-kind non-overlap invariant without an interval tree.
fn push_span(spans: &mut Vec<StyleSpan>, new: StyleSpan) {
    if new.start >= new.end {
        return;
    }
    let mut i = 0;
    while i < spans.len() {
        let old = spans[i];
        let same_kind = discriminant(&old.style) == discriminant(&new.style);
        if same_kind && old.start < new.end && new.start < old.end {
            spans.remove(i);
            if old.start < new.start {
                spans.insert(i, StyleSpan::new(old.start, new.start, old.style));
                i += 1;
            }
            if old.end > new.end {
                spans.insert(i, StyleSpan::new(new.end, old.end, old.style));
                i += 1;
            }
        } else {
            i += 1;
        }
    }
    spans.push(new);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::patterns::{COLOR_HEADING, COLOR_LINK, COLOR_LIST};
    use pretty_assertions::assert_eq;

    fn config() -> HighlightConfig {
        HighlightConfig::default()
    }

    fn spans_of(text: &str) -> Vec<StyleSpan> {
        generate_spans(text, &config())
    }

    // ============ Purity and degradation ============

    #[test]
    fn test_generate_spans_is_pure() {
        let text = "# Title\n\nSome **bold** and _italic_ text\n\n- item\n1. one\n";
        assert_eq!(spans_of(text), spans_of(text));
    }

    #[test]
    fn test_empty_document_yields_no_spans() {
        assert!(spans_of("").is_empty());
    }

    #[test]
    fn test_oversized_document_disables_highlighting() {
        let config = HighlightConfig {
            disable_above: 10,
            ..config()
        };
        let spans = generate_spans("# a heading over the limit", &config);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_downgraded_document_skips_background_passes() {
        let config = HighlightConfig {
            downgrade_above: 10,
            ..config()
        };
        let text = "some text  \n    indented code block here\n";
        let spans = generate_spans(text, &config);
        assert!(
            spans
                .iter()
                .all(|s| !matches!(s.style, SpanStyle::Background(_)))
        );
    }

    // ============ Kind-specific emission ============

    #[test]
    fn test_heading_gets_color_and_scale() {
        let spans = spans_of("## Two\n");
        assert!(spans.contains(&StyleSpan::new(0, 6, SpanStyle::Foreground(COLOR_HEADING))));
        assert!(spans.iter().any(|s| {
            s.start == 0
                && s.end == 6
                && matches!(s.style, SpanStyle::TextScale(f) if (f - 1.4).abs() < 1e-3)
        }));
    }

    #[test]
    fn test_heading_scale_is_clamped_near_normal() {
        let spans = spans_of("###### Six\n");
        assert!(spans.contains(&StyleSpan::new(0, 10, SpanStyle::TextScale(0.8))));
    }

    #[test]
    fn test_setext_heading_levels() {
        let spans = spans_of("Top\n===\n");
        assert!(
            spans
                .iter()
                .any(|s| matches!(s.style, SpanStyle::TextScale(f) if (f - 1.6).abs() < 1e-6))
        );
    }

    #[test]
    fn test_no_scale_spans_without_bigger_headings() {
        let config = HighlightConfig {
            bigger_headings: false,
            ..config()
        };
        let spans = generate_spans("# One\n", &config);
        assert!(
            spans
                .iter()
                .all(|s| !matches!(s.style, SpanStyle::TextScale(_)))
        );
    }

    #[test]
    fn test_triple_run_emphasis_is_bold_and_italic() {
        let spans = spans_of("***both***");
        assert!(spans.contains(&StyleSpan::new(0, 10, SpanStyle::Bold)));
        assert!(spans.contains(&StyleSpan::new(0, 10, SpanStyle::Italic)));
    }

    #[test]
    fn test_mismatched_emphasis_runs_are_dropped() {
        let spans = spans_of("**mixed__");
        assert!(spans.iter().all(|s| s.style != SpanStyle::Bold));
    }

    #[test]
    fn test_adjacent_emphasis_both_match() {
        let spans = spans_of("**a** **b**");
        let bold: Vec<_> = spans.iter().filter(|s| s.style == SpanStyle::Bold).collect();
        assert_eq!(bold.len(), 2);
    }

    #[test]
    fn test_double_space_line_ending_styles_only_the_run() {
        let spans = spans_of("hard break  \nnext\n");
        let bg: Vec<_> = spans
            .iter()
            .filter(|s| matches!(s.style, SpanStyle::Background(_)))
            .collect();
        assert_eq!(bg.len(), 1);
        assert_eq!((bg[0].start, bg[0].end), (10, 12));
    }

    #[test]
    fn test_list_markers_colored() {
        let spans = spans_of("- item\n3. three\n");
        assert!(
            spans
                .iter()
                .filter(|s| s.style == SpanStyle::Foreground(COLOR_LIST))
                .count()
                >= 2
        );
    }

    // ============ Per-kind overlap invariant ============

    fn assert_no_same_kind_overlap(spans: &[StyleSpan]) {
        for (i, a) in spans.iter().enumerate() {
            for b in &spans[i + 1..] {
                let same = discriminant(&a.style) == discriminant(&b.style);
                if same {
                    assert!(
                        a.end <= b.start || b.end <= a.start,
                        "overlapping {a:?} and {b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_link_inside_heading_clips_heading_color() {
        let text = "# see [docs](http://example.com/d)\n";
        let spans = spans_of(text);
        assert_no_same_kind_overlap(&spans);
        // The link keeps its own color, the heading keeps the rest.
        assert!(
            spans
                .iter()
                .any(|s| s.style == SpanStyle::Foreground(COLOR_LINK))
        );
        assert!(
            spans
                .iter()
                .any(|s| s.style == SpanStyle::Foreground(COLOR_HEADING) && s.start == 0)
        );
    }

    #[test]
    fn test_no_same_kind_overlap_on_dense_document() {
        let text = "# h **b** _i_ ~~s~~ `c`\n> q http://a.b [l](c)\n- [x] t  \n1. o\n";
        assert_no_same_kind_overlap(&spans_of(text));
    }
}
