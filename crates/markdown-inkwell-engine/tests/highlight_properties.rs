//! Property-style checks over the span generator, the renumber pass and
//! the inline toggles: the guarantees the host relies on, run against a
//! small corpus of realistic and adversarial documents.

use std::mem::discriminant;

use markdown_inkwell_engine::{
    FormatPatterns, HighlightConfig, SpanStyle, StyleSpan, generate_spans, renumbered, surround,
};
use rstest::rstest;

const REALISTIC: &str = "\
# Notes

Some **bold**, some _italic_, some ~~gone~~, some `code`.

## Links

See [docs](https://example.com/a(b)) and ![img](pic.png)
or bare: http://example.org/page

> quoted wisdom

- one
- [ ] two
- [x] three

1. first
2. second

    indented code block
Setext title
============
";

fn adversarial_corpus() -> Vec<String> {
    vec![
        String::new(),
        " ".repeat(300),
        "*".repeat(400),
        "~~~~~~~~".to_string(),
        "**unclosed bold _and italic `and code".to_string(),
        "](()[".repeat(50),
        "\u{0}\u{1}\u{2}control\u{7f}chars\u{0b}".to_string(),
        "x".repeat(20_000),
        format!("- {}", "y".repeat(10_000)),
        "\n".repeat(500),
        "1. \n2. \n3. \n".repeat(40),
        "####### not a heading\n#also not\n".to_string(),
    ]
}

#[test]
fn generate_spans_is_idempotent_on_identical_input() {
    let config = HighlightConfig::default();
    for text in adversarial_corpus().iter().map(String::as_str).chain([REALISTIC]) {
        assert_eq!(
            generate_spans(text, &config),
            generate_spans(text, &config),
            "two passes over identical input diverged"
        );
    }
}

fn assert_spans_well_formed(text: &str, spans: &[StyleSpan]) {
    for span in spans {
        assert!(span.start < span.end, "empty or inverted span {span:?}");
        assert!(span.end <= text.len(), "span out of bounds {span:?}");
        assert!(
            text.is_char_boundary(span.start) && text.is_char_boundary(span.end),
            "span splits a character {span:?}"
        );
    }
    // Same style kind never overlaps; touching at boundaries is fine.
    for (i, a) in spans.iter().enumerate() {
        for b in &spans[i + 1..] {
            if discriminant(&a.style) == discriminant(&b.style) {
                assert!(
                    a.end <= b.start || b.end <= a.start,
                    "same-kind overlap: {a:?} vs {b:?}"
                );
            }
        }
    }
}

#[test]
fn spans_are_well_formed_on_realistic_document() {
    let spans = generate_spans(REALISTIC, &HighlightConfig::default());
    assert!(!spans.is_empty());
    assert_spans_well_formed(REALISTIC, &spans);
}

#[test]
fn spans_are_sorted_by_start_offset() {
    let spans = generate_spans(REALISTIC, &HighlightConfig::default());
    assert!(spans.windows(2).all(|w| w[0].start <= w[1].start));
}

#[test]
fn adversarial_inputs_never_panic_and_stay_well_formed() {
    let config = HighlightConfig::default();
    let patterns = FormatPatterns::markdown();
    for text in adversarial_corpus() {
        let spans = generate_spans(&text, &config);
        assert_spans_well_formed(&text, &spans);
        // The renumber pass must also survive arbitrary offsets.
        let _ = renumbered(&text, 0, &patterns);
        let _ = renumbered(&text, text.len() / 2, &patterns);
        let _ = renumbered(&text, text.len(), &patterns);
    }
}

#[test]
fn multibyte_documents_produce_boundary_aligned_spans() {
    let text = "# Überschrift\n\n- Eintrag mit **fett** und ☑\n";
    let spans = generate_spans(text, &HighlightConfig::default());
    assert_spans_well_formed(text, &spans);
}

#[test]
fn renumber_is_idempotent() {
    let patterns = FormatPatterns::markdown();
    for text in ["5. a\n6. b\n9. c", "1. a\n1. a\n1. a", REALISTIC] {
        let once = renumbered(text, 0, &patterns);
        assert_eq!(renumbered(&once, 0, &patterns), once);
    }
}

#[test]
fn renumber_fixes_the_documented_example() {
    let patterns = FormatPatterns::markdown();
    assert_eq!(
        renumbered("5. a\n6. b\n9. c", 0, &patterns),
        "5. a\n6. b\n7. c"
    );
}

#[rstest]
#[case("make this bold", 5, 9)]
#[case("word", 0, 4)]
#[case("cursor only", 6, 6)]
#[case("  padded  ", 0, 10)]
fn inline_toggle_round_trips(#[case] text: &str, #[case] start: usize, #[case] end: usize) {
    let (wrapped, s, e) = surround(text, start, end, "**", "**", true);
    let (unwrapped, _, _) = surround(&wrapped, s, e, "**", "**", true);
    assert_eq!(unwrapped, text);
}

#[test]
fn bold_heading_keeps_both_styles() {
    let text = "# A **bold** heading\n";
    let spans = generate_spans(text, &HighlightConfig::default());
    let bold_range = text.find("**bold**").unwrap();
    assert!(
        spans
            .iter()
            .any(|s| s.style == SpanStyle::Bold && s.start == bold_range)
    );
    assert!(
        spans
            .iter()
            .any(|s| matches!(s.style, SpanStyle::Foreground(_)) && s.start == 0)
    );
}
