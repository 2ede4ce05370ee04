use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use markdown_inkwell_engine::{FormatPatterns, HighlightConfig, generate_spans, renumbered};

fn synthetic_document(paragraphs: usize) -> String {
    let mut doc = String::new();
    for i in 0..paragraphs {
        doc.push_str(&format!("## Section {i}\n\n"));
        doc.push_str("Some **bold** text with a [link](https://example.com) and `code`.  \n");
        doc.push_str("- item one\n- [ ] item two\n");
        doc.push_str(&format!("1. first\n2. second\n{}. third\n\n", i + 7));
    }
    doc
}

fn bench_generate_spans(c: &mut Criterion) {
    let config = HighlightConfig::default();
    let small = synthetic_document(5);
    let large = synthetic_document(200);

    c.bench_function("generate_spans/small", |b| {
        b.iter(|| generate_spans(black_box(&small), &config))
    });
    c.bench_function("generate_spans/large", |b| {
        b.iter(|| generate_spans(black_box(&large), &config))
    });
}

fn bench_renumber(c: &mut Criterion) {
    let patterns = FormatPatterns::markdown();
    let mut run = String::new();
    for i in 0..500 {
        run.push_str(&format!("{}. item\n", 500 - i));
    }

    c.bench_function("renumber/500_items", |b| {
        b.iter(|| renumbered(black_box(&run), 0, &patterns))
    });
}

criterion_group!(benches, bench_generate_spans, bench_renumber);
criterion_main!(benches);
