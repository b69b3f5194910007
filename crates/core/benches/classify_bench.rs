use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use sucre_core::api::analyze;
use sucre_core::line::{Char, RawLine};
use sucre_core::params::OutlineParams;

/// Synthetic document: mostly body text with a sprinkling of headings,
/// ~40 lines per page.
fn synthetic_lines(pages: usize) -> Vec<RawLine> {
    let mut lines = Vec::with_capacity(pages * 40);
    lines.push(RawLine {
        page_number: 1,
        text: "Synthetic Benchmark Document".to_string(),
        chars: vec![Char::new(24.0, "Helvetica")],
    });

    for page in 1..=pages {
        for i in 0..40 {
            let (size, font, text) = if i % 13 == 0 {
                (18.0, "Helvetica-Bold", format!("Section {page}.{i}"))
            } else if i % 7 == 0 {
                (14.0, "Helvetica", format!("Subsection {page}.{i}"))
            } else {
                (12.0, "Helvetica", format!("body line {i} of page {page}"))
            };
            lines.push(RawLine {
                page_number: page,
                text,
                chars: (0..12).map(|_| Char::new(size, font)).collect(),
            });
        }
    }

    lines
}

fn bench_analyze(c: &mut Criterion) {
    let params = OutlineParams::default();
    let lines = synthetic_lines(50);

    c.bench_function("analyze_50_pages", |b| {
        b.iter(|| analyze(black_box(lines.clone()), "bench", &params));
    });
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
