//! Tests for the font statistics pass: line aggregation, the size
//! histogram, and the page-1 title candidate fold.

use sucre_core::line::{Char, RawLine};
use sucre_core::stats::{FontStats, SizeHistogram};

// ============================================================================
// Helper functions
// ============================================================================

fn raw(page: usize, text: &str, sizes_and_fonts: &[(f64, &str)]) -> RawLine {
    RawLine {
        page_number: page,
        text: text.to_string(),
        chars: sizes_and_fonts
            .iter()
            .map(|&(size, font)| Char::new(size, font))
            .collect(),
    }
}

fn body(page: usize, text: &str) -> RawLine {
    raw(page, text, &[(12.0, "Helvetica")])
}

// ============================================================================
// Line collection
// ============================================================================

#[test]
fn lines_keep_document_order() {
    let stats = FontStats::collect(vec![
        body(1, "first"),
        body(1, "second"),
        body(2, "third"),
    ]);

    let texts: Vec<&str> = stats.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[test]
fn empty_and_whitespace_lines_are_dropped() {
    let stats = FontStats::collect(vec![
        raw(1, "", &[(12.0, "Helvetica")]),
        raw(1, "   \t", &[(12.0, "Helvetica")]),
        body(1, "kept"),
    ]);

    assert_eq!(stats.lines.len(), 1);
    assert_eq!(stats.lines[0].text, "kept");
    assert_eq!(stats.histogram.count(12), 1);
}

#[test]
fn line_without_chars_is_collected_with_zero_size() {
    let stats = FontStats::collect(vec![raw(1, "ghost text", &[])]);

    assert_eq!(stats.lines.len(), 1);
    assert_eq!(stats.lines[0].average_size, 0.0);
    assert_eq!(stats.lines[0].dominant_font, "");
    // It lands in the zero bucket and never becomes the title candidate.
    assert_eq!(stats.histogram.count(0), 1);
    assert!(stats.title.is_none());
}

// ============================================================================
// Size histogram
// ============================================================================

#[test]
fn histogram_counts_lines_per_rounded_size() {
    let stats = FontStats::collect(vec![
        body(1, "one"),
        body(1, "two"),
        raw(2, "heading", &[(18.0, "Helvetica")]),
    ]);

    assert_eq!(stats.histogram.count(12), 2);
    assert_eq!(stats.histogram.count(18), 1);
    assert_eq!(stats.histogram.count(13), 0);
}

#[test]
fn histogram_rounds_half_away_from_zero() {
    // The bucketing convention: 12.5 rounds up to 13, not to even.
    assert_eq!(SizeHistogram::key(12.5), 13);
    assert_eq!(SizeHistogram::key(12.4), 12);
    assert_eq!(SizeHistogram::key(11.5), 12);
}

#[test]
fn histogram_keys_use_per_line_averages() {
    // Two chars at 10 and 14 average to 12.
    let stats = FontStats::collect(vec![raw(1, "mixed", &[(10.0, "A"), (14.0, "A")])]);
    assert_eq!(stats.histogram.count(12), 1);
}

// ============================================================================
// Title candidate
// ============================================================================

#[test]
fn title_candidate_is_largest_page_one_line() {
    let stats = FontStats::collect(vec![
        body(1, "small print"),
        raw(1, "The Actual Title", &[(24.0, "Helvetica")]),
        raw(1, "subtitle", &[(16.0, "Helvetica")]),
    ]);

    let title = stats.title.expect("candidate expected");
    assert_eq!(title.text, "The Actual Title");
    assert_eq!(title.page, 1);
    assert_eq!(title.size, 24.0);
}

#[test]
fn title_candidate_tie_keeps_earliest() {
    let stats = FontStats::collect(vec![
        raw(1, "first at 24", &[(24.0, "Helvetica")]),
        raw(1, "second at 24", &[(24.0, "Helvetica")]),
    ]);

    assert_eq!(stats.title.unwrap().text, "first at 24");
}

#[test]
fn title_candidate_ignores_later_pages() {
    let stats = FontStats::collect(vec![
        body(1, "page one body"),
        raw(2, "huge on page two", &[(36.0, "Helvetica")]),
    ]);

    let title = stats.title.expect("candidate expected");
    assert_eq!(title.text, "page one body");
    assert_eq!(title.size, 12.0);
}

#[test]
fn no_page_one_text_means_no_candidate() {
    let stats = FontStats::collect(vec![raw(2, "starts on page two", &[(24.0, "Helvetica")])]);
    assert!(stats.title.is_none());
}
