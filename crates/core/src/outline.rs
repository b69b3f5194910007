//! Outline assembly.
//!
//! Packages the classifier's survivors and the resolved title into the
//! final document structure.

use serde::{Deserialize, Serialize};

use crate::classify::{HeadingLevel, classify_line};
use crate::line::TextLine;
use crate::params::OutlineParams;
use crate::stats::FontStats;
use crate::thresholds::HeadingThresholds;

/// One heading of the inferred outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub level: HeadingLevel,
    pub text: String,
    pub page: usize,
}

/// The inferred document structure: title plus ordered heading outline.
///
/// This is the sole externally visible artifact per document; it
/// serializes to `{"title": ..., "outline": [{"level", "text", "page"}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStructure {
    pub title: String,
    pub outline: Vec<OutlineEntry>,
}

/// Resolves the document title.
///
/// Order of preference: the page-1 candidate; the largest-size line
/// anywhere in the document (earliest wins a size tie); the caller's
/// fallback, typically the file stem.
fn resolve_title(stats: &FontStats, fallback: &str) -> String {
    if let Some(title) = &stats.title {
        return title.text.clone();
    }

    let mut best: Option<&TextLine> = None;
    for line in &stats.lines {
        if best.is_none_or(|b| line.average_size > b.average_size) {
            best = Some(line);
        }
    }

    best.map_or_else(|| fallback.to_string(), |line| line.text.clone())
}

/// True when the outline is plausibly a real document structure: enough
/// headings, spread over more than one page.
fn looks_structured(outline: &[OutlineEntry], min_headings: usize) -> bool {
    if outline.len() < min_headings {
        return false;
    }
    let first_page = outline[0].page;
    outline.iter().any(|entry| entry.page != first_page)
}

/// Builds the final structure from the collected statistics.
///
/// Entries keep document scan order. With `strict_outline` enabled, an
/// unstructured outline is emptied while the title is still reported.
pub fn assemble(
    stats: &FontStats,
    thresholds: &HeadingThresholds,
    fallback_title: &str,
    params: &OutlineParams,
) -> DocumentStructure {
    let title = resolve_title(stats, fallback_title);

    let mut outline = Vec::new();
    for line in &stats.lines {
        if let Some(level) = classify_line(line, stats.title.as_ref(), thresholds, params) {
            outline.push(OutlineEntry {
                level,
                text: line.text.clone(),
                page: line.page_number,
            });
        }
    }

    if params.strict_outline && !looks_structured(&outline, params.min_headings) {
        tracing::debug!(
            headings = outline.len(),
            "suppressing unstructured outline"
        );
        outline.clear();
    }

    DocumentStructure { title, outline }
}
