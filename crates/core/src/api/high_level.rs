//! High-level outline inference API.
//!
//! Provides the main public entry points:
//! - `analyze()` - Infer structure from an already-extracted line stream
//! - `extract_structure_from_file()` - Full pipeline over a PDF file

#[cfg(feature = "pdfium")]
use std::path::Path;

use crate::line::RawLine;
use crate::outline::{DocumentStructure, assemble};
use crate::params::OutlineParams;
use crate::stats::FontStats;
use crate::thresholds::HeadingThresholds;

#[cfg(feature = "pdfium")]
use crate::error::Result;

/// Infers the document structure from an ordered stream of raw lines.
///
/// This is the whole heuristic, independent of any PDF backend: any
/// extractor able to deliver ordered `(page, text, chars)` lines is
/// substitutable. `fallback_title` is reported when the document yields
/// no text at all; callers usually pass the file stem.
///
/// The pass is deterministic: the same lines and parameters always
/// produce the same structure.
///
/// # Example
/// ```
/// use sucre_core::api::analyze;
/// use sucre_core::line::{Char, RawLine};
/// use sucre_core::params::OutlineParams;
///
/// let lines = vec![RawLine {
///     page_number: 1,
///     text: "Annual Report".to_string(),
///     chars: vec![Char::new(24.0, "Helvetica")],
/// }];
/// let structure = analyze(lines, "report", &OutlineParams::default());
/// assert_eq!(structure.title, "Annual Report");
/// ```
pub fn analyze<I>(lines: I, fallback_title: &str, params: &OutlineParams) -> DocumentStructure
where
    I: IntoIterator<Item = RawLine>,
{
    let stats = FontStats::collect(lines);
    let thresholds = HeadingThresholds::from_histogram(&stats.histogram, params.default_body_size);

    tracing::debug!(
        lines = stats.lines.len(),
        body_size = thresholds.body_size,
        h1_size = thresholds.h1_size,
        h2_size = thresholds.h2_size,
        "derived thresholds"
    );

    assemble(&stats, &thresholds, fallback_title, params)
}

/// Extracts a PDF's title and outline via the pdfium backend.
///
/// The file stem serves as the title fallback for documents without
/// extractable text. Extraction failures (unreadable or corrupt
/// documents, missing pdfium library) are returned as errors; an empty
/// but readable document is not an error.
#[cfg(feature = "pdfium")]
pub fn extract_structure_from_file(
    path: &Path,
    params: &OutlineParams,
) -> Result<DocumentStructure> {
    let lines = crate::pdfium::extract_lines(path)?;
    let fallback = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();

    Ok(analyze(lines, fallback, params))
}
