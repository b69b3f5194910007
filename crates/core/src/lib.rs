//! sucre - PDF title and heading outline inference from visual layout.
//!
//! Infers a document's title and hierarchical H1/H2/H3 outline from
//! per-character font size and weight metadata, without relying on
//! embedded bookmarks or accessibility tags. PDF decoding is delegated
//! to pdfium; the inference itself is a fixed heuristic over per-line
//! font statistics:
//!
//! 1. collect per-line average size and dominant font across the document
//! 2. take the histogram mode as the body-text baseline
//! 3. derive H1/H2 size cutoffs from the sizes above the baseline
//! 4. classify every line with an ordered rule cascade
//!
//! See [`api::analyze`] for the pure entry point over pre-extracted
//! lines, and [`api::extract_structure_from_file`] for the full pipeline
//! over a PDF file (feature `pdfium`, enabled by default).

pub mod api;
pub mod classify;
pub mod error;
pub mod line;
pub mod outline;
pub mod params;
#[cfg(feature = "pdfium")]
pub mod pdfium;
pub mod stats;
pub mod thresholds;

// Re-export high_level for convenience
pub use api::high_level;
