//! pdfium-backed line extraction. Behind feature `pdfium`.
//!
//! Binds the pdfium dynamic library at runtime and turns a document into
//! the ordered [`RawLine`] stream the analysis consumes. Each non-empty
//! pdfium text segment becomes one raw line.

use std::path::{Path, PathBuf};

use pdfium_render::prelude::*;

use crate::error::{OutlineError, Result};
use crate::line::{Char, RawLine};

/// Binds pdfium, preferring an explicit library location from
/// `PDFIUM_DYNAMIC_LIB_PATH` (a directory or a full library path), then
/// the system library.
fn bind_pdfium() -> Result<Pdfium> {
    if let Ok(configured) = std::env::var("PDFIUM_DYNAMIC_LIB_PATH") {
        let configured = PathBuf::from(configured);
        let lib_path = if configured.is_dir() {
            Pdfium::pdfium_platform_library_name_at_path(&configured)
        } else {
            configured
        };
        if let Ok(bindings) = Pdfium::bind_to_library(&lib_path) {
            return Ok(Pdfium::new(bindings));
        }
        tracing::warn!(
            path = %lib_path.display(),
            "could not bind pdfium at configured path, trying system library"
        );
    }

    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|err| OutlineError::PdfiumUnavailable(err.to_string()))
}

/// Extracts the ordered raw text lines of a document.
///
/// Page numbers are 1-based in page order. Characters reporting a
/// non-finite or non-positive size are dropped; a page whose text object
/// cannot be read contributes no lines rather than failing the
/// document.
pub fn extract_lines(path: &Path) -> Result<Vec<RawLine>> {
    let pdfium = bind_pdfium()?;
    let document = pdfium
        .load_pdf_from_file(path, None)
        .map_err(|err| OutlineError::DocumentLoad(err.to_string()))?;

    let mut lines = Vec::new();

    for (index, page) in document.pages().iter().enumerate() {
        let page_number = index + 1;

        let text = match page.text() {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(page = page_number, error = %err, "skipping unreadable page");
                continue;
            }
        };

        for segment in text.segments().iter() {
            let raw_text = segment.text();
            if raw_text.trim().is_empty() {
                continue;
            }

            let chars = match segment.chars() {
                Ok(chars) => chars
                    .iter()
                    .filter_map(|c| {
                        let size = f64::from(c.scaled_font_size().value);
                        (size.is_finite() && size > 0.0).then(|| Char::new(size, c.font_name()))
                    })
                    .collect(),
                Err(_) => Vec::new(),
            };

            lines.push(RawLine {
                page_number,
                text: raw_text,
                chars,
            });
        }
    }

    tracing::debug!(path = %path.display(), lines = lines.len(), "extracted text lines");

    Ok(lines)
}
