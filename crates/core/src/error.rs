//! Error types for the sucre outline inference library.

use thiserror::Error;

/// Primary error type for outline extraction operations.
///
/// Classification itself never fails; errors only arise from I/O and
/// from the external layout extraction backend.
#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("pdfium library unavailable: {0}")]
    PdfiumUnavailable(String),

    #[error("failed to load document: {0}")]
    DocumentLoad(String),
}

/// Convenience Result type alias for OutlineError.
pub type Result<T> = std::result::Result<T, OutlineError>;
