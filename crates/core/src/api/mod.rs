//! High-level API module for outline inference.
//!
//! # Example
//!
//! ```ignore
//! use sucre_core::api::extract_structure_from_file;
//! use sucre_core::params::OutlineParams;
//!
//! let structure = extract_structure_from_file("document.pdf".as_ref(), &OutlineParams::default())?;
//! println!("{}", structure.title);
//! ```

pub mod high_level;

// Re-export for convenience
#[cfg(feature = "pdfium")]
pub use high_level::extract_structure_from_file;
pub use high_level::analyze;
