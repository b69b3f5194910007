//! Text line model and per-line font properties.
//!
//! The extraction backend delivers [`RawLine`]s; [`TextLine`] is the
//! aggregate the rest of the pipeline works with. Lines whose trimmed
//! text is empty never become a [`TextLine`].

use rustc_hash::FxHashMap;

/// A single character as reported by the layout extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct Char {
    /// Rendered size in points.
    pub size: f64,
    /// Resolved font name, e.g. "Helvetica-Bold".
    pub font_name: String,
}

impl Char {
    pub fn new(size: f64, font_name: impl Into<String>) -> Self {
        Self {
            size,
            font_name: font_name.into(),
        }
    }
}

/// A raw text line as delivered by the extraction backend: 1-based page
/// number, raw text, and the characters contributing to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawLine {
    pub page_number: usize,
    pub text: String,
    pub chars: Vec<Char>,
}

/// A text line annotated with its aggregate font properties.
///
/// `text` is trimmed. `average_size` is 0.0 when no character carried a
/// usable size; such a line can never classify as a heading.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub page_number: usize,
    pub text: String,
    pub average_size: f64,
    pub dominant_font: String,
}

impl TextLine {
    /// Derives the aggregate line from a raw line.
    ///
    /// Returns `None` when the trimmed text is empty; emptiness is
    /// checked before the characters are consulted.
    pub fn from_raw(raw: &RawLine) -> Option<Self> {
        let text = raw.text.trim();
        if text.is_empty() {
            return None;
        }

        let (average_size, dominant_font) = font_properties(&raw.chars);

        Some(Self {
            page_number: raw.page_number,
            text: text.to_string(),
            average_size,
            dominant_font,
        })
    }
}

/// Average character size and dominant (most frequent) font name for a
/// run of characters.
///
/// Characters without a finite size are excluded from the average; a
/// run contributing no usable size averages to 0.0. The dominant-font
/// tie goes to the font encountered first in character order. A run
/// with no characters at all yields `(0.0, "")`.
pub fn font_properties(chars: &[Char]) -> (f64, String) {
    let sized: Vec<f64> = chars
        .iter()
        .map(|c| c.size)
        .filter(|s| s.is_finite())
        .collect();

    let average = if sized.is_empty() {
        0.0
    } else {
        sized.iter().sum::<f64>() / sized.len() as f64
    };

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for c in chars {
        *counts.entry(c.font_name.as_str()).or_insert(0) += 1;
    }

    // First font to reach the maximum count wins.
    let mut dominant = "";
    let mut best = 0usize;
    for c in chars {
        let n = counts[c.font_name.as_str()];
        if n > best {
            best = n;
            dominant = c.font_name.as_str();
        }
    }

    (average, dominant.to_string())
}
