//! Body-size baseline and heading size thresholds.

use itertools::Itertools;

use crate::stats::SizeHistogram;

/// Size cutoffs derived once per document, immutable thereafter.
///
/// `body_size` is the histogram mode, assumed to be ordinary paragraph
/// text. The H1/H2 cutoffs come from the distinct rounded sizes strictly
/// above `body_size + 1`, largest first; when the distribution offers
/// fewer than two such sizes, fixed offsets above the body size fill in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingThresholds {
    pub body_size: f64,
    pub h1_size: f64,
    pub h2_size: f64,
}

impl HeadingThresholds {
    /// Derives thresholds from the completed histogram.
    ///
    /// A tie for the mode prefers the smaller size, keeping the larger
    /// sizes available as heading candidates. An empty histogram falls
    /// back to `default_body_size` and produces the fixed-offset
    /// cutoffs; the classifier then finds no headings.
    pub fn from_histogram(histogram: &SizeHistogram, default_body_size: f64) -> Self {
        let body = histogram
            .iter()
            .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
            .map(|(size, _)| size)
            .next();

        let body_size = body.map_or(default_body_size, |b| b as f64);

        let candidates: Vec<f64> = histogram
            .iter()
            .map(|(size, _)| size)
            .filter(|&size| size as f64 > body_size + 1.0)
            .sorted_by(|a, b| b.cmp(a))
            .map(|size| size as f64)
            .collect();

        let h1_size = candidates.first().copied().unwrap_or(body_size + 4.0);
        let h2_size = candidates.get(1).copied().unwrap_or(body_size + 2.0);

        Self {
            body_size,
            h1_size,
            h2_size,
        }
    }
}
