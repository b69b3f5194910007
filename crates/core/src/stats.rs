//! Document-wide font statistics.
//!
//! A single pass over the raw lines produces everything the estimator
//! and classifier need: the ordered [`TextLine`]s, the size histogram,
//! and the page-1 title candidate. All of it is document-local; nothing
//! is shared across documents.

use rustc_hash::FxHashMap;

use crate::line::{RawLine, TextLine};

/// Frequency histogram of rounded per-line average sizes.
///
/// Keys are bucketed with `f64::round` (half-away-from-zero), the
/// convention used consistently across the pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeHistogram {
    counts: FxHashMap<i64, usize>,
}

impl SizeHistogram {
    /// Bucket key for an average size.
    pub fn key(average_size: f64) -> i64 {
        average_size.round() as i64
    }

    /// Counts one line of the given average size.
    pub fn record(&mut self, average_size: f64) {
        *self.counts.entry(Self::key(average_size)).or_insert(0) += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of lines recorded under a bucket.
    pub fn count(&self, size: i64) -> usize {
        self.counts.get(&size).copied().unwrap_or(0)
    }

    /// Iterates `(rounded size, line count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.counts.iter().map(|(&size, &count)| (size, count))
    }
}

/// Provisional document title: the largest-size line seen on page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleCandidate {
    pub text: String,
    pub page: usize,
    pub size: f64,
}

/// Output of the statistics pass.
#[derive(Debug, Clone, Default)]
pub struct FontStats {
    /// Non-empty text lines in document order.
    pub lines: Vec<TextLine>,
    /// Size histogram over all collected lines.
    pub histogram: SizeHistogram,
    /// Title candidate, if any page-1 line carried a positive size.
    pub title: Option<TitleCandidate>,
}

impl FontStats {
    /// Runs the statistics pass over the ordered raw lines.
    ///
    /// The title candidate is a fold over page-1 lines with a
    /// strictly-greater comparator, so the earliest of equal-size lines
    /// wins, and a line without measurable size (average 0.0) never
    /// becomes the candidate.
    pub fn collect<I>(raw_lines: I) -> Self
    where
        I: IntoIterator<Item = RawLine>,
    {
        let mut stats = Self::default();

        for raw in raw_lines {
            let Some(line) = TextLine::from_raw(&raw) else {
                continue;
            };

            stats.histogram.record(line.average_size);

            if line.page_number == 1 {
                let current = stats.title.as_ref().map_or(0.0, |t| t.size);
                if line.average_size > current {
                    stats.title = Some(TitleCandidate {
                        text: line.text.clone(),
                        page: line.page_number,
                        size: line.average_size,
                    });
                }
            }

            stats.lines.push(line);
        }

        stats
    }
}
