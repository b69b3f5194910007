//! Heading level classification.
//!
//! Assigns each text line to a heading level (or none) with a fixed
//! decision procedure: title suppression, an ordered size/boldness rule
//! cascade, then textual exclusion rules.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::line::TextLine;
use crate::params::{ExclusionRules, OutlineParams};
use crate::stats::TitleCandidate;
use crate::thresholds::HeadingThresholds;

/// Heading level of an outline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

/// One entry of the level cascade: a level and the predicate admitting
/// it.
pub struct LevelRule {
    pub level: HeadingLevel,
    pub admits: fn(size: f64, bold: bool, t: &HeadingThresholds) -> bool,
}

/// The fixed level cascade, evaluated in table order; the first matching
/// rule wins.
///
/// The H2 rule repeats H1's bold-above-body arm. Since H1 is tried
/// first, that arm of H2 can never match: every bold line above body
/// size lands on H1 regardless of how close its size is to the body
/// baseline. This is observed behavior of the shipped heuristic and is
/// kept verbatim; see `bold_above_body_always_h1` below.
pub const LEVEL_RULES: &[LevelRule] = &[
    LevelRule {
        level: HeadingLevel::H1,
        admits: |size, bold, t| size >= t.h1_size || (size > t.body_size && bold),
    },
    LevelRule {
        level: HeadingLevel::H2,
        admits: |size, bold, t| size >= t.h2_size || (size > t.body_size && bold),
    },
    LevelRule {
        level: HeadingLevel::H3,
        admits: |size, _bold, t| size > t.body_size + 0.5,
    },
];

static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());
static LETTER_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\([A-Za-z]\)").unwrap());

/// True when the exclusion rule set rejects an already-leveled line.
///
/// Lengths are counted in characters, not bytes.
pub fn excluded(text: &str, rules: &ExclusionRules) -> bool {
    if text.chars().count() < rules.min_text_len {
        return true;
    }
    if rules.numbered_prefix && NUMBERED_ITEM.is_match(text) {
        return true;
    }
    if rules.letter_marker && LETTER_MARKER.is_match(text) {
        return true;
    }
    if rules.trailing_colon && text.ends_with(':') {
        return true;
    }
    false
}

/// Classifies one line against the document thresholds.
///
/// Returns the assigned level, or `None` for the title line, body text,
/// and excluded shapes. Boldness is a case-insensitive substring match
/// of "bold" within the dominant font name.
pub fn classify_line(
    line: &TextLine,
    title: Option<&TitleCandidate>,
    thresholds: &HeadingThresholds,
    params: &OutlineParams,
) -> Option<HeadingLevel> {
    // The title is never duplicated into the outline.
    if let Some(t) = title {
        if line.page_number == t.page && line.text == t.text {
            return None;
        }
    }

    let bold = line.dominant_font.to_lowercase().contains("bold");

    let level = LEVEL_RULES
        .iter()
        .find(|rule| (rule.admits)(line.average_size, bold, thresholds))
        .map(|rule| rule.level)?;

    if excluded(&line.text, &params.exclusions) {
        return None;
    }

    Some(level)
}
