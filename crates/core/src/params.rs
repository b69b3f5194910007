//! Outline inference parameters.
//!
//! Contains OutlineParams for controlling classification behavior.

/// Textual exclusion rules applied to lines that already passed the
/// size/boldness cascade.
///
/// The observed variants of the heuristic disagree on how aggressively
/// to filter, so the rule set is configuration rather than a single
/// hardcoded pattern. [`ExclusionRules::lenient`] matches the reference
/// variant; [`ExclusionRules::strict`] enables every known rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ExclusionRules {
    /// Lines with fewer trimmed characters than this are dropped.
    pub min_text_len: usize,

    /// Drop lines shaped like numbered list items ("1.", "12. Foo").
    pub numbered_prefix: bool,

    /// Drop lines starting with a parenthesized single-letter marker
    /// such as "(a)".
    pub letter_marker: bool,

    /// Drop lines ending in a colon.
    pub trailing_colon: bool,
}

impl ExclusionRules {
    /// The reference rule set: length and numbered-item filters only.
    pub fn lenient() -> Self {
        Self {
            min_text_len: 4,
            numbered_prefix: true,
            letter_marker: false,
            trailing_colon: false,
        }
    }

    /// Every known exclusion rule enabled.
    pub fn strict() -> Self {
        Self {
            letter_marker: true,
            trailing_colon: true,
            ..Self::lenient()
        }
    }
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::lenient()
    }
}

/// Parameters for outline inference.
///
/// Controls the divergence points between the observed heuristic
/// variants; the fixed threshold cascade itself is not configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineParams {
    /// Body size assumed when a document yields no measurable text.
    pub default_body_size: f64,

    /// Exclusion rule set applied after level assignment.
    pub exclusions: ExclusionRules,

    /// Suppress the outline entirely when it does not look structured:
    /// fewer than `min_headings` surviving entries, or all entries
    /// confined to a single page. The title is still reported.
    pub strict_outline: bool,

    /// Minimum surviving headings for `strict_outline` to keep the
    /// outline.
    pub min_headings: usize,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            default_body_size: 12.0,
            exclusions: ExclusionRules::default(),
            strict_outline: false,
            min_headings: 3,
        }
    }
}
