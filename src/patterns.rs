//! Compiled regex patterns and shared label sets for content extraction.
//!
//! All patterns are compiled once per process using `LazyLock`. Label sets
//! used by the noise stripper and the title rescue live here so the pipeline
//! stages share one definition.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Cleanup Patterns
// =============================================================================

/// Matches class/id/aria-label values of share and comment-link widgets.
pub static SHARE_WIDGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\b|_)(share|sharedaddy|coral|comments-link)(\b|_)").expect("SHARE_WIDGET regex")
});

/// Matches inline styles hiding an element.
pub static DISPLAY_NONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)display\s*:\s*none").expect("DISPLAY_NONE regex"));

/// Matches inline styles making an element invisible.
pub static VISIBILITY_HIDDEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)visibility\s*:\s*hidden").expect("VISIBILITY_HIDDEN regex"));

// =============================================================================
// Text Patterns
// =============================================================================

/// Matches a word as a maximal run of Unicode letters.
pub static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}+").expect("WORD regex"));

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

// =============================================================================
// Label Sets
// =============================================================================

/// Placeholder `<title>` values that trigger the first-`<h1>` rescue.
pub const GENERIC_TITLES: &[&str] = &["home", "menu", "index", "untitled", "page not found"];

/// Exact short-block labels that mark an advertising container.
pub const AD_LABELS: &[&str] = &["advertisement", "sponsored", "sponsored content", "ad"];

/// Phrases that mark a related-content utility block.
pub const RELATED_PHRASES: &[&str] = &[
    "recommended",
    "related",
    "more stories",
    "read more",
    "you may also like",
];

/// Heading/paragraph texts that mark a noise section. A block equal to or
/// starting with one of these is removed, possibly with its following list.
pub const NOISE_MARKERS: &[&str] = &[
    "advertisement",
    "recommended",
    "recommended stories",
    "related stories",
    "more stories",
    "sponsored",
];
