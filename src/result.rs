//! Result types for extraction output.
//!
//! This module defines the structured payload produced by a successful
//! extraction: cleaned content, plain text, metadata, reading time, and
//! optionally reader comments.

use serde::{Deserialize, Serialize};

/// A single reader comment.
///
/// `author` is never empty; the built-in extractor substitutes "Anonymous"
/// when no author element is found. `date` is an opaque string taken from a
/// `datetime` attribute and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment author display name.
    pub author: String,

    /// Publication date as found in the document (ISO-ish, possibly empty).
    pub date: String,

    /// Comment body as plain text.
    pub content: String,
}

/// Structured payload of a readable-article extraction.
///
/// Every field except `title` is optional; metadata fields are filled
/// independently and missing data never fails the extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityData {
    /// Page title. Always present, possibly empty.
    pub title: String,

    /// Page description or first long paragraph.
    pub description: Option<String>,

    /// Author name.
    pub author: Option<String>,

    /// Publication date as an opaque ISO-ish string. Never parsed or
    /// normalized by this crate.
    pub date_published: Option<String>,

    /// Keywords / tags. When present, entries are trimmed and non-empty.
    pub keywords: Option<Vec<String>>,

    /// URL of the primary article image.
    pub top_image: Option<String>,

    /// URL of the primary article video (from `og:video:url`).
    pub top_video: Option<String>,

    /// Cleaned article content as HTML, rooted at
    /// `<div id="readability-content">`.
    pub content: Option<String>,

    /// Plain-text rendering of the same content subtree.
    pub text: Option<String>,

    /// Estimated reading time in minutes (present iff `text` is non-empty,
    /// always >= 1).
    pub estimated_reading_time: Option<u32>,

    /// Reader comments, deduplicated and bounded to 50 entries.
    pub comments: Option<Vec<Comment>>,
}
