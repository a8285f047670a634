//! Selector Surface
//!
//! The CSS selector lists used across the extraction pipeline. These lists
//! are part of the external interface: downstream consumers rely on exactly
//! which elements are pruned, which meta tags are consulted and in what
//! order, and which shapes count as comments.

pub mod comments;
pub mod discard;
pub mod meta;

/// The id of the synthetic container wrapping extracted content.
///
/// Part of the API: consumers style and query by this id.
pub const CONTENT_CONTAINER_ID: &str = "readability-content";

/// Candidate elements considered for top-level content scoring.
pub const CANDIDATES: &str = "article, div, section, p";

/// Inline media test used by the sibling merger: a short sibling is still
/// kept when this matches one of its descendants.
pub const INLINE_MEDIA: &str = "img, picture img";
