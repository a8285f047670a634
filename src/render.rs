//! Rendering and reading-time estimation.
//!
//! Serializes the merged container to HTML and plain text. The text form is
//! whitespace-normalized so downstream consumers (and the reading-time
//! estimate) see prose, not markup indentation.

use dom_query::Document;

use crate::dom;
use crate::patterns::{WHITESPACE_NORMALIZE, WORD};
use crate::selector::CONTENT_CONTAINER_ID;

/// Average words-per-minute used for the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Serialized forms of the merged content subtree.
#[derive(Debug, Clone, Default)]
pub struct Rendered {
    /// Outer HTML, rooted at the synthetic container div.
    pub content: String,

    /// Whitespace-normalized plain text.
    pub text: String,

    /// Estimated reading minutes; present iff `text` is non-empty.
    pub reading_time: Option<u32>,
}

/// Render the merged container document.
#[must_use]
pub fn render(container_doc: &Document) -> Rendered {
    let selector = format!("#{CONTENT_CONTAINER_ID}");
    let container = container_doc.select(&selector);

    let content = dom::outer_html(&container).to_string();

    let raw_text = dom::text_content(&container);
    let text = WHITESPACE_NORMALIZE
        .replace_all(raw_text.trim(), " ")
        .to_string();

    let reading_time = estimate_reading_time(&text);

    Rendered {
        content,
        text,
        reading_time,
    }
}

/// Estimated reading minutes for a text, at least 1 when any text exists.
///
/// Words are maximal runs of Unicode letters, so punctuation and digits
/// never inflate the count.
#[must_use]
pub fn estimate_reading_time(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }

    let word_count = WORD.find_iter(text).count();
    let minutes = std::cmp::max(1, word_count / WORDS_PER_MINUTE);
    u32::try_from(minutes).ok()
}
