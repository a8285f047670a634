//! Sibling merger.
//!
//! Articles are frequently fragmented: the highest-scoring block holds the
//! body paragraphs while hero figures, standfirsts, or continuation blocks
//! sit next to it under the same parent. This step wraps the top candidate
//! in the synthetic `<div id="readability-content">` container and pulls in
//! the siblings that look like content rather than chrome.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::config::ExtractionConfig;
use crate::dom;
use crate::link_density::{contains_inline_media, link_density};
use crate::selector::CONTENT_CONTAINER_ID;

/// Minimum trimmed sibling text length for a merge without media.
const MIN_SIBLING_TEXT: usize = 25;

/// Maximum link density for a merge without media.
const MAX_SIBLING_LINK_DENSITY: f64 = 0.2;

/// Wrap the top candidate in a fresh container and append qualifying
/// siblings of its original parent, in document order.
///
/// A sibling qualifies when it has enough text or carries inline media, and
/// its link density stays low (media again overrides). The returned document
/// owns the container; the source document is left untouched.
#[must_use]
pub fn merge_siblings(top: &Selection, config: &ExtractionConfig) -> Document {
    let container_doc = Document::from(format!(r#"<div id="{CONTENT_CONTAINER_ID}"></div>"#));
    let container_selector = format!("#{CONTENT_CONTAINER_ID}");
    let container = container_doc.select(&container_selector);

    dom::append_child(&container, top);

    let parent = dom::parent(top);
    if parent.exists() {
        let top_id = top.nodes().first().map(|node| node.id);
        let mut merged = 0usize;

        for node in dom::children(&parent).nodes() {
            if Some(node.id) == top_id {
                continue;
            }

            let sibling = Selection::from(*node);
            let text_len = dom::text_length(&sibling);
            let has_media = contains_inline_media(&sibling);
            let density = link_density(&sibling);

            if (text_len >= MIN_SIBLING_TEXT || has_media)
                && (density < MAX_SIBLING_LINK_DENSITY || has_media)
            {
                dom::append_child(&container, &sibling);
                merged += 1;
            }
        }

        if config.verbose_logging {
            debug!(merged, "sibling merge finished");
        }
    }

    // Script payloads must never leak into rendered text.
    let scripts = dom::snapshot(&container.select("script, style, noscript"));
    for element in scripts.iter().rev() {
        dom::remove(element);
    }

    container_doc
}
