//! HTML meta tag extraction.
//!
//! Each metadata field has a ranked selector chain (`selector::meta`); the
//! first selector whose first match carries a non-empty `content` attribute
//! wins. Empty values are treated as absent so the chain keeps going.

use dom_query::{Document, Selection};

use crate::dom;

/// Walk a ranked selector chain and return the first non-empty `content`.
#[must_use]
pub fn meta_content(doc: &Document, selectors: &[&str]) -> Option<String> {
    for selector in selectors {
        let matched = doc.select(selector);
        let Some(node) = matched.nodes().first() else {
            continue;
        };

        let meta = Selection::from(*node);
        if let Some(content) = dom::get_attribute(&meta, "content") {
            let content = content.trim();
            if !content.is_empty() {
                return Some(content.to_string());
            }
        }
    }
    None
}

/// Like [`meta_content`], but comma-splits the value into trimmed,
/// non-empty keywords.
#[must_use]
pub fn meta_keywords(doc: &Document, selectors: &[&str]) -> Option<Vec<String>> {
    let raw = meta_content(doc, selectors)?;
    let keywords: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();

    (!keywords.is_empty()).then_some(keywords)
}
