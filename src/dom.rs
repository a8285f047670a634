//! DOM Operations Adapter
//!
//! A thin capability layer over the `dom_query` crate. Every other module is
//! written against these operations, so the parser dependency stays behind a
//! narrow seam: parse, CSS queries, attribute/text access, child and sibling
//! navigation, append and remove.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get element ID attribute.
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute.
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists.
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

// === Tag / Text ===

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Length in characters of the trimmed text content.
#[must_use]
pub fn text_length(sel: &Selection) -> usize {
    let text = text_content(sel);
    text.trim().chars().count()
}

/// Get outer HTML content.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Tree Navigation ===

/// Get parent element.
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Get direct element children.
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

/// Get next element sibling (skipping text nodes).
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

// === Querying ===

/// First element matching the selector, if any.
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let matched = sel.select(selector);
    matched
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

/// Snapshot a selection into owned per-element selections, document order.
///
/// Collecting into an owned sequence lets callers mutate the tree while
/// walking the result (always in reverse order).
#[must_use]
pub fn snapshot<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Tree Manipulation ===

/// Remove elements from tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Append a child selection to a parent selection.
///
/// The child's serialized HTML is appended into the parent, so this also
/// works across documents (used to fill the synthetic content container).
pub fn append_child(parent: &Selection, child: &Selection) {
    let child_html = outer_html(child);
    parent.append_html(child_html);
}
