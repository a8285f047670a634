//! Link Density Testing
//!
//! Link density is the ratio of descendant anchor text to total element
//! text, in [0, 1]. Link-heavy blocks are almost always navigation, related
//! lists, or share widgets rather than article prose; the scorer penalizes
//! them and the noise stripper removes them outright.

use dom_query::Selection;

use crate::dom;
use crate::selector;

/// Ratio of descendant `<a>` text length to total element text length.
///
/// Defined as 0 when the element has no text.
#[must_use]
pub fn link_density(element: &Selection) -> f64 {
    let text_length = dom::text_length(element);
    if text_length == 0 {
        return 0.0;
    }

    let mut link_length = 0usize;
    for link in element.select("a").nodes() {
        let link_sel = Selection::from(*link);
        link_length += dom::text_length(&link_sel);
    }

    (link_length as f64) / (text_length as f64)
}

/// Number of descendant anchors.
#[must_use]
pub fn anchor_count(element: &Selection) -> usize {
    element.select("a").length()
}

/// Whether the element carries inline media (an `img` descendant, including
/// inside `<picture>`). Media keeps short or link-heavy siblings alive in
/// the merge step.
#[must_use]
pub fn contains_inline_media(element: &Selection) -> bool {
    element.select(selector::INLINE_MEDIA).exists()
}
