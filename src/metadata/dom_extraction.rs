//! DOM fallback extraction.
//!
//! Last-resort heuristics that run when structured data and meta tags come
//! up empty: the `<title>` element (with a rescue for placeholder titles),
//! the first long paragraph as a description, byline selectors, `<time>`
//! elements, and lazy-loading-aware body images.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::GENERIC_TITLES;
use crate::selector::meta::{AUTHOR_DOM, IMG_SRCSET_ATTR, IMG_SRC_ATTRS};

/// Minimum paragraph length for the description fallback.
const MIN_DESCRIPTION_PARAGRAPH: usize = 40;

fn first_non_empty_text(doc: &Document, selector: &str) -> Option<String> {
    for node in doc.select(selector).nodes() {
        let sel = Selection::from(*node);
        let text = dom::text_content(&sel);
        let text = text.trim();
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }
    None
}

/// `<title>` text, replaced by the first `<h1>` when the title is a known
/// placeholder ("home", "index", ...).
#[must_use]
pub fn dom_title(doc: &Document) -> Option<String> {
    let title = first_non_empty_text(doc, "title")?;

    if GENERIC_TITLES.contains(&title.to_lowercase().as_str()) {
        if let Some(heading) = first_non_empty_text(doc, "h1") {
            return Some(heading);
        }
    }
    Some(title)
}

/// First body paragraph long enough to read as a standfirst.
#[must_use]
pub fn dom_description(doc: &Document) -> Option<String> {
    for node in doc.select("body p").nodes() {
        let p = Selection::from(*node);
        let text = dom::text_content(&p);
        let text = text.trim();
        if text.chars().count() > MIN_DESCRIPTION_PARAGRAPH {
            return Some(text.to_string());
        }
    }
    None
}

/// Byline selectors: `.byline`, `.author`, `[rel='author']`, ...
#[must_use]
pub fn dom_author(doc: &Document) -> Option<String> {
    first_non_empty_text(doc, AUTHOR_DOM)
}

/// `<time datetime>` attribute first, then bare `<time>` text.
#[must_use]
pub fn dom_date(doc: &Document) -> Option<String> {
    if let Some(time) = dom::query_selector(&doc.select("html"), "time[datetime]") {
        if let Some(datetime) = dom::get_attribute(&time, "datetime") {
            let datetime = datetime.trim();
            if !datetime.is_empty() {
                return Some(datetime.to_string());
            }
        }
    }
    first_non_empty_text(doc, "time")
}

/// First body `<img>` with a usable URL, honoring common lazy-loading
/// attributes. A srcset contributes its first whitespace-split token.
#[must_use]
pub fn dom_top_image(doc: &Document) -> Option<String> {
    for node in doc.select("body img").nodes() {
        let img = Selection::from(*node);

        for attr in IMG_SRC_ATTRS {
            if let Some(src) = dom::get_attribute(&img, attr) {
                let src = src.trim();
                if !src.is_empty() {
                    return Some(src.to_string());
                }
            }
        }

        if let Some(srcset) = dom::get_attribute(&img, IMG_SRCSET_ATTR) {
            if let Some(first) = srcset.split_whitespace().next() {
                return Some(first.to_string());
            }
        }
    }
    None
}
