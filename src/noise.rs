//! Post-merge noise stripper.
//!
//! Even a well-chosen candidate subtree carries embedded junk: share
//! widgets, "Recommended" rails, sponsored blocks, and the link lists that
//! trail them. Three passes clean the merged container, each iterating a
//! snapshot in reverse document order so removing a parent never invalidates
//! the walk.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::config::ExtractionConfig;
use crate::dom;
use crate::link_density::{anchor_count, link_density};
use crate::patterns::{AD_LABELS, NOISE_MARKERS, RELATED_PHRASES, SHARE_WIDGET};
use crate::selector::CONTENT_CONTAINER_ID;

/// Utility blocks shorter than this are never touched.
const UTILITY_MIN_TEXT: usize = 20;

/// Strip share widgets, link-heavy utility blocks, and noise markers from
/// the merged container.
pub fn strip_noise(container_doc: &Document, config: &ExtractionConfig) {
    if !config.flags.clean_conditionally {
        if config.verbose_logging {
            debug!("clean_conditionally disabled, noise strip skipped");
        }
        return;
    }

    let selector = format!("#{CONTENT_CONTAINER_ID}");
    let container = container_doc.select(&selector);
    if !container.exists() {
        return;
    }

    remove_share_widgets(&container);
    remove_utility_blocks(&container);
    remove_noise_markers(&container);

    if config.verbose_logging {
        debug!("noise strip finished");
    }
}

fn is_share_widget(element: &Selection) -> bool {
    let class = dom::class_name(element).unwrap_or_default();
    let id = dom::id(element).unwrap_or_default();
    let aria_label = dom::get_attribute(element, "aria-label").unwrap_or_default();

    SHARE_WIDGET.is_match(&class)
        || SHARE_WIDGET.is_match(&id)
        || SHARE_WIDGET.is_match(&aria_label)
        || aria_label.to_lowercase().contains("share")
}

/// Pass 1: share and comment-link widgets by class, id, or aria-label.
fn remove_share_widgets(container: &Selection) {
    let elements = dom::snapshot(&container.select("*"));
    for element in elements.iter().rev() {
        if is_share_widget(element) {
            dom::remove(element);
        }
    }
}

/// Pass 2: utility blocks that are mostly links or carry ad labels.
fn remove_utility_blocks(container: &Selection) {
    let blocks = dom::snapshot(&container.select("ul, ol, nav, section, div"));
    for block in blocks.iter().rev() {
        let text = dom::text_content(block);
        let text = text.trim();
        let text_len = text.chars().count();
        if text_len < UTILITY_MIN_TEXT {
            continue;
        }

        let lower = text.to_lowercase();
        if text_len < 80 && AD_LABELS.contains(&lower.as_str()) {
            dom::remove(block);
            continue;
        }

        let density = link_density(block);
        if density > 0.6 && (text_len < 500 || anchor_count(block) >= 5) {
            dom::remove(block);
        } else if RELATED_PHRASES.iter().any(|phrase| lower.contains(phrase))
            && density > 0.3
            && text_len < 800
        {
            dom::remove(block);
        }
    }
}

/// Pass 3: headings and short blocks that *are* the noise label, plus the
/// link-heavy list that follows them.
fn remove_noise_markers(container: &Selection) {
    let blocks = dom::snapshot(&container.select("h1, h2, h3, h4, h5, h6, p, div"));
    for block in blocks.iter().rev() {
        let text = dom::text_content(block);
        let lower = text.trim().to_lowercase();
        if lower.is_empty() {
            continue;
        }

        let is_marker = NOISE_MARKERS
            .iter()
            .any(|marker| lower == *marker || lower.starts_with(marker));
        if !is_marker {
            continue;
        }

        // The trailing list must be resolved before the marker disappears.
        let trailing = dom::next_element_sibling(block);
        dom::remove(block);

        if let Some(sibling) = trailing {
            let tag = dom::tag_name(&sibling).unwrap_or_default();
            if matches!(tag.as_str(), "ul" | "ol" | "section" | "div")
                && link_density(&sibling) > 0.4
                && dom::text_length(&sibling) < 800
            {
                dom::remove(&sibling);
            }
        }
    }
}
