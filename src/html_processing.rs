//! HTML processing and pruning functions.
//!
//! The eager cleaning passes that run at parse time, before any scoring:
//! chrome-role removal, hidden-element removal, the fixed non-content
//! selector prune, and short navigation-anchor removal. Everything removed
//! here can never reach any output field.

use dom_query::Document;
use tracing::debug;

use crate::config::ExtractionConfig;
use crate::dom;
use crate::patterns::{DISPLAY_NONE, VISIBILITY_HIDDEN};
use crate::selector::discard::{CHROME_ROLES, HIDDEN_ROLES, PRUNE_SELECTORS, SHORT_ANCHOR_MAX};

/// Clean the freshly parsed document in place.
///
/// Order matters: chrome roles first, then hidden-state removal, then (when
/// `strip_unlikelies` is set) the selector prune and short-anchor prune.
pub fn doc_cleaning(doc: &Document, config: &ExtractionConfig) {
    remove_chrome_roles(doc);
    remove_hidden(doc);

    if config.flags.strip_unlikelies {
        let pruned = prune_selectors(doc);
        let anchors = prune_short_anchors(doc);
        if config.verbose_logging {
            debug!(pruned, anchors, "document cleaning finished");
        }
    } else if config.verbose_logging {
        debug!("strip_unlikelies disabled, selector prune skipped");
    }
}

fn role_matches(sel: &dom_query::Selection, roles: &[&str]) -> bool {
    dom::get_attribute(sel, "role")
        .map(|role| {
            let role = role.trim().to_ascii_lowercase();
            roles.contains(&role.as_str())
        })
        .unwrap_or(false)
}

/// Remove elements whose `role` marks page chrome, regardless of any other
/// attribute.
fn remove_chrome_roles(doc: &Document) {
    let candidates = dom::snapshot(&doc.select("[role]"));
    for element in candidates.iter().rev() {
        if role_matches(element, CHROME_ROLES) {
            dom::remove(element);
        }
    }
}

/// Remove elements the user would never see: the `hidden` attribute, inline
/// `display:none` / `visibility:hidden` styles, `aria-hidden="true"`, and
/// hidden-class roles.
fn remove_hidden(doc: &Document) {
    let candidates = dom::snapshot(&doc.select("[hidden], [style], [aria-hidden], [role]"));
    for element in candidates.iter().rev() {
        if is_hidden(element) {
            dom::remove(element);
        }
    }
}

fn is_hidden(sel: &dom_query::Selection) -> bool {
    if dom::has_attribute(sel, "hidden") {
        return true;
    }

    if let Some(style) = dom::get_attribute(sel, "style") {
        if DISPLAY_NONE.is_match(&style) || VISIBILITY_HIDDEN.is_match(&style) {
            return true;
        }
    }

    if dom::get_attribute(sel, "aria-hidden").as_deref() == Some("true") {
        return true;
    }

    role_matches(sel, HIDDEN_ROLES)
}

/// Remove all matches of the fixed non-content selector list.
///
/// Returns the number of removed elements.
fn prune_selectors(doc: &Document) -> usize {
    let matches = dom::snapshot(&doc.select(PRUNE_SELECTORS));
    let count = matches.len();
    for element in matches.iter().rev() {
        dom::remove(element);
    }
    count
}

/// Remove anchors with short, non-empty text. These are overwhelmingly
/// navigation crumbs ("Next", "Sports", "Read more"). The anchor is deleted
/// entirely, not unwrapped; empty anchors stay since they often wrap images.
///
/// Returns the number of removed anchors.
fn prune_short_anchors(doc: &Document) -> usize {
    let anchors = dom::snapshot(&doc.select("a"));
    let mut count = 0usize;
    for anchor in anchors.iter().rev() {
        let len = dom::text_length(anchor);
        if len > 0 && len < SHORT_ANCHOR_MAX {
            dom::remove(anchor);
            count += 1;
        }
    }
    count
}
