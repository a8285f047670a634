//! Comment extraction.
//!
//! Selects comment-shaped nodes from the document, pulls out author, date,
//! and body text, and deduplicates the result. Three selector tiers are
//! tried in turn; an externally configured extractor replaces the whole
//! pass. Output is normalized regardless of source: authors are never
//! empty, entries are unique, and the list is bounded.

use std::collections::HashSet;

use dom_query::{Document, Selection};
use tracing::debug;

use crate::config::ExtractionConfig;
use crate::dom;
use crate::result::Comment;
use crate::selector::comments::{
    AUTHOR, CONTENT, DATE, FALLBACK, MAX_COMMENTS, MIN_CONTENT_LEN, PRIMARY, SECONDARY,
};

/// Default author when no author element is found (or its text is empty).
const ANONYMOUS: &str = "Anonymous";

/// Extract reader comments from the document.
///
/// Delegates to the configured custom extractor when present; its results go
/// through the same dedup/cap normalization the built-in pass applies inline.
#[must_use]
pub fn extract_comments(doc: &Document, config: &ExtractionConfig) -> Vec<Comment> {
    let comments = match &config.comment_extractor {
        Some(custom) => normalize(custom(doc)),
        None => builtin_comments(doc),
    };

    if config.verbose_logging {
        debug!(count = comments.len(), "comment extraction finished");
    }
    comments
}

fn builtin_comments(doc: &Document) -> Vec<Comment> {
    let primary = PRIMARY.join(", ");
    let secondary = SECONDARY.join(", ");

    let mut selected = doc.select(&primary);
    if selected.is_empty() {
        selected = doc.select(&secondary);
    }
    if selected.is_empty() {
        selected = doc.select(FALLBACK);
    }

    // Dedup inline so duplicate matches never count toward the cap; the
    // walk continues until 50 unique comments are collected or the
    // selection runs dry.
    let mut seen = HashSet::new();
    let mut comments = Vec::new();
    for node in selected.nodes() {
        let element = Selection::from(*node);

        let Some(content) = comment_content(&element) else {
            continue;
        };
        let author = comment_author(&element);
        let date = comment_date(&element);

        let key = format!("{author}|{date}|{content}");
        if !seen.insert(key) {
            continue;
        }

        comments.push(Comment {
            author,
            date,
            content,
        });

        if comments.len() >= MAX_COMMENTS {
            break;
        }
    }
    comments
}

/// Body text: first descendant match long enough to be a real comment.
fn comment_content(element: &Selection) -> Option<String> {
    for node in element.select(CONTENT).nodes() {
        let candidate = Selection::from(*node);
        let text = dom::text_content(&candidate);
        let text = text.trim();
        if text.chars().count() >= MIN_CONTENT_LEN {
            return Some(text.to_string());
        }
    }
    None
}

fn comment_author(element: &Selection) -> String {
    for node in element.select(AUTHOR).nodes() {
        let candidate = Selection::from(*node);
        let text = dom::text_content(&candidate);
        let text = text.trim();
        if !text.is_empty() {
            return text.to_string();
        }
    }
    ANONYMOUS.to_string()
}

/// Date from the `datetime` attribute of the first date-shaped match.
/// Elements without the attribute yield an empty date.
fn comment_date(element: &Selection) -> String {
    dom::query_selector(element, DATE)
        .and_then(|matched| dom::get_attribute(&matched, "datetime"))
        .map(|datetime| datetime.trim().to_string())
        .unwrap_or_default()
}

/// Output discipline for custom-extractor results: non-empty authors,
/// `(author, date, content)` uniqueness, at most [`MAX_COMMENTS`] entries.
fn normalize(raw: Vec<Comment>) -> Vec<Comment> {
    let mut seen = HashSet::new();
    let mut comments = Vec::new();

    for mut comment in raw {
        if comment.author.trim().is_empty() {
            comment.author = ANONYMOUS.to_string();
        }

        let key = format!("{}|{}|{}", comment.author, comment.date, comment.content);
        if !seen.insert(key) {
            continue;
        }

        comments.push(comment);
        if comments.len() >= MAX_COMMENTS {
            break;
        }
    }
    comments
}
