//! Candidate content scoring.
//!
//! Every block candidate (`article, div, section, p`) gets a real-valued
//! content score combining a tag base, optional class bias, text boosts, and
//! a link-density penalty. The highest-scoring candidate becomes the root of
//! the extracted article; ties go to the earliest element in document order.

use dom_query::{Document, Selection};
use tracing::debug;

use crate::config::ExtractionConfig;
use crate::dom;
use crate::link_density::link_density;
use crate::selector;

/// Minimum trimmed text length for an element to be scored at all.
pub const MIN_CANDIDATE_TEXT: usize = 25;

fn tag_base_score(tag: &str) -> f64 {
    match tag {
        "article" => 15.0,
        "main" => 12.0,
        "section" => 4.0,
        "p" => 5.0,
        "div" => 3.0,
        "ul" | "ol" => -3.0,
        "nav" => -6.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => -1.0,
        _ => 0.0,
    }
}

/// Score a single candidate element.
///
/// Returns `None` when the element's trimmed text is under
/// [`MIN_CANDIDATE_TEXT`] characters.
#[must_use]
pub fn content_score(element: &Selection, weight_classes: bool) -> Option<f64> {
    let text = dom::text_content(element);
    let text = text.trim();
    let text_len = text.chars().count();
    if text_len < MIN_CANDIDATE_TEXT {
        return None;
    }

    let tag = dom::tag_name(element)
        .unwrap_or_default()
        .to_ascii_lowercase();
    let mut score = tag_base_score(&tag);

    if weight_classes {
        let class = dom::class_name(element).unwrap_or_default().to_lowercase();
        if class.contains("article") {
            score += 10.0;
        }
        if class.contains("comment") {
            score -= 10.0;
        }
    }

    // Commas track sentence complexity; length is capped so sheer bulk
    // cannot outvote structure.
    score += text.matches(',').count() as f64;
    score += std::cmp::min(text_len / 100, 3) as f64;

    score *= 1.0 - link_density(element);

    Some(score)
}

/// Find the top candidate in the document.
///
/// Replacement requires a strictly greater score, so the earliest element in
/// document order wins ties. Returns `None` when no candidate scores above 0.
#[must_use]
pub fn find_top_candidate<'a>(
    doc: &'a Document,
    config: &ExtractionConfig,
) -> Option<(Selection<'a>, f64)> {
    let mut best: Option<(Selection<'a>, f64)> = None;

    for node in doc.select(selector::CANDIDATES).nodes() {
        let element = Selection::from(*node);
        let Some(score) = content_score(&element, config.flags.weight_classes) else {
            continue;
        };

        let replace = match &best {
            None => true,
            Some((_, best_score)) => score > *best_score,
        };
        if replace {
            best = Some((element, score));
        }
    }

    let best = best.filter(|(_, score)| *score > 0.0);
    if config.verbose_logging {
        match &best {
            Some((element, score)) => {
                debug!(score, tag = ?dom::tag_name(element), "top candidate selected");
            }
            None => debug!("no candidate scored above zero"),
        }
    }
    best
}
