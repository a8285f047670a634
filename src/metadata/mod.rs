//! Metadata extraction module.
//!
//! Orchestrates the three sources in priority order — JSON-LD structured
//! data, ranked meta-tag chains, DOM fallbacks — into one `Metadata` value.
//! Every field is filled independently; a missing field never fails the
//! extraction, it is simply absent.

pub mod dom_extraction;
pub mod json_ld;
pub mod meta_tags;

use dom_query::Document;
use tracing::debug;

use crate::config::ExtractionConfig;
use crate::selector::meta::{
    AUTHOR_META, DATE_META, DESCRIPTION_META, IMAGE_META, KEYWORDS_META, TITLE_META, VIDEO_META,
};

pub use json_ld::extract_structured_article;
pub use meta_tags::{meta_content, meta_keywords};

/// Article metadata assembled from all sources.
///
/// `title` is always present (possibly empty); everything else is optional.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub title: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub date_published: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub top_image: Option<String>,
    pub top_video: Option<String>,
}

/// Extract all metadata from a document.
///
/// Priority per field: JSON-LD, then the ranked meta selector chain, then
/// the DOM fallback. The document must still carry its `<head>` content;
/// the pipeline therefore reads metadata before any merge-stage mutation.
#[must_use]
pub fn extract_metadata(doc: &Document, config: &ExtractionConfig) -> Metadata {
    let structured = extract_structured_article(doc);
    if config.verbose_logging {
        debug!(found = structured.is_some(), "structured data walk finished");
    }
    let structured = structured.unwrap_or_default();

    let title = structured
        .title
        .or_else(|| meta_content(doc, TITLE_META))
        .or_else(|| dom_extraction::dom_title(doc))
        .unwrap_or_default();

    let description = structured
        .description
        .or_else(|| meta_content(doc, DESCRIPTION_META))
        .or_else(|| dom_extraction::dom_description(doc));

    let author = structured
        .author
        .or_else(|| meta_content(doc, AUTHOR_META))
        .or_else(|| dom_extraction::dom_author(doc));

    let date_published = structured
        .date_published
        .or_else(|| meta_content(doc, DATE_META))
        .or_else(|| dom_extraction::dom_date(doc));

    let keywords = structured
        .keywords
        .or_else(|| meta_keywords(doc, KEYWORDS_META));

    let top_image = structured
        .image
        .or_else(|| meta_content(doc, IMAGE_META))
        .or_else(|| dom_extraction::dom_top_image(doc));

    let top_video = meta_content(doc, VIDEO_META);

    Metadata {
        title,
        description,
        author,
        date_published,
        keywords,
        top_image,
        top_video,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Metadata {
        let doc = Document::from(html);
        extract_metadata(&doc, &ExtractionConfig::default())
    }

    #[test]
    fn json_ld_beats_meta_tags() {
        let metadata = extract(
            r#"<html><head>
                <meta property="og:title" content="OG Title">
                <script type="application/ld+json">
                {"@type":"Article","headline":"JSON-LD Title"}
                </script>
            </head><body></body></html>"#,
        );
        assert_eq!(metadata.title, "JSON-LD Title");
    }

    #[test]
    fn meta_tags_beat_dom() {
        let metadata = extract(
            r#"<html><head>
                <title>DOM Title</title>
                <meta property="og:title" content="OG Title">
            </head><body></body></html>"#,
        );
        assert_eq!(metadata.title, "OG Title");
    }

    #[test]
    fn fields_fill_independently() {
        let metadata = extract(
            r#"<html><head>
                <script type="application/ld+json">{"@type":"Article","headline":"T"}</script>
                <meta name="description" content="Meta description">
                <meta property="og:video:url" content="https://e.x/v.mp4">
            </head><body><span class="byline">Jane Doe</span></body></html>"#,
        );
        assert_eq!(metadata.title, "T");
        assert_eq!(metadata.description.as_deref(), Some("Meta description"));
        assert_eq!(metadata.author.as_deref(), Some("Jane Doe"));
        assert_eq!(metadata.top_video.as_deref(), Some("https://e.x/v.mp4"));
        assert!(metadata.date_published.is_none());
        assert!(metadata.keywords.is_none());
    }

    #[test]
    fn title_defaults_to_empty_string() {
        let metadata = extract("<html><head></head><body></body></html>");
        assert_eq!(metadata.title, "");
    }

    #[test]
    fn image_meta_chain_beats_body_fallback() {
        let metadata = extract(
            r#"<html><head>
                <meta property="og:image" content="https://e.x/meta.jpg">
            </head><body><img src="body.jpg"></body></html>"#,
        );
        assert_eq!(metadata.top_image.as_deref(), Some("https://e.x/meta.jpg"));
    }

    #[test]
    fn body_image_used_when_meta_missing() {
        let metadata = extract(r#"<html><body><img src="body.jpg"></body></html>"#);
        assert_eq!(metadata.top_image.as_deref(), Some("body.jpg"));
    }
}
