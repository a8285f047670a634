//! # rs-readability
//!
//! A readable-article extraction library.
//!
//! Given a raw HTML document, rs-readability decides which subtree is "the
//! article", prunes navigation, advertisements, share widgets and other
//! boilerplate around and inside it, and produces a structured payload:
//! cleaned HTML, plain text, metadata (title, description, author, date,
//! keywords, primary image and video), an estimated reading time, and
//! optionally reader comments.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readability::{ExtractionConfig, Readability};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><article><p>The main content of the article lives here, with
//! enough running text to be recognized as the readable body.</p></article>
//! </body></html>"#;
//!
//! let reader = Readability::new(html, ExtractionConfig::default())?;
//! let data = reader.extract_readability_data(true)?;
//! assert_eq!(data.title, "My Article");
//! assert!(data.text.unwrap_or_default().contains("main content"));
//! # Ok::<(), rs_readability::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! Construction parses the document and eagerly removes what a reader never
//! sees: hidden elements, chrome roles, known non-content selectors, short
//! navigation anchors. Extraction then scores every block candidate, merges
//! qualifying siblings of the winner into a synthetic
//! `<div id="readability-content">` container, strips residual noise, and
//! renders. Metadata and comments are read from the same pre-merge document.
//!
//! A single extraction is a pure function of (HTML, config); no state is
//! carried between extractions and the engine needs no synchronization.

mod comments;
mod config;
mod error;
#[cfg(feature = "fetch")]
mod fetch;
mod html_processing;
mod merge;
mod noise;
mod patterns;
mod render;
mod result;

/// DOM operations adapter wrapping the HTML parser.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Link density testing for boilerplate detection.
pub mod link_density;

/// Metadata extraction (JSON-LD, HTML meta tags, DOM fallbacks).
pub mod metadata;

/// Candidate content scoring.
pub mod scoring;

/// The CSS selector surface of the extraction pipeline.
pub mod selector;

// Public API - re-exports
pub use config::{CommentExtractor, ExtractionConfig, Flags};
pub use error::{Error, Result};
pub use result::{Comment, ReadabilityData};

use dom::Document;

/// A parsed and pre-cleaned document, ready for extraction.
///
/// Construction performs the eager pruning passes; `extract_readability_data`
/// runs the scoring, merge, cleanup, and rendering stages. The handle can be
/// reused: extraction does not mutate the stored document, so repeated calls
/// yield equal payloads.
pub struct Readability {
    document: Document,
    config: ExtractionConfig,
}

impl std::fmt::Debug for Readability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Readability")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Readability {
    /// Parse an HTML document and run the eager cleaning passes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParsingFailed`] when the input holds no parseable
    /// element structure at all.
    pub fn new(html: &str, config: ExtractionConfig) -> Result<Self> {
        if html.trim().is_empty() {
            return Err(Error::ParsingFailed);
        }

        let document = dom::parse(html);
        if !document.select("html").exists() {
            return Err(Error::ParsingFailed);
        }

        html_processing::doc_cleaning(&document, &config);
        Ok(Self { document, config })
    }

    /// Parse raw HTML bytes, transcoding from the declared charset.
    ///
    /// Charset declarations in `<meta>` tags are honored; undeclared input
    /// is treated as UTF-8 with lossy decoding.
    pub fn from_bytes(html: &[u8], config: ExtractionConfig) -> Result<Self> {
        let html = encoding::transcode_to_utf8(html);
        Self::new(&html, config)
    }

    /// Run the extraction pipeline and assemble the payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParsingFailed`] when no candidate element survives
    /// scoring (an empty page, or one with no text block of meaningful
    /// length).
    pub fn extract_readability_data(&self, include_comments: bool) -> Result<ReadabilityData> {
        let metadata = metadata::extract_metadata(&self.document, &self.config);

        let comments = if include_comments {
            let extracted = comments::extract_comments(&self.document, &self.config);
            (!extracted.is_empty()).then_some(extracted)
        } else {
            None
        };

        let merged = {
            let Some((top, _score)) = scoring::find_top_candidate(&self.document, &self.config)
            else {
                return Err(Error::ParsingFailed);
            };
            merge::merge_siblings(&top, &self.config)
        };

        noise::strip_noise(&merged, &self.config);
        let rendered = render::render(&merged);

        Ok(ReadabilityData {
            title: metadata.title,
            description: metadata.description,
            author: metadata.author,
            date_published: metadata.date_published,
            keywords: metadata.keywords,
            top_image: metadata.top_image,
            top_video: metadata.top_video,
            content: Some(rendered.content),
            text: (!rendered.text.is_empty()).then_some(rendered.text),
            estimated_reading_time: rendered.reading_time,
            comments,
        })
    }

    /// Fetch a URL and extract its readable content.
    ///
    /// The single suspension point of the crate; the extraction itself is
    /// synchronous once the body has arrived. Comment extraction follows
    /// `config.include_comments`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidUrl`] for unparseable or non-http(s) URLs,
    /// [`Error::DecodingFailed`] when the body is not valid UTF-8,
    /// [`Error::ParsingFailed`] when no readable content is found, and
    /// [`Error::Unknown`] for transport failures.
    #[cfg(feature = "fetch")]
    pub async fn parse(url: &str, config: ExtractionConfig) -> Result<ReadabilityData> {
        let html = fetch::fetch_utf8(url).await?;
        let include_comments = config.include_comments;
        let reader = Self::new(&html, config)?;
        reader.extract_readability_data(include_comments)
    }
}

/// Extract readable content from an HTML document using default settings.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract;
///
/// let html = r#"<html><body><article><p>Enough article text to score as
/// the readable body of this small document.</p></article></body></html>"#;
/// let data = extract(html)?;
/// assert!(data.content.is_some());
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ReadabilityData> {
    let reader = Readability::new(html, ExtractionConfig::default())?;
    reader.extract_readability_data(true)
}
