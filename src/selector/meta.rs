//! Metadata Selectors
//!
//! Ranked meta-tag selector chains and DOM fallbacks for each metadata
//! field. Order matters: the first selector with a non-empty match wins.

/// Title meta selectors, in priority order.
pub const TITLE_META: &[&str] = &[
    "meta[property='og:title']",
    "meta[name='twitter:title']",
    "meta[name='title']",
];

/// Description meta selectors, in priority order.
pub const DESCRIPTION_META: &[&str] = &[
    "meta[name='description']",
    "meta[property='og:description']",
    "meta[name='twitter:description']",
];

/// Keyword meta selectors, in priority order. Values are comma-split.
pub const KEYWORDS_META: &[&str] = &[
    "meta[name='keywords']",
    "meta[name='news_keywords']",
    "meta[name='parsely-tags']",
    "meta[name='article:tag']",
];

/// Author meta selectors, in priority order.
pub const AUTHOR_META: &[&str] = &[
    "meta[name='author']",
    "meta[property='article:author']",
    "meta[name='byl']",
    "meta[name='sailthru.author']",
    "meta[name='parsely-author']",
    "meta[property='og:article:author']",
];

/// Publication-date meta selectors, in priority order.
pub const DATE_META: &[&str] = &[
    "meta[property='article:published_time']",
    "meta[name='pubdate']",
    "meta[name='date']",
    "meta[name='parsely-pub-date']",
    "meta[name='DC.date']",
    "meta[itemprop='datePublished']",
];

/// Primary-image meta selectors, in priority order.
pub const IMAGE_META: &[&str] = &[
    "meta[property='og:image']",
    "meta[name='twitter:image']",
    "meta[property='og:image:url']",
];

/// Primary-video meta selector.
pub const VIDEO_META: &[&str] = &["meta[property='og:video:url']"];

/// DOM byline fallback for the author field.
pub const AUTHOR_DOM: &str =
    ".byline, .by-author, .author, [rel='author'], .posted-by, .article-author, [itemprop='author']";

/// Lazy-loading image attributes consulted for the body-image fallback,
/// in priority order. A srcset value contributes its first URL token.
pub const IMG_SRC_ATTRS: &[&str] = &["src", "data-src", "data-original", "data-lazy-src"];

/// Srcset-style attribute consulted last for the body-image fallback.
pub const IMG_SRCSET_ATTR: &str = "data-srcset";
