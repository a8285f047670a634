//! Comment Selectors
//!
//! Selector sets used by the built-in comment extractor. The primary set
//! targets well-formed comment markup; the secondary set casts a wider net
//! over class/id substrings; the fallback covers bare `div.comment` /
//! `li.comment` shapes.

/// Well-formed comment containers, tried first.
pub const PRIMARY: &[&str] = &[
    ".comment-list .comment",
    ".comments .comment",
    ".comment",
    "li.comment",
    "[itemprop='comment']",
];

/// Looser comment-shaped selectors, tried when the primary set is empty.
pub const SECONDARY: &[&str] = &[
    "[class*=comment]",
    "[id*=comment]",
    "[class*=reply]",
    "[id*=reply]",
    "[class*=discussion]",
    "[id*=discussion]",
    ".comment-list",
    ".comment-body",
    ".comment-content",
    "#disqus_thread",
    ".fb-comments",
];

/// Last-resort selector when both sets come up empty.
pub const FALLBACK: &str = "div.comment, li.comment";

/// Descendants holding the comment body text.
pub const CONTENT: &str = "div.post-body, p, .comment-content, .comment-body, .content";

/// Descendants holding the comment author name.
pub const AUTHOR: &str =
    ".author, .user, .username, span.post-author, .comment-author, [itemprop='author'], .fn";

/// Descendants holding the comment date; the `datetime` attribute of the
/// first match is used.
pub const DATE: &str =
    "time[datetime], time, [data-datetime], .comment-date, .date, [itemprop='datePublished']";

/// Minimum trimmed length for a comment body to be kept.
pub const MIN_CONTENT_LEN: usize = 20;

/// Upper bound on extracted comments.
pub const MAX_COMMENTS: usize = 50;
