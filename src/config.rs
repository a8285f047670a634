//! Configuration for content extraction.
//!
//! The `ExtractionConfig` struct is built once per extraction and controls
//! which cleanup stages run, logging verbosity, and comment handling.

use std::fmt;
use std::sync::Arc;

use dom_query::Document;

use crate::result::Comment;

/// Externally supplied comment extractor.
///
/// When configured, it replaces the built-in comment extractor entirely and
/// receives the pruned document the pipeline operates on.
pub type CommentExtractor = Arc<dyn Fn(&Document) -> Vec<Comment> + Send + Sync>;

/// Cleanup-stage toggles.
///
/// All three flags default to enabled. `weight_classes` gates the class-based
/// score bias in the candidate scorer; `strip_unlikelies` gates the eager
/// selector/short-anchor pruner; `clean_conditionally` gates the post-merge
/// noise stripper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    /// Remove known non-content selectors and short navigation anchors
    /// before scoring.
    pub strip_unlikelies: bool,

    /// Bias candidate scores by class name ("article" up, "comment" down).
    pub weight_classes: bool,

    /// Strip share widgets, link-heavy utility blocks, and noise markers
    /// from the merged content.
    pub clean_conditionally: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            strip_unlikelies: true,
            weight_classes: true,
            clean_conditionally: true,
        }
    }
}

impl Flags {
    /// All cleanup stages enabled.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// All cleanup stages disabled.
    #[must_use]
    pub fn none() -> Self {
        Self {
            strip_unlikelies: false,
            weight_classes: false,
            clean_conditionally: false,
        }
    }
}

/// Configuration options for a single extraction.
///
/// # Example
///
/// ```rust
/// use rs_readability::{ExtractionConfig, Flags};
///
/// // Use defaults
/// let config = ExtractionConfig::default();
///
/// // Customize specific fields
/// let config = ExtractionConfig {
///     flags: Flags { weight_classes: false, ..Flags::default() },
///     verbose_logging: true,
///     ..ExtractionConfig::default()
/// };
/// ```
#[derive(Clone)]
pub struct ExtractionConfig {
    /// Cleanup-stage toggles. Default: all enabled.
    pub flags: Flags,

    /// Emit diagnostic lines through the `tracing` sink.
    ///
    /// Default: `false`
    pub verbose_logging: bool,

    /// Extract reader comments. Consulted by the URL entry point; the handle
    /// method takes an explicit argument.
    ///
    /// Default: `true`
    pub include_comments: bool,

    /// Externally provided comment extractor. When set, overrides the
    /// built-in extractor.
    ///
    /// Default: `None`
    pub comment_extractor: Option<CommentExtractor>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            flags: Flags::default(),
            verbose_logging: false,
            include_comments: true,
            comment_extractor: None,
        }
    }
}

impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("flags", &self.flags)
            .field("verbose_logging", &self.verbose_logging)
            .field("include_comments", &self.include_comments)
            .field(
                "comment_extractor",
                &self.comment_extractor.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_enabled() {
        let flags = Flags::default();
        assert!(flags.strip_unlikelies);
        assert!(flags.weight_classes);
        assert!(flags.clean_conditionally);
        assert_eq!(flags, Flags::all());
    }

    #[test]
    fn flags_none_disables_everything() {
        let flags = Flags::none();
        assert!(!flags.strip_unlikelies);
        assert!(!flags.weight_classes);
        assert!(!flags.clean_conditionally);
    }

    #[test]
    fn default_config() {
        let config = ExtractionConfig::default();
        assert!(!config.verbose_logging);
        assert!(config.include_comments);
        assert!(config.comment_extractor.is_none());
        assert_eq!(config.flags, Flags::all());
    }

    #[test]
    fn config_with_custom_extractor_is_debug_printable() {
        let config = ExtractionConfig {
            comment_extractor: Some(Arc::new(|_doc| Vec::new())),
            ..ExtractionConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("comment_extractor"));
    }
}
