//! Discard Selectors
//!
//! Fixed selector lists for the eager pruning passes: page chrome, ads,
//! social widgets, cookie banners, vendor recommendation units, and the
//! roles that mark an element as navigation rather than content.

/// Non-content selectors removed eagerly before scoring.
///
/// The list is bit-exact: it is part of the external interface.
pub const PRUNE_SELECTORS: &str = "header, nav, footer, aside, .advertisement, .sponsored, \
.subscribe, .related, .breadcrumbs, .combx, .community, .cover-wrap, .disqus, .extra, .gdpr, \
.legends, .menu, .remark, .replies, .rss, .shoutbox, .sidebar, .skyscraper, .social, .sponsor, \
.supplemental, .ad-break, .agegate, .pagination, .pager, .popup, .yom-remote, .newsletter, \
.cookie, .cookie-banner, .modal, .overlay, .promo, .trending, .signup, .cta, .outbrain, \
.taboola, [data-component='header'], [data-component='footer']";

/// Roles removed unconditionally in the first filtering pass.
pub const CHROME_ROLES: &[&str] = &[
    "navigation",
    "menubar",
    "complementary",
    "dialog",
    "alertdialog",
];

/// Roles removed by the visibility pass alongside hidden-state attributes.
pub const HIDDEN_ROLES: &[&str] = &["navigation", "menu", "complementary"];

/// Maximum trimmed text length (exclusive) for an anchor to be pruned as a
/// short navigation link. Empty anchors are kept (they often wrap images).
pub const SHORT_ANCHOR_MAX: usize = 20;
