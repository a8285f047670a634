use rs_readability::{extract, ExtractionConfig, Flags, Readability, ReadabilityData};

const PROSE: &str = "A dependable stretch of article prose, with commas, clauses, and \
                     enough length that the scorer never hesitates over this block.";

/// Install a real subscriber so verbose diagnostics actually flow through
/// the sink during tests. Repeated calls are fine; later ones are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn unclosed_tags_still_extract() {
    let html = format!(
        "<html><body><article><p>{PROSE}<p>{PROSE}<div class=\"promo\">PROMO</div></body>"
    );

    let data = extract(&html).unwrap_or_default();
    let text = data.text.unwrap_or_default();
    assert!(text.contains("dependable stretch"));
    assert!(!text.contains("PROMO"));
}

#[test]
fn broken_json_ld_falls_back_to_meta_tags() {
    let html = format!(
        r#"<html>
        <head>
            <script type="application/ld+json">{{"headline": "Broken"</script>
            <meta property="og:title" content="Meta Fallback Title">
        </head>
        <body><article><p>{PROSE}</p></article></body>
        </html>"#
    );

    let data = extract(&html).unwrap_or_default();
    assert_eq!(data.title, "Meta Fallback Title");
}

#[test]
fn pathologically_nested_structured_data_is_bounded() {
    // An article object buried past the recursion cap must be ignored, not
    // blow the stack.
    let mut json = String::new();
    for _ in 0..100 {
        json.push_str(r#"{"nested":"#);
    }
    json.push_str(r#"{"@type":"Article","headline":"Too Deep"}"#);
    json.push_str(&"}".repeat(100));

    let html = format!(
        r#"<html>
        <head>
            <script type="application/ld+json">{json}</script>
            <title>Shallow Title</title>
        </head>
        <body><article><p>{PROSE}</p></article></body>
        </html>"#
    );

    let data = extract(&html).unwrap_or_default();
    assert_eq!(data.title, "Shallow Title");
}

#[test]
fn payload_round_trips_through_serde() {
    let html = format!(
        r#"<html>
        <head>
            <title>Serialized Article</title>
            <meta name="keywords" content="alpha,beta">
        </head>
        <body><article><p>{PROSE}</p></article></body>
        </html>"#
    );

    let data = extract(&html).unwrap_or_default();
    let json = serde_json::to_string(&data).unwrap_or_default();
    let restored: ReadabilityData = serde_json::from_str(&json).unwrap_or_default();
    assert_eq!(data, restored);
}

#[test]
fn weight_classes_flag_changes_candidate_preference() {
    // Two sibling blocks: the plain one is longer, the class-hinted one is
    // shorter. Only the class weight can flip the winner, and the winner is
    // whichever block leads the merged container.
    let plain = format!("<div id=\"plain\"><p>PLAIN_WINNER {PROSE} {PROSE}</p></div>");
    let hinted = format!("<div class=\"article-box\"><p>ARTICLE_WINNER {PROSE}</p></div>");
    let html = format!("<html><body>{plain}{hinted}</body></html>");

    let weighted = extract(&html).unwrap_or_default().content.unwrap_or_default();
    let weighted_article = weighted.find("ARTICLE_WINNER").unwrap_or(usize::MAX);
    let weighted_plain = weighted.find("PLAIN_WINNER").unwrap_or(usize::MAX);
    assert!(
        weighted_article < weighted_plain,
        "class weight should promote the hinted block"
    );

    let config = ExtractionConfig {
        flags: Flags {
            weight_classes: false,
            ..Flags::default()
        },
        ..ExtractionConfig::default()
    };
    let reader = Readability::new(&html, config).unwrap();
    let unweighted = reader
        .extract_readability_data(false)
        .unwrap_or_default()
        .content
        .unwrap_or_default();
    let unweighted_article = unweighted.find("ARTICLE_WINNER").unwrap_or(usize::MAX);
    let unweighted_plain = unweighted.find("PLAIN_WINNER").unwrap_or(usize::MAX);
    assert!(
        unweighted_plain < unweighted_article,
        "without class weight the longer block should lead"
    );
}

#[test]
fn verbose_logging_does_not_change_output() {
    init_tracing();

    let html = format!("<html><body><article><p>{PROSE}</p></article></body></html>");

    let quiet = extract(&html).unwrap_or_default();

    let config = ExtractionConfig {
        verbose_logging: true,
        ..ExtractionConfig::default()
    };
    let reader = Readability::new(&html, config).unwrap();
    let verbose = reader.extract_readability_data(true).unwrap_or_default();

    assert_eq!(quiet, verbose);
}
