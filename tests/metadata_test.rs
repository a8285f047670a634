use rs_readability::extract;

const PROSE: &str = "JSON-LD is preferred when present. The remainder of this paragraph \
                     simply pads the article body out past the two hundred character mark \
                     so that candidate scoring has a real block of prose to select, with \
                     commas, clauses, and ordinary sentence structure throughout.";

#[test]
fn structured_data_wins_over_everything() {
    let html = format!(
        r#"<html>
        <head>
            <title>Ignored Title</title>
            <meta property="og:title" content="OG Title">
            <meta name="author" content="Meta Author">
            <script type="application/ld+json">
            {{"@type":"NewsArticle","headline":"Structured Headline",
              "author":{{"name":"Jane Doe"}},"datePublished":"2024-01-02T00:00:00Z",
              "keywords":["alpha","beta","gamma"],
              "image":"https://e.x/img.jpg","description":"d"}}
            </script>
        </head>
        <body><article><p>{PROSE}</p></article></body>
        </html>"#
    );

    let data = extract(&html).unwrap_or_default();

    assert_eq!(data.title, "Structured Headline");
    assert_eq!(data.author.as_deref(), Some("Jane Doe"));
    assert!(data
        .date_published
        .unwrap_or_default()
        .starts_with("2024-01-02"));
    assert_eq!(data.description.as_deref(), Some("d"));
    assert_eq!(data.top_image.as_deref(), Some("https://e.x/img.jpg"));

    let keywords = data.keywords.unwrap_or_default();
    for expected in ["alpha", "beta", "gamma"] {
        assert!(keywords.iter().any(|k| k == expected), "missing {expected}");
    }

    assert!(data.text.unwrap_or_default().contains("JSON-LD is preferred when present"));
}

#[test]
fn generic_title_is_rescued_by_h1() {
    let html = format!(
        r#"<html>
        <head><title>Home</title></head>
        <body><h1>The Real Headline</h1><article><p>{PROSE}</p></article></body>
        </html>"#
    );

    let data = extract(&html).unwrap_or_default();
    assert_eq!(data.title, "The Real Headline");
}

#[test]
fn generic_title_rescue_is_case_insensitive() {
    let html = format!(
        r#"<html>
        <head><title>PAGE NOT FOUND</title></head>
        <body><h1>Recovered Headline</h1><article><p>{PROSE}</p></article></body>
        </html>"#
    );

    let data = extract(&html).unwrap_or_default();
    assert_eq!(data.title, "Recovered Headline");
}

#[test]
fn meta_title_chain_is_ordered() {
    let html = format!(
        r#"<html>
        <head>
            <title>Element Title</title>
            <meta name="title" content="Plain Meta Title">
            <meta name="twitter:title" content="Twitter Title">
            <meta property="og:title" content="OG Title">
        </head>
        <body><article><p>{PROSE}</p></article></body>
        </html>"#
    );

    let data = extract(&html).unwrap_or_default();
    assert_eq!(data.title, "OG Title");
}

#[test]
fn keywords_are_trimmed_and_non_empty() {
    let html = format!(
        r#"<html>
        <head><meta name="keywords" content=" rust ,, extraction , html5 "></head>
        <body><article><p>{PROSE}</p></article></body>
        </html>"#
    );

    let data = extract(&html).unwrap_or_default();
    let keywords = data.keywords.unwrap_or_default();

    assert_eq!(keywords, vec!["rust", "extraction", "html5"]);
    for keyword in &keywords {
        assert!(!keyword.is_empty());
        assert_eq!(keyword, keyword.trim());
    }
}

#[test]
fn author_falls_back_to_byline_selector() {
    let html = format!(
        r#"<html><body>
            <article>
              <span class="byline">Chris Example</span>
              <p>{PROSE}</p>
            </article>
        </body></html>"#
    );

    let data = extract(&html).unwrap_or_default();
    assert_eq!(data.author.as_deref(), Some("Chris Example"));
}

#[test]
fn date_falls_back_to_time_element() {
    let html = format!(
        r#"<html><body>
            <article>
              <time datetime="2023-11-12T09:30:00Z">November 12, 2023</time>
              <p>{PROSE}</p>
            </article>
        </body></html>"#
    );

    let data = extract(&html).unwrap_or_default();
    assert_eq!(data.date_published.as_deref(), Some("2023-11-12T09:30:00Z"));
}

#[test]
fn description_falls_back_to_first_long_paragraph() {
    let html = format!(
        r#"<html><body>
            <article><p>Short intro.</p><p>{PROSE}</p></article>
        </body></html>"#
    );

    let data = extract(&html).unwrap_or_default();
    let description = data.description.unwrap_or_default();
    assert!(description.starts_with("JSON-LD is preferred"));
}

#[test]
fn top_video_comes_from_og_meta() {
    let html = format!(
        r#"<html>
        <head><meta property="og:video:url" content="https://e.x/clip.mp4"></head>
        <body><article><p>{PROSE}</p></article></body>
        </html>"#
    );

    let data = extract(&html).unwrap_or_default();
    assert_eq!(data.top_video.as_deref(), Some("https://e.x/clip.mp4"));
}

#[test]
fn missing_metadata_stays_absent() {
    let html = format!("<html><body><article><p>{PROSE}</p></article></body></html>");

    let data = extract(&html).unwrap_or_default();
    assert!(data.author.is_none());
    assert!(data.date_published.is_none());
    assert!(data.keywords.is_none());
    assert!(data.top_image.is_none());
    assert!(data.top_video.is_none());
}
