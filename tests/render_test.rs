//! Rendering tests.
//!
//! End-to-end checks through the public API: YAML in, slide markup out.

use slayd::export::render_slides;
use slayd::render::{format_text, render_slide};
use slayd::{BuildConfig, Document, Error, HtmlExporter};

fn parse(yaml: &str) -> Document {
    Document::from_yaml(yaml).unwrap()
}

fn render_all(yaml: &str) -> Vec<String> {
    render_slides(&parse(yaml), &BuildConfig::default()).unwrap()
}

// ============================================================================
// Slide Wrapper Tests
// ============================================================================

#[test]
fn test_only_first_slide_is_active() {
    let slides = render_all(
        r#"
slides:
  - title: One
  - title: Two
  - title: Three
"#,
    );

    assert_eq!(slides.len(), 3);
    assert!(slides[0].starts_with("<div class=\"slide active "));
    assert!(slides[1].starts_with("<div class=\"slide transition-fade\""));
    assert!(slides[2].starts_with("<div class=\"slide transition-fade\""));
}

#[test]
fn test_transition_precedence() {
    let slides = render_all(
        r#"
transition: zoom
slides:
  - title: Inherits
  - title: Overrides
    transition: none
  - title: Blank
    transition: ""
"#,
    );

    assert!(slides[0].contains("transition-zoom\" data-transition=\"zoom\""));
    assert!(slides[1].contains("no-transition\" data-transition=\"none\""));
    assert!(slides[2].contains("data-transition=\"zoom\""));
}

#[test]
fn test_unknown_kind_renders_like_default() {
    let doc = parse(
        r#"
slides:
  - type: mystery
    title: T
    content: "**x**"
  - title: T
    content: "**x**"
"#,
    );

    let unknown = render_slide(&doc.slides[0], 1, None).unwrap();
    let default = render_slide(&doc.slides[1], 1, None).unwrap();
    assert_eq!(unknown, default);
}

#[test]
fn test_numeric_text_fields() {
    let doc = parse(
        r#"
title: 2024
slides:
  - title: 2024
    content: x
  - type: hero
    title: 1
    titleSize: 48
  - type: grid
    items:
      - title: 404
        label: 3.5
  - title: List
    content:
      - type: list
        items: [1, true]
"#,
    );
    assert_eq!(doc.title.as_deref(), Some("2024"));

    let slides = render_slides(&doc, &BuildConfig::default()).unwrap();
    assert!(slides[0].contains("<h2>2024</h2>"));
    assert!(slides[1].contains("<h1 style=\"font-size: 48;\">1</h1>"));
    assert!(slides[2].contains("<h3>404</h3>"));
    assert!(slides[2].contains("<div class=\"stat-label\">3.5</div>"));
    assert!(slides[3].contains("<li>1</li><li>true</li>"));
}

#[test]
fn test_empty_content_renders_no_paragraph() {
    let slides = render_all(
        r#"
slides:
  - title: Quiet
    content: ""
"#,
    );
    assert!(!slides[0].contains("<p></p>"));
}

// ============================================================================
// Layout Tests
// ============================================================================

#[test]
fn test_hero_slide() {
    let slides = render_all(
        r#"
slides:
  - type: hero
    title: Welcome
    subtitle: "A **bold** start"
    logo: logo.png
"#,
    );

    let html = &slides[0];
    assert!(html.contains("<div class=\"logo\">logo.png</div>"));
    assert!(html.contains("font-size: 5rem"));
    assert!(html.contains("Welcome"));
    assert!(html.contains("A <strong>bold</strong> start"));
}

#[test]
fn test_grid_of_metrics() {
    let slides = render_all(
        r#"
slides:
  - type: grid
    title: Numbers
    columns: 2
    items:
      - type: metric
        stat: 42
        label: Answers
      - type: feature
        icon: "*"
        title: Fast
        content: Very
"#,
    );

    let html = &slides[0];
    assert!(html.contains("<div class=\"grid-2\">"));
    assert!(html.contains("metric-box"));
    assert!(html.contains("42"));
    assert!(html.contains("Answers"));
    assert!(html.contains("feature-box"));
}

#[test]
fn test_code_slide_escapes_source() {
    let slides = render_all(
        r#"
slides:
  - type: code
    title: Snippet
    language: rust
    code: "if a < b && c > d {}"
"#,
    );

    let html = &slides[0];
    assert!(html.contains("class=\"language-rust\""));
    assert!(html.contains("if a &lt; b &amp;&amp; c &gt; d {}"));
}

#[test]
fn test_table_slide() {
    let slides = render_all(
        r#"
slides:
  - type: table
    title: Scores
    headers: [Name, Score]
    rows:
      - [Ada, 10]
      - [Bob, "**7**"]
"#,
    );

    let html = &slides[0];
    assert!(html.contains("<th>Name</th>"));
    assert!(html.contains("<th>Score</th>"));
    assert!(html.contains("<td>10</td>"));
    assert!(html.contains("<td><strong>7</strong></td>"));
}

#[test]
fn test_flow_slide_with_arrows() {
    let slides = render_all(
        r#"
slides:
  - type: flow
    title: Pipeline
    flows:
      - items:
          - title: Parse
          - type: arrow
          - title: Render
            subtitle: HTML
"#,
    );

    let html = &slides[0];
    assert!(html.contains("<div class=\"flow\""));
    assert!(html.contains("<strong>Parse</strong>"));
    assert!(html.contains("→"));
    assert!(html.contains("HTML"));
}

#[test]
fn test_nested_content_nodes() {
    let slides = render_all(
        r#"
slides:
  - title: Mixed
    content:
      - "Intro line"
      - type: list
        items: [one, "**two**"]
      - type: callout
        style: red
        content: Careful
      - type: quote
        text: "To be"
"#,
    );

    let html = &slides[0];
    assert!(html.contains("Intro line"));
    assert!(html.contains("<li><strong>two</strong></li>"));
    assert!(html.contains("Careful"));
    assert!(html.contains("To be"));
}

#[test]
fn test_fenced_code_survives_formatting() {
    let html = format_text("Before\n```js\nconst a = `**x**`;\n```\nAfter");

    assert!(html.contains("class=\"language-js\""));
    assert!(html.contains("**x**"));
    assert!(!html.contains("<strong>x</strong>"));
    assert!(html.starts_with("Before<br>"));
}

// ============================================================================
// Failure Tests
// ============================================================================

const BROKEN_DECK: &str = r#"
slides:
  - title: Fine
  - type: grid
    title: Broken
  - title: Also fine
"#;

#[test]
fn test_missing_required_field_names_the_slide() {
    let err = render_slides(&parse(BROKEN_DECK), &BuildConfig::default()).unwrap_err();

    match &err {
        Error::Slide { index, source } => {
            assert_eq!(*index, 2);
            assert!(matches!(**source, Error::MissingField { field: "items", .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_isolated_failure_keeps_other_slides() {
    let config = BuildConfig::new().with_isolate_failures(true);
    let slides = render_slides(&parse(BROKEN_DECK), &config).unwrap();

    assert_eq!(slides.len(), 3);
    assert!(slides[0].contains("Fine"));
    assert!(slides[1].contains("slide-error"));
    assert!(slides[1].contains("Slide 2 could not be rendered"));
    assert!(slides[2].contains("Also fine"));
}

#[test]
fn test_empty_document_is_rejected() {
    let err = HtmlExporter::new().render(&parse("title: Empty")).unwrap_err();
    assert!(matches!(err, Error::EmptyDocument));
}

#[test]
fn test_page_counts_slides() {
    let page = HtmlExporter::new()
        .render(&parse(
            r#"
title: Deck
slides:
  - title: A
  - title: B
"#,
        ))
        .unwrap();

    assert!(page.contains("<span id=\"total\">2</span>"));
    assert!(page.contains("<title>Deck</title>"));
}
