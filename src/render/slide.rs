//! Slide rendering: kind dispatch and the simple layouts.
//!
//! Image presets live in [`super::image`]; two-column and grid layouts in
//! [`super::layout`].

use std::fmt::Write;

use crate::model::{
    CodeSlide, DefaultSlide, FlowSlide, HeroSlide, Slide, SlideKind, TableSlide, TimelineSlide,
};
use crate::{Error, Result};

use super::content::{push_block, render_optional};
use super::flow::render_flow;
use super::format::{DEFAULT_LANGUAGE, code_block, format_text};
use super::image::render_image;
use super::layout::{render_grid, render_two_column};
use super::non_empty;

/// Transition used when neither the slide nor the document names one.
pub const DEFAULT_TRANSITION: &str = "fade";

/// Title size of hero slides that do not set `titleSize`.
pub const DEFAULT_HERO_TITLE_SIZE: &str = "5rem";

/// Render one slide into a markup fragment.
///
/// The first slide (`index == 0`) is marked `active`. `default_transition`
/// is the document-level transition.
///
/// # Errors
///
/// Returns [`Error::MissingField`] when the slide's layout needs a field the
/// document left out, such as a grid without `items`.
pub fn render_slide(slide: &Slide, index: usize, default_transition: Option<&str>) -> Result<String> {
    let body = match &slide.kind {
        SlideKind::Hero(hero) => render_hero(slide, hero)?,
        SlideKind::Image(image) => render_image(slide, image)?,
        SlideKind::TwoColumn(columns) => render_two_column(slide, columns)?,
        SlideKind::Grid(grid) => render_grid(slide, grid)?,
        SlideKind::Code(code) => render_code(slide, code)?,
        SlideKind::Timeline(timeline) => render_timeline(slide, timeline)?,
        SlideKind::Table(table) => render_table(slide, table)?,
        SlideKind::Flow(flow) => render_flow_slide(slide, flow)?,
        SlideKind::Default(default) => render_default(slide, default)?,
    };

    let transition = effective_transition(slide, default_transition);
    let active = if index == 0 { " active" } else { "" };

    let mut out = String::with_capacity(body.len() + 96);
    writeln!(
        out,
        "<div class=\"slide{active} {}\" data-transition=\"{transition}\">",
        transition_class(transition)
    )?;
    out.push_str(&body);
    out.push_str("</div>\n");
    Ok(out)
}

/// Resolve a slide's transition: its own, else the document's, else `fade`.
pub fn effective_transition<'a>(slide: &'a Slide, default_transition: Option<&'a str>) -> &'a str {
    non_empty(slide.transition.as_deref())
        .or(non_empty(default_transition))
        .unwrap_or(DEFAULT_TRANSITION)
}

/// CSS class for a transition name. `none` gets its own no-op class.
pub fn transition_class(name: &str) -> String {
    if name == "none" {
        "no-transition".to_string()
    } else {
        format!("transition-{name}")
    }
}

/// Write the `<h2>` title and formatted subtitle shared by most layouts.
pub(crate) fn write_heading(out: &mut String, slide: &Slide) -> std::fmt::Result {
    if let Some(title) = non_empty(slide.title.as_deref()) {
        writeln!(out, "<h2>{title}</h2>")?;
    }
    if let Some(subtitle) = non_empty(slide.subtitle.as_deref()) {
        writeln!(out, "<div class=\"subtitle\">{}</div>", format_text(subtitle))?;
    }
    Ok(())
}

fn render_hero(slide: &Slide, hero: &HeroSlide) -> Result<String> {
    let mut out = String::new();
    out.push_str("<div class=\"content\" style=\"justify-content: center; text-align: center;\">\n");
    out.push_str("<div class=\"hero\">\n");
    if let Some(logo) = non_empty(hero.logo.as_deref()) {
        writeln!(out, "<div class=\"logo\">{logo}</div>")?;
    }
    writeln!(
        out,
        "<h1 style=\"font-size: {};\">{}</h1>",
        non_empty(hero.title_size.as_deref()).unwrap_or(DEFAULT_HERO_TITLE_SIZE),
        slide.title.as_deref().unwrap_or_default()
    )?;
    if let Some(subtitle) = non_empty(slide.subtitle.as_deref()) {
        writeln!(out, "<div class=\"subtitle\">{}</div>", format_text(subtitle))?;
    }
    out.push_str("</div>\n</div>\n");
    Ok(out)
}

fn render_code(slide: &Slide, code: &CodeSlide) -> Result<String> {
    let mut out = String::new();
    write_heading(&mut out, slide)?;
    out.push_str("<div class=\"content\">\n");
    if let Some(description) = non_empty(code.description.as_deref()) {
        writeln!(
            out,
            "<p style=\"color: #6b7280; margin-bottom: 1rem;\">{}</p>",
            format_text(description)
        )?;
    }
    push_block(
        &mut out,
        &code_block(
            non_empty(code.language.as_deref()).unwrap_or(DEFAULT_LANGUAGE),
            code.code.as_deref().unwrap_or_default(),
        ),
    );
    if let Some(notes) = non_empty(code.notes.as_deref()) {
        writeln!(
            out,
            "<div class=\"card\" style=\"margin-top: 1rem;\"><p style=\"color: #6b7280;\">{}</p></div>",
            format_text(notes)
        )?;
    }
    out.push_str("</div>\n");
    Ok(out)
}

fn render_timeline(slide: &Slide, timeline: &TimelineSlide) -> Result<String> {
    let entries = timeline
        .items
        .as_ref()
        .ok_or_else(|| Error::missing("timeline slide", "items"))?;

    let mut out = String::new();
    write_heading(&mut out, slide)?;
    out.push_str("<div class=\"content\">\n");
    for entry in entries {
        out.push_str("<div class=\"timeline-item\">\n");
        writeln!(
            out,
            "<strong>{}</strong> - {}",
            entry.period.as_ref().map(ToString::to_string).unwrap_or_default(),
            entry.title.as_deref().unwrap_or_default()
        )?;
        if let Some(description) = non_empty(entry.description.as_deref()) {
            writeln!(
                out,
                "<p style=\"color: #6b7280; margin-top: 0.5rem;\">{}</p>",
                format_text(description)
            )?;
        }
        if let Some(items) = &entry.items {
            out.push_str("<ul>");
            for item in items {
                write!(out, "<li>{}</li>", format_text(item))?;
            }
            out.push_str("</ul>\n");
        }
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
    Ok(out)
}

fn render_table(slide: &Slide, table: &TableSlide) -> Result<String> {
    let headers = table
        .headers
        .as_ref()
        .ok_or_else(|| Error::missing("table slide", "headers"))?;
    let rows = table
        .rows
        .as_ref()
        .ok_or_else(|| Error::missing("table slide", "rows"))?;

    let mut out = String::new();
    write_heading(&mut out, slide)?;
    out.push_str("<div class=\"content\">\n<table>\n<thead>\n<tr>");
    for header in headers {
        write!(out, "<th>{header}</th>")?;
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            write!(out, "<td>{}</td>", format_text(&cell.to_string()))?;
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</div>\n");
    Ok(out)
}

fn render_flow_slide(slide: &Slide, flow: &FlowSlide) -> Result<String> {
    let mut out = String::new();
    write_heading(&mut out, slide)?;
    out.push_str("<div class=\"content\">\n");
    if let Some(description) = non_empty(flow.description.as_deref()) {
        writeln!(
            out,
            "<p style=\"color: #6b7280; margin-bottom: 1.5rem;\">{}</p>",
            format_text(description)
        )?;
    }
    for diagram in flow.flows.iter().flatten() {
        push_block(&mut out, &render_flow(diagram)?);
    }
    push_block(&mut out, &render_optional(flow.content.as_ref())?);
    out.push_str("</div>\n");
    Ok(out)
}

fn render_default(slide: &Slide, default: &DefaultSlide) -> Result<String> {
    let mut out = String::new();
    write_heading(&mut out, slide)?;
    out.push_str("<div class=\"content\">\n");
    push_block(&mut out, &render_optional(default.content.as_ref())?);
    out.push_str("</div>\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(yaml: &str) -> Slide {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn render(yaml: &str) -> String {
        render_slide(&slide(yaml), 1, None).unwrap()
    }

    #[test]
    fn test_only_first_slide_is_active() {
        let s = slide("title: x");
        assert!(render_slide(&s, 0, None).unwrap().starts_with("<div class=\"slide active "));
        for index in [1, 2, 10] {
            let out = render_slide(&s, index, None).unwrap();
            assert!(!out.contains("active"));
        }
    }

    #[test]
    fn test_transition_fallback_chain() {
        let own = slide("title: x\ntransition: zoom");
        let plain = slide("title: x");

        assert_eq!(effective_transition(&own, Some("slide")), "zoom");
        assert_eq!(effective_transition(&plain, Some("slide")), "slide");
        assert_eq!(effective_transition(&plain, None), "fade");
        assert_eq!(effective_transition(&plain, Some("")), "fade");
    }

    #[test]
    fn test_transition_classes() {
        assert_eq!(transition_class("fade"), "transition-fade");
        assert_eq!(transition_class("slide"), "transition-slide");
        assert_eq!(transition_class("none"), "no-transition");

        let out = render_slide(&slide("title: x\ntransition: none"), 0, Some("fade")).unwrap();
        assert!(out.starts_with("<div class=\"slide active no-transition\" data-transition=\"none\">"));
    }

    #[test]
    fn test_hero() {
        let out = render("type: hero\ntitle: Welcome\nsubtitle: \"**big** day\"\nlogo: \"🚀\"");
        assert!(out.contains("<div class=\"logo\">🚀</div>"));
        assert!(out.contains("<h1 style=\"font-size: 5rem;\">Welcome</h1>"));
        assert!(out.contains("<div class=\"subtitle\"><strong>big</strong> day</div>"));

        let out = render("type: hero\ntitle: Small\ntitleSize: 2rem");
        assert!(out.contains("<h1 style=\"font-size: 2rem;\">Small</h1>"));
        assert!(!out.contains("logo"));
        assert!(!out.contains("subtitle"));
    }

    #[test]
    fn test_code_slide() {
        let out = render(
            r#"
type: code
title: Snippet
language: rust
description: "Uses `Vec`"
code: "let v: Vec<u8> = vec![];"
notes: "Allocates **nothing**"
"#,
        );
        assert!(out.contains("<h2>Snippet</h2>"));
        assert!(out.contains("<code>Vec</code>"));
        assert!(out.contains(
            "<pre><code class=\"language-rust\">let v: Vec&lt;u8&gt; = vec![];</code></pre>"
        ));
        assert!(out.contains("Allocates <strong>nothing</strong>"));
    }

    #[test]
    fn test_code_slide_defaults_language() {
        let out = render("type: code\ncode: x");
        assert!(out.contains("class=\"language-plaintext\""));
    }

    #[test]
    fn test_timeline_keeps_order() {
        let out = render(
            r#"
type: timeline
items:
  - period: 2019
    title: Start
    description: "First **steps**"
  - period: "Q3 2020"
    title: Growth
    items: [a, b]
  - period: 2018
    title: Prehistory
"#,
        );
        let first = out.find("<strong>2019</strong> - Start").unwrap();
        let second = out.find("<strong>Q3 2020</strong> - Growth").unwrap();
        let third = out.find("<strong>2018</strong> - Prehistory").unwrap();
        assert!(first < second && second < third);
        assert!(out.contains("First <strong>steps</strong>"));
        assert!(out.contains("<ul><li>a</li><li>b</li></ul>"));
        assert_eq!(out.matches("class=\"timeline-item\"").count(), 3);
    }

    #[test]
    fn test_table_shape() {
        let out = render("type: table\nheaders: [A, B]\nrows:\n  - [1, x]");
        assert_eq!(out.matches("<tr>").count(), 2);
        assert_eq!(out.matches("<th>").count(), 2);
        assert_eq!(out.matches("<td>").count(), 2);
        assert!(out.contains("<th>A</th><th>B</th>"));
        assert!(out.contains("<td>1</td><td>x</td>"));
    }

    #[test]
    fn test_table_cells_are_formatted_and_unvalidated() {
        let out = render("type: table\nheaders: [\"**H**\"]\nrows:\n  - [\"**c**\", true, 2.5]");
        // Headers are raw, cells are formatted
        assert!(out.contains("<th>**H**</th>"));
        assert!(out.contains("<td><strong>c</strong></td><td>true</td><td>2.5</td>"));
    }

    #[test]
    fn test_missing_required_fields() {
        let err = render_slide(&slide("type: table\nrows: []"), 0, None).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "headers", .. }));

        let err = render_slide(&slide("type: table\nheaders: [A]"), 0, None).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "rows", .. }));

        let err = render_slide(&slide("type: timeline"), 0, None).unwrap_err();
        assert!(matches!(err, Error::MissingField { kind: "timeline slide", .. }));
    }

    #[test]
    fn test_flow_slide() {
        let out = render(
            r#"
type: flow
title: Pipeline
description: How it works
flows:
  - items: [{title: A}, {type: arrow}, {title: B}]
  - items: [{title: C}]
content: Done
"#,
        );
        let a = out.find("<strong>A</strong>").unwrap();
        let c = out.find("<strong>C</strong>").unwrap();
        let done = out.find("<p>Done</p>").unwrap();
        assert!(a < c && c < done);
        assert_eq!(out.matches("<div class=\"flow\">").count(), 2);
    }

    #[test]
    fn test_default_slide() {
        let out = render("title: Agenda\nsubtitle: Today\ncontent: [one, two]");
        assert_eq!(
            out,
            "<div class=\"slide transition-fade\" data-transition=\"fade\">\n\
             <h2>Agenda</h2>\n\
             <div class=\"subtitle\">Today</div>\n\
             <div class=\"content\">\n\
             <p>one</p>\n<p>two</p>\n\
             </div>\n\
             </div>\n"
        );
    }

    #[test]
    fn test_unknown_kind_matches_default() {
        let body = "title: T\nsubtitle: S\ncontent: [\"a\", {type: quote, text: q}]";
        let unknown = render(&format!("type: mystery\n{body}"));
        let default = render(&format!("type: default\n{body}"));
        let untagged = render(body);
        assert_eq!(unknown, default);
        assert_eq!(untagged, default);
    }
}
