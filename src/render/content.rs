//! Content sequences and content nodes.
//!
//! [`render_content`] and [`render_node`] recurse into each other: cards and
//! callouts carry content of their own, which may hold further cards.

use std::fmt::Write;

use crate::model::{Callout, Card, CodeNode, Content, ContentNode, ListNode};
use crate::{Error, Result};

use super::flow::render_flow;
use super::format::{DEFAULT_LANGUAGE, code_block, format_text};
use super::non_empty;
use super::style::resolve_color;

/// Render slide content: a bare string becomes one paragraph, a sequence
/// renders node by node in order.
pub fn render_content(content: &Content) -> Result<String> {
    match content {
        Content::Text(text) => Ok(paragraph(text)),
        Content::Nodes(nodes) => render_nodes(nodes),
        Content::Other => Ok(String::new()),
    }
}

/// Render optional content. Absent content and an empty string render as
/// nothing.
pub(crate) fn render_optional(content: Option<&Content>) -> Result<String> {
    match content {
        None => Ok(String::new()),
        Some(Content::Text(text)) if text.is_empty() => Ok(String::new()),
        Some(content) => render_content(content),
    }
}

/// Render nodes in order, one per line.
pub(crate) fn render_nodes<'a>(nodes: impl IntoIterator<Item = &'a ContentNode>) -> Result<String> {
    let rendered = nodes
        .into_iter()
        .map(render_node)
        .collect::<Result<Vec<_>>>()?;
    Ok(rendered.join("\n"))
}

/// Render a single content node.
///
/// Two-column markers and unrecognized nodes render as nothing.
pub fn render_node(node: &ContentNode) -> Result<String> {
    match node {
        ContentNode::Paragraph(text) => Ok(paragraph(text)),
        ContentNode::List(list) => render_list(list),
        ContentNode::Card(card) => render_card(card),
        ContentNode::Quote(quote) => Ok(format!(
            "<div class=\"quote\">{}</div>",
            format_text(quote.text.as_deref().unwrap_or_default())
        )),
        ContentNode::Callout(callout) => render_callout(callout),
        ContentNode::Code(code) => Ok(render_code(code)),
        ContentNode::Flow(flow) => render_flow(flow),
        ContentNode::TwoColumnContent(_) | ContentNode::Unknown => Ok(String::new()),
    }
}

/// Render a card: optional title, then its content.
pub fn render_card(card: &Card) -> Result<String> {
    let mut out = String::from("<div class=\"card\"");
    if let Some(style) = &card.style {
        write!(out, " style=\"{style}\"")?;
    }
    out.push_str(">\n");
    if let Some(title) = non_empty(card.title.as_deref()) {
        writeln!(out, "<h3>{title}</h3>")?;
    }
    push_block(&mut out, &render_optional(card.content.as_ref())?);
    out.push_str("</div>");
    Ok(out)
}

fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", format_text(text))
}

fn render_list(list: &ListNode) -> Result<String> {
    let items = list
        .items
        .as_ref()
        .ok_or_else(|| Error::missing("list", "items"))?;

    let mut out = String::from("<ul");
    if let Some(style) = &list.style {
        write!(out, " style=\"color: {};\"", resolve_color(style))?;
    }
    out.push('>');
    for item in items {
        write!(out, "<li>{}</li>", format_text(item))?;
    }
    out.push_str("</ul>");
    Ok(out)
}

fn render_callout(callout: &Callout) -> Result<String> {
    let mut out = String::from("<div class=\"card\" style=\"text-align: center;");
    if let Some(style) = &callout.style {
        write!(out, " {style}")?;
    }
    out.push_str("\">\n");
    push_block(&mut out, &render_optional(callout.content.as_ref())?);
    out.push_str("</div>");
    Ok(out)
}

fn render_code(code: &CodeNode) -> String {
    code_block(
        code.language.as_deref().unwrap_or(DEFAULT_LANGUAGE),
        code.code.as_deref().unwrap_or_default(),
    )
}

/// Append a rendered block on its own line, skipping empty blocks.
pub(crate) fn push_block(out: &mut String, block: &str) {
    if !block.is_empty() {
        out.push_str(block);
        out.push('\n');
    }
}
