//! Two-column and grid layouts.

use std::fmt::Write;

use crate::model::{Column, ContentNode, GridItem, GridSlide, Slide, TwoColumnSlide};
use crate::{Error, Result};

use super::content::{push_block, render_card, render_nodes, render_optional};
use super::non_empty;
use super::slide::write_heading;

/// Grid column count when the slide does not set one.
pub const DEFAULT_GRID_COLUMNS: u32 = 3;

/// Render a two-column slide.
///
/// When the content sequence carries a `two-column-content` marker, the
/// marker supplies both columns and the remaining nodes render above them.
/// Otherwise the slide's own `left`/`right` fields are the columns and any
/// content renders below.
pub(crate) fn render_two_column(slide: &Slide, columns: &TwoColumnSlide) -> Result<String> {
    let mut out = String::new();
    write_heading(&mut out, slide)?;
    out.push_str("<div class=\"content\">\n");

    let marker = columns
        .content
        .as_ref()
        .and_then(|content| content.two_column_marker());

    match marker {
        Some(marker) => {
            let rest = columns
                .content
                .iter()
                .flat_map(|content| content.nodes())
                .filter(|node| !matches!(node, ContentNode::TwoColumnContent(_)));
            push_block(&mut out, &render_nodes(rest)?);
            write_columns(&mut out, marker.left.as_ref(), marker.right.as_ref())?;
        }
        None => {
            write_columns(&mut out, columns.left.as_ref(), columns.right.as_ref())?;
            push_block(&mut out, &render_optional(columns.content.as_ref())?);
        }
    }

    out.push_str("</div>\n");
    Ok(out)
}

fn write_columns(out: &mut String, left: Option<&Column>, right: Option<&Column>) -> Result<()> {
    out.push_str("<div class=\"two-column\">\n");
    out.push_str(&render_column(left)?);
    out.push_str(&render_column(right)?);
    out.push_str("</div>\n");
    Ok(())
}

/// Render one column: title, then cards, then content. A missing column
/// still occupies its slot.
fn render_column(column: Option<&Column>) -> Result<String> {
    let Some(column) = column else {
        return Ok("<div></div>\n".to_string());
    };

    let mut out = String::from("<div>\n");
    if let Some(title) = non_empty(column.title.as_deref()) {
        writeln!(out, "<h3>{title}</h3>")?;
    }
    for card in column.cards.iter().flatten() {
        push_block(&mut out, &render_card(card)?);
    }
    push_block(&mut out, &render_optional(column.content.as_ref())?);
    out.push_str("</div>\n");
    Ok(out)
}

/// Render a grid slide with `columns` items per row.
pub(crate) fn render_grid(slide: &Slide, grid: &GridSlide) -> Result<String> {
    let items = grid
        .items
        .as_ref()
        .ok_or_else(|| Error::missing("grid slide", "items"))?;
    let columns = grid
        .columns
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_GRID_COLUMNS);

    let mut out = String::new();
    write_heading(&mut out, slide)?;
    out.push_str("<div class=\"content\">\n");
    writeln!(out, "<div class=\"grid-{columns}\">")?;
    for item in items {
        push_block(&mut out, &render_grid_item(item)?);
    }
    out.push_str("</div>\n</div>\n");
    Ok(out)
}

fn render_grid_item(item: &GridItem) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "<div class=\"{}\">", item.kind.class())?;
    if let Some(icon) = non_empty(item.icon.as_deref()) {
        writeln!(out, "<div class=\"feature-icon\">{icon}</div>")?;
    }
    if let Some(stat) = &item.stat {
        writeln!(out, "<div class=\"stat\">{stat}</div>")?;
    }
    if let Some(title) = non_empty(item.title.as_deref()) {
        writeln!(out, "<h3>{title}</h3>")?;
    }
    if let Some(label) = non_empty(item.label.as_deref()) {
        writeln!(out, "<div class=\"stat-label\">{label}</div>")?;
    }
    push_block(&mut out, &render_optional(item.content.as_ref())?);
    out.push_str("</div>");
    Ok(out)
}
