//! Flow diagrams: boxes joined by arrows, in reading order.

use std::fmt::Write;

use crate::Result;
use crate::model::{Flow, FlowBox, FlowItem};

use super::format::format_text;
use super::non_empty;

/// Glyph drawn for arrows without their own text.
pub const DEFAULT_ARROW: &str = "→";

/// Render a flow diagram. A flow without items renders as nothing.
pub fn render_flow(flow: &Flow) -> Result<String> {
    let Some(items) = flow.items.as_deref().filter(|items| !items.is_empty()) else {
        return Ok(String::new());
    };

    let mut out = String::from("<div class=\"flow\"");
    if let Some(style) = &flow.style {
        write!(out, " style=\"{style}\"")?;
    }
    out.push_str(">\n");

    for item in items {
        match item {
            FlowItem::Arrow(text) => {
                let glyph = non_empty(text.as_deref()).unwrap_or(DEFAULT_ARROW);
                writeln!(out, "<div class=\"flow-arrow\">{glyph}</div>")?;
            }
            FlowItem::Box(flow_box) => write_box(&mut out, flow_box)?,
        }
    }

    out.push_str("</div>");
    Ok(out)
}

fn write_box(out: &mut String, flow_box: &FlowBox) -> std::fmt::Result {
    out.push_str("<div class=\"flow-item\">");
    if let Some(title) = non_empty(flow_box.title.as_deref()) {
        write!(out, "<strong>{title}</strong>")?;
    }
    if let Some(subtitle) = non_empty(flow_box.subtitle.as_deref()) {
        write!(out, "<br><small style=\"color: #6b7280;\">{subtitle}</small>")?;
    }
    if let Some(content) = non_empty(flow_box.content.as_deref()) {
        write!(out, "<br>{}", format_text(content))?;
    }
    out.push_str("</div>\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow(yaml: &str) -> Flow {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_empty_flow_renders_nothing() {
        assert_eq!(render_flow(&Flow::default()).unwrap(), "");
        assert_eq!(render_flow(&flow("items: []")).unwrap(), "");
    }

    #[test]
    fn test_items_render_in_order() {
        let out = render_flow(&flow(
            r#"
items:
  - title: Load
    subtitle: yaml
  - type: arrow
  - title: Render
    content: "**html**"
  - type: arrow
    text: "⇒"
  - title: Write
"#,
        ))
        .unwrap();

        let load = out.find("<strong>Load</strong>").unwrap();
        let arrow = out.find("→").unwrap();
        let render = out.find("<strong>Render</strong>").unwrap();
        let custom = out.find("⇒").unwrap();
        let write = out.find("<strong>Write</strong>").unwrap();
        assert!(load < arrow && arrow < render && render < custom && custom < write);

        assert!(out.contains("<br><small style=\"color: #6b7280;\">yaml</small>"));
        assert!(out.contains("<br><strong>html</strong>"));
        assert_eq!(out.matches("class=\"flow-arrow\"").count(), 2);
        assert_eq!(out.matches("class=\"flow-item\"").count(), 3);
    }

    #[test]
    fn test_style_passthrough() {
        let out = render_flow(&flow("style: \"flex-direction: column\"\nitems: [{title: A}]")).unwrap();
        assert!(out.starts_with("<div class=\"flow\" style=\"flex-direction: column\">"));

        let out = render_flow(&flow("items: [{title: A}]")).unwrap();
        assert!(out.starts_with("<div class=\"flow\">"));
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let out = render_flow(&flow(
            r#"
items:
  - title: A
  - type: arrow
    text: ""
  - title: ""
    subtitle: ""
    content: ""
"#,
        ))
        .unwrap();

        assert!(out.contains("<div class=\"flow-arrow\">→</div>"));
        assert!(out.contains("<div class=\"flow-item\"></div>"));
        assert!(!out.contains("<strong></strong>"));
        assert!(!out.contains("<small"));
    }
}
