//! Content nodes nested inside slides.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use super::{from_value, type_tag};

/// The body of a slide, card, column or callout.
///
/// A bare string is a single paragraph; a list is a sequence of
/// [`ContentNode`]s rendered in order. Any other YAML shape is kept as
/// [`Content::Other`] and renders as nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    Nodes(Vec<ContentNode>),
    Other,
}

impl Content {
    /// The content nodes, or an empty slice for non-sequence content.
    pub fn nodes(&self) -> &[ContentNode] {
        match self {
            Content::Nodes(nodes) => nodes,
            _ => &[],
        }
    }

    /// Find the two-column layout marker, if the sequence carries one.
    pub fn two_column_marker(&self) -> Option<&TwoColumnContent> {
        self.nodes().iter().find_map(|node| match node {
            ContentNode::TwoColumnContent(marker) => Some(marker),
            _ => None,
        })
    }
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => Content::Text(text),
            Value::Sequence(items) => Content::Nodes(
                items
                    .into_iter()
                    .map(from_value)
                    .collect::<Result<_, _>>()
                    .map_err(D::Error::custom)?,
            ),
            _ => Content::Other,
        })
    }
}

/// One typed unit of body content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    Paragraph(String),
    List(ListNode),
    Card(Card),
    Quote(QuoteNode),
    Callout(Callout),
    Code(CodeNode),
    Flow(Flow),
    /// Layout marker consumed by two-column slides; renders empty elsewhere.
    TwoColumnContent(TwoColumnContent),
    Unknown,
}

impl<'de> Deserialize<'de> for ContentNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if let Value::String(text) = value {
            return Ok(ContentNode::Paragraph(text));
        }
        if !value.is_mapping() {
            return Ok(ContentNode::Unknown);
        }

        let tag = type_tag(&value).map(str::to_owned);
        let node = match tag.as_deref() {
            Some("list") => from_value(value).map(ContentNode::List),
            Some("card") => from_value(value).map(ContentNode::Card),
            Some("quote") => from_value(value).map(ContentNode::Quote),
            Some("callout") => from_value(value).map(ContentNode::Callout),
            Some("code") => from_value(value).map(ContentNode::Code),
            Some("flow") => from_value(value).map(ContentNode::Flow),
            Some("two-column-content") => from_value(value).map(ContentNode::TwoColumnContent),
            _ => Ok(ContentNode::Unknown),
        };
        node.map_err(D::Error::custom)
    }
}

/// Bulleted list with an optional colour token.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListNode {
    #[serde(deserialize_with = "super::scalar::text_list")]
    pub items: Option<Vec<String>>,
    pub style: Option<String>,
}

/// Titled box around nested content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Card {
    #[serde(deserialize_with = "super::scalar::text")]
    pub title: Option<String>,
    /// Raw CSS appended to the card's `style` attribute.
    pub style: Option<String>,
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QuoteNode {
    #[serde(deserialize_with = "super::scalar::text")]
    pub text: Option<String>,
}

/// Centered card; `style` is passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Callout {
    pub content: Option<Content>,
    pub style: Option<String>,
}

/// Literal code listing. The body is escaped, never formatted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CodeNode {
    pub code: Option<String>,
    #[serde(alias = "lang")]
    pub language: Option<String>,
}

/// Left and right column definitions carried inside a content sequence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TwoColumnContent {
    pub left: Option<Column>,
    pub right: Option<Column>,
}

/// One side of a two-column layout.
///
/// Cards and content are independent: a column may carry either, both or
/// neither.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Column {
    #[serde(deserialize_with = "super::scalar::text")]
    pub title: Option<String>,
    pub cards: Option<Vec<Card>>,
    pub content: Option<Content>,
}

/// A linear diagram of boxes and arrows.
///
/// Item order is the diagram's reading order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Flow {
    pub style: Option<String>,
    pub items: Option<Vec<FlowItem>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlowItem {
    /// Connector glyph; `None` renders the default arrow.
    Arrow(Option<String>),
    Box(FlowBox),
}

impl<'de> Deserialize<'de> for FlowItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Arrow {
            #[serde(default, deserialize_with = "super::scalar::text")]
            text: Option<String>,
        }

        let value = Value::deserialize(deserializer)?;
        if type_tag(&value) == Some("arrow") {
            let arrow: Arrow = from_value(value).map_err(D::Error::custom)?;
            Ok(FlowItem::Arrow(arrow.text))
        } else if value.is_mapping() {
            from_value(value).map(FlowItem::Box).map_err(D::Error::custom)
        } else {
            Ok(FlowItem::Box(FlowBox::default()))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlowBox {
    #[serde(deserialize_with = "super::scalar::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "super::scalar::text")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "super::scalar::text")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: serde::de::DeserializeOwned>(yaml: &str) -> T {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_string_content_is_text() {
        let content: Content = parse("\"hello **world**\"");
        assert_eq!(content, Content::Text("hello **world**".to_string()));
    }

    #[test]
    fn test_other_shapes_are_ignored() {
        let content: Content = parse("42");
        assert_eq!(content, Content::Other);
        let content: Content = parse("{ title: x }");
        assert_eq!(content, Content::Other);
    }

    #[test]
    fn test_sequence_dispatches_on_type() {
        let content: Content = parse(
            r#"
- "plain paragraph"
- type: list
  style: green
  items: [a, b]
- type: card
  title: Card
  content: inner
- type: quote
  text: said
- type: mystery
- 17
"#,
        );

        let nodes = content.nodes();
        assert_eq!(nodes.len(), 6);
        assert_eq!(nodes[0], ContentNode::Paragraph("plain paragraph".to_string()));
        match &nodes[1] {
            ContentNode::List(list) => {
                assert_eq!(list.style.as_deref(), Some("green"));
                assert_eq!(list.items.as_ref().map(Vec::len), Some(2));
            }
            other => panic!("Expected list, got {other:?}"),
        }
        assert!(matches!(&nodes[2], ContentNode::Card(card) if card.title.as_deref() == Some("Card")));
        assert!(matches!(&nodes[3], ContentNode::Quote(_)));
        assert_eq!(nodes[4], ContentNode::Unknown);
        assert_eq!(nodes[5], ContentNode::Unknown);
    }

    #[test]
    fn test_code_node_accepts_lang_alias() {
        let node: ContentNode = parse("type: code\nlang: rust\ncode: fn main() {}");
        match node {
            ContentNode::Code(code) => assert_eq!(code.language.as_deref(), Some("rust")),
            other => panic!("Expected code, got {other:?}"),
        }
    }

    #[test]
    fn test_two_column_marker_lookup() {
        let content: Content = parse(
            r#"
- intro
- type: two-column-content
  left: { title: L }
  right: { title: R }
"#,
        );
        let marker = content.two_column_marker().unwrap();
        assert_eq!(marker.left.as_ref().unwrap().title.as_deref(), Some("L"));
        assert_eq!(marker.right.as_ref().unwrap().title.as_deref(), Some("R"));
        assert!(Content::Text("x".to_string()).two_column_marker().is_none());
    }

    #[test]
    fn test_flow_items() {
        let flow: Flow = parse(
            r#"
style: "gap: 1rem"
items:
  - title: Parse
    subtitle: yaml
  - type: arrow
  - type: arrow
    text: "=>"
  - title: Render
"#,
        );
        let items = flow.items.unwrap();
        assert_eq!(items.len(), 4);
        assert!(matches!(&items[0], FlowItem::Box(b) if b.title.as_deref() == Some("Parse")));
        assert_eq!(items[1], FlowItem::Arrow(None));
        assert_eq!(items[2], FlowItem::Arrow(Some("=>".to_string())));
    }
}
