//! Presentation document model.
//!
//! This module contains:
//! - The top-level [`Document`] with its global settings
//! - Slides and their kind-specific fields ([`Slide`], [`SlideKind`])
//! - Content nodes nested inside slides ([`Content`], [`ContentNode`])
//! - Flow diagrams ([`Flow`], [`FlowItem`])
//! - Loosely typed scalar values used by tables and metrics ([`Scalar`])
//!
//! Every type is built once by the loader and read-only afterwards. Shapes
//! that the YAML source leaves loose (absent fields, string-or-list content,
//! unknown `type` tags) are made explicit here as `Option`s and enum variants,
//! so the renderer never has to probe raw values.

mod content;
mod document;
mod scalar;
mod slide;

pub use content::{
    Callout, Card, CodeNode, Column, Content, ContentNode, Flow, FlowBox, FlowItem, ListNode,
    QuoteNode, TwoColumnContent,
};
pub use document::Document;
pub use scalar::Scalar;
pub use slide::{
    CodeSlide, DefaultSlide, FlowSlide, GridItem, GridItemKind, GridSlide, HeroSlide, ImagePreset,
    ImageRef, ImageSlide, Slide, SlideKind, SplitPosition, TableSlide, TimelineEntry,
    TimelineSlide, TwoColumnSlide,
};

use serde::de::DeserializeOwned;
use serde_yaml::Value;

/// Read the `type` tag of a mapping value, if any.
pub(crate) fn type_tag(value: &Value) -> Option<&str> {
    value.get("type").and_then(Value::as_str)
}

/// Deserialize a typed view of an already-buffered YAML value.
pub(crate) fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, serde_yaml::Error> {
    serde_yaml::from_value(value)
}
