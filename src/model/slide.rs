//! Slides and their kind-specific fields.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use super::{Column, Content, Flow, Scalar, from_value, type_tag};

/// One panel of the presentation.
///
/// The fields every kind shares live here; everything else hangs off
/// [`SlideKind`]. An absent or unrecognized `type` tag loads as
/// [`SlideKind::Default`].
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Per-slide override of the document transition.
    pub transition: Option<String>,
    pub kind: SlideKind,
}

impl Slide {
    /// Create an untitled slide of the given kind.
    pub fn new(kind: SlideKind) -> Self {
        Self {
            title: None,
            subtitle: None,
            transition: None,
            kind,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the transition override.
    pub fn with_transition(mut self, transition: impl Into<String>) -> Self {
        self.transition = Some(transition.into());
        self
    }
}

impl<'de> Deserialize<'de> for Slide {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Default, Deserialize)]
        #[serde(default)]
        struct Header {
            #[serde(deserialize_with = "super::scalar::text")]
            title: Option<String>,
            #[serde(deserialize_with = "super::scalar::text")]
            subtitle: Option<String>,
            transition: Option<String>,
        }

        let value = Value::deserialize(deserializer)?;
        if !value.is_mapping() {
            return Err(D::Error::custom("slide must be a mapping"));
        }

        let header: Header = from_value(value.clone()).map_err(D::Error::custom)?;
        let tag = type_tag(&value).map(str::to_owned);
        let kind = match tag.as_deref() {
            Some("hero") => from_value(value).map(SlideKind::Hero),
            Some("image") => from_value(value).map(SlideKind::Image),
            Some("two-column") => from_value(value).map(SlideKind::TwoColumn),
            Some("grid") => from_value(value).map(SlideKind::Grid),
            Some("code") => from_value(value).map(SlideKind::Code),
            Some("timeline") => from_value(value).map(SlideKind::Timeline),
            Some("table") => from_value(value).map(SlideKind::Table),
            Some("flow") => from_value(value).map(SlideKind::Flow),
            _ => from_value(value).map(SlideKind::Default),
        }
        .map_err(D::Error::custom)?;

        Ok(Slide {
            title: header.title,
            subtitle: header.subtitle,
            transition: header.transition,
            kind,
        })
    }
}

/// Kind-specific slide layouts.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideKind {
    Hero(HeroSlide),
    Image(ImageSlide),
    TwoColumn(TwoColumnSlide),
    Grid(GridSlide),
    Code(CodeSlide),
    Timeline(TimelineSlide),
    Table(TableSlide),
    Flow(FlowSlide),
    /// Title, subtitle and content only. Also the fallback for unknown tags.
    Default(DefaultSlide),
}

impl SlideKind {
    /// The `type` tag this kind is written as.
    pub fn name(&self) -> &'static str {
        match self {
            SlideKind::Hero(_) => "hero",
            SlideKind::Image(_) => "image",
            SlideKind::TwoColumn(_) => "two-column",
            SlideKind::Grid(_) => "grid",
            SlideKind::Code(_) => "code",
            SlideKind::Timeline(_) => "timeline",
            SlideKind::Table(_) => "table",
            SlideKind::Flow(_) => "flow",
            SlideKind::Default(_) => "default",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroSlide {
    /// Glyph or short markup shown above the title.
    #[serde(deserialize_with = "super::scalar::text")]
    pub logo: Option<String>,
    /// CSS font size of the title, `5rem` when absent.
    #[serde(rename = "titleSize", alias = "title_size", deserialize_with = "super::scalar::text")]
    pub title_size: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageSlide {
    pub preset: ImagePreset,
    pub image: Option<String>,
    #[serde(deserialize_with = "super::scalar::text")]
    pub alt: Option<String>,
    #[serde(deserialize_with = "super::scalar::text")]
    pub caption: Option<String>,
    /// Which side the image sits on in the `split` preset.
    pub position: SplitPosition,
    /// Gallery images for the `grid` preset.
    pub images: Option<Vec<ImageRef>>,
    pub content: Option<Content>,
}

/// Named placement of an image slide. Unknown names fall back to `Center`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ImagePreset {
    #[default]
    Center,
    Fullscreen,
    Split,
    Icon,
    Grid,
}

impl From<String> for ImagePreset {
    fn from(name: String) -> Self {
        match name.as_str() {
            "fullscreen" => ImagePreset::Fullscreen,
            "split" => ImagePreset::Split,
            "icon" => ImagePreset::Icon,
            "grid" => ImagePreset::Grid,
            _ => ImagePreset::Center,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SplitPosition {
    #[default]
    Left,
    Right,
}

impl From<String> for SplitPosition {
    fn from(name: String) -> Self {
        if name == "right" {
            SplitPosition::Right
        } else {
            SplitPosition::Left
        }
    }
}

/// A gallery image: either a bare path or a path with alt text and caption.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Path(String),
    Detailed {
        src: String,
        #[serde(default, deserialize_with = "super::scalar::text")]
        alt: Option<String>,
        #[serde(default, deserialize_with = "super::scalar::text")]
        caption: Option<String>,
    },
}

impl ImageRef {
    pub fn src(&self) -> &str {
        match self {
            ImageRef::Path(src) | ImageRef::Detailed { src, .. } => src,
        }
    }

    pub fn alt(&self) -> Option<&str> {
        match self {
            ImageRef::Path(_) => None,
            ImageRef::Detailed { alt, .. } => alt.as_deref(),
        }
    }

    pub fn caption(&self) -> Option<&str> {
        match self {
            ImageRef::Path(_) => None,
            ImageRef::Detailed { caption, .. } => caption.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TwoColumnSlide {
    pub left: Option<Column>,
    pub right: Option<Column>,
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridSlide {
    /// Column count of the grid, 3 when absent.
    pub columns: Option<u32>,
    pub items: Option<Vec<GridItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridItem {
    #[serde(rename = "type")]
    pub kind: GridItemKind,
    #[serde(deserialize_with = "super::scalar::text")]
    pub icon: Option<String>,
    pub stat: Option<Scalar>,
    #[serde(deserialize_with = "super::scalar::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "super::scalar::text")]
    pub label: Option<String>,
    pub content: Option<Content>,
}

/// Box style of a grid item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum GridItemKind {
    Feature,
    Metric,
    #[default]
    Card,
}

impl From<String> for GridItemKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "feature" => GridItemKind::Feature,
            "metric" => GridItemKind::Metric,
            _ => GridItemKind::Card,
        }
    }
}

impl GridItemKind {
    /// CSS class of the item's container.
    pub fn class(self) -> &'static str {
        match self {
            GridItemKind::Feature => "feature-box",
            GridItemKind::Metric => "metric-box",
            GridItemKind::Card => "card",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CodeSlide {
    pub code: Option<String>,
    #[serde(alias = "lang")]
    pub language: Option<String>,
    #[serde(deserialize_with = "super::scalar::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "super::scalar::text")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimelineSlide {
    pub items: Option<Vec<TimelineEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    pub period: Option<Scalar>,
    #[serde(deserialize_with = "super::scalar::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "super::scalar::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "super::scalar::text_list")]
    pub items: Option<Vec<String>>,
}

/// Rows are not checked against the header count.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableSlide {
    pub headers: Option<Vec<Scalar>>,
    pub rows: Option<Vec<Vec<Scalar>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlowSlide {
    #[serde(deserialize_with = "super::scalar::text")]
    pub description: Option<String>,
    pub flows: Option<Vec<Flow>>,
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefaultSlide {
    pub content: Option<Content>,
}
