//! Top-level presentation document.

use serde::Deserialize;

use super::Slide;

/// A whole presentation: global settings plus the ordered slide list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(deserialize_with = "super::scalar::text")]
    pub title: Option<String>,
    /// Language tag written to `<html lang>`.
    pub lang: Option<String>,
    /// Name of an extra stylesheet (`{theme}.css`) linked after the base one.
    pub theme: Option<String>,
    /// Syntax-highlighting theme for code blocks.
    #[serde(rename = "codeTheme", alias = "code_theme")]
    pub code_theme: Option<String>,
    /// Transition used by slides that do not set their own.
    pub transition: Option<String>,
    pub slides: Vec<Slide>,
}

impl Document {
    /// Parse a document from YAML source.
    pub fn from_yaml(source: &str) -> crate::Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}
