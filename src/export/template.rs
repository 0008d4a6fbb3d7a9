//! Starter presentation written by `slayd init`.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// A small deck showing the main slide kinds.
pub const INIT_TEMPLATE: &str = r#"title: "My Presentation"
theme: light  # or leave empty for dark theme

slides:
  # Title slide
  - type: hero
    title: "Welcome"
    subtitle: "My first presentation with Slayd"
    logo: "🚀"

  # Content slide
  - type: default
    title: "About This Presentation"
    content:
      - "This is a starter template"
      - "Edit this YAML file to create your slides"
      - type: list
        items:
          - "Multiple slide types available"
          - "Simple markdown formatting"
          - "Easy to customize"

  # Two-column slide
  - type: two-column
    title: "Features"
    left:
      title: "Easy"
      content:
        - "Write in YAML"
        - "No HTML needed"
    right:
      title: "Powerful"
      content:
        - "Multiple layouts"
        - "Custom themes"

  # Closing slide
  - type: hero
    title: "Thank You!"
    subtitle: "Start editing to make it yours"
    logo: "✨"
"#;

/// Write the starter template to `path`.
///
/// # Errors
///
/// Refuses to overwrite: returns [`Error::AlreadyExists`] if `path` exists.
pub fn init_template(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::AlreadyExists(path.to_path_buf()));
    }
    fs::write(path, INIT_TEMPLATE)?;
    log::info!("Created {}", path.display());
    Ok(())
}
