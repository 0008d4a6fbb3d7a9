//! # slayd
//!
//! Compile a YAML slide deck into a single HTML presentation.
//!
//! ## Features
//!
//! - Typed slide kinds: hero, image (center, fullscreen, split, icon, grid
//!   presets), two-column, grid, code, timeline, table, flow and default
//! - Nested content: paragraphs, lists, cards, quotes, callouts, code and
//!   flow diagrams
//! - Inline formatting: `**bold**`, `` `code` ``, fenced code blocks and
//!   line breaks
//! - Per-slide transitions with a document-wide default
//!
//! ## Quick Start
//!
//! ```no_run
//! use slayd::export::{BuildConfig, build_file};
//! use std::path::Path;
//!
//! let report = build_file(
//!     Path::new("talk.yaml"),
//!     Path::new("talk.html"),
//!     &BuildConfig::default(),
//! )?;
//! println!("{} slides", report.slide_count);
//! # Ok::<(), slayd::Error>(())
//! ```
//!
//! ## Rendering Without I/O
//!
//! The renderer works on the in-memory model and returns markup:
//!
//! ```
//! use slayd::Document;
//! use slayd::render::render_slide;
//!
//! let doc = Document::from_yaml(r#"
//! slides:
//!   - type: hero
//!     title: Hello
//!     subtitle: "**World**"
//! "#)?;
//!
//! let html = render_slide(&doc.slides[0], 0, doc.transition.as_deref())?;
//! assert!(html.contains("slide active"));
//! assert!(html.contains("<strong>World</strong>"));
//! # Ok::<(), slayd::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod model;
pub mod render;

pub use error::{Error, Result};
pub use export::{BuildConfig, Exporter, HtmlExporter};
pub use model::{Content, ContentNode, Document, Slide, SlideKind};
