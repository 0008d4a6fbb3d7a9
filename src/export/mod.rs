//! Export module for writing presentations to HTML.
//!
//! Provides the `Exporter` trait, the HTML page exporter and the file-level
//! build driver.
//!
//! # Architecture
//!
//! The `Exporter` trait uses a builder pattern:
//! - `new()` creates an exporter with default configuration
//! - `with_config()` allows customization
//! - `export()` writes to any `Write` destination
//!
//! # Example
//!
//! ```no_run
//! use slayd::Document;
//! use slayd::export::{Exporter, HtmlExporter};
//! use std::fs::File;
//!
//! let source = std::fs::read_to_string("talk.yaml")?;
//! let document = Document::from_yaml(&source)?;
//! let mut file = File::create("talk.html")?;
//!
//! HtmlExporter::new().export(&document, &mut file)?;
//! # Ok::<(), slayd::Error>(())
//! ```

use std::io::Write;

use crate::Result;
use crate::model::Document;

mod build;
mod html;
mod script;
mod template;

pub use build::{BatchReport, BuildReport, build_all, build_file, default_output_path, load_document};
pub use html::{BuildConfig, HtmlExporter, render_slides};
pub use template::{INIT_TEMPLATE, init_template};

/// Trait for exporting presentations to specific formats.
///
/// Exporters hold their configuration; `export` writes the finished output
/// to any `Write` destination:
/// - `std::fs::File` for disk output
/// - `Vec<u8>` for in-memory output
pub trait Exporter {
    /// Export the document to the provided writer.
    ///
    /// # Errors
    ///
    /// Fails when a slide cannot be rendered or the writer fails.
    fn export<W: Write>(&self, document: &Document, writer: &mut W) -> Result<()>;
}
