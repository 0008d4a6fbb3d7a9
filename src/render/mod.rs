//! Slide-model rendering engine.
//!
//! Pure functions from the document model to HTML fragments. No I/O is
//! performed here; the export layer ([`crate::export`]) assembles the
//! fragments into a page and writes it out.
//!
//! The renderer is layered, leaf first:
//!
//! - [`format_text`]: inline markdown-like formatting of a single string
//! - [`render_node`] / [`render_content`]: content nodes and sequences,
//!   recursing through cards and callouts
//! - [`render_flow`]: flow diagrams
//! - [`render_slide`]: kind dispatch and slide layouts
//!
//! ## Trusted input
//!
//! Titles, captions, styles and inline code are written verbatim so authors
//! can embed markup. Only code bodies are escaped. Fields a layout needs
//! (a grid's `items`, a table's `headers`) are expected to be present; when
//! they are not, rendering fails with [`crate::Error::MissingField`].

mod content;
mod escape;
mod flow;
mod format;
mod image;
mod layout;
mod patterns;
mod slide;
mod style;

pub use content::{render_card, render_content, render_node};
pub use escape::escape_html;
pub use flow::{DEFAULT_ARROW, render_flow};
pub use format::{DEFAULT_LANGUAGE, code_block, format_text};
pub use image::{DEFAULT_ALT, gallery_class};
pub use layout::DEFAULT_GRID_COLUMNS;
pub use slide::{
    DEFAULT_HERO_TITLE_SIZE, DEFAULT_TRANSITION, effective_transition, render_slide,
    transition_class,
};
pub use style::resolve_color;

/// Treat empty strings like absent ones.
fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
