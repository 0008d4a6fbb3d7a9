//! HTML page exporter.
//!
//! Renders every slide through [`crate::render`] and wraps the fragments in
//! a complete page: stylesheet links, progress bar, slide counter,
//! navigation buttons and the embedded navigation script.

use std::fmt::Write as _;
use std::io::Write;

use crate::model::{Document, Slide};
use crate::render::{
    DEFAULT_LANGUAGE, code_block, effective_transition, escape_html, render_slide,
    transition_class,
};
use crate::{Error, Result};

use super::Exporter;
use super::script::NAVIGATION_SCRIPT;

const HIGHLIGHT_BASE: &str = "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0";

/// Configuration for HTML export.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Base stylesheet linked from every page.
    pub stylesheet_href: String,
    /// `lang` attribute used when the document does not set one.
    pub default_lang: String,
    /// Highlighting theme used when the document does not set one.
    pub default_code_theme: String,
    /// Link the syntax highlighter stylesheet and script.
    pub highlight: bool,
    /// Replace slides that fail to render with an error slide instead of
    /// failing the whole page.
    pub isolate_failures: bool,
    pub prev_label: String,
    pub next_label: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            stylesheet_href: "presentation.css".to_string(),
            default_lang: "es".to_string(),
            default_code_theme: "github-dark".to_string(),
            highlight: true,
            isolate_failures: false,
            prev_label: "← Anterior".to_string(),
            next_label: "Siguiente →".to_string(),
        }
    }
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet_href = href.into();
        self
    }

    pub fn with_default_lang(mut self, lang: impl Into<String>) -> Self {
        self.default_lang = lang.into();
        self
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn with_isolate_failures(mut self, isolate: bool) -> Self {
        self.isolate_failures = isolate;
        self
    }

    /// Set the previous/next button labels.
    pub fn with_navigation_labels(mut self, prev: impl Into<String>, next: impl Into<String>) -> Self {
        self.prev_label = prev.into();
        self.next_label = next.into();
        self
    }
}

/// Exporter for single-file HTML presentations.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    config: BuildConfig,
}

impl HtmlExporter {
    /// Create a new HtmlExporter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an HtmlExporter with the specified configuration.
    pub fn with_config(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Render the complete page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDocument`] for a document without slides, and
    /// the first slide error unless failures are isolated.
    pub fn render(&self, document: &Document) -> Result<String> {
        if document.slides.is_empty() {
            return Err(Error::EmptyDocument);
        }

        let slides = render_slides(document, &self.config)?;
        let config = &self.config;
        let lang = document.lang.as_deref().unwrap_or(&config.default_lang);
        let title = document.title.as_deref().unwrap_or_default();

        let mut page = String::with_capacity(slides.iter().map(String::len).sum::<usize>() + 4096);
        page.push_str("<!DOCTYPE html>\n");
        writeln!(page, "<html lang=\"{}\">", escape_html(lang))?;
        page.push_str("<head>\n");
        page.push_str("    <meta charset=\"UTF-8\">\n");
        page.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        writeln!(page, "    <title>{}</title>", escape_html(title))?;
        writeln!(
            page,
            "    <link rel=\"stylesheet\" href=\"{}\">",
            escape_html(&config.stylesheet_href)
        )?;
        if let Some(theme) = document.theme.as_deref().filter(|t| !t.is_empty()) {
            writeln!(page, "    <link rel=\"stylesheet\" href=\"{}.css\">", escape_html(theme))?;
        }
        if config.highlight {
            let code_theme = document
                .code_theme
                .as_deref()
                .unwrap_or(&config.default_code_theme);
            writeln!(
                page,
                "    <link rel=\"stylesheet\" href=\"{HIGHLIGHT_BASE}/styles/{}.min.css\">",
                escape_html(code_theme)
            )?;
            writeln!(page, "    <script src=\"{HIGHLIGHT_BASE}/highlight.min.js\"></script>")?;
        }
        page.push_str("</head>\n<body>\n");
        page.push_str("    <div class=\"progress-bar\" id=\"progressBar\"></div>\n\n");
        page.push_str("    <div class=\"slide-container\">\n");
        page.push_str(&slides.join("\n"));
        page.push_str("    </div>\n\n");
        page.push_str("    <div class=\"slide-number\">\n");
        writeln!(
            page,
            "        <span id=\"current\">1</span> / <span id=\"total\">{}</span>",
            slides.len()
        )?;
        page.push_str("    </div>\n\n");
        page.push_str("    <div class=\"navigation\">\n");
        writeln!(
            page,
            "        <button id=\"prev\" onclick=\"changeSlide(-1)\">{}</button>",
            config.prev_label
        )?;
        writeln!(
            page,
            "        <button id=\"next\" onclick=\"changeSlide(1)\">{}</button>",
            config.next_label
        )?;
        page.push_str("    </div>\n\n");
        writeln!(page, "    <script>{NAVIGATION_SCRIPT}    </script>")?;
        page.push_str("</body>\n</html>\n");

        Ok(page)
    }
}

impl Exporter for HtmlExporter {
    fn export<W: Write>(&self, document: &Document, writer: &mut W) -> Result<()> {
        let page = self.render(document)?;
        writer.write_all(page.as_bytes())?;
        Ok(())
    }
}

/// Render every slide of the document, in order.
///
/// # Errors
///
/// The first slide that fails aborts the render, unless
/// [`BuildConfig::isolate_failures`] is set; then the failing slide is
/// logged and replaced by an error slide.
pub fn render_slides(document: &Document, config: &BuildConfig) -> Result<Vec<String>> {
    let default_transition = document.transition.as_deref();

    document
        .slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            log::debug!("Rendering slide {} ({})", index + 1, slide.kind.name());
            match render_slide(slide, index, default_transition) {
                Ok(html) => Ok(html),
                Err(err) if config.isolate_failures => {
                    let err = err.in_slide(index);
                    log::warn!("{err}; substituting an error slide");
                    error_slide(slide, index, default_transition, &err)
                }
                Err(err) => Err(err.in_slide(index)),
            }
        })
        .collect()
}

/// Placeholder for a slide that failed to render. Keeps the slide's position,
/// `active` flag and transition so navigation is unaffected.
fn error_slide(
    slide: &Slide,
    index: usize,
    default_transition: Option<&str>,
    err: &Error,
) -> Result<String> {
    let transition = effective_transition(slide, default_transition);
    let active = if index == 0 { " active" } else { "" };

    let mut out = String::new();
    writeln!(
        out,
        "<div class=\"slide{active} slide-error {}\" data-transition=\"{transition}\">",
        transition_class(transition)
    )?;
    writeln!(out, "<h2>Slide {} could not be rendered</h2>", index + 1)?;
    writeln!(
        out,
        "<div class=\"content\">\n{}\n</div>",
        code_block(DEFAULT_LANGUAGE, &err.to_string())
    )?;
    out.push_str("</div>\n");
    Ok(out)
}
