//! File-level build driver: YAML in, HTML out.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Document;
use crate::{Error, Result};

use super::html::{BuildConfig, HtmlExporter};

/// Outcome of building one presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub slide_count: usize,
}

/// Outcome of building every presentation in a directory.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub built: Vec<BuildReport>,
    /// Inputs that failed, with their errors. Failures do not stop the batch.
    pub failed: Vec<(PathBuf, Error)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Read and parse a presentation file.
///
/// # Errors
///
/// [`Error::InputNotFound`] if the file does not exist, otherwise I/O and
/// YAML errors.
pub fn load_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    let source = fs::read_to_string(path)?;
    Document::from_yaml(&source)
}

/// Build `input` into a single HTML page at `output`.
///
/// # Errors
///
/// Fails on missing input, invalid YAML, an empty slide list, a slide that
/// cannot be rendered (unless failures are isolated) or a write error.
pub fn build_file(input: &Path, output: &Path, config: &BuildConfig) -> Result<BuildReport> {
    let document = load_document(input)?;
    let page = HtmlExporter::with_config(config.clone()).render(&document)?;
    fs::write(output, page)?;

    log::info!(
        "Built {} -> {} ({} slides)",
        input.display(),
        output.display(),
        document.slide_count()
    );

    Ok(BuildReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        slide_count: document.slide_count(),
    })
}

/// Build every `.yaml` / `.yml` file in `dir`, each next to its input.
///
/// Files are processed in name order. A failing file is recorded in the
/// report and the batch continues.
///
/// # Errors
///
/// Only fails if `dir` itself cannot be read.
pub fn build_all(dir: &Path, config: &BuildConfig) -> Result<BatchReport> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_yaml(&path) {
            inputs.push(path);
        }
    }
    inputs.sort();
    log::debug!("Found {} presentation(s) in {}", inputs.len(), dir.display());

    let mut report = BatchReport::default();
    for input in inputs {
        let output = default_output_path(&input);
        match build_file(&input, &output, config) {
            Ok(built) => report.built.push(built),
            Err(err) => {
                log::error!("Failed to build {}: {err}", input.display());
                report.failed.push((input, err));
            }
        }
    }
    Ok(report)
}

/// Output path for an input: `.yaml`/`.yml` becomes `.html`; any other name
/// gets `.html` appended.
pub fn default_output_path(input: &Path) -> PathBuf {
    if is_yaml(input) {
        input.with_extension("html")
    } else {
        let mut name = OsString::from(input.as_os_str());
        name.push(".html");
        PathBuf::from(name)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
