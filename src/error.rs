//! Error types for slayd operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, rendering or writing a presentation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// A field a layout cannot do without was absent from the document.
    #[error("{kind} is missing required field `{field}`")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("slide {index}: {source}")]
    Slide {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("presentation has no slides")]
    EmptyDocument,

    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

impl Error {
    pub(crate) fn missing(kind: &'static str, field: &'static str) -> Self {
        Error::MissingField { kind, field }
    }

    /// Attach the (1-based) slide number to an error raised while rendering it.
    pub(crate) fn in_slide(self, index: usize) -> Self {
        Error::Slide {
            index: index + 1,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = Error::missing("grid slide", "items");
        assert_eq!(err.to_string(), "grid slide is missing required field `items`");
    }

    #[test]
    fn test_slide_context_is_one_based() {
        let err = Error::missing("table slide", "headers").in_slide(2);
        assert_eq!(
            err.to_string(),
            "slide 3: table slide is missing required field `headers`"
        );
    }
}
