//! Error types for the word cloud pipeline

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::layout::LayoutError;

/// Fatal errors that abort a pipeline run
#[derive(Debug, Error)]
pub enum WordCloudError {
    /// Corpus or stopword source does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Source exists but has the wrong shape
    #[error("invalid format in {}: {reason}", path.display())]
    Format { path: PathBuf, reason: String },

    /// Normalized corpus text is empty or whitespace-only
    #[error("no text found in talks data")]
    EmptyCorpus,

    /// Output destination could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The layout engine rejected its input or settings
    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),

    /// Configuration file could not be read or parsed
    #[error("invalid configuration {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl WordCloudError {
    /// Create a not-found error for a path
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a format error for a path
    pub fn format(path: impl AsRef<Path>, reason: impl fmt::Display) -> Self {
        Self::Format {
            path: path.as_ref().to_path_buf(),
            // serde_yaml messages may span lines; the CLI prints exactly one
            reason: single_line(&reason.to_string()),
        }
    }

    /// Create a write error for a path
    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error for a path
    pub fn config(path: impl AsRef<Path>, reason: impl fmt::Display) -> Self {
        Self::Config {
            path: path.as_ref().to_path_buf(),
            reason: single_line(&reason.to_string()),
        }
    }
}

fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Non-fatal: the sanitizer could not parse the engine fragment and fell
/// back to textual stripping
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizeWarning {
    pub message: String,
}

impl SanitizeWarning {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SanitizeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SVG parsing failed ({}). Falling back to raw regex stripping.",
            self.message
        )
    }
}
