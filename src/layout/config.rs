//! Configuration for the word layout engine

use std::path::PathBuf;

use serde::Deserialize;

/// Sizing and selection options passed to a [`super::WordLayoutEngine`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Canvas width in logical units
    pub width: u32,

    /// Canvas height in logical units
    pub height: u32,

    /// Maximum number of words kept
    pub max_words: usize,

    /// Smallest font size a word may be shrunk to
    pub min_font_size: f64,

    /// Font size of the most frequent word
    pub max_font_size: f64,

    /// Spacing kept around each word
    pub margin: f64,

    /// Probability that a word is laid out horizontally
    pub prefer_horizontal: f64,

    /// Regex selecting tokens from the text
    pub token_pattern: String,

    /// Optional font resource; the engine picks its own default when unset
    pub font_path: Option<PathBuf>,

    /// Whether the emitted fragment starts with an XML declaration
    pub standalone: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            max_words: 150,
            min_font_size: 12.0,
            max_font_size: 80.0,
            margin: 12.0,
            prefer_horizontal: 0.9,
            token_pattern: r"\w[\w']+".to_string(),
            font_path: None,
            standalone: true,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the word cap
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Set the minimum font size
    pub fn with_min_font_size(mut self, size: f64) -> Self {
        self.min_font_size = size;
        self
    }

    /// Set the margin around words
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the font resource
    pub fn with_font_path(mut self, path: Option<PathBuf>) -> Self {
        self.font_path = path;
        self
    }

    /// Set whether the fragment carries an XML declaration
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }
}
