//! Pipeline configuration loaded from TOML
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```toml
//! click_handler = "showWordModal"
//! seed = 7
//!
//! [layout]
//! max_words = 100
//! margin = 8
//!
//! [palette]
//! red = "#b5121b"
//!
//! [palette.dark]
//! red = "#ff8a80"
//! grey = "#e0e0e0"
//! hover_shadow = "rgba(255, 138, 128, 0.4)"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::WordCloudError;
use crate::layout::LayoutConfig;
use crate::palette::Palette;

/// Configuration for a complete pipeline run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WordCloudConfig {
    /// Sizing and selection passed to the layout engine
    pub layout: LayoutConfig,
    /// Color markers and theme values
    pub palette: Palette,
    /// Host page function invoked with the clicked word
    pub click_handler: String,
    /// Seed for layout and color randomness; entropy when unset
    pub seed: Option<u64>,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            palette: Palette::default(),
            click_handler: "showWordModal".to_string(),
            seed: None,
        }
    }
}

impl WordCloudConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, WordCloudError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WordCloudError::config(path, e))?;
        Self::from_str(&content).map_err(|e| WordCloudError::config(path, e))
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Set the palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the click handler function name
    pub fn with_click_handler(mut self, handler: impl Into<String>) -> Self {
        self.click_handler = handler.into();
        self
    }

    /// Fix the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(WordCloudConfig::from_str("").unwrap(), WordCloudConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let toml_str = r##"
click_handler = "openTalks"
seed = 3

[layout]
max_words = 40
margin = 4.0

[palette]
red = "#cc0000"

[palette.dark]
red = "#ffaaaa"
grey = "#eeeeee"
hover_shadow = "none"
"##;
        let config = WordCloudConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.click_handler, "openTalks");
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.layout.max_words, 40);
        assert_eq!(config.layout.margin, 4.0);
        assert_eq!(config.layout.width, 800);
        assert_eq!(config.palette.red, "#cc0000");
        assert_eq!(config.palette.grey_dark, "#333333");
        assert_eq!(config.palette.dark.red, "#ffaaaa");
        assert_eq!(config.palette.light.red, "#b5121b");
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(WordCloudConfig::from_str("this is not valid toml {{{{").is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = WordCloudConfig::from_file(Path::new("/no/such/wordcloud.toml")).unwrap_err();
        assert!(matches!(err, WordCloudError::Config { .. }));
    }

    #[test]
    fn test_builder_pattern() {
        let config = WordCloudConfig::new()
            .with_layout(LayoutConfig::new().with_max_words(5))
            .with_palette(Palette {
                red: "#ff0000".to_string(),
                ..Palette::default()
            })
            .with_click_handler("f")
            .with_seed(9);
        assert_eq!(config.layout.max_words, 5);
        assert_eq!(config.palette.red, "#ff0000");
        assert_eq!(config.click_handler, "f");
        assert_eq!(config.seed, Some(9));
    }
}
