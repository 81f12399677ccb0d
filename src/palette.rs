//! Color palette and decorative color assignment
//!
//! Words are colored from a small fixed palette. The palette carries both the
//! raw hex markers written onto elements before the interactivity rewrite and
//! the CSS values used by the injected theme block, so a rebrand is a single
//! configuration change.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::Deserialize;

/// The colors a placed word can be assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Red,
    GreyDark,
    GreyLight,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 3] = [
        PaletteColor::Red,
        PaletteColor::GreyDark,
        PaletteColor::GreyLight,
    ];

    /// Relative weight in the color draw (2:2:1)
    pub fn weight(self) -> u32 {
        match self {
            PaletteColor::Red => 2,
            PaletteColor::GreyDark => 2,
            PaletteColor::GreyLight => 1,
        }
    }

    /// Semantic CSS class for this color
    pub fn css_class(self) -> &'static str {
        match self {
            PaletteColor::Red => "wc-red",
            PaletteColor::GreyDark | PaletteColor::GreyLight => "wc-grey",
        }
    }
}

/// Hex markers and theme values for the word cloud
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub red: String,
    pub grey_dark: String,
    pub grey_light: String,
    pub light: ThemeColors,
    pub dark: ThemeColors,
}

/// CSS custom property values for one theme mode
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeColors {
    pub red: String,
    pub grey: String,
    pub hover_shadow: String,
}

impl ThemeColors {
    fn light() -> Self {
        Self {
            red: "#b5121b".to_string(),
            grey: "#333333".to_string(),
            hover_shadow: "rgba(181, 18, 27, 0.4)".to_string(),
        }
    }

    fn dark() -> Self {
        Self {
            red: "#ff8a80".to_string(),
            grey: "#e0e0e0".to_string(),
            hover_shadow: "rgba(255, 138, 128, 0.4)".to_string(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            red: "#b5121b".to_string(),
            grey_dark: "#333333".to_string(),
            grey_light: "#555555".to_string(),
            light: ThemeColors::light(),
            dark: ThemeColors::dark(),
        }
    }
}

impl Palette {
    /// Raw hex marker for a palette color
    pub fn hex(&self, color: PaletteColor) -> &str {
        match color {
            PaletteColor::Red => &self.red,
            PaletteColor::GreyDark => &self.grey_dark,
            PaletteColor::GreyLight => &self.grey_light,
        }
    }

    /// Whether a raw style/fill value carries the red marker
    pub fn is_red_marker(&self, raw: &str) -> bool {
        raw.to_ascii_lowercase()
            .contains(&self.red.to_ascii_lowercase())
    }
}

/// Draws palette colors with fixed weights, independent of the words
pub struct ColorAssigner {
    distribution: WeightedIndex<u32>,
}

impl ColorAssigner {
    pub fn new() -> Self {
        let weights = PaletteColor::ALL.map(PaletteColor::weight);
        Self {
            // weights are constant and non-zero
            distribution: WeightedIndex::new(weights).expect("palette weights are valid"),
        }
    }

    /// Draw one color
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> PaletteColor {
        PaletteColor::ALL[self.distribution.sample(rng)]
    }

    /// Draw `count` independent colors
    pub fn assign<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<PaletteColor> {
        (0..count).map(|_| self.draw(rng)).collect()
    }
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self::new()
    }
}
