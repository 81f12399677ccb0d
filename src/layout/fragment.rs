//! Engine-native SVG fragment for placed words

use super::types::{Orientation, PlacedWord};

/// Ascent of a glyph box as a fraction of the font size
pub(crate) const ASCENT: f64 = 0.8;

/// Color the engine writes before palette assignment
pub const ENGINE_FILL: &str = "#000000";

/// Build the raw fragment incrementally
pub struct FragmentBuilder {
    width: u32,
    height: u32,
    standalone: bool,
    font_family: Option<String>,
    texts: Vec<String>,
}

impl FragmentBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            standalone: true,
            font_family: None,
            texts: vec![],
        }
    }

    /// Whether to emit an XML declaration
    pub fn standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Font family applied to the whole fragment
    pub fn font_family(mut self, family: Option<String>) -> Self {
        self.font_family = family;
        self
    }

    /// Add a text element for a placed word
    pub fn add_word(&mut self, word: &PlacedWord, width: f64) {
        let size = word.font_size();
        let pos = word.position();
        let transform = match word.orientation() {
            Orientation::Horizontal => format!(
                "translate({},{})",
                fmt_num(pos.x),
                fmt_num(pos.y + size * ASCENT)
            ),
            // rotate(-90) maps the glyph ascent to the left of the anchor
            Orientation::Vertical => format!(
                "translate({},{}) rotate(-{})",
                fmt_num(pos.x + size * ASCENT),
                fmt_num(pos.y + width),
                fmt_num(word.orientation().degrees())
            ),
        };

        self.texts.push(format!(
            r#"<text transform="{}" font-size="{}" style="fill:{};">{}</text>"#,
            transform,
            fmt_num(size),
            ENGINE_FILL,
            escape_xml(word.text())
        ));
    }

    /// Build the final fragment string
    pub fn build(self) -> String {
        let mut svg = String::new();

        if self.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push('\n');
        }

        let font_attr = self
            .font_family
            .map(|f| format!(r#" font-family="{}""#, escape_xml(&f)))
            .unwrap_or_default();
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}"{}>"#,
            self.width, self.height, font_attr
        ));

        for text in &self.texts {
            svg.push_str(text);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Format a coordinate without trailing zeros
fn fmt_num(n: f64) -> String {
    let rounded = (n * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
