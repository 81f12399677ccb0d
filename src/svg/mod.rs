//! SVG post-processing
//!
//! The engine fragment is turned into an [`SvgDocument`] by the sanitizer
//! and then mutated in place by each stage. Every stage works on the parsed
//! tree when the sanitizer succeeded and falls back to pattern rewriting on
//! the raw text otherwise.

pub mod interactivity;
pub mod recolor;
pub mod sanitize;
pub mod style;
pub mod tree;
pub mod viewport;

use std::sync::OnceLock;

use regex::Regex;

pub use interactivity::{escape_word, rewrite_interactivity, unescape_word};
pub use recolor::{count_text_elements, stamp_colors};
pub use sanitize::sanitize;
pub use style::{inject_style, style_css};
pub use tree::{Element, Node};
pub use viewport::ensure_viewbox;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A vector document in one of two tiers
#[derive(Debug, Clone, PartialEq)]
pub enum SvgDocument {
    /// Well-formed markup parsed into a tree
    Tree(Element),
    /// Markup that could not be parsed, kept as text
    Raw(String),
}

impl SvgDocument {
    pub fn is_tree(&self) -> bool {
        matches!(self, SvgDocument::Tree(_))
    }

    /// Serialise the document
    pub fn to_svg_string(&self) -> String {
        match self {
            SvgDocument::Tree(root) => root.to_string(),
            SvgDocument::Raw(text) => text.clone(),
        }
    }
}

/// `<text ATTRS>CONTENT</text>` in raw markup
pub(crate) fn raw_text_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)<text\b([^>]*?)>([^<]*)</text>").expect("valid regex")
    })
}

fn raw_attr_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"([\w:.-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid regex")
    })
}

/// Split a raw attribute string into name/value pairs; values stay escaped
pub(crate) fn parse_raw_attributes(attrs: &str) -> Vec<(String, String)> {
    raw_attr_pattern()
        .captures_iter(attrs)
        .map(|c| {
            let value = c.get(2).or_else(|| c.get(3)).map_or("", |m| m.as_str());
            (c[1].to_string(), value.to_string())
        })
        .collect()
}

/// Join name/value pairs back into a raw attribute string
pub(crate) fn format_raw_attributes(attrs: &[(String, String)]) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(r#" {}="{}""#, k, v.replace('"', "&quot;")))
        .collect()
}

/// Drop `fill` declarations from an inline style, keeping the rest
pub(crate) fn strip_fill_declarations(style: &str) -> String {
    style
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .filter(|decl| {
            let property = decl.split(':').next().unwrap_or("").trim();
            !property.eq_ignore_ascii_case("fill")
        })
        .map(|decl| format!("{};", decl))
        .collect::<Vec<_>>()
        .join(" ")
}
