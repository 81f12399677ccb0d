//! Theme-aware CSS block for the word cloud

use std::sync::OnceLock;

use regex::Regex;

use super::tree::{Element, Node};
use super::SvgDocument;
use crate::palette::Palette;

/// Selector whose presence marks the block as already injected
const BLOCK_MARKER: &str = ".wc-word";

/// CSS defining the theme variables and word classes
pub fn style_css(palette: &Palette) -> String {
    format!(
        r#"
    :root {{
        --wc-red: {light_red};
        --wc-grey: {light_grey};
        --wc-hover-shadow: {light_shadow};
    }}

    [data-theme="dark"] {{
        --wc-red: {dark_red};
        --wc-grey: {dark_grey};
        --wc-hover-shadow: {dark_shadow};
    }}

    .wc-word {{
        transition: all 0.2s ease;
        cursor: pointer !important;
        font-family: 'Outfit', sans-serif;
        opacity: 0.9;
    }}

    .wc-red {{ fill: var(--wc-red); }}
    .wc-grey {{ fill: var(--wc-grey); }}

    .wc-word:hover {{
        opacity: 1;
        filter: drop-shadow(0px 2px 4px var(--wc-hover-shadow));
    }}
"#,
        light_red = palette.light.red,
        light_grey = palette.light.grey,
        light_shadow = palette.light.hover_shadow,
        dark_red = palette.dark.red,
        dark_grey = palette.dark.grey,
        dark_shadow = palette.dark.hover_shadow,
    )
}

fn raw_style_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)<style\b[^>]*>(.*?)</style>").expect("valid regex"))
}

/// Insert the style block as the last child of the root element
///
/// Style elements already in the document are folded into the new block so
/// that exactly one remains. Nothing happens if the block is already there.
pub fn inject_style(doc: &mut SvgDocument, palette: &Palette) {
    match doc {
        SvgDocument::Tree(root) => {
            let is_style = |e: &Element| e.local_name() == "style";
            let already = root
                .descendants()
                .into_iter()
                .any(|e| is_style(e) && e.text_content().contains(BLOCK_MARKER));
            if already {
                return;
            }

            let existing = root.remove_descendants(&is_style);
            let mut css: String = existing.iter().map(|e| e.text_content()).collect();
            css.push_str(&style_css(palette));

            let mut style = Element::new("style");
            style.children.push(Node::Text(css));
            root.children.push(Node::Element(style));
        }
        SvgDocument::Raw(text) => {
            let pattern = raw_style_pattern();
            if pattern
                .captures_iter(text)
                .any(|c| c[1].contains(BLOCK_MARKER))
            {
                return;
            }

            let mut css: String = pattern.captures_iter(text).map(|c| c[1].to_string()).collect();
            css.push_str(&style_css(palette));
            let block = format!("<style>{}</style>", css);

            let mut stripped = pattern.replace_all(text, "").into_owned();
            match stripped.rfind("</svg>") {
                Some(idx) => stripped.insert_str(idx, &block),
                None => stripped.push_str(&block),
            }
            *text = stripped;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::tree;

    fn style_count(svg: &str) -> usize {
        svg.matches("<style").count()
    }

    #[test]
    fn test_css_contains_theme_selectors() {
        let css = style_css(&Palette::default());
        assert!(css.contains(":root {"));
        assert!(css.contains("--wc-red: #b5121b;"));
        assert!(css.contains(r#"[data-theme="dark"]"#));
        assert!(css.contains("--wc-red: #ff8a80;"));
        assert!(css.contains("--wc-hover-shadow: rgba(255, 138, 128, 0.4);"));
        assert!(css.contains(".wc-red { fill: var(--wc-red); }"));
        assert!(css.contains(".wc-grey { fill: var(--wc-grey); }"));
        assert!(css.contains(".wc-word:hover"));
    }

    #[test]
    fn test_inject_tree_is_last_child_and_idempotent() {
        let root = tree::parse(r#"<svg xmlns="http://www.w3.org/2000/svg"><text>a</text></svg>"#).unwrap();
        let mut doc = SvgDocument::Tree(root);
        inject_style(&mut doc, &Palette::default());
        inject_style(&mut doc, &Palette::default());

        let out = doc.to_svg_string();
        assert_eq!(style_count(&out), 1);
        assert!(out.ends_with("</style></svg>"));
        assert!(roxmltree::Document::parse(&out).is_ok());
    }

    #[test]
    fn test_inject_tree_folds_existing_styles() {
        let root = tree::parse(
            r#"<svg><style>text{font-family:'DejaVu Sans';}</style><text>a</text></svg>"#,
        )
        .unwrap();
        let mut doc = SvgDocument::Tree(root);
        inject_style(&mut doc, &Palette::default());

        let out = doc.to_svg_string();
        assert_eq!(style_count(&out), 1);
        assert!(out.starts_with("<svg><text>a</text><style>text{font-family:'DejaVu Sans';}"));
    }

    #[test]
    fn test_inject_raw() {
        let mut doc = SvgDocument::Raw("<svg><text>a</svg>".to_string());
        inject_style(&mut doc, &Palette::default());
        inject_style(&mut doc, &Palette::default());

        let out = doc.to_svg_string();
        assert_eq!(style_count(&out), 1);
        assert!(out.starts_with("<svg><text>a<style>"));
        assert!(out.ends_with("</style></svg>"));
    }

    #[test]
    fn test_inject_raw_without_closing_tag_appends() {
        let mut doc = SvgDocument::Raw("<svg><text>a".to_string());
        inject_style(&mut doc, &Palette::default());
        assert!(doc.to_svg_string().ends_with("</style>"));
    }
}
