//! Making placed words clickable and theme-colored

use super::recolor::clear_fill;
use super::tree::{unescape_xml, Element};
use super::{format_raw_attributes, parse_raw_attributes, raw_text_pattern, SvgDocument};
use crate::palette::{Palette, PaletteColor};

const POINTER_STYLE: &str = "cursor: pointer; pointer-events: all;";

/// Escape a word for use inside a single-quoted JS string argument
///
/// Backslashes are escaped before quotes so a trailing `\` cannot swallow
/// the closing quote.
pub fn escape_word(word: &str) -> String {
    word.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Inverse of [`escape_word`]
pub fn unescape_word(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.extend(chars.next()),
            other => out.push(other),
        }
    }
    out
}

/// Rewrite every text element into a clickable, class-colored word
///
/// The semantic class comes from the raw color marker on the element (the
/// red palette marker selects `wc-red`, anything else `wc-grey`). Inline
/// fills are removed so the stylesheet decides the color. Returns the number
/// of elements rewritten.
pub fn rewrite_interactivity(doc: &mut SvgDocument, palette: &Palette, handler: &str) -> usize {
    let mut rewritten = 0;
    match doc {
        SvgDocument::Tree(root) => {
            root.visit_mut(&mut |e: &mut Element| {
                if e.local_name() != "text" {
                    return;
                }
                let word = e.text_content();
                rewrite_attributes(&mut e.attributes, &word, palette, handler);
                rewritten += 1;
            });
        }
        SvgDocument::Raw(text) => {
            let out = raw_text_pattern().replace_all(text, |caps: &regex::Captures| {
                let mut attrs = parse_raw_attributes(&caps[1]);
                let word = unescape_xml(&caps[2]);
                rewrite_attributes(&mut attrs, &word, palette, handler);
                // raw values are written back verbatim, so escape the new ones
                for (k, v) in attrs.iter_mut() {
                    if k == "onclick" {
                        *v = v.replace('&', "&amp;").replace('<', "&lt;");
                    }
                }
                rewritten += 1;
                format!("<text{}>{}</text>", format_raw_attributes(&attrs), &caps[2])
            });
            *text = out.into_owned();
        }
    }
    rewritten
}

fn rewrite_attributes(
    attrs: &mut Vec<(String, String)>,
    word: &str,
    palette: &Palette,
    handler: &str,
) {
    let marker: String = attrs
        .iter()
        .filter(|(k, _)| k == "fill" || k == "style")
        .map(|(_, v)| v.as_str())
        .collect::<Vec<_>>()
        .join(";");
    let color = if palette.is_red_marker(&marker) {
        PaletteColor::Red
    } else {
        PaletteColor::GreyDark
    };

    clear_fill(attrs);

    let mut classes: Vec<String> = attr_value(attrs, "class")
        .split_whitespace()
        .filter(|c| !c.starts_with("wc-"))
        .map(str::to_string)
        .collect();
    classes.push("wc-word".to_string());
    classes.push(color.css_class().to_string());

    let style = match attr_value(attrs, "style") {
        "" => POINTER_STYLE.to_string(),
        existing => format!("{} {}", existing, POINTER_STYLE),
    };

    set(attrs, "class", classes.join(" "));
    set(attrs, "style", style);
    set(attrs, "onclick", format!("{}('{}')", handler, escape_word(word)));
}

fn attr_value<'a>(attrs: &'a [(String, String)], name: &str) -> &'a str {
    attrs
        .iter()
        .find(|(k, _)| k == name)
        .map_or("", |(_, v)| v.as_str())
}

fn set(attrs: &mut Vec<(String, String)>, name: &str, value: String) {
    match attrs.iter_mut().find(|(k, _)| k == name) {
        Some((_, v)) => *v = value,
        None => attrs.push((name.to_string(), value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::tree;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_roundtrip() {
        for word in ["O'Brien", "plain", "it's'", "''", r"a\", r"\'", r"C:\x\'y"] {
            let escaped = escape_word(word);
            assert_eq!(unescape_word(&escaped), word);
            assert_eq!(escape_word(&unescape_word(&escaped)), escaped);
        }
        assert_eq!(escape_word("O'Brien"), r"O\'Brien");
        assert_eq!(escape_word(r"a\"), r"a\\");
        assert_eq!(escape_word(r"\'"), r"\\\'");
    }

    #[test]
    fn test_rewrite_tree() {
        let root = tree::parse(
            r##"<svg><text transform="translate(1,2)" font-size="20" fill="#b5121b">bayes</text><text style="fill:#555555; font-weight: bold;">O'Brien</text></svg>"##,
        )
        .unwrap();
        let mut doc = SvgDocument::Tree(root);
        let n = rewrite_interactivity(&mut doc, &Palette::default(), "showWordModal");
        assert_eq!(n, 2);
        assert_eq!(
            doc.to_svg_string(),
            r#"<svg><text transform="translate(1,2)" font-size="20" class="wc-word wc-red" style="cursor: pointer; pointer-events: all;" onclick="showWordModal('bayes')">bayes</text><text style="font-weight: bold; cursor: pointer; pointer-events: all;" class="wc-word wc-grey" onclick="showWordModal('O\'Brien')">O'Brien</text></svg>"#
        );
    }

    #[test]
    fn test_rewrite_keeps_foreign_classes_once() {
        let root = tree::parse(r#"<svg><text class="big wc-word wc-grey">a</text></svg>"#).unwrap();
        let mut doc = SvgDocument::Tree(root);
        rewrite_interactivity(&mut doc, &Palette::default(), "f");
        assert!(doc
            .to_svg_string()
            .contains(r#"class="big wc-word wc-grey""#));
    }

    #[test]
    fn test_rewrite_raw() {
        let mut doc = SvgDocument::Raw(
            r##"<svg><text x="1" style="fill:#B5121B;">R&amp;D</text><text>it's</text>"##.to_string(),
        );
        let n = rewrite_interactivity(&mut doc, &Palette::default(), "showWordModal");
        assert_eq!(n, 2);
        assert_eq!(
            doc.to_svg_string(),
            r#"<svg><text x="1" class="wc-word wc-red" style="cursor: pointer; pointer-events: all;" onclick="showWordModal('R&amp;D')">R&amp;D</text><text class="wc-word wc-grey" style="cursor: pointer; pointer-events: all;" onclick="showWordModal('it\'s')">it's</text>"#
        );
    }

    #[test]
    fn test_trailing_backslash_keeps_quote_closed() {
        let root = tree::parse(r"<svg><text>dir\</text></svg>").unwrap();
        let mut doc = SvgDocument::Tree(root);
        rewrite_interactivity(&mut doc, &Palette::default(), "showWordModal");
        assert!(doc
            .to_svg_string()
            .contains(r#"onclick="showWordModal('dir\\')""#));
    }

    #[test]
    fn test_custom_handler() {
        let root = tree::parse("<svg><text>mcmc</text></svg>").unwrap();
        let mut doc = SvgDocument::Tree(root);
        rewrite_interactivity(&mut doc, &Palette::default(), "openTalks");
        assert!(doc.to_svg_string().contains(r#"onclick="openTalks('mcmc')""#));
    }
}
