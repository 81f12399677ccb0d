//! Stamping assigned palette colors onto text elements

use super::tree::Element;
use super::{
    format_raw_attributes, parse_raw_attributes, raw_text_pattern, strip_fill_declarations,
    SvgDocument,
};
use crate::palette::{Palette, PaletteColor};

/// Number of text-bearing elements in the document
pub fn count_text_elements(doc: &SvgDocument) -> usize {
    match doc {
        SvgDocument::Tree(root) => root
            .descendants()
            .iter()
            .filter(|e| e.local_name() == "text")
            .count(),
        SvgDocument::Raw(text) => raw_text_pattern().find_iter(text).count(),
    }
}

/// Replace whatever fill each text element carries with the marker of its
/// assigned color
///
/// Colors are matched to text elements in document order. Elements beyond
/// the end of `colors` are left untouched.
pub fn stamp_colors(doc: &mut SvgDocument, colors: &[PaletteColor], palette: &Palette) {
    let mut next = colors.iter();
    match doc {
        SvgDocument::Tree(root) => {
            root.visit_mut(&mut |e: &mut Element| {
                if e.local_name() != "text" {
                    return;
                }
                if let Some(&color) = next.next() {
                    clear_fill(&mut e.attributes);
                    e.set_attr("fill", palette.hex(color));
                }
            });
        }
        SvgDocument::Raw(text) => {
            let stamped = raw_text_pattern().replace_all(text, |caps: &regex::Captures| {
                let Some(&color) = next.next() else {
                    return caps[0].to_string();
                };
                let mut attrs = parse_raw_attributes(&caps[1]);
                clear_fill(&mut attrs);
                attrs.push(("fill".to_string(), palette.hex(color).to_string()));
                format!("<text{}>{}</text>", format_raw_attributes(&attrs), &caps[2])
            });
            *text = stamped.into_owned();
        }
    }
}

/// Remove the fill attribute and any fill style declarations
pub(crate) fn clear_fill(attrs: &mut Vec<(String, String)>) {
    attrs.retain(|(k, _)| k != "fill");
    for (k, v) in attrs.iter_mut() {
        if k == "style" {
            *v = strip_fill_declarations(v);
        }
    }
    attrs.retain(|(k, v)| !(k == "style" && v.is_empty()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::tree;

    #[test]
    fn test_stamp_tree_in_document_order() {
        let root = tree::parse(
            r#"<svg><text style="fill:#000000;font-weight:bold">a</text><g><text fill="blue">b</text></g><text>c</text></svg>"#,
        )
        .unwrap();
        let mut doc = SvgDocument::Tree(root);
        assert_eq!(count_text_elements(&doc), 3);

        stamp_colors(
            &mut doc,
            &[PaletteColor::Red, PaletteColor::GreyLight],
            &Palette::default(),
        );
        assert_eq!(
            doc.to_svg_string(),
            r##"<svg><text style="font-weight:bold;" fill="#b5121b">a</text><g><text fill="#555555">b</text></g><text>c</text></svg>"##
        );
    }

    #[test]
    fn test_stamp_raw() {
        let mut doc = SvgDocument::Raw(
            r#"<svg><text x="1" style="fill:rgb(0,0,0)">a</text><text>b</text>"#.to_string(),
        );
        assert_eq!(count_text_elements(&doc), 2);
        stamp_colors(
            &mut doc,
            &[PaletteColor::GreyDark, PaletteColor::Red],
            &Palette::default(),
        );
        assert_eq!(
            doc.to_svg_string(),
            r##"<svg><text x="1" fill="#333333">a</text><text fill="#b5121b">b</text>"##
        );
    }
}
