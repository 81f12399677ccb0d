//! Responsive viewport declaration

use super::SvgDocument;

/// Make the document scale with its container
///
/// When no `viewBox` is declared the fixed width becomes `100%` and a
/// viewBox covering the logical canvas is added. Returns whether the
/// document changed.
pub fn ensure_viewbox(doc: &mut SvgDocument, width: u32, height: u32) -> bool {
    let view_box = format!("0 0 {} {}", width, height);
    match doc {
        SvgDocument::Tree(root) => {
            if root.attr("viewBox").is_some() {
                return false;
            }
            match root.attributes.iter().position(|(k, _)| k == "width") {
                Some(idx) => {
                    root.attributes[idx].1 = "100%".to_string();
                    root.attributes
                        .insert(idx + 1, ("viewBox".to_string(), view_box));
                }
                None => root.set_attr("viewBox", view_box),
            }
            true
        }
        SvgDocument::Raw(text) => {
            if text.contains("viewBox") {
                return false;
            }
            let fixed = format!(r#"width="{}""#, width);
            let responsive = format!(r#"width="100%" viewBox="{}""#, view_box);
            if text.contains(&fixed) {
                *text = text.replacen(&fixed, &responsive, 1);
                return true;
            }
            match text.find("<svg") {
                Some(idx) => {
                    text.insert_str(idx + 4, &format!(r#" viewBox="{}""#, view_box));
                    true
                }
                None => false,
            }
        }
    }
}
