//! Turning engine markup into an embeddable document

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use super::{tree, SvgDocument, SVG_NAMESPACE};
use crate::error::SanitizeWarning;

fn declaration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)<\?xml.*?\?>").expect("valid regex"))
}

fn doctype_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?is)<!DOCTYPE[^\[>]*(?:\[.*?\])?\s*>").expect("valid regex")
    })
}

/// Sanitize a raw fragment for inline embedding
///
/// Well-formed input is parsed and re-serialised without its XML
/// declaration or doctype, and gains the SVG default namespace if it had
/// none. Input that does not parse is stripped textually instead and a
/// [`SanitizeWarning`] is returned alongside the raw document.
pub fn sanitize(raw: &str) -> (SvgDocument, Option<SanitizeWarning>) {
    match tree::parse(raw) {
        Ok(mut root) => {
            if root.attr("xmlns").is_none() && !root.name.contains(':') {
                root.prepend_attr("xmlns", SVG_NAMESPACE);
            }
            (SvgDocument::Tree(root), None)
        }
        Err(e) => {
            let warning = SanitizeWarning::new(e.to_string());
            warn!("{}", warning);
            (SvgDocument::Raw(strip_headers(raw)), Some(warning))
        }
    }
}

/// Remove XML declarations and doctypes from markup text
pub fn strip_headers(raw: &str) -> String {
    let s = declaration_pattern().replace_all(raw, "");
    let s = doctype_pattern().replace_all(&s, "");
    s.trim_start().to_string()
}
