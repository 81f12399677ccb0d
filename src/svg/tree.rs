//! Owned, mutable markup tree
//!
//! `roxmltree` gives a read-only view of a document; post-processing needs
//! to add and remove attributes and elements, so the parse result is copied
//! into this small tree and serialised back out once all stages are done.

use std::fmt;

/// A child of an element
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

/// An element with its qualified name, attributes in source order and children
///
/// Namespace declarations are kept as ordinary `xmlns`/`xmlns:*` attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: vec![],
            children: vec![],
        }
    }

    /// Name without its namespace prefix
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Insert an attribute at the front, replacing an existing value in place
    pub fn prepend_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attributes.insert(0, (name.to_string(), value)),
        }
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
                Node::Comment(_) => {}
            }
        }
    }

    /// Visit this element and every descendant element in document order
    pub fn visit_mut(&mut self, f: &mut dyn FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            if let Node::Element(e) = child {
                e.visit_mut(f);
            }
        }
    }

    /// All descendant elements (including self) in document order
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in &self.children {
            if let Node::Element(e) = child {
                out.extend(e.descendants());
            }
        }
        out
    }

    /// Remove every descendant element matching `pred`, returning them in
    /// document order
    pub fn remove_descendants(&mut self, pred: &dyn Fn(&Element) -> bool) -> Vec<Element> {
        let mut removed = vec![];
        let children = std::mem::take(&mut self.children);
        for child in children {
            match child {
                Node::Element(e) if pred(&e) => removed.push(e),
                Node::Element(mut e) => {
                    removed.extend(e.remove_descendants(pred));
                    self.children.push(Node::Element(e));
                }
                other => self.children.push(other),
            }
        }
        removed
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (k, v) in &self.attributes {
            out.push(' ');
            out.push_str(k);
            out.push_str("=\"");
            out.push_str(&escape_attr(v));
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_to(out),
                Node::Text(t) => out.push_str(&escape_text(t)),
                Node::Comment(c) => {
                    out.push_str("<!--");
                    out.push_str(c);
                    out.push_str("-->");
                }
            }
        }
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out);
        f.write_str(&out)
    }
}

/// Parse markup into an owned tree rooted at the document element
///
/// Declarations, doctypes and processing instructions are not part of the
/// result.
pub fn parse(text: &str) -> Result<Element, roxmltree::Error> {
    let mut options = roxmltree::ParsingOptions::default();
    options.allow_dtd = true;
    let doc = roxmltree::Document::parse_with_options(text, options)?;
    Ok(convert(doc.root_element(), &[]))
}

fn convert(node: roxmltree::Node<'_, '_>, inherited: &[(Option<String>, String)]) -> Element {
    let tag = node.tag_name();
    let name = qualify(node, tag.namespace(), tag.name(), true);
    let mut element = Element::new(name);

    let in_scope: Vec<(Option<String>, String)> = node
        .namespaces()
        .filter(|ns| ns.name() != Some("xml"))
        .map(|ns| (ns.name().map(str::to_string), ns.uri().to_string()))
        .collect();
    for decl in in_scope.iter().filter(|ns| !inherited.contains(ns)) {
        let key = match &decl.0 {
            Some(prefix) => format!("xmlns:{}", prefix),
            None => "xmlns".to_string(),
        };
        element.attributes.push((key, decl.1.clone()));
    }

    for attr in node.attributes() {
        let key = qualify(node, attr.namespace(), attr.name(), false);
        element.attributes.push((key, attr.value().to_string()));
    }

    for child in node.children() {
        if child.is_element() {
            element
                .children
                .push(Node::Element(convert(child, &in_scope)));
        } else if child.is_text() {
            element
                .children
                .push(Node::Text(child.text().unwrap_or_default().to_string()));
        } else if child.is_comment() {
            element
                .children
                .push(Node::Comment(child.text().unwrap_or_default().to_string()));
        }
    }

    element
}

fn qualify(node: roxmltree::Node<'_, '_>, ns: Option<&str>, local: &str, is_element: bool) -> String {
    let prefix = ns.and_then(|uri| {
        // an element in the default namespace keeps its bare name
        if is_element && node.default_namespace() == Some(uri) {
            None
        } else {
            node.lookup_prefix(uri)
        }
    });
    match prefix {
        Some(p) if !p.is_empty() => format!("{}:{}", p, local),
        _ => local.to_string(),
    }
}

pub(crate) fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub(crate) fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// Decode the predefined XML entities
pub(crate) fn unescape_xml(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
