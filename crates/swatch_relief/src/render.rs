//! Markup writer.
//!
//! Turns a [`Node`] tree into an HTML string. Text and attribute values are
//! escaped with `htmlize`; attribute names are checked before being written.

use crate::errors::MarkupError;
use crate::node::{AttrValue, Element, Node};
use swatch_carton::{is_valid_tag_name, is_void_tag, String as CompactString};

/// Write a node tree as HTML.
pub fn render_to_string(node: &Node) -> Result<String, MarkupError> {
    let mut writer = MarkupWriter::default();
    writer.write_node(node)?;
    Ok(writer.finish())
}

/// Write several sibling nodes as HTML.
pub fn render_all(nodes: &[Node]) -> Result<String, MarkupError> {
    let mut writer = MarkupWriter::default();
    for node in nodes {
        writer.write_node(node)?;
    }
    Ok(writer.finish())
}

/// Check if an attribute name can be written without breaking out of the tag
pub fn is_safe_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

#[derive(Default)]
struct MarkupWriter {
    out: String,
}

impl MarkupWriter {
    fn finish(self) -> String {
        self.out
    }

    fn write_node(&mut self, node: &Node) -> Result<(), MarkupError> {
        match node {
            Node::Element(el) => self.write_element(el),
            Node::Text(text) => {
                self.out.push_str(&htmlize::escape_text(text.as_str()));
                Ok(())
            }
            Node::Fragment(nodes) => {
                for child in nodes {
                    self.write_node(child)?;
                }
                Ok(())
            }
        }
    }

    fn write_element(&mut self, el: &Element) -> Result<(), MarkupError> {
        if !is_valid_tag_name(&el.tag) {
            return Err(MarkupError::InvalidTagName(el.tag.clone()));
        }

        self.out.push('<');
        self.out.push_str(&el.tag);
        for (name, value) in &el.attributes {
            self.write_attr(name, value)?;
        }
        self.out.push('>');

        // Void elements have no content and no closing tag
        if is_void_tag(&el.tag) {
            return Ok(());
        }

        for child in &el.children {
            self.write_node(child)?;
        }

        self.out.push_str("</");
        self.out.push_str(&el.tag);
        self.out.push('>');
        Ok(())
    }

    fn write_attr(&mut self, name: &str, value: &AttrValue) -> Result<(), MarkupError> {
        if !is_safe_attr_name(name) {
            return Err(MarkupError::UnsafeAttributeName(CompactString::from(name)));
        }

        match value {
            AttrValue::Null | AttrValue::Bool(false) => {}
            AttrValue::Bool(true) => {
                self.out.push(' ');
                self.out.push_str(name);
            }
            AttrValue::Str(_) | AttrValue::Int(_) | AttrValue::Float(_) => {
                if let Some(text) = value.to_text() {
                    self.write_attr_pair(name, &text);
                }
            }
            AttrValue::List(items) => {
                let joined = items
                    .iter()
                    .filter_map(AttrValue::to_text)
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                if !joined.is_empty() {
                    self.write_attr_pair(name, &joined);
                }
            }
            AttrValue::Map(map) => {
                for (key, nested) in map {
                    let nested_name = format!("{}-{}", name, key.replace('_', "-"));
                    self.write_attr(&nested_name, nested)?;
                }
            }
        }

        Ok(())
    }

    fn write_attr_pair(&mut self, name: &str, value: &str) {
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        self.out.push_str(&htmlize::escape_attribute(value));
        self.out.push('"');
    }
}
