//! Element tree types.
//!
//! Attribute values are deliberately untyped: anything a caller passes as an
//! option that is not consumed by class resolution ends up here verbatim.

use serde::{Deserialize, Serialize};
use swatch_carton::{IndexMap, String};

/// Ordered attribute map. Insertion order is the order attributes are written.
pub type Attributes = IndexMap<String, AttrValue>;

/// An untyped option/attribute value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Absent value; dropped from attribute maps
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Space-joined when written (`class`-like tokens)
    List(Vec<AttrValue>),
    /// Nested map, written as `key-subkey` attributes (`data`, `aria`)
    Map(IndexMap<String, AttrValue>),
}

impl AttrValue {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Scalar text form, `None` for null, booleans and containers.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Int(i) => Some(swatch_carton::CompactString::from(i.to_string())),
            Self::Float(f) => Some(swatch_carton::CompactString::from(f.to_string())),
            Self::Null | Self::Bool(_) | Self::List(_) | Self::Map(_) => None,
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(String::from(value))
    }
}

impl From<std::string::String> for AttrValue {
    fn from(value: std::string::String) -> Self {
        Self::Str(String::from(value))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for AttrValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// An HTML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::default(),
            children: Vec::new(),
        }
    }

    /// Set the `class` attribute; `None` leaves the element without one.
    pub fn class(mut self, class: Option<String>) -> Self {
        if let Some(class) = class {
            self.attributes.insert(String::from("class"), AttrValue::Str(class));
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Append every attribute of `attrs`, keeping their order.
    pub fn attrs(mut self, attrs: Attributes) -> Self {
        self.attributes.extend(attrs);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }
}

/// A node in the element tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Escaped text content
    Text(String),
    /// Children written in sequence without a wrapper
    Fragment(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn fragment(nodes: impl IntoIterator<Item = Node>) -> Self {
        Self::Fragment(nodes.into_iter().collect())
    }

    /// The element, when this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_value_conversions() {
        assert_eq!(AttrValue::from("x"), AttrValue::Str("x".into()));
        assert_eq!(AttrValue::from(true), AttrValue::Bool(true));
        assert_eq!(AttrValue::from(3), AttrValue::Int(3));
        assert_eq!(AttrValue::from(None::<&str>), AttrValue::Null);
        assert_eq!(
            AttrValue::from(vec!["a", "b"]),
            AttrValue::List(vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_attr_value_map_from_pairs() {
        let value: AttrValue = [("my", "crumb")].into_iter().collect();
        let AttrValue::Map(map) = value else {
            panic!("expected map");
        };
        assert_eq!(map.get("my"), Some(&AttrValue::Str("crumb".into())));
    }

    #[test]
    fn test_to_text() {
        assert_eq!(AttrValue::Int(7).to_text().as_deref(), Some("7"));
        assert_eq!(AttrValue::Float(1.5).to_text().as_deref(), Some("1.5"));
        assert_eq!(AttrValue::Bool(true).to_text(), None);
        assert_eq!(AttrValue::Null.to_text(), None);
    }

    #[test]
    fn test_element_class_comes_first() {
        let el = Element::new("div")
            .class(Some("btn".into()))
            .attr("id", "x");
        let keys: Vec<&str> = el.attributes.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["class", "id"]);
    }

    #[test]
    fn test_element_without_class() {
        let el = Element::new("div").class(None);
        assert!(el.attributes.is_empty());
    }

    #[test]
    fn test_deserialize_untagged() {
        let value: AttrValue =
            serde_json::from_str(r#"{"my": "crumb", "n": 2, "on": true, "x": null}"#).unwrap();
        let AttrValue::Map(map) = value else {
            panic!("expected map");
        };
        assert_eq!(map["my"], AttrValue::Str("crumb".into()));
        assert_eq!(map["n"], AttrValue::Int(2));
        assert_eq!(map["on"], AttrValue::Bool(true));
        assert_eq!(map["x"], AttrValue::Null);
    }
}
