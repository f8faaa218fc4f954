//! Children and fixed-class sub-elements.

use std::fmt;

use swatch_carton::String;
use swatch_relief::{AttrValue, Attributes, Element, Node};

use crate::context::RenderContext;
use crate::errors::RenderError;
use crate::options::Options;
use crate::target::Component;

/// Something a component renders inside itself.
pub enum Child {
    Node(Node),
    Component(Box<dyn Component>),
    Slot(Slot),
}

impl Child {
    pub fn component(component: impl Component + 'static) -> Self {
        Self::Component(Box::new(component))
    }

    pub fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        match self {
            Self::Node(node) => Ok(node.clone()),
            Self::Component(component) => component.render(cx),
            Self::Slot(slot) => slot.render(cx).map(Node::from),
        }
    }
}

impl fmt::Debug for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Self::Component(component) => f
                .debug_tuple("Component")
                .field(&component.type_name())
                .finish(),
            Self::Slot(slot) => f.debug_tuple("Slot").field(slot).finish(),
        }
    }
}

impl From<Node> for Child {
    fn from(value: Node) -> Self {
        Self::Node(value)
    }
}

impl From<Element> for Child {
    fn from(value: Element) -> Self {
        Self::Node(Node::Element(value))
    }
}

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Self::Node(Node::text(value))
    }
}

impl From<std::string::String> for Child {
    fn from(value: std::string::String) -> Self {
        Self::Node(Node::text(value))
    }
}

impl From<Box<dyn Component>> for Child {
    fn from(value: Box<dyn Component>) -> Self {
        Self::Component(value)
    }
}

impl From<Slot> for Child {
    fn from(value: Slot) -> Self {
        Self::Slot(value)
    }
}

/// Render every child in order.
pub fn render_children(cx: &RenderContext<'_>, children: &[Child]) -> Result<Vec<Node>, RenderError> {
    children.iter().map(|child| child.render(cx)).collect()
}

/// A sub-element with fixed classes (`modal-box`, `stat-title`).
///
/// Its class is the prefixed fixed classes plus the caller's `class` option;
/// modifiers never apply. Fixed attributes come before the caller's, and a
/// caller attribute with the same name replaces the fixed value in place.
#[derive(Debug)]
pub struct Slot {
    tag: String,
    fixed: &'static [&'static str],
    attributes: Attributes,
    options: Options,
    children: Vec<Child>,
}

impl Slot {
    pub fn new(tag: impl Into<String>, fixed: &'static [&'static str], options: Options) -> Self {
        Self {
            tag: tag.into(),
            fixed,
            attributes: Attributes::default(),
            options,
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn render(&self, cx: &RenderContext<'_>) -> Result<Element, RenderError> {
        let (class, attributes) = cx.sub_element(self.fixed, self.options.clone());
        Ok(Element::new(self.tag.clone())
            .class(class)
            .attrs(self.attributes.clone())
            .attrs(attributes)
            .children(render_children(cx, &self.children)?))
    }
}
