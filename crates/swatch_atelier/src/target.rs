//! Components and render targets.

use std::fmt;

use swatch_carton::CompactString;
use swatch_relief::{render_to_string, Node};

use crate::attributes::IdPolicy;
use crate::context::RenderContext;
use crate::errors::RenderError;
use crate::options::Args;

/// A renderable component instance.
pub trait Component {
    /// Declared type name, used to look up the descriptor.
    fn type_name(&self) -> &'static str;

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError>;

    /// Render straight to HTML.
    fn to_html(&self, cx: &RenderContext<'_>) -> Result<std::string::String, RenderError> {
        let node = self.render(cx)?;
        Ok(render_to_string(&node)?)
    }
}

/// Builds a component from the arguments and children of the instance it
/// replaces.
pub type ComponentFactory = fn(Args, Vec<Node>) -> Box<dyn Component>;

/// What a component renders as: its own tag, or another component that
/// takes over rendering entirely.
#[derive(Clone)]
pub enum RenderTarget {
    Tag(CompactString),
    Component(ComponentFactory),
}

impl RenderTarget {
    pub fn tag(name: impl Into<CompactString>) -> Self {
        Self::Tag(name.into())
    }

    pub fn component(factory: ComponentFactory) -> Self {
        Self::Component(factory)
    }
}

impl fmt::Debug for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Self::Component(_) => f.write_str("Component(..)"),
        }
    }
}

impl From<&str> for RenderTarget {
    fn from(value: &str) -> Self {
        Self::tag(value)
    }
}

/// Render `type_name` with `args` as `target`.
///
/// A tag target resolves the component's classes and attributes onto an
/// element of that tag. A component target forwards the original arguments
/// and children unchanged to the factory's component.
pub fn render_as(
    cx: &RenderContext<'_>,
    target: &RenderTarget,
    type_name: &str,
    args: &Args,
    policy: IdPolicy,
    children: Vec<Node>,
) -> Result<Node, RenderError> {
    match target {
        RenderTarget::Tag(tag) => {
            let resolved = cx.resolve(type_name, args.clone(), policy)?;
            Ok(resolved.into_element(tag).children(children).into())
        }
        RenderTarget::Component(factory) => {
            tracing::trace!(component = type_name, "delegating render");
            factory(args.clone(), children).render(cx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Styled;
    use swatch_palette::{Declaration, Palette, SwatchConfig};
    use swatch_relief::Element;

    struct Badge {
        args: Args,
        children: Vec<Node>,
    }

    impl Component for Badge {
        fn type_name(&self) -> &'static str {
            "Badge"
        }

        fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
            render_as(
                cx,
                &RenderTarget::tag("span"),
                self.type_name(),
                &self.args,
                IdPolicy::Element,
                self.children.clone(),
            )
        }
    }

    fn badge(args: Args, children: Vec<Node>) -> Box<dyn Component> {
        Box::new(Badge { args, children })
    }

    fn palette() -> Palette {
        let palette = Palette::new();
        palette
            .declare(
                Declaration::new("Badge")
                    .identifier("badge")
                    .modifiers([("primary", "badge-primary")]),
            )
            .unwrap();
        palette
            .declare(
                Declaration::new("Link")
                    .identifier("link")
                    .modifiers([("hover", "link-hover")]),
            )
            .unwrap();
        palette
    }

    #[test]
    fn test_tag_target() {
        let palette = palette();
        let config = SwatchConfig::default();
        let cx = RenderContext::new(&palette, &config);

        let args = Args::new().modifier("primary").attr("title", "new");
        let node = render_as(
            &cx,
            &"a".into(),
            "Link",
            &args,
            IdPolicy::Element,
            vec![Node::text("Docs")],
        )
        .unwrap();

        let html = render_to_string(&node).unwrap();
        assert_eq!(html, r#"<a class="link" title="new">Docs</a>"#);
    }

    #[test]
    fn test_component_target_forwards_args_and_children() {
        let palette = palette();
        let config = SwatchConfig::default();
        let cx = RenderContext::new(&palette, &config);

        let args = Args::new().modifier("primary").class("ml-1");
        let node = render_as(
            &cx,
            &RenderTarget::component(badge),
            "Link",
            &args,
            IdPolicy::Element,
            vec![Element::new("i").into()],
        )
        .unwrap();

        let html = render_to_string(&node).unwrap();
        assert_eq!(html, r#"<span class="badge badge-primary ml-1"><i></i></span>"#);
    }

    #[test]
    fn test_to_html() {
        let palette = palette();
        let config = SwatchConfig::default();
        let cx = RenderContext::new(&palette, &config);

        let html = badge(Args::new(), vec![Node::text("3")]).to_html(&cx).unwrap();
        assert_eq!(html, r#"<span class="badge">3</span>"#);
    }
}
