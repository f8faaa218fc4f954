use swatch_atelier::{
    render_as, render_children, Component, IdPolicy, Options, RenderContext, RenderError, Slot,
};
use swatch_palette::{Declaration, ModifierMap};
use swatch_relief::{Element, Node};

component!(
    /// Breadcrumb trail: `<div class="breadcrumbs"><ul>…</ul></div>`.
    Breadcrumbs => "Breadcrumbs" as "div"
);

pub(super) fn declarations() -> Vec<Declaration> {
    vec![Declaration::new(Breadcrumbs::TYPE_NAME)
        .identifier("breadcrumbs")
        .modifiers(ModifierMap::new())]
}

impl Breadcrumbs {
    /// One `<li>` of the trail. Crumbs carry no class of their own.
    pub fn crumb(options: Options) -> Slot {
        Slot::new("li", &[], options)
    }

    /// Alias of [`Breadcrumbs::crumb`].
    pub fn item(options: Options) -> Slot {
        Self::crumb(options)
    }

    /// A crumb whose `href` option, when present, becomes an inner link
    /// wrapping `label`.
    pub fn add(mut options: Options, label: &str) -> Slot {
        let href = options.remove("href");
        let slot = Self::crumb(options);
        match href {
            Some(href) if !href.is_null() => slot.child(Element::new("a").attr("href", href).text(label)),
            _ => slot.child(label),
        }
    }
}

impl Component for Breadcrumbs {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        let list = Element::new("ul").children(render_children(cx, &self.children)?);
        render_as(
            cx,
            &self.target,
            Self::TYPE_NAME,
            &self.args,
            IdPolicy::Element,
            vec![list.into()],
        )
    }
}
