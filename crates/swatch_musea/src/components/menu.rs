use swatch_atelier::{
    render_as, render_children, Child, Component, IdPolicy, Options, RenderContext, RenderError,
    Slot,
};
use swatch_palette::Declaration;
use swatch_relief::{AttrValue, Element, Node};

use super::render_container;
use crate::catalog::COLOR_MODIFIERS;

component!(
    /// `<ul class="menu">`.
    Menu => "Menu" as "ul"
);

component!(
    /// A menu entry, `<li>`. Carries no base class; its modifiers mark state.
    MenuItem => "MenuItem" as "li"
);

component!(
    /// A nested, always-expanded `<ul>` inside a [`MenuItem`].
    SubMenu => "SubMenu" as "ul"
);

component!(
    /// A nested list that folds under a `<details>`/`<summary>` pair.
    ///
    /// Exactly one title is required. The `open` modifier or a `true` `open`
    /// option expands it initially.
    CollapsibleSubMenu => "CollapsibleSubMenu" as "ul" {
        titles: Vec<Vec<Child>>,
    }
);

pub(super) fn declarations() -> Vec<Declaration> {
    vec![
        Declaration::new(Menu::TYPE_NAME).identifier("menu").modifiers([
            ("xs", "menu-xs"),
            ("sm", "menu-sm"),
            ("md", "menu-md"),
            ("lg", "menu-lg"),
            ("xl", "menu-xl"),
            ("horizontal", "menu-horizontal"),
            ("vertical", "menu-vertical"),
        ]),
        Declaration::new(MenuItem::TYPE_NAME).private().modifiers([
            ("disabled", "disabled"),
            ("active", "active"),
            ("focus", "focus"),
        ]),
        Declaration::new(SubMenu::TYPE_NAME).private(),
        Declaration::new(CollapsibleSubMenu::TYPE_NAME)
            .private()
            .modifiers(COLOR_MODIFIERS),
    ]
}

impl Menu {
    /// `<li class="menu-title">` heading a group of items.
    pub fn title(options: Options) -> Slot {
        Slot::new("li", &["menu-title"], options)
    }
}

impl MenuItem {
    /// `<h2 class="menu-title">` inside an item.
    pub fn title(options: Options) -> Slot {
        Slot::new("h2", &["menu-title"], options)
    }
}

impl SubMenu {
    pub fn item(self, item: MenuItem) -> Self {
        self.child(item)
    }
}

impl CollapsibleSubMenu {
    pub fn title<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.titles.push(children.into_iter().map(Into::into).collect());
        self
    }

    pub fn item(self, item: MenuItem) -> Self {
        self.child(item)
    }
}

impl Component for Menu {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        render_container(cx, &self.target, Self::TYPE_NAME, &self.args, &self.children)
    }
}

impl Component for MenuItem {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        render_container(cx, &self.target, Self::TYPE_NAME, &self.args, &self.children)
    }
}

impl Component for SubMenu {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        render_container(cx, &self.target, Self::TYPE_NAME, &self.args, &self.children)
    }
}

impl Component for CollapsibleSubMenu {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        let title = match self.titles.as_slice() {
            [] => return Err(RenderError::missing_declaration(Self::TYPE_NAME, "title")),
            [title] => title,
            _ => return Err(RenderError::duplicate_declaration(Self::TYPE_NAME, "title")),
        };

        let mut args = self.args.clone();
        let open_option = args.options.remove("open");
        let open = args.has_modifier("open") || matches!(open_option, Some(AttrValue::Bool(true)));

        let mut details = Element::new("details")
            .attr("open", open)
            .child(Element::new("summary").children(render_children(cx, title)?));

        if !self.children.is_empty() {
            details = details.child(render_as(
                cx,
                &self.target,
                Self::TYPE_NAME,
                &args,
                IdPolicy::Element,
                render_children(cx, &self.children)?,
            )?);
        }

        Ok(details.into())
    }
}
