use swatch_atelier::{
    render_as, render_children, Args, Child, Component, IdPolicy, Options, RenderContext,
    RenderError, Slot,
};
use swatch_carton::CompactString;
use swatch_palette::Declaration;
use swatch_relief::{AttrValue, Node};

component!(
    /// `<div role="tablist" class="tabs">`.
    ///
    /// The id is the radio group name shared by tabs with content; it never
    /// lands on the container.
    Tabs => "Tabs" as "div"
);

component!(
    /// One tab of a [`Tabs`] list. Without content it renders as a plain
    /// `role="tab"` element; with content it renders a radio input followed
    /// by its panel.
    Tab => "Tab" as "div" {
        label: Option<CompactString>,
        name: Option<CompactString>,
        content: Option<Slot>,
    }
);

pub(super) fn declarations() -> Vec<Declaration> {
    vec![
        Declaration::new(Tabs::TYPE_NAME).identifier("tabs").modifiers([
            ("box", "tabs-box"),
            ("border", "tabs-border"),
            ("lift", "tabs-lift"),
            ("boxed", "tabs-boxed"),
            ("bordered", "tabs-bordered"),
            ("lifted", "tabs-lifted"),
            ("top", "tabs-top"),
            ("bottom", "tabs-bottom"),
            ("xs", "tabs-xs"),
            ("sm", "tabs-sm"),
            ("md", "tabs-md"),
            ("lg", "tabs-lg"),
            ("xl", "tabs-xl"),
        ]),
        Declaration::new(Tab::TYPE_NAME)
            .private()
            .base_class("tab")
            .modifiers([("active", "tab-active"), ("disabled", "tab-disabled")]),
    ]
}

impl Tabs {
    /// Add `tab` to the list, wiring it to this list's radio group. A tab
    /// with content needs the list to have an id.
    pub fn tab(&self, mut tab: Tab) -> Result<Child, RenderError> {
        let name = self.args.resolved_id();
        if tab.content.is_some() && name.is_none() {
            return Err(RenderError::missing_identity(Self::TYPE_NAME, "tab content"));
        }
        tab.name = name;
        Ok(tab.into())
    }
}

impl Component for Tabs {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        let args = with_default_attr(&self.args, "role", "tablist");
        render_as(
            cx,
            &self.target,
            Self::TYPE_NAME,
            &args,
            IdPolicy::Internal,
            render_children(cx, &self.children)?,
        )
    }
}

impl Tab {
    pub fn label(mut self, label: impl Into<CompactString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The `<div role="tabpanel" class="tab-content">` shown while this tab
    /// is checked.
    pub fn content<I, C>(mut self, options: Options, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.content = Some(
            Slot::new("div", &["tab-content"], options)
                .attr("role", "tabpanel")
                .children(children),
        );
        self
    }

    fn render_radio(&self, cx: &RenderContext<'_>, panel: &Slot) -> Result<Node, RenderError> {
        let name = self
            .name
            .clone()
            .ok_or_else(|| RenderError::missing_identity(Self::TYPE_NAME, "tab content"))?;

        let mut args = self.args.clone();
        args.options.insert("type", "radio");
        args.options.insert("name", name);
        args.options.insert("role", "tab");
        if let Some(label) = &self.label {
            args.options.insert("aria-label", label.clone());
        }

        let resolved = cx.resolve(Self::TYPE_NAME, args, IdPolicy::Element)?;
        let checked = resolved.has_modifier("active");
        let input = resolved.into_element("input").attr("checked", checked);

        Ok(Node::fragment([input.into(), panel.render(cx)?.into()]))
    }
}

impl Component for Tab {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        if let Some(panel) = &self.content {
            return self.render_radio(cx, panel);
        }

        let mut children = Vec::with_capacity(self.children.len() + 1);
        if let Some(label) = &self.label {
            children.push(Node::text(label.clone()));
        }
        children.extend(render_children(cx, &self.children)?);

        let args = with_default_attr(&self.args, "role", "tab");
        render_as(cx, &self.target, Self::TYPE_NAME, &args, IdPolicy::Element, children)
    }
}

/// Copy of `args` with `name` set unless the caller already gave it.
fn with_default_attr(args: &Args, name: &str, value: &str) -> Args {
    let mut args = args.clone();
    if !args.options.contains_key(name) {
        args.options.insert(name, AttrValue::from(value));
    }
    args
}
