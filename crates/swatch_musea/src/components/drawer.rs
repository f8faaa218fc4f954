use swatch_atelier::{
    render_as, render_children, Child, Component, IdPolicy, Options, RenderContext, RenderError,
    Slot, Styled,
};
use swatch_carton::CompactString;
use swatch_palette::Declaration;
use swatch_relief::Node;

use super::Button;

component!(
    /// Off-canvas sidebar. The id names the hidden checkbox that toggles the
    /// drawer, so it is never written on the root element.
    Drawer => "Drawer" as "div"
);

pub(super) fn declarations() -> Vec<Declaration> {
    vec![Declaration::new(Drawer::TYPE_NAME)
        .identifier("drawer")
        .modifiers([("end", "drawer-end"), ("open", "drawer-open")])]
}

impl Drawer {
    fn require_id(&self, operation: &'static str) -> Result<CompactString, RenderError> {
        self.args
            .resolved_id()
            .ok_or_else(|| RenderError::missing_identity(Self::TYPE_NAME, operation))
    }

    /// The hidden `<input type="checkbox" class="drawer-toggle">`.
    pub fn toggle(&self, options: Options) -> Result<Child, RenderError> {
        let id = self.require_id("toggle")?;
        Ok(Slot::new("input", &["drawer-toggle"], options)
            .attr("id", id)
            .attr("type", "checkbox")
            .into())
    }

    /// `<label class="drawer-overlay">` closing the drawer when clicked.
    pub fn overlay(&self, options: Options) -> Result<Child, RenderError> {
        let id = self.require_id("overlay")?;
        Ok(Slot::new("label", &["drawer-overlay"], options)
            .attr("for", id)
            .into())
    }

    /// `button` rendered as a `<label>` that toggles the drawer.
    pub fn button(&self, button: Button) -> Result<Child, RenderError> {
        let id = self.require_id("button")?;
        Ok(button.render_as("label").attr("for", id).into())
    }

    pub fn content(options: Options) -> Slot {
        Slot::new("div", &["drawer-content"], options)
    }

    pub fn side(options: Options) -> Slot {
        Slot::new("div", &["drawer-side"], options)
    }
}

impl Component for Drawer {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        render_as(
            cx,
            &self.target,
            Self::TYPE_NAME,
            &self.args,
            IdPolicy::Internal,
            render_children(cx, &self.children)?,
        )
    }
}
