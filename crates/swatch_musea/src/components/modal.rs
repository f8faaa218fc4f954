use swatch_atelier::{
    render_as, render_children, Child, Component, IdPolicy, Options, RenderContext, RenderError,
    Slot, Styled,
};
use swatch_palette::Declaration;
use swatch_relief::{Element, Node};

use super::Button;

component!(
    /// `<dialog class="modal">`. The dialog is addressed by id, so one is
    /// required.
    Modal => "Modal" as "dialog"
);

pub(super) fn declarations() -> Vec<Declaration> {
    vec![Declaration::new(Modal::TYPE_NAME).identifier("modal").modifiers([
        ("open", "modal-open"),
        ("top", "modal-top"),
        ("middle", "modal-middle"),
        ("bottom", "modal-bottom"),
        ("start", "modal-start"),
        ("end", "modal-end"),
    ])]
}

impl Modal {
    /// The dialog panel.
    pub fn body(options: Options) -> Slot {
        Slot::new("div", &["modal-box"], options)
    }

    /// Action row at the bottom of the panel.
    pub fn actions(options: Options) -> Slot {
        Slot::new("div", &["modal-action"], options)
    }

    /// Click-outside-to-close layer.
    pub fn backdrop(options: Options) -> Slot {
        Slot::new("form", &["modal-backdrop"], options)
            .attr("method", "dialog")
            .child(Element::new("button").text("close"))
    }

    /// `button` inside a `method="dialog"` form, closing the modal.
    pub fn close_button(button: Button) -> Slot {
        Slot::new("form", &[], Options::new())
            .attr("method", "dialog")
            .child(button)
    }

    /// `button` that opens this modal.
    pub fn trigger(&self, button: Button) -> Result<Child, RenderError> {
        let id = self
            .args
            .resolved_id()
            .ok_or_else(|| RenderError::missing_identity(Self::TYPE_NAME, "trigger"))?;
        Ok(button
            .attr("onclick", format!("{id}.showModal()"))
            .into())
    }
}

impl Component for Modal {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        if self.args.resolved_id().is_none() {
            return Err(RenderError::missing_identity(Self::TYPE_NAME, "dialog"));
        }
        render_as(
            cx,
            &self.target,
            Self::TYPE_NAME,
            &self.args,
            IdPolicy::Element,
            render_children(cx, &self.children)?,
        )
    }
}
