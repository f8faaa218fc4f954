use swatch_atelier::{Component, RenderContext, RenderError};
use swatch_palette::Declaration;
use swatch_relief::Node;

use super::render_container;

component!(
    /// `<button class="btn">`.
    Button => "Button" as "button"
);

component!(
    /// A link styled as a button. Shares the button vocabulary under its
    /// own `link-button` family.
    LinkButton => "LinkButton" as "a"
);

pub(super) fn declarations() -> Vec<Declaration> {
    vec![
        Declaration::new(Button::TYPE_NAME)
            .identifier("button")
            .base_class("btn")
            .modifiers([
                ("neutral", "btn-neutral"),
                ("primary", "btn-primary"),
                ("secondary", "btn-secondary"),
                ("accent", "btn-accent"),
                ("info", "btn-info"),
                ("success", "btn-success"),
                ("warning", "btn-warning"),
                ("error", "btn-error"),
                ("outline", "btn-outline"),
                ("dash", "btn-dash"),
                ("soft", "btn-soft"),
                ("ghost", "btn-ghost"),
                ("link", "btn-link"),
                ("active", "btn-active"),
                ("disabled", "btn-disabled"),
                ("xs", "btn-xs"),
                ("sm", "btn-sm"),
                ("md", "btn-md"),
                ("lg", "btn-lg"),
                ("xl", "btn-xl"),
                ("wide", "btn-wide"),
                ("block", "btn-block"),
                ("square", "btn-square"),
                ("circle", "btn-circle"),
            ]),
        Declaration::new(LinkButton::TYPE_NAME)
            .identifier("link-button")
            .parent(Button::TYPE_NAME),
    ]
}

impl Component for Button {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        render_container(cx, &self.target, Self::TYPE_NAME, &self.args, &self.children)
    }
}

impl Component for LinkButton {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        render_container(cx, &self.target, Self::TYPE_NAME, &self.args, &self.children)
    }
}
