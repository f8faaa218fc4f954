use swatch_atelier::{Component, Options, RenderContext, RenderError, Slot};
use swatch_palette::Declaration;
use swatch_relief::Node;

use super::render_container;

component!(
    /// Progress through a sequence: `<ul class="steps">`.
    Steps => "Steps" as "ul"
);

pub(super) fn declarations() -> Vec<Declaration> {
    vec![Declaration::new(Steps::TYPE_NAME).identifier("steps").modifiers([
        ("vertical", "steps-vertical"),
        ("horizontal", "steps-horizontal"),
    ])]
}

impl Steps {
    pub fn step(options: Options) -> Slot {
        Slot::new("li", &["step"], options)
    }

    pub fn icon(options: Options) -> Slot {
        Slot::new("div", &["step-icon"], options)
    }
}

impl Component for Steps {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        render_container(cx, &self.target, Self::TYPE_NAME, &self.args, &self.children)
    }
}
