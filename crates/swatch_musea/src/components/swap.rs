use swatch_atelier::{Component, Options, RenderContext, RenderError, Slot};
use swatch_palette::Declaration;
use swatch_relief::Node;

use super::render_container;

component!(
    /// Toggles between two visuals: `<label class="swap">`.
    Swap => "Swap" as "label"
);

pub(super) fn declarations() -> Vec<Declaration> {
    vec![Declaration::new(Swap::TYPE_NAME).identifier("swap").modifiers([
        ("active", "swap-active"),
        ("rotate", "swap-rotate"),
        ("flip", "swap-flip"),
    ])]
}

impl Swap {
    pub fn on(options: Options) -> Slot {
        Slot::new("div", &["swap-on"], options)
    }

    pub fn off(options: Options) -> Slot {
        Slot::new("div", &["swap-off"], options)
    }

    pub fn indeterminate(options: Options) -> Slot {
        Slot::new("div", &["swap-indeterminate"], options)
    }
}

impl Component for Swap {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        render_container(cx, &self.target, Self::TYPE_NAME, &self.args, &self.children)
    }
}
