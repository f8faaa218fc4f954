use swatch_atelier::{Component, Options, RenderContext, RenderError, Slot};
use swatch_palette::{Declaration, ModifierMap};
use swatch_relief::Node;

use super::render_container;

component!(
    /// Large banner section.
    Hero => "Hero" as "div"
);

pub(super) fn declarations() -> Vec<Declaration> {
    vec![Declaration::new(Hero::TYPE_NAME)
        .identifier("hero")
        .modifiers(ModifierMap::new())]
}

impl Hero {
    pub fn content(options: Options) -> Slot {
        Slot::new("div", &["hero-content"], options)
    }

    pub fn overlay(options: Options) -> Slot {
        Slot::new("div", &["hero-overlay"], options)
    }
}

impl Component for Hero {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        render_container(cx, &self.target, Self::TYPE_NAME, &self.args, &self.children)
    }
}
