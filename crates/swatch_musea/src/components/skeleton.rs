use swatch_atelier::{Component, RenderContext, RenderError};
use swatch_palette::{Declaration, ModifierMap};
use swatch_relief::Node;

use super::render_container;

component!(
    /// Loading placeholder. Draws only on the universal modifiers and
    /// configured overrides.
    Skeleton => "Skeleton" as "div"
);

pub(super) fn declarations() -> Vec<Declaration> {
    vec![Declaration::new(Skeleton::TYPE_NAME)
        .identifier("skeleton")
        .modifiers(ModifierMap::new())]
}

impl Component for Skeleton {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        render_container(cx, &self.target, Self::TYPE_NAME, &self.args, &self.children)
    }
}
