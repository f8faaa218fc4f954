use swatch_atelier::{
    render_as, render_children, Child, Component, IdPolicy, Options, RenderContext, RenderError,
    Slot,
};
use swatch_palette::{Declaration, ModifierMap};
use swatch_relief::Node;

component!(
    /// A validated `<input class="validator">`, optionally followed by a
    /// hint paragraph.
    Validator => "Validator" as "input" {
        hint: Option<Slot>,
    }
);

pub(super) fn declarations() -> Vec<Declaration> {
    vec![Declaration::new(Validator::TYPE_NAME)
        .identifier("validator")
        .modifiers(ModifierMap::new())]
}

impl Validator {
    /// `<p class="validator-hint">` rendered after the input. A later hint
    /// replaces an earlier one.
    pub fn hint<I, C>(mut self, options: Options, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.hint = Some(Slot::new("p", &["validator-hint"], options).children(children));
        self
    }
}

impl Component for Validator {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        let input = render_as(
            cx,
            &self.target,
            Self::TYPE_NAME,
            &self.args,
            IdPolicy::Element,
            render_children(cx, &self.children)?,
        )?;

        match &self.hint {
            Some(hint) => Ok(Node::fragment([input, hint.render(cx)?.into()])),
            None => Ok(input),
        }
    }
}
