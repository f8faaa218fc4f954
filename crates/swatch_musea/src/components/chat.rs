use swatch_atelier::{Component, Options, RenderContext, RenderError, Slot};
use swatch_palette::Declaration;
use swatch_relief::Node;

use super::render_container;

component!(
    /// One line of a conversation.
    Chat => "Chat" as "div"
);

pub(super) fn declarations() -> Vec<Declaration> {
    vec![Declaration::new(Chat::TYPE_NAME)
        .identifier("chat")
        .modifiers([("start", "chat-start"), ("end", "chat-end")])]
}

impl Chat {
    pub fn image(options: Options) -> Slot {
        Slot::new("div", &["chat-image"], options)
    }

    pub fn header(options: Options) -> Slot {
        Slot::new("div", &["chat-header"], options)
    }

    pub fn bubble(options: Options) -> Slot {
        Slot::new("div", &["chat-bubble"], options)
    }

    pub fn footer(options: Options) -> Slot {
        Slot::new("div", &["chat-footer"], options)
    }
}

impl Component for Chat {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        render_container(cx, &self.target, Self::TYPE_NAME, &self.args, &self.children)
    }
}
