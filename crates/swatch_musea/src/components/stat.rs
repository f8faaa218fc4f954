use swatch_atelier::{Component, Options, RenderContext, RenderError, Slot};
use swatch_palette::Declaration;
use swatch_relief::Node;

use super::render_container;

component!(
    /// A group of statistics: `<div class="stats">` holding `stat` blocks.
    Stat => "Stat" as "div"
);

pub(super) fn declarations() -> Vec<Declaration> {
    vec![Declaration::new(Stat::TYPE_NAME)
        .identifier("stat")
        .base_class("stats")
        .modifiers([
            ("horizontal", "stats-horizontal"),
            ("vertical", "stats-vertical"),
        ])]
}

impl Stat {
    /// One statistic block.
    pub fn item(options: Options) -> Slot {
        Slot::new("div", &["stat"], options)
    }

    pub fn title(options: Options) -> Slot {
        Slot::new("div", &["stat-title"], options)
    }

    pub fn value(options: Options) -> Slot {
        Slot::new("div", &["stat-value"], options)
    }

    pub fn desc(options: Options) -> Slot {
        Slot::new("div", &["stat-desc"], options)
    }

    pub fn figure(options: Options) -> Slot {
        Slot::new("div", &["stat-figure"], options)
    }

    pub fn actions(options: Options) -> Slot {
        Slot::new("div", &["stat-actions"], options)
    }
}

impl Component for Stat {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<Node, RenderError> {
        render_container(cx, &self.target, Self::TYPE_NAME, &self.args, &self.children)
    }
}
