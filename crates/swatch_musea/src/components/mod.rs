//! Gallery components.
//!
//! Each module owns its component's declarations. Fixed-class sub-elements
//! are associated functions returning a [`Slot`](swatch_atelier::Slot);
//! sub-elements that need the component's id are methods returning
//! `Result<Child, RenderError>`.

mod breadcrumbs;
mod button;
mod chat;
mod drawer;
mod hero;
mod menu;
mod modal;
mod skeleton;
mod stat;
mod steps;
mod swap;
mod tabs;
mod validator;

pub use breadcrumbs::Breadcrumbs;
pub use button::{Button, LinkButton};
pub use chat::Chat;
pub use drawer::Drawer;
pub use hero::Hero;
pub use menu::{CollapsibleSubMenu, Menu, MenuItem, SubMenu};
pub use modal::Modal;
pub use skeleton::Skeleton;
pub use stat::Stat;
pub use steps::Steps;
pub use swap::Swap;
pub use tabs::{Tab, Tabs};
pub use validator::Validator;

use swatch_atelier::{
    render_as, render_children, Args, Child, IdPolicy, RenderContext, RenderError, RenderTarget,
};
use swatch_palette::Declaration;
use swatch_relief::Node;

/// Every gallery declaration, parents before the types that inherit from them.
pub(crate) fn declarations() -> Vec<Declaration> {
    let mut decls = Vec::new();
    decls.extend(button::declarations());
    decls.extend(breadcrumbs::declarations());
    decls.extend(skeleton::declarations());
    decls.extend(tabs::declarations());
    decls.extend(drawer::declarations());
    decls.extend(modal::declarations());
    decls.extend(menu::declarations());
    decls.extend(stat::declarations());
    decls.extend(swap::declarations());
    decls.extend(steps::declarations());
    decls.extend(chat::declarations());
    decls.extend(hero::declarations());
    decls.extend(validator::declarations());
    decls
}

/// Render `children` inside the component's root element.
pub(crate) fn render_container(
    cx: &RenderContext<'_>,
    target: &RenderTarget,
    type_name: &str,
    args: &Args,
    children: &[Child],
) -> Result<Node, RenderError> {
    let children = render_children(cx, children)?;
    render_as(cx, target, type_name, args, IdPolicy::Element, children)
}
