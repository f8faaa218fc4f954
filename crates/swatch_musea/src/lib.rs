//! # swatch_musea
//!
//! Musea - The built-in Swatch component gallery.
//!
//! ## Name Origin
//!
//! **Musea** (plural of museum) is where finished pieces are put on display.
//! This crate holds the components built on the Swatch palette: buttons,
//! breadcrumbs, tabs, drawers, modals, menus and friends.
//!
//! ## Usage
//!
//! ```rust
//! use swatch_atelier::Styled;
//! use swatch_musea::{render_html_with, Button};
//! use swatch_palette::SwatchConfig;
//!
//! let button = Button::new().modifier("primary").flag("lg", true).child("Save");
//! let html = render_html_with(&button, &SwatchConfig::default()).unwrap();
//! assert_eq!(html, r#"<button class="btn btn-primary btn-lg">Save</button>"#);
//! ```
//!
//! Composite components expose their sub-elements as associated functions
//! returning slots, or as methods when the sub-element needs the component's
//! id:
//!
//! ```rust
//! use swatch_atelier::{Options, Styled};
//! use swatch_musea::{render_html_with, Drawer};
//! use swatch_palette::SwatchConfig;
//!
//! let drawer = Drawer::new().id("nav");
//! let toggle = drawer.toggle(Options::new()).unwrap();
//! let drawer = drawer
//!     .child(toggle)
//!     .child(Drawer::content(Options::new()).child("Page"));
//!
//! let html = render_html_with(&drawer, &SwatchConfig::default()).unwrap();
//! assert_eq!(
//!     html,
//!     r#"<div class="drawer"><input class="drawer-toggle" id="nav" type="checkbox"><div class="drawer-content">Page</div></div>"#
//! );
//! ```

#[macro_use]
mod macros;

pub mod catalog;
mod components;

pub use catalog::{declare_components, palette, render_html, render_html_with, COLOR_MODIFIERS};
pub use components::{
    Breadcrumbs, Button, Chat, CollapsibleSubMenu, Drawer, Hero, LinkButton, Menu, MenuItem,
    Modal, Skeleton, Stat, Steps, SubMenu, Swap, Tab, Tabs, Validator,
};
