//! Relief - The sculptured element surface for Swatch.
//!
//! This crate is the boundary with the markup collaborator: components hand
//! over a tag name, a resolved class string and an attribute map, and relief
//! turns the resulting [`Node`] tree into HTML.
//!
//! ## Name Origin
//!
//! A **relief** is a sculpture raised from a flat surface. Elements here are
//! the raised shape of a component before it is flattened into markup.
//!
//! # Example
//!
//! ```
//! use swatch_relief::{render_to_string, Element, Node};
//!
//! let node: Node = Element::new("div")
//!     .class(Some("breadcrumbs".into()))
//!     .attr("role", "navigation")
//!     .child(Element::new("ul"))
//!     .into();
//!
//! let html = render_to_string(&node).unwrap();
//! assert_eq!(html, r#"<div class="breadcrumbs" role="navigation"><ul></ul></div>"#);
//! ```

pub mod errors;
pub mod node;
pub mod render;

pub use errors::*;
pub use node::*;
pub use render::*;
