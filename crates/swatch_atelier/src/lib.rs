//! Atelier - The Swatch class workshop.
//!
//! Turns a component instance (modifier keys, options, id) into the class
//! string and attribute map of its root element, and offers the plumbing the
//! gallery components render with.
//!
//! ## Pipeline
//!
//! ```text
//! Args ──► effective modifier table ──► boolean promotion
//!      ──► class list (base · modifiers · responsive · user class)
//!      ──► attributes (leftover options + id)
//! ```
//!
//! ## Name Origin
//!
//! An **atelier** is the workshop where an artist's materials are turned into
//! finished pieces.
//!
//! # Example
//!
//! ```
//! use swatch_atelier::{Args, IdPolicy, RenderContext, Styled};
//! use swatch_palette::{Declaration, Palette, SwatchConfig};
//!
//! let palette = Palette::new();
//! palette
//!     .declare(
//!         Declaration::new("Skeleton")
//!             .identifier("skeleton")
//!             .modifiers([("neutral", "bg-neutral text-neutral-content")]),
//!     )
//!     .unwrap();
//!
//! let config = SwatchConfig::default().with_prefix("tw-");
//! let cx = RenderContext::new(&palette, &config);
//! let resolved = cx
//!     .resolve("Skeleton", Args::new().modifier("neutral"), IdPolicy::Element)
//!     .unwrap();
//!
//! assert_eq!(
//!     resolved.class.as_deref(),
//!     Some("tw-skeleton tw-bg-neutral tw-text-neutral-content")
//! );
//! ```

pub mod attributes;
pub mod classes;
pub mod context;
pub mod errors;
pub mod extract;
pub mod options;
pub mod slot;
pub mod target;

pub use attributes::{build_attributes, IdPolicy};
pub use classes::{component_classes, parse_breakpoints, ClassContext, ClassList, Prefixer};
pub use context::{RenderContext, Resolved};
pub use errors::RenderError;
pub use extract::extract_boolean_modifiers;
pub use options::{Args, Options, Responsive, Styled};
pub use slot::{render_children, Child, Slot};
pub use target::{render_as, Component, ComponentFactory, RenderTarget};
