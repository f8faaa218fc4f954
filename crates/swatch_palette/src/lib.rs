//! Palette - Modifier vocabularies for Swatch.
//!
//! Every component type draws its classes from a palette: a base class plus
//! a vocabulary of named modifiers (`primary` → `btn-primary`). This crate
//! holds that vocabulary and the rules for sharing it.
//!
//! - [`ModifierRegistry`]: process-wide `identifier → {base class, modifiers}` store
//! - [`ComponentDescriptor`]: per-type declaration, built once and composed
//!   explicitly with its parent
//! - [`Palette`]: registry plus the keyed descriptor table
//! - [`SwatchConfig`]: class prefix and global modifier overrides
//! - [`resolve_modifiers`]: the effective modifier table used at render time
//!
//! ## Name Origin
//!
//! A **palette** is the board where a painter lays out and mixes the colors
//! available for a piece.
//!
//! # Example
//!
//! ```
//! use swatch_palette::{Declaration, Palette, SwatchConfig};
//!
//! let palette = Palette::new();
//! let button = palette
//!     .declare(
//!         Declaration::new("Button")
//!             .identifier("button")
//!             .base_class("btn")
//!             .modifiers([("primary", "btn-primary"), ("lg", "btn-lg")]),
//!     )
//!     .unwrap();
//!
//! let table = palette.resolve(&button, &SwatchConfig::default());
//! assert_eq!(table.get("primary"), Some("btn-primary"));
//! assert_eq!(table.get("skeleton"), Some("skeleton"));
//! ```

pub mod config;
pub mod descriptor;
pub mod errors;
pub mod key;
pub mod palette;
pub mod registry;
pub mod resolver;

pub use config::{ModifierOverrides, SwatchConfig};
pub use descriptor::{BaseClass, ComponentDescriptor, Declaration, Identity, Vocabulary};
pub use errors::PaletteError;
pub use key::{ComponentId, ModifierKey, ModifierMap};
pub use palette::Palette;
pub use registry::{ModifierRegistry, RegistryEntry};
pub use resolver::{resolve_modifiers, universal_modifiers};
