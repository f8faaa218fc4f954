//! Carton - The artist's toolbox for Swatch.
//!
//! This crate provides the foundational utilities shared by every Swatch crate,
//! much like a carton (artist's portfolio case) holds all the essential tools and
//! materials an artist needs for their work.
//!
//! # Modules
//!
//! - **Naming**: type-name to CSS-class case conversion
//! - **DOM tag config**: void/known HTML tag tables
//!
//! # Example
//!
//! ```
//! use swatch_carton::{kebab_case, is_void_tag};
//!
//! assert_eq!(kebab_case("CollapsibleSubMenu"), "collapsible-sub-menu");
//! assert!(is_void_tag("input"));
//! assert!(!is_void_tag("div"));
//! ```

pub mod dom_tag_config;
pub mod naming;

// Re-export compact_str::CompactString for convenience
pub use compact_str::CompactString;
pub use compact_str::CompactString as String;

// Re-export smallvec for stack-optimized collections
pub use smallvec::{smallvec, SmallVec};

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export indexmap for insertion-ordered maps
pub use indexmap::{map::Entry as IndexEntry, IndexMap, IndexSet};

// Re-export phf for compile-time perfect hash functions
pub use phf::{phf_map, phf_set, Map as PhfMap, Set as PhfSet};

// Re-export shared utilities
pub use dom_tag_config::*;
pub use naming::*;
