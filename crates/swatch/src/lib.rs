//! # Swatch
//!
//! Design-system component classes for HTML rendering in Rust.
//!
//! This crate re-exports all Swatch sub-crates for unified documentation and
//! adds configuration loading.
//!
//! ## Crates
//!
//! - [`carton`] - Shared toolbox: compact strings, maps, case conversion
//! - [`relief`] - Element tree and markup writer
//! - [`palette`] - Modifier registry, component descriptors, configuration
//! - [`atelier`] - Class and attribute resolution pipeline
//! - [`musea`] - The built-in component gallery
//!
//! ## Example
//!
//! ```rust
//! use swatch::atelier::Styled;
//! use swatch::musea::{render_html_with, Button};
//!
//! let config = swatch::parse_config(r#"{ "prefix": "tw-" }"#).unwrap();
//! let html = render_html_with(&Button::new().modifier("primary"), &config).unwrap();
//! assert_eq!(html, r#"<button class="tw-btn tw-btn-primary"></button>"#);
//! ```

pub mod config;

pub use config::{load_and_install, load_config, parse_config, CONFIG_FILE_NAME, SWATCH_CONFIG_SCHEMA};

/// Shared toolbox: compact strings, maps, case conversion.
pub use swatch_carton as carton;

/// Element tree and markup writer.
pub use swatch_relief as relief;

/// Modifier registry, component descriptors, configuration.
pub use swatch_palette as palette;

/// Class and attribute resolution pipeline.
pub use swatch_atelier as atelier;

/// The built-in component gallery.
pub use swatch_musea as musea;
