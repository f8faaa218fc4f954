//! The gallery catalog and the process-wide palette.

use once_cell::sync::OnceCell;
use swatch_atelier::{Component, RenderContext, RenderError};
use swatch_palette::{config, Palette, PaletteError, SwatchConfig};

use crate::components;

/// Background/foreground pairs shared by several components.
pub const COLOR_MODIFIERS: [(&str, &str); 11] = [
    ("primary", "bg-primary text-primary-content"),
    ("secondary", "bg-secondary text-secondary-content"),
    ("accent", "bg-accent text-accent-content"),
    ("neutral", "bg-neutral text-neutral-content"),
    ("base-100", "bg-base-100 text-base-content"),
    ("base-200", "bg-base-200 text-base-content"),
    ("base-300", "bg-base-300 text-base-content"),
    ("info", "bg-info text-info-content"),
    ("success", "bg-success text-success-content"),
    ("warning", "bg-warning text-warning-content"),
    ("error", "bg-error text-error-content"),
];

/// Declare every gallery component on `palette`.
pub fn declare_components(palette: &Palette) -> Result<(), PaletteError> {
    let decls = components::declarations();
    let count = decls.len();
    for decl in decls {
        palette.declare(decl)?;
    }
    tracing::debug!("musea: declared {} gallery components", count);
    Ok(())
}

static PALETTE: OnceCell<Palette> = OnceCell::new();

/// The process-wide palette, populated with the gallery on first use.
pub fn palette() -> Result<&'static Palette, PaletteError> {
    PALETTE.get_or_try_init(|| {
        let palette = Palette::new();
        declare_components(&palette)?;
        Ok(palette)
    })
}

/// Render `component` to HTML with the process-wide palette and `config`.
pub fn render_html_with(
    component: &dyn Component,
    config: &SwatchConfig,
) -> Result<String, RenderError> {
    let cx = RenderContext::new(palette()?, config);
    component.to_html(&cx)
}

/// Render `component` to HTML with the process-wide palette and configuration.
pub fn render_html(component: &dyn Component) -> Result<String, RenderError> {
    render_html_with(component, &config::global())
}
