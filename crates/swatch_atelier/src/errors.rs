//! Render-time errors.

use swatch_carton::CompactString;
use swatch_palette::PaletteError;
use swatch_relief::MarkupError;
use thiserror::Error;

/// Error raised while turning a component into an element tree.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RenderError {
    /// A component that needs a child declaration (a collapsible title) got none
    #[error("{component} requires a `{declaration}` declaration")]
    MissingRequiredDeclaration {
        component: CompactString,
        declaration: &'static str,
    },

    /// A child declaration that may appear once was given twice
    #[error("{component} accepts a single `{declaration}` declaration")]
    DuplicateDeclaration {
        component: CompactString,
        declaration: &'static str,
    },

    /// An id-dependent operation (tab content, drawer toggle) ran without an id
    #[error("{component} needs an id to render `{operation}`")]
    MissingIdentity {
        component: CompactString,
        operation: &'static str,
    },

    #[error("Component type '{type_name}' was never declared")]
    UndeclaredComponent { type_name: CompactString },

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Markup(#[from] MarkupError),
}

impl RenderError {
    pub fn missing_declaration(component: &str, declaration: &'static str) -> Self {
        Self::MissingRequiredDeclaration {
            component: component.into(),
            declaration,
        }
    }

    pub fn duplicate_declaration(component: &str, declaration: &'static str) -> Self {
        Self::DuplicateDeclaration {
            component: component.into(),
            declaration,
        }
    }

    pub fn missing_identity(component: &str, operation: &'static str) -> Self {
        Self::MissingIdentity {
            component: component.into(),
            operation,
        }
    }
}
