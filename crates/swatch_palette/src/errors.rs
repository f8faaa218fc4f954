//! Palette errors.

use crate::key::ComponentId;
use swatch_carton::String;

/// Errors raised while declaring component vocabularies.
///
/// All of these surface at declaration time, before anything is rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// Identifier already registered and the caller did not ask to merge
    #[error("Component '{identifier}' is already registered; declare it with merge to extend its modifiers")]
    DuplicateRegistration { identifier: ComponentId },

    /// Declaration names a parent type that was never declared
    #[error("Component type '{type_name}' declares unknown parent '{parent}'")]
    UnknownParent { type_name: String, parent: String },

    /// The same type name declared twice
    #[error("Component type '{type_name}' is already declared")]
    DuplicateDeclaration { type_name: String },

    /// Configuration source could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(std::string::String),
}
