//! Markup errors.

use swatch_carton::String;

/// Errors raised while writing an element tree as markup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    /// Attribute name that could break out of the tag (XSS guard)
    #[error("Unsafe attribute name: {0:?}")]
    UnsafeAttributeName(String),

    /// Tag name that is not a valid element name
    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(String),
}
