//! Component descriptors.
//!
//! A descriptor is built once, when a component type is declared, and is
//! immutable afterwards. Inheritance is explicit: a [`Declaration`] may name
//! a parent type, whose vocabulary is composed into the new descriptor.

use swatch_carton::{kebab_case, CompactString};

use crate::key::{ComponentId, ModifierMap};

/// How a declaration chooses its identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Identity {
    /// Use the parent's identifier, or none without a parent
    #[default]
    Inherited,
    /// Independently registrable under this identifier
    Named(ComponentId),
    /// Private sub-element; vocabulary stays on the descriptor
    Private,
}

/// How a declaration chooses its base CSS class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BaseClass {
    /// Parent's explicit class if it set one, else the kebab-case type name
    /// (private types derive nothing)
    #[default]
    Derived,
    Explicit(CompactString),
    /// No base class at all
    Suppressed,
}

/// Where a descriptor's modifier vocabulary lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vocabulary {
    /// In the registry under this identifier
    Registered(ComponentId),
    /// On the descriptor itself
    Local(ModifierMap),
}

/// Declaration of a component type, consumed by [`crate::Palette::declare`].
#[derive(Debug, Clone, Default)]
pub struct Declaration {
    pub(crate) type_name: CompactString,
    pub(crate) identity: Identity,
    pub(crate) base_class: BaseClass,
    pub(crate) parent: Option<CompactString>,
    pub(crate) modifiers: Option<ModifierMap>,
    pub(crate) merge: bool,
}

impl Declaration {
    pub fn new(type_name: impl Into<CompactString>) -> Self {
        Self {
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    /// Register under `id` (makes the type independently registrable).
    pub fn identifier(mut self, id: impl Into<ComponentId>) -> Self {
        self.identity = Identity::Named(id.into());
        self
    }

    /// Keep the vocabulary on the type, outside the registry.
    pub fn private(mut self) -> Self {
        self.identity = Identity::Private;
        self
    }

    pub fn base_class(mut self, class: impl Into<CompactString>) -> Self {
        self.base_class = BaseClass::Explicit(class.into());
        self
    }

    pub fn no_base_class(mut self) -> Self {
        self.base_class = BaseClass::Suppressed;
        self
    }

    /// Compose with an already declared type.
    pub fn parent(mut self, type_name: impl Into<CompactString>) -> Self {
        self.parent = Some(type_name.into());
        self
    }

    /// Declare this type's own modifiers (applied over inherited ones).
    pub fn modifiers(mut self, modifiers: impl Into<ModifierMap>) -> Self {
        self.modifiers = Some(modifiers.into());
        self
    }

    /// Extend an already registered identifier instead of failing.
    pub fn merge(mut self) -> Self {
        self.merge = true;
        self
    }

    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Immutable, per-type description of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub(crate) type_name: CompactString,
    pub(crate) identifier: Option<ComponentId>,
    pub(crate) base_class: Option<CompactString>,
    pub(crate) base_class_explicit: bool,
    pub(crate) parent: Option<CompactString>,
    pub(crate) vocabulary: Vocabulary,
}

impl ComponentDescriptor {
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[inline]
    pub fn identifier(&self) -> Option<&ComponentId> {
        self.identifier.as_ref()
    }

    /// Canonical CSS class, unprefixed.
    #[inline]
    pub fn base_class(&self) -> Option<&str> {
        self.base_class.as_deref()
    }

    #[inline]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Private sub-elements are not independently registrable.
    #[inline]
    pub fn is_private(&self) -> bool {
        self.identifier.is_none()
    }
}

/// Resolve the identifier a declaration ends up with.
pub(crate) fn resolve_identity(
    identity: &Identity,
    parent: Option<&ComponentDescriptor>,
) -> Option<ComponentId> {
    match identity {
        Identity::Named(id) => Some(id.clone()),
        Identity::Private => None,
        Identity::Inherited => parent.and_then(|p| p.identifier.clone()),
    }
}

/// Resolve the base class a declaration ends up with, and whether it counts
/// as explicitly set (explicit classes are inherited by child types).
pub(crate) fn resolve_base_class(
    decl: &Declaration,
    identifier: Option<&ComponentId>,
    parent: Option<&ComponentDescriptor>,
) -> (Option<CompactString>, bool) {
    match &decl.base_class {
        BaseClass::Explicit(class) => (Some(class.clone()), true),
        BaseClass::Suppressed => (None, true),
        BaseClass::Derived => match parent {
            Some(p) if p.base_class_explicit => (p.base_class.clone(), true),
            _ if identifier.is_none() => (None, false),
            _ => {
                let derived = kebab_case(&decl.type_name);
                (Some(derived).filter(|c| !c.is_empty()), false)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(base: Option<&str>, explicit: bool) -> ComponentDescriptor {
        ComponentDescriptor {
            type_name: "Tabs".into(),
            identifier: Some(ComponentId::new("tabs")),
            base_class: base.map(CompactString::from),
            base_class_explicit: explicit,
            parent: None,
            vocabulary: Vocabulary::Registered(ComponentId::new("tabs")),
        }
    }

    #[test]
    fn test_derived_base_class_is_kebab_type_name() {
        let decl = Declaration::new("MockupBrowser").identifier("mockup-browser");
        let id = resolve_identity(&decl.identity, None);
        let (class, explicit) = resolve_base_class(&decl, id.as_ref(), None);
        assert_eq!(class.as_deref(), Some("mockup-browser"));
        assert!(!explicit);
    }

    #[test]
    fn test_explicit_parent_base_class_is_inherited() {
        let parent = descriptor(Some("tab-list"), true);
        let decl = Declaration::new("FancyTabs").parent("Tabs");
        let id = resolve_identity(&decl.identity, Some(&parent));
        assert_eq!(id, Some(ComponentId::new("tabs")));

        let (class, explicit) = resolve_base_class(&decl, id.as_ref(), Some(&parent));
        assert_eq!(class.as_deref(), Some("tab-list"));
        assert!(explicit);
    }

    #[test]
    fn test_derived_parent_base_class_is_not_inherited() {
        let parent = descriptor(Some("tabs"), false);
        let decl = Declaration::new("FancyTabs").parent("Tabs");
        let id = resolve_identity(&decl.identity, Some(&parent));
        let (class, _) = resolve_base_class(&decl, id.as_ref(), Some(&parent));
        assert_eq!(class.as_deref(), Some("fancy-tabs"));
    }

    #[test]
    fn test_private_types_derive_no_base_class() {
        let decl = Declaration::new("MenuItem").private();
        let id = resolve_identity(&decl.identity, None);
        assert!(id.is_none());
        let (class, _) = resolve_base_class(&decl, None, None);
        assert!(class.is_none());

        let decl = Declaration::new("Tab").private().base_class("tab");
        let (class, _) = resolve_base_class(&decl, None, None);
        assert_eq!(class.as_deref(), Some("tab"));
    }

    #[test]
    fn test_suppressed_base_class() {
        let decl = Declaration::new("Plain").identifier("plain").no_base_class();
        let (class, explicit) = resolve_base_class(&decl, None, None);
        assert!(class.is_none());
        assert!(explicit);
    }
}
