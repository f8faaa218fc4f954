//! Global modifier registry.
//!
//! Maps a component identifier to its base class and modifier vocabulary so
//! that any component can look up another family's modifiers without
//! inheriting from it (an `Action` rendering with `Button` modifiers, a
//! `LinkButton` extending `button`).
//!
//! The whole map sits behind one lock: writers (declaration time) are
//! serialized, readers (render time) share it and never mutate on read.

use std::sync::Arc;

use parking_lot::RwLock;
use swatch_carton::{CompactString, FxHashMap};

use crate::errors::PaletteError;
use crate::key::{ComponentId, ModifierMap};

/// A registered component family.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryEntry {
    /// Base CSS class (e.g. `btn`)
    pub base_class: Option<CompactString>,
    /// Modifier vocabulary, shared between readers
    pub modifiers: Arc<ModifierMap>,
}

/// Keyed store of component vocabularies.
#[derive(Debug, Default)]
pub struct ModifierRegistry {
    entries: RwLock<FxHashMap<ComponentId, RegistryEntry>>,
}

impl ModifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component family.
    ///
    /// Fails with [`PaletteError::DuplicateRegistration`] if `id` is already
    /// present; use [`ModifierRegistry::register_or_merge`] to extend it.
    pub fn register(
        &self,
        id: impl Into<ComponentId>,
        base_class: Option<CompactString>,
        modifiers: ModifierMap,
    ) -> Result<(), PaletteError> {
        let id = id.into();
        let mut entries = self.entries.write();
        if entries.contains_key(&id) {
            return Err(PaletteError::DuplicateRegistration { identifier: id });
        }

        tracing::debug!(
            "registry: register {} (base: {:?}, {} modifiers)",
            id,
            base_class,
            modifiers.len()
        );
        entries.insert(
            id,
            RegistryEntry {
                base_class,
                modifiers: Arc::new(modifiers),
            },
        );
        Ok(())
    }

    /// Register a component family, or overlay `modifiers` onto an existing one.
    ///
    /// New modifiers win on key collision. The base class is only replaced
    /// when one is supplied. Returns the resulting entry.
    pub fn register_or_merge(
        &self,
        id: impl Into<ComponentId>,
        base_class: Option<CompactString>,
        modifiers: ModifierMap,
    ) -> RegistryEntry {
        let id = id.into();
        let mut entries = self.entries.write();

        let entry = match entries.remove(&id) {
            Some(existing) => {
                tracing::debug!("registry: merge {} modifiers into {}", modifiers.len(), id);
                let merged = ModifierMap::clone(&existing.modifiers).merged(&modifiers);
                RegistryEntry {
                    base_class: base_class.or(existing.base_class),
                    modifiers: Arc::new(merged),
                }
            }
            None => {
                tracing::debug!("registry: register {} via merge", id);
                RegistryEntry {
                    base_class,
                    modifiers: Arc::new(modifiers),
                }
            }
        };

        entries.insert(id, entry.clone());
        entry
    }

    /// Look up a component family.
    pub fn lookup(&self, id: &str) -> Option<RegistryEntry> {
        self.entries.read().get(id).cloned()
    }

    /// Modifiers for a component, or an empty map if it is not registered.
    pub fn modifiers_for(&self, id: &str) -> Arc<ModifierMap> {
        self.entries
            .read()
            .get(id)
            .map(|entry| Arc::clone(&entry.modifiers))
            .unwrap_or_default()
    }

    /// Base class for a component, if registered with one.
    pub fn base_class_for(&self, id: &str) -> Option<CompactString> {
        self.entries
            .read()
            .get(id)
            .and_then(|entry| entry.base_class.clone())
    }

    #[inline]
    pub fn is_registered(&self, id: &str) -> bool {
        self.entries.read().contains_key(id)
    }

    /// All registered identifiers, sorted.
    pub fn components(&self) -> Vec<ComponentId> {
        let mut ids: Vec<ComponentId> = self.entries.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Remove one component family (test isolation).
    pub fn unregister(&self, id: &str) -> Option<RegistryEntry> {
        tracing::debug!("registry: unregister {}", id);
        self.entries.write().remove(id)
    }

    /// Remove every registration (test isolation).
    pub fn clear(&self) {
        tracing::debug!("registry: clear");
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button_modifiers() -> ModifierMap {
        ModifierMap::from([("primary", "btn-primary"), ("lg", "btn-lg")])
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = ModifierRegistry::new();
        registry
            .register("button", Some("btn".into()), button_modifiers())
            .unwrap();

        let entry = registry.lookup("button").unwrap();
        assert_eq!(entry.base_class.as_deref(), Some("btn"));
        assert_eq!(entry.modifiers.get("primary"), Some("btn-primary"));
        assert_eq!(registry.base_class_for("button").as_deref(), Some("btn"));
        assert!(registry.is_registered("button"));
    }

    #[test]
    fn test_register_twice_fails() {
        let registry = ModifierRegistry::new();
        registry.register("button", None, button_modifiers()).unwrap();

        let err = registry
            .register("button", None, ModifierMap::new())
            .unwrap_err();
        assert_eq!(
            err,
            PaletteError::DuplicateRegistration {
                identifier: ComponentId::new("button")
            }
        );
        // The original vocabulary is untouched
        assert_eq!(registry.modifiers_for("button").len(), 2);
    }

    #[test]
    fn test_register_or_merge_overlays() {
        let registry = ModifierRegistry::new();
        registry
            .register("button", Some("btn".into()), button_modifiers())
            .unwrap();

        let entry = registry.register_or_merge(
            "button",
            None,
            ModifierMap::from([("lg", "btn-xl"), ("ghost", "btn-ghost")]),
        );

        assert_eq!(entry.base_class.as_deref(), Some("btn"));
        assert_eq!(entry.modifiers.get("primary"), Some("btn-primary"));
        assert_eq!(entry.modifiers.get("lg"), Some("btn-xl"));
        assert_eq!(entry.modifiers.get("ghost"), Some("btn-ghost"));
        assert_eq!(registry.modifiers_for("button").len(), 3);
    }

    #[test]
    fn test_register_or_merge_replaces_base_class_when_given() {
        let registry = ModifierRegistry::new();
        registry.register_or_merge("card", Some("card".into()), ModifierMap::new());
        registry.register_or_merge("card", Some("panel".into()), ModifierMap::new());
        assert_eq!(registry.base_class_for("card").as_deref(), Some("panel"));
    }

    #[test]
    fn test_unknown_lookups_are_empty() {
        let registry = ModifierRegistry::new();
        assert!(registry.lookup("nope").is_none());
        assert!(registry.modifiers_for("nope").is_empty());
        assert!(registry.base_class_for("nope").is_none());
        assert!(!registry.is_registered("nope"));
    }

    #[test]
    fn test_unregister_and_clear() {
        let registry = ModifierRegistry::new();
        registry.register("a", None, ModifierMap::new()).unwrap();
        registry.register("b", None, ModifierMap::new()).unwrap();
        assert_eq!(
            registry.components(),
            vec![ComponentId::new("a"), ComponentId::new("b")]
        );

        assert!(registry.unregister("a").is_some());
        assert!(!registry.is_registered("a"));
        assert_eq!(registry.len(), 1);

        registry.clear();
        assert!(registry.is_empty());
        // Re-registration is allowed after clearing
        registry.register("b", None, ModifierMap::new()).unwrap();
    }
}
