//! The palette: modifier registry plus the keyed descriptor table.

use std::sync::Arc;

use parking_lot::RwLock;
use swatch_carton::{CompactString, FxHashMap};

use crate::config::SwatchConfig;
use crate::descriptor::{
    resolve_base_class, resolve_identity, BaseClass, ComponentDescriptor, Declaration, Vocabulary,
};
use crate::errors::PaletteError;
use crate::key::ModifierMap;
use crate::registry::ModifierRegistry;
use crate::resolver::resolve_modifiers;

/// Owns the modifier registry and every declared [`ComponentDescriptor`].
#[derive(Debug, Default)]
pub struct Palette {
    registry: ModifierRegistry,
    descriptors: RwLock<FxHashMap<CompactString, Arc<ComponentDescriptor>>>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn registry(&self) -> &ModifierRegistry {
        &self.registry
    }

    /// Declare a component type.
    ///
    /// - Private types keep their vocabulary locally: the parent's modifiers
    ///   (if any) overlaid with their own.
    /// - A named type whose identifier is not registered yet starts from its
    ///   parent's vocabulary when the parent belongs to a different family,
    ///   then registers the result.
    /// - A named type whose identifier is already registered must ask to
    ///   merge; otherwise this fails with
    ///   [`PaletteError::DuplicateRegistration`]. A subtype of a type in
    ///   that family may declare no modifiers and reuse the registered
    ///   vocabulary; an unrelated type naming the same identifier may not.
    pub fn declare(&self, decl: Declaration) -> Result<Arc<ComponentDescriptor>, PaletteError> {
        let mut descriptors = self.descriptors.write();

        if descriptors.contains_key(&decl.type_name) {
            return Err(PaletteError::DuplicateDeclaration {
                type_name: decl.type_name,
            });
        }

        let parent = match &decl.parent {
            Some(name) => Some(descriptors.get(name).cloned().ok_or_else(|| {
                PaletteError::UnknownParent {
                    type_name: decl.type_name.clone(),
                    parent: name.clone(),
                }
            })?),
            None => None,
        };
        let parent = parent.as_deref();

        let identifier = resolve_identity(&decl.identity, parent);
        let (base_class, base_class_explicit) =
            resolve_base_class(&decl, identifier.as_ref(), parent);

        let vocabulary = match &identifier {
            None => {
                let mut local = parent
                    .map(|p| self.vocabulary_of(p))
                    .unwrap_or_default();
                if let Some(own) = &decl.modifiers {
                    local.merge(own);
                }
                Vocabulary::Local(local)
            }
            Some(id) if self.registry.is_registered(id.as_str()) => {
                let same_family = parent.is_some_and(|p| p.identifier.as_ref() == Some(id));
                match &decl.modifiers {
                    None if decl.merge || same_family => {}
                    Some(own) if decl.merge => {
                        let explicit = matches!(decl.base_class, BaseClass::Explicit(_));
                        self.registry.register_or_merge(
                            id.clone(),
                            base_class.clone().filter(|_| explicit),
                            own.clone(),
                        );
                    }
                    _ => {
                        return Err(PaletteError::DuplicateRegistration {
                            identifier: id.clone(),
                        })
                    }
                }
                Vocabulary::Registered(id.clone())
            }
            Some(id) => {
                // Inherit across a family boundary before applying our own
                let mut initial = match parent {
                    Some(p) if p.identifier.as_ref() != Some(id) => self.vocabulary_of(p),
                    _ => ModifierMap::new(),
                };
                if let Some(own) = &decl.modifiers {
                    initial.merge(own);
                }
                self.registry
                    .register(id.clone(), base_class.clone(), initial)?;
                Vocabulary::Registered(id.clone())
            }
        };

        let descriptor = Arc::new(ComponentDescriptor {
            type_name: decl.type_name.clone(),
            identifier,
            base_class,
            base_class_explicit,
            parent: decl.parent.clone(),
            vocabulary,
        });

        tracing::debug!(
            "palette: declared {} (identifier: {:?}, base: {:?})",
            descriptor.type_name,
            descriptor.identifier.as_ref().map(|id| id.as_str()),
            descriptor.base_class
        );
        descriptors.insert(decl.type_name, Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Look up a declared component type.
    pub fn descriptor(&self, type_name: &str) -> Option<Arc<ComponentDescriptor>> {
        self.descriptors.read().get(type_name).cloned()
    }

    #[inline]
    pub fn is_declared(&self, type_name: &str) -> bool {
        self.descriptors.read().contains_key(type_name)
    }

    /// Declared modifiers of a descriptor, without universal modifiers or overrides.
    pub fn vocabulary_of(&self, descriptor: &ComponentDescriptor) -> ModifierMap {
        match &descriptor.vocabulary {
            Vocabulary::Registered(id) => ModifierMap::clone(&self.registry.modifiers_for(id.as_str())),
            Vocabulary::Local(map) => map.clone(),
        }
    }

    /// Effective modifier table for rendering `descriptor` under `config`.
    #[inline]
    pub fn resolve(&self, descriptor: &ComponentDescriptor, config: &SwatchConfig) -> ModifierMap {
        resolve_modifiers(descriptor, &self.registry, config)
    }

    /// Forget every declaration and registration (test isolation).
    pub fn clear(&self) {
        let mut descriptors = self.descriptors.write();
        descriptors.clear();
        self.registry.clear();
    }
}
