//! Modifier resolution.
//!
//! The table used at render time is layered, later layers winning on key
//! collision:
//!
//! 1. universal modifiers every component understands (`skeleton`)
//! 2. the descriptor's vocabulary (registry or local)
//! 3. catch-all overrides from configuration
//! 4. per-component overrides from configuration
//!
//! The table is rebuilt on every render; configuration may change between
//! renders in long-lived processes.

use crate::config::SwatchConfig;
use crate::descriptor::{ComponentDescriptor, Vocabulary};
use crate::key::ModifierMap;
use crate::registry::ModifierRegistry;

/// Modifiers available on every component.
pub fn universal_modifiers() -> ModifierMap {
    ModifierMap::from([("skeleton", "skeleton")])
}

/// Build the effective modifier table for `descriptor`.
pub fn resolve_modifiers(
    descriptor: &ComponentDescriptor,
    registry: &ModifierRegistry,
    config: &SwatchConfig,
) -> ModifierMap {
    let mut table = universal_modifiers();

    match descriptor.vocabulary() {
        Vocabulary::Registered(id) => table.merge(&registry.modifiers_for(id.as_str())),
        Vocabulary::Local(map) => table.merge(map),
    }

    if let Some(global) = config.modifiers.for_component(None) {
        table.merge(global);
    }
    if let Some(own) = config.modifiers.for_component(Some(descriptor.type_name())) {
        table.merge(own);
    }

    tracing::trace!(
        "resolver: {} resolved {} modifiers",
        descriptor.type_name(),
        table.len()
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Declaration, Palette};

    fn palette() -> Palette {
        let palette = Palette::new();
        palette
            .declare(
                Declaration::new("Badge")
                    .identifier("badge")
                    .modifiers([("primary", "badge-primary"), ("lg", "badge-lg")]),
            )
            .unwrap();
        palette
    }

    #[test]
    fn test_universal_modifier_is_always_present() {
        let palette = palette();
        let badge = palette.descriptor("Badge").unwrap();
        let table = resolve_modifiers(&badge, palette.registry(), &SwatchConfig::default());

        let keys: Vec<&str> = table.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["skeleton", "primary", "lg"]);
    }

    #[test]
    fn test_declared_vocabulary_can_replace_universal_modifier() {
        let palette = Palette::new();
        let shimmer = palette
            .declare(
                Declaration::new("Shimmer")
                    .identifier("shimmer")
                    .modifiers([("skeleton", "shimmer-skeleton")]),
            )
            .unwrap();
        let table = palette.resolve(&shimmer, &SwatchConfig::default());
        assert_eq!(table.get("skeleton"), Some("shimmer-skeleton"));
    }

    #[test]
    fn test_override_precedence() {
        let palette = palette();
        let badge = palette.descriptor("Badge").unwrap();
        let config = SwatchConfig::default()
            .with_global_modifiers([("primary", "global-primary"), ("glass", "glass")])
            .with_component_modifiers("Badge", [("primary", "brand-primary")]);

        let table = resolve_modifiers(&badge, palette.registry(), &config);
        // Per-component beats catch-all, both beat declared
        assert_eq!(table.get("primary"), Some("brand-primary"));
        assert_eq!(table.get("glass"), Some("glass"));
        assert_eq!(table.get("lg"), Some("badge-lg"));
    }

    #[test]
    fn test_resolution_sees_later_registry_changes() {
        let palette = palette();
        let badge = palette.descriptor("Badge").unwrap();
        palette.registry().register_or_merge(
            "badge",
            None,
            ModifierMap::from([("ghost", "badge-ghost")]),
        );

        let table = resolve_modifiers(&badge, palette.registry(), &SwatchConfig::default());
        assert_eq!(table.get("ghost"), Some("badge-ghost"));
    }
}
