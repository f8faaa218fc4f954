//! Swatch configuration: class prefix and modifier overrides.
//!
//! Render calls take a `&SwatchConfig` explicitly. A process-lifetime
//! default is kept for call sites that have nowhere to thread one from;
//! it is swapped as a whole, so readers always see a consistent snapshot.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use swatch_carton::{CompactString, FxHashMap};

use crate::errors::PaletteError;
use crate::key::ModifierMap;

/// Top-level Swatch configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwatchConfig {
    /// Prefix prepended to every design-system class (`"tw-"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<CompactString>,

    /// Additional modifier vocabulary layered over declared modifiers
    #[serde(default)]
    pub modifiers: ModifierOverrides,
}

/// Two-level modifier overrides: catch-all and per component type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierOverrides {
    /// Applied to every component
    #[serde(default, skip_serializing_if = "ModifierMap::is_empty")]
    pub global: ModifierMap,

    /// Applied to one component type, keyed by type name (`"Button"`)
    #[serde(default, skip_serializing_if = "FxHashMap::is_empty")]
    pub components: FxHashMap<CompactString, ModifierMap>,
}

impl ModifierOverrides {
    /// Overrides for `component`, or the catch-all ones for `None`.
    pub fn for_component(&self, component: Option<&str>) -> Option<&ModifierMap> {
        let map = match component {
            Some(name) => self.components.get(name)?,
            None => &self.global,
        };
        (!map.is_empty()).then_some(map)
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.components.values().all(ModifierMap::is_empty)
    }
}

impl SwatchConfig {
    /// Parse a JSON configuration document.
    pub fn from_json(source: &str) -> Result<Self, PaletteError> {
        serde_json::from_str(source).map_err(|e| PaletteError::InvalidConfig(e.to_string()))
    }

    pub fn with_prefix(mut self, prefix: impl Into<CompactString>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Add catch-all modifier overrides.
    pub fn with_global_modifiers(mut self, modifiers: impl Into<ModifierMap>) -> Self {
        self.modifiers.global.merge(&modifiers.into());
        self
    }

    /// Add modifier overrides for one component type.
    pub fn with_component_modifiers(
        mut self,
        type_name: impl Into<CompactString>,
        modifiers: impl Into<ModifierMap>,
    ) -> Self {
        self.modifiers
            .components
            .entry(type_name.into())
            .or_default()
            .merge(&modifiers.into());
        self
    }

    /// Effective prefix; an empty prefix counts as none.
    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|p| !p.is_empty())
    }
}

static GLOBAL_CONFIG: Lazy<RwLock<Arc<SwatchConfig>>> =
    Lazy::new(|| RwLock::new(Arc::new(SwatchConfig::default())));

/// Snapshot of the process-wide configuration.
pub fn global() -> Arc<SwatchConfig> {
    Arc::clone(&GLOBAL_CONFIG.read())
}

/// Replace the process-wide configuration, returning the previous one.
pub fn install(config: SwatchConfig) -> Arc<SwatchConfig> {
    tracing::debug!("config: install (prefix: {:?})", config.prefix);
    std::mem::replace(&mut *GLOBAL_CONFIG.write(), Arc::new(config))
}

/// Restore the default process-wide configuration.
pub fn reset() -> Arc<SwatchConfig> {
    install(SwatchConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SwatchConfig::default();
        assert!(config.prefix().is_none());
        assert!(config.modifiers.is_empty());
        assert!(config.modifiers.for_component(None).is_none());
    }

    #[test]
    fn test_empty_prefix_is_none() {
        let config = SwatchConfig::default().with_prefix("");
        assert!(config.prefix().is_none());
        let config = SwatchConfig::default().with_prefix("tw-");
        assert_eq!(config.prefix(), Some("tw-"));
    }

    #[test]
    fn test_from_json() {
        let config = SwatchConfig::from_json(
            r#"{
                "prefix": "tw-",
                "modifiers": {
                    "global": { "shadow": "shadow-lg" },
                    "components": { "Button": { "primary": "btn-brand" } }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.prefix(), Some("tw-"));
        assert_eq!(
            config.modifiers.for_component(None).and_then(|m| m.get("shadow")),
            Some("shadow-lg")
        );
        assert_eq!(
            config
                .modifiers
                .for_component(Some("Button"))
                .and_then(|m| m.get("primary")),
            Some("btn-brand")
        );
        assert!(config.modifiers.for_component(Some("Card")).is_none());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = SwatchConfig::from_json(r#"{"prefix": 3}"#).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidConfig(_)));
    }

    #[test]
    fn test_builders() {
        let config = SwatchConfig::default()
            .with_global_modifiers([("glass", "glass")])
            .with_component_modifiers("Badge", [("soft", "badge-soft")]);
        assert_eq!(config.modifiers.global.get("glass"), Some("glass"));
        assert_eq!(
            config.modifiers.components["Badge"].get("soft"),
            Some("badge-soft")
        );
    }
}
