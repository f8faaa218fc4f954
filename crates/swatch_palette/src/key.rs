//! Identifier and modifier-key types.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use swatch_carton::{CompactString, IndexMap};

macro_rules! interned_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(CompactString);

        impl $name {
            #[inline]
            pub fn new(name: impl Into<CompactString>) -> Self {
                Self(name.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(value: &str) -> Self {
                Self(CompactString::from(value))
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(value: String) -> Self {
                Self(CompactString::from(value))
            }
        }

        impl From<CompactString> for $name {
            #[inline]
            fn from(value: CompactString) -> Self {
                Self(value)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

interned_name!(
    /// Name of a component family in the registry (`button`, `tabs`).
    ComponentId
);

interned_name!(
    /// Name of a modifier (`primary`, `lg`, `open`).
    ModifierKey
);

/// Insertion-ordered mapping from modifier key to CSS class string.
///
/// A value may hold several space-separated classes
/// (`"bg-primary text-primary-content"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierMap(IndexMap<ModifierKey, CompactString>);

impl ModifierMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<ModifierKey>, class: impl Into<CompactString>) {
        self.0.insert(key.into(), class.into());
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(CompactString::as_str)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ModifierKey> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ModifierKey, &str)> {
        self.0.iter().map(|(k, v)| (k, v.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlay `other` onto this map. Entries from `other` win on collision;
    /// existing keys keep their position, new keys are appended.
    pub fn merge(&mut self, other: &ModifierMap) {
        for (key, class) in &other.0 {
            self.0.insert(key.clone(), class.clone());
        }
    }

    /// Owned form of [`ModifierMap::merge`].
    pub fn merged(mut self, other: &ModifierMap) -> Self {
        self.merge(other);
        self
    }
}

impl<K, V> FromIterator<(K, V)> for ModifierMap
where
    K: Into<ModifierKey>,
    V: Into<CompactString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ModifierMap
where
    K: Into<ModifierKey>,
    V: Into<CompactString>,
{
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}
