//! Caller-supplied component arguments.
//!
//! A component is instantiated with an ordered list of modifier keys, an
//! option map, and an optional id. Options are untyped: `class` and
//! `responsive` are read by class resolution, boolean entries naming a
//! modifier are promoted to modifiers, and everything left over becomes an
//! HTML attribute.

use swatch_carton::{CompactString, IndexMap, String};
use swatch_palette::ModifierKey;
use swatch_relief::{AttrValue, Attributes};

/// Option key carrying user classes.
pub const CLASS: &str = "class";
/// Option key carrying the breakpoint map.
pub const RESPONSIVE: &str = "responsive";
/// Option key read as the component id when none is given explicitly.
pub const ID: &str = "id";

/// Insertion-ordered option map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options(Attributes);

impl Options {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.0.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Remove `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.0.shift_remove(key)
    }

    /// Owned form of [`Options::remove`].
    pub fn take(mut self, key: &str) -> (Option<AttrValue>, Self) {
        let value = self.remove(key);
        (value, self)
    }

    /// Insert `value` under `group[key]`, creating the nested map if needed.
    /// A non-map value already stored under `group` is replaced.
    pub fn insert_nested(
        &mut self,
        group: &str,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) {
        let slot = self
            .0
            .entry(String::from(group))
            .or_insert_with(|| AttrValue::Map(IndexMap::new()));
        if !matches!(slot, AttrValue::Map(_)) {
            *slot = AttrValue::Map(IndexMap::new());
        }
        if let AttrValue::Map(map) = slot {
            map.insert(key.into(), value.into());
        }
    }

    pub fn into_attributes(self) -> Attributes {
        self.0
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.insert(CLASS, AttrValue::Str(class.into()));
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// `data-*` attribute.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert_nested("data", key, value);
        self
    }

    /// `aria-*` attribute.
    pub fn aria(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert_nested("aria", key, value);
        self
    }
}

impl From<Attributes> for Options {
    fn from(value: Attributes) -> Self {
        Self(value)
    }
}

impl<K: Into<String>, V: Into<AttrValue>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One entry of a breakpoint's list in the `responsive` option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Responsive {
    /// The component's base class (`true` in the option map)
    Base,
    Modifier(ModifierKey),
}

impl Responsive {
    pub fn to_value(&self) -> AttrValue {
        match self {
            Self::Base => AttrValue::Bool(true),
            Self::Modifier(key) => AttrValue::Str(CompactString::from(key.as_str())),
        }
    }

    /// Read one breakpoint entry. Anything other than `true` or a key is ignored.
    pub fn from_value(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Bool(true) => Some(Self::Base),
            AttrValue::Str(key) => Some(Self::Modifier(ModifierKey::from(key.as_str()))),
            _ => None,
        }
    }
}

impl From<&str> for Responsive {
    fn from(value: &str) -> Self {
        Self::Modifier(ModifierKey::from(value))
    }
}

impl From<ModifierKey> for Responsive {
    fn from(value: ModifierKey) -> Self {
        Self::Modifier(value)
    }
}

/// Arguments a component is instantiated with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub modifiers: Vec<ModifierKey>,
    pub options: Options,
    pub id: Option<CompactString>,
}

impl Args {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments carrying only positional modifiers.
    pub fn with_modifiers<I, K>(modifiers: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ModifierKey>,
    {
        Self {
            modifiers: modifiers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Whether `key` was passed positionally.
    pub fn has_modifier(&self, key: &str) -> bool {
        self.modifiers.iter().any(|m| m == key)
    }

    /// The instance id: the explicit id, else a textual `id` option.
    pub fn resolved_id(&self) -> Option<CompactString> {
        self.id
            .clone()
            .or_else(|| self.options.get(ID).and_then(AttrValue::to_text))
    }
}

/// Builder methods shared by everything that wraps [`Args`].
///
/// Gallery components implement this so callers can write
/// `Button::new().modifier("primary").class("w-full")`.
pub trait Styled: Sized {
    fn args_mut(&mut self) -> &mut Args;

    fn modifier(mut self, key: impl Into<ModifierKey>) -> Self {
        self.args_mut().modifiers.push(key.into());
        self
    }

    fn modifiers<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<ModifierKey>,
    {
        self.args_mut()
            .modifiers
            .extend(keys.into_iter().map(Into::into));
        self
    }

    /// Boolean option. When `key` names a modifier it is promoted at render
    /// time; otherwise it is written as a bare attribute.
    fn flag(mut self, key: impl Into<String>, on: bool) -> Self {
        self.args_mut().options.insert(key, AttrValue::Bool(on));
        self
    }

    fn class(mut self, class: impl Into<String>) -> Self {
        self.args_mut()
            .options
            .insert(CLASS, AttrValue::Str(class.into()));
        self
    }

    fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.args_mut().options.insert(key, value);
        self
    }

    fn data(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.args_mut().options.insert_nested("data", key, value);
        self
    }

    fn aria(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.args_mut().options.insert_nested("aria", key, value);
        self
    }

    /// Apply `entries` at `breakpoint` (`sm`, `md`, ...). A breakpoint given
    /// twice keeps the last list.
    fn responsive<I, R>(mut self, breakpoint: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Responsive>,
    {
        let list: Vec<AttrValue> = entries
            .into_iter()
            .map(|entry| entry.into().to_value())
            .collect();
        self.args_mut()
            .options
            .insert_nested(RESPONSIVE, breakpoint, AttrValue::List(list));
        self
    }

    fn id(mut self, id: impl Into<CompactString>) -> Self {
        self.args_mut().id = Some(id.into());
        self
    }
}

impl Styled for Args {
    #[inline]
    fn args_mut(&mut self) -> &mut Args {
        self
    }
}
