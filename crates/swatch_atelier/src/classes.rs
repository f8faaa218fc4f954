//! Class-string construction.
//!
//! The class list is assembled in a fixed order:
//!
//! 1. base class (dropped when a breakpoint asks for it instead)
//! 2. one entry per active modifier known to the table
//! 3. breakpoint-prefixed base and modifier classes
//! 4. the caller's own `class` option, verbatim
//!
//! The configured prefix applies to every class the library generates and
//! never to classes the caller wrote.

use swatch_carton::{CompactString, SmallVec};
use swatch_palette::{ModifierKey, ModifierMap, SwatchConfig};
use swatch_relief::AttrValue;

use crate::options::{Options, Responsive, CLASS, RESPONSIVE};

/// Applies the configured class prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Prefixer<'a> {
    prefix: Option<&'a str>,
}

impl<'a> Prefixer<'a> {
    pub fn new(prefix: Option<&'a str>) -> Self {
        Self {
            prefix: prefix.filter(|p| !p.is_empty()),
        }
    }

    pub fn from_config(config: &'a SwatchConfig) -> Self {
        Self::new(config.prefix())
    }

    #[inline]
    pub fn prefix(&self) -> Option<&'a str> {
        self.prefix
    }

    /// Prefix every whitespace-separated class in `classes` and rejoin them
    /// with single spaces. `None` when `classes` holds no class at all.
    pub fn apply(&self, classes: &str) -> Option<CompactString> {
        self.apply_with(None, classes)
    }

    /// Like [`Prefixer::apply`], placing `breakpoint:` before each prefixed
    /// class.
    pub fn apply_at(&self, breakpoint: &str, classes: &str) -> Option<CompactString> {
        self.apply_with(Some(breakpoint), classes)
    }

    fn apply_with(&self, breakpoint: Option<&str>, classes: &str) -> Option<CompactString> {
        let mut out = CompactString::default();
        for class in classes.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            if let Some(bp) = breakpoint {
                out.push_str(bp);
                out.push(':');
            }
            if let Some(prefix) = self.prefix {
                out.push_str(prefix);
            }
            out.push_str(class);
        }
        (!out.is_empty()).then_some(out)
    }
}

/// Ordered class tokens. Each token may itself hold several classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: SmallVec<[CompactString; 4]>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Option<CompactString>) {
        if let Some(token) = token {
            self.tokens.push(token);
        }
    }

    pub fn extend(&mut self, tokens: impl IntoIterator<Item = CompactString>) {
        self.tokens.extend(tokens);
    }

    pub fn tokens(&self) -> &[CompactString] {
        &self.tokens
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Space-joined class string, `None` when no token was collected.
    pub fn finish(self) -> Option<CompactString> {
        let mut tokens = self.tokens.into_iter();
        let mut out = tokens.next()?;
        for token in tokens {
            out.push(' ');
            out.push_str(&token);
        }
        Some(out)
    }
}

/// Breakpoint requests parsed from the `responsive` option, in option order.
pub type Breakpoints = Vec<(CompactString, Vec<Responsive>)>;

/// Read the `responsive` option value. A breakpoint may map to `true`, a
/// single modifier key, or a list of either; anything else is ignored.
pub fn parse_breakpoints(value: &AttrValue) -> Breakpoints {
    let AttrValue::Map(map) = value else {
        tracing::trace!(?value, "ignoring non-map responsive option");
        return Breakpoints::new();
    };

    map.iter()
        .map(|(breakpoint, entries)| {
            let entries = match entries {
                AttrValue::List(items) => items.iter().filter_map(Responsive::from_value).collect(),
                single => Responsive::from_value(single).into_iter().collect(),
            };
            (breakpoint.clone(), entries)
        })
        .collect()
}

fn wants_responsive_base(breakpoints: &Breakpoints) -> bool {
    breakpoints
        .iter()
        .any(|(_, entries)| entries.contains(&Responsive::Base))
}

/// Everything class construction needs to know about the component.
#[derive(Debug, Clone, Copy)]
pub struct ClassContext<'a> {
    pub base_class: Option<&'a str>,
    pub table: &'a ModifierMap,
    pub prefixer: Prefixer<'a>,
}

impl ClassContext<'_> {
    /// Stage 1: the base class, unless a breakpoint applies it instead.
    pub fn base_token(&self, breakpoints: &Breakpoints) -> Option<CompactString> {
        if wants_responsive_base(breakpoints) {
            return None;
        }
        self.prefixer.apply(self.base_class?)
    }

    /// Stage 2: one token per active modifier, in activation order. Keys the
    /// table does not know contribute nothing.
    pub fn modifier_tokens<'k>(
        &self,
        active: impl IntoIterator<Item = &'k ModifierKey>,
    ) -> Vec<CompactString> {
        active
            .into_iter()
            .filter_map(|key| match self.table.get(key.as_str()) {
                Some(classes) => self.prefixer.apply(classes),
                None => {
                    tracing::trace!(modifier = %key, "dropping unknown modifier");
                    None
                }
            })
            .collect()
    }

    /// Stage 3: `breakpoint:`-prefixed classes for each responsive entry.
    pub fn responsive_tokens(&self, breakpoints: &Breakpoints) -> Vec<CompactString> {
        let mut tokens = Vec::new();
        for (breakpoint, entries) in breakpoints {
            for entry in entries {
                let classes = match entry {
                    Responsive::Base => self.base_class,
                    Responsive::Modifier(key) => {
                        let classes = self.table.get(key.as_str());
                        if classes.is_none() {
                            tracing::trace!(
                                modifier = %key,
                                breakpoint = %breakpoint,
                                "dropping unknown responsive modifier"
                            );
                        }
                        classes
                    }
                };
                if let Some(token) = classes.and_then(|c| self.prefixer.apply_at(breakpoint, c)) {
                    tokens.push(token);
                }
            }
        }
        tokens
    }

    /// Run every stage. Consumes the `responsive` and `class` options and
    /// returns the class string with the options that remain.
    pub fn build(&self, active: &[ModifierKey], options: Options) -> (Option<CompactString>, Options) {
        let (responsive, options) = options.take(RESPONSIVE);
        let breakpoints = responsive
            .as_ref()
            .map(parse_breakpoints)
            .unwrap_or_default();

        let mut list = ClassList::new();
        list.push(self.base_token(&breakpoints));
        list.extend(self.modifier_tokens(active));
        list.extend(self.responsive_tokens(&breakpoints));

        let (user_class, options) = take_user_class(options);
        list.push(user_class);

        (list.finish(), options)
    }
}

/// Remove the `class` option and return its text with surrounding whitespace
/// trimmed. Blank values count as absent; a list is joined with spaces.
///
/// Whitespace inside the value is kept as given: `"a  b"` stays `"a  b"`.
/// The value is never split or prefixed.
pub fn take_user_class(options: Options) -> (Option<CompactString>, Options) {
    let (value, options) = options.take(CLASS);
    let text = value.and_then(|value| match value {
        AttrValue::List(items) => {
            let parts: Vec<CompactString> = items.iter().filter_map(AttrValue::to_text).collect();
            Some(CompactString::from(parts.join(" ")))
        }
        other => other.to_text(),
    });
    let text = text
        .map(|t| CompactString::from(t.trim()))
        .filter(|t| !t.is_empty());
    (text, options)
}

/// Class string for a fixed sub-element (`modal-box`, `menu-title`): the
/// prefixed fixed classes followed by the caller's `class` option.
pub fn component_classes(
    prefixer: Prefixer<'_>,
    fixed: &[&str],
    options: Options,
) -> (Option<CompactString>, Options) {
    let mut list = ClassList::new();
    for classes in fixed {
        list.push(prefixer.apply(classes));
    }
    let (user_class, options) = take_user_class(options);
    list.push(user_class);
    (list.finish(), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Args, Styled};

    fn table() -> ModifierMap {
        ModifierMap::from([
            ("skeleton", "skeleton"),
            ("neutral", "bg-neutral text-neutral-content"),
            ("primary", "btn-primary"),
            ("lg", "btn-lg"),
        ])
    }

    fn cx<'a>(table: &'a ModifierMap, prefix: Option<&'a str>) -> ClassContext<'a> {
        ClassContext {
            base_class: Some("btn"),
            table,
            prefixer: Prefixer::new(prefix),
        }
    }

    fn keys(names: &[&str]) -> Vec<ModifierKey> {
        names.iter().map(|n| ModifierKey::from(*n)).collect()
    }

    #[test]
    fn test_prefix_splits_classes() {
        let prefixer = Prefixer::new(Some("tw-"));
        assert_eq!(
            prefixer.apply("bg-neutral  text-neutral-content").as_deref(),
            Some("tw-bg-neutral tw-text-neutral-content")
        );
        assert_eq!(
            prefixer.apply_at("md", "a b").as_deref(),
            Some("md:tw-a md:tw-b")
        );
        assert_eq!(prefixer.apply("   "), None);
    }

    #[test]
    fn test_empty_prefix_is_no_prefix() {
        assert_eq!(Prefixer::new(Some("")).prefix(), None);
        assert_eq!(Prefixer::new(Some("")).apply("btn").as_deref(), Some("btn"));
    }

    #[test]
    fn test_base_then_modifiers_then_user_class() {
        let table = table();
        let options = Options::new().class("w-full");
        let (class, rest) = cx(&table, None).build(&keys(&["lg", "primary"]), options);
        assert_eq!(class.as_deref(), Some("btn btn-lg btn-primary w-full"));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_unknown_modifier_is_dropped() {
        let table = table();
        let (class, _) = cx(&table, None).build(&keys(&["sparkly"]), Options::new());
        assert_eq!(class.as_deref(), Some("btn"));
    }

    #[test]
    fn test_user_class_is_trimmed_not_normalized() {
        let (class, rest) = take_user_class(Options::new().class("  a  b "));
        assert_eq!(class.as_deref(), Some("a  b"));
        assert!(rest.is_empty());
        assert_eq!(take_user_class(Options::new().class("   ")).0, None);
    }

    #[test]
    fn test_user_class_is_never_prefixed() {
        let table = table();
        let options = Options::new().class("my-button");
        let (class, _) = cx(&table, Some("tw-")).build(&keys(&["primary"]), options);
        assert_eq!(class.as_deref(), Some("tw-btn tw-btn-primary my-button"));
    }

    #[test]
    fn test_responsive_base_replaces_base() {
        let table = table();
        let args = Args::new().responsive("sm", [Responsive::Base]);
        let (class, rest) = cx(&table, None).build(&[], args.options);
        assert_eq!(class.as_deref(), Some("sm:btn"));
        assert!(!rest.contains_key(RESPONSIVE));
    }

    #[test]
    fn test_responsive_modifiers_follow_plain_ones() {
        let table = table();
        let args = Args::new()
            .responsive("md", ["neutral"])
            .responsive("lg", ["lg", "ghost"]);
        let (class, _) = cx(&table, Some("tw-")).build(&keys(&["primary"]), args.options);
        assert_eq!(
            class.as_deref(),
            Some("tw-btn tw-btn-primary md:tw-bg-neutral md:tw-text-neutral-content lg:tw-btn-lg")
        );
    }

    #[test]
    fn test_responsive_accepts_scalars() {
        let mut options = Options::new();
        options.insert_nested(RESPONSIVE, "sm", true);
        options.insert_nested(RESPONSIVE, "lg", "primary");
        let breakpoints = parse_breakpoints(options.get(RESPONSIVE).unwrap());
        assert_eq!(breakpoints.len(), 2);
        assert_eq!(breakpoints[0].1, [Responsive::Base]);
        assert_eq!(breakpoints[1].1, [Responsive::from("primary")]);
    }

    #[test]
    fn test_nothing_yields_none() {
        let table = table();
        let cx = ClassContext {
            base_class: None,
            table: &table,
            prefixer: Prefixer::default(),
        };
        let (class, _) = cx.build(&[], Options::new().class(" "));
        assert_eq!(class, None);
    }

    #[test]
    fn test_component_classes() {
        let options = Options::new().class("my-box").attr("role", "document");
        let (class, rest) = component_classes(Prefixer::new(Some("tw-")), &["modal-box"], options);
        assert_eq!(class.as_deref(), Some("tw-modal-box my-box"));
        assert_eq!(rest.keys().collect::<Vec<_>>(), ["role"]);
    }
}
