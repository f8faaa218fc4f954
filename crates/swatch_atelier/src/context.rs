//! Render context and the per-instance resolution pipeline.

use std::sync::Arc;

use swatch_carton::CompactString;
use swatch_palette::{ComponentDescriptor, ModifierKey, ModifierMap, Palette, SwatchConfig};
use swatch_relief::{AttrValue, Attributes, Element};

use crate::attributes::{build_attributes, IdPolicy};
use crate::classes::{component_classes, ClassContext, Prefixer};
use crate::errors::RenderError;
use crate::extract::extract_boolean_modifiers;
use crate::options::{Args, Options, ID};

/// What a component instance resolved to: its root class string and
/// attributes, plus the state sub-elements read (active modifiers, id).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolved {
    pub class: Option<CompactString>,
    pub attributes: Attributes,
    /// Positional modifiers followed by promoted boolean options
    pub modifiers: Vec<ModifierKey>,
    pub id: Option<CompactString>,
    /// Effective modifier table the classes were drawn from
    pub table: ModifierMap,
}

impl Resolved {
    pub fn has_modifier(&self, key: &str) -> bool {
        self.modifiers.iter().any(|m| m == key)
    }

    /// Root element carrying the resolved class and attributes.
    pub fn into_element(self, tag: &str) -> Element {
        Element::new(tag).class(self.class).attrs(self.attributes)
    }
}

/// Shared state for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub palette: &'a Palette,
    pub config: &'a SwatchConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(palette: &'a Palette, config: &'a SwatchConfig) -> Self {
        Self { palette, config }
    }

    #[inline]
    pub fn prefixer(&self) -> Prefixer<'a> {
        Prefixer::from_config(self.config)
    }

    pub fn descriptor(&self, type_name: &str) -> Result<Arc<ComponentDescriptor>, RenderError> {
        self.palette
            .descriptor(type_name)
            .ok_or_else(|| RenderError::UndeclaredComponent {
                type_name: type_name.into(),
            })
    }

    /// Resolve a declared component type against `args`.
    pub fn resolve(
        &self,
        type_name: &str,
        args: Args,
        policy: IdPolicy,
    ) -> Result<Resolved, RenderError> {
        let descriptor = self.descriptor(type_name)?;
        Ok(self.resolve_descriptor(&descriptor, args, policy))
    }

    /// Run the pipeline: effective table, boolean promotion, classes,
    /// attributes.
    pub fn resolve_descriptor(
        &self,
        descriptor: &ComponentDescriptor,
        args: Args,
        policy: IdPolicy,
    ) -> Resolved {
        let Args {
            mut modifiers,
            options,
            id,
        } = args;

        let table = self.palette.resolve(descriptor, self.config);
        let (promoted, options) = extract_boolean_modifiers(&table, options);
        modifiers.extend(promoted);

        let classes = ClassContext {
            base_class: descriptor.base_class(),
            table: &table,
            prefixer: self.prefixer(),
        };
        let (class, options) = classes.build(&modifiers, options);
        let (id, options) = take_id(id, options);
        let attributes = build_attributes(options, id.as_deref(), policy);

        tracing::trace!(
            component = descriptor.type_name(),
            class = class.as_deref().unwrap_or_default(),
            attributes = attributes.len(),
            "resolved component"
        );

        Resolved {
            class,
            attributes,
            modifiers,
            id,
            table,
        }
    }

    /// Class string and remaining attributes for a fixed sub-element.
    pub fn sub_element(&self, fixed: &[&str], options: Options) -> (Option<CompactString>, Attributes) {
        let (class, options) = component_classes(self.prefixer(), fixed, options);
        (class, build_attributes(options, None, IdPolicy::Element))
    }

    /// Sub-element with the given tag, fixed classes and caller options.
    pub fn sub_element_tag(&self, tag: &str, fixed: &[&str], options: Options) -> Element {
        let (class, attributes) = self.sub_element(fixed, options);
        Element::new(tag).class(class).attrs(attributes)
    }

    /// Apply the configured prefix to library-generated classes.
    pub fn prefixed(&self, classes: &str) -> Option<CompactString> {
        self.prefixer().apply(classes)
    }
}

/// An explicit id wins over an `id` option; the option is consumed either way.
fn take_id(id: Option<CompactString>, options: Options) -> (Option<CompactString>, Options) {
    let (from_options, options) = options.take(ID);
    let from_options = from_options.and_then(|value| {
        let text = value.to_text();
        if text.is_none() {
            tracing::trace!(value = ?value, "dropping non-text id option");
        }
        text
    });
    (id.or(from_options), options)
}
