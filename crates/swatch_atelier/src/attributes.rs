//! HTML attribute construction.

use swatch_carton::String;
use swatch_relief::{AttrValue, Attributes};

use crate::options::Options;

/// Where the component's id ends up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Written as the root element's `id` attribute
    #[default]
    Element,
    /// Used internally (radio group name, toggle target); never written on the root
    Internal,
}

/// Remaining options become attributes, with the id appended per `policy`.
/// Null values are dropped.
pub fn build_attributes(options: Options, id: Option<&str>, policy: IdPolicy) -> Attributes {
    let mut attributes: Attributes = options
        .into_attributes()
        .into_iter()
        .filter(|(name, value)| {
            if value.is_null() {
                tracing::trace!(attribute = %name, "dropping null attribute");
                return false;
            }
            true
        })
        .collect();

    if let (IdPolicy::Element, Some(id)) = (policy, id) {
        attributes.insert(String::from("id"), AttrValue::from(id));
    }

    attributes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nulls_dropped() {
        let options = Options::new()
            .attr("title", AttrValue::Null)
            .attr("href", "/docs")
            .attr("target", Option::<&str>::None);
        let attrs = build_attributes(options, None, IdPolicy::Element);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("href"), Some(&AttrValue::from("/docs")));
    }

    #[test]
    fn test_id_policy() {
        let attrs = build_attributes(Options::new(), Some("main"), IdPolicy::Element);
        assert_eq!(attrs.get("id"), Some(&AttrValue::from("main")));

        let attrs = build_attributes(Options::new(), Some("drawer"), IdPolicy::Internal);
        assert!(attrs.get("id").is_none());
    }

    #[test]
    fn test_false_is_kept_for_the_writer() {
        let options = Options::new().attr("hidden", false);
        let attrs = build_attributes(options, None, IdPolicy::Element);
        assert_eq!(attrs.get("hidden"), Some(&AttrValue::Bool(false)));
    }
}
