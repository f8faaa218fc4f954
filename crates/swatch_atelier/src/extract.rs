//! Boolean-option promotion.
//!
//! `Button::new().flag("primary", true)` must behave exactly like
//! `Button::new().modifier("primary")`. Only keys present in the effective
//! modifier table are touched; every other option flows through unchanged.

use swatch_palette::{ModifierKey, ModifierMap};
use swatch_relief::AttrValue;

use crate::options::Options;

/// Pull boolean entries naming a modifier out of `options`.
///
/// Returns the keys whose value was `true`, in table order, and the options
/// with every matched boolean entry removed (`false` entries are dropped
/// without activating anything). Non-boolean values under a modifier key are
/// left alone.
pub fn extract_boolean_modifiers(
    table: &ModifierMap,
    mut options: Options,
) -> (Vec<ModifierKey>, Options) {
    let mut activated = Vec::new();

    for key in table.keys() {
        let Some(AttrValue::Bool(on)) = options.get(key.as_str()) else {
            continue;
        };
        let on = *on;
        options.remove(key.as_str());
        if on {
            activated.push(key.clone());
        }
    }

    (activated, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ModifierMap {
        ModifierMap::from([
            ("skeleton", "skeleton"),
            ("primary", "btn-primary"),
            ("lg", "btn-lg"),
            ("disabled", "btn-disabled"),
        ])
    }

    #[test]
    fn test_true_activates_in_table_order() {
        let options: Options = [("lg", true), ("primary", true)].into_iter().collect();
        let (active, rest) = extract_boolean_modifiers(&table(), options);
        assert_eq!(active, ["primary", "lg"]);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_false_is_consumed() {
        let options: Options = [("disabled", false)].into_iter().collect();
        let (active, rest) = extract_boolean_modifiers(&table(), options);
        assert!(active.is_empty());
        assert!(!rest.contains_key("disabled"));
    }

    #[test]
    fn test_unknown_and_non_boolean_pass_through() {
        let options = Options::new()
            .attr("required", true)
            .attr("lg", "yes")
            .attr("href", "/");
        let (active, rest) = extract_boolean_modifiers(&table(), options);
        assert!(active.is_empty());
        let keys: Vec<&str> = rest.keys().collect();
        assert_eq!(keys, ["required", "lg", "href"]);
    }
}
