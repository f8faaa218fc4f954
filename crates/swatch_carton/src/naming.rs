//! Naming convention utilities for component types and CSS classes.
//!
//! A component type's canonical CSS class is the kebab-case form of its
//! demodulized type name (`ui::CollapsibleSubMenu` becomes
//! `collapsible-sub-menu`).

use compact_str::CompactString;

/// Strip any `::`-separated module path, keeping the final segment.
///
/// # Examples
/// ```
/// use swatch_carton::naming::demodulize;
///
/// assert_eq!(demodulize("gallery::Button"), "Button");
/// assert_eq!(demodulize("Button"), "Button");
/// ```
#[inline]
pub fn demodulize(s: &str) -> &str {
    s.rsplit("::").next().unwrap_or(s)
}

/// Convert a PascalCase type name into a kebab-case CSS class.
///
/// Acronym runs stay together (`HTMLParser` becomes `html-parser`) and
/// existing underscores are turned into dashes.
///
/// # Examples
/// ```
/// use swatch_carton::naming::kebab_case;
///
/// assert_eq!(kebab_case("Button"), "button");
/// assert_eq!(kebab_case("MockupPhone"), "mockup-phone");
/// assert_eq!(kebab_case("HTMLParser"), "html-parser");
/// assert_eq!(kebab_case("gallery::AvatarGroup"), "avatar-group");
/// ```
pub fn kebab_case(s: &str) -> CompactString {
    let name = demodulize(s);
    let chars: Vec<char> = name.chars().collect();
    let mut result = CompactString::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            result.push('-');
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let after_word = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            let ends_acronym = prev.is_ascii_uppercase() && next_is_lower;
            if after_word || ends_acronym {
                result.push('-');
            }
        }
        result.push(c.to_ascii_lowercase());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_single_word() {
        assert_eq!(kebab_case("Skeleton").as_str(), "skeleton");
        assert_eq!(kebab_case("Breadcrumbs").as_str(), "breadcrumbs");
    }

    #[test]
    fn test_kebab_case_multi_word() {
        assert_eq!(
            kebab_case("CollapsibleSubMenu").as_str(),
            "collapsible-sub-menu"
        );
        assert_eq!(kebab_case("FormControl").as_str(), "form-control");
    }

    #[test]
    fn test_kebab_case_acronyms_and_digits() {
        assert_eq!(kebab_case("HTMLParser").as_str(), "html-parser");
        assert_eq!(kebab_case("Item2Title").as_str(), "item2-title");
        assert_eq!(kebab_case("ABC").as_str(), "abc");
    }

    #[test]
    fn test_kebab_case_underscores_and_paths() {
        assert_eq!(kebab_case("Diff_Item").as_str(), "diff-item");
        assert_eq!(kebab_case("ui::gallery::HoverGallery").as_str(), "hover-gallery");
        assert_eq!(kebab_case("").as_str(), "");
    }

    #[test]
    fn test_demodulize() {
        assert_eq!(demodulize("a::b::C"), "C");
        assert_eq!(demodulize("C"), "C");
    }
}
