//! HTML tag tables used when writing markup.

use phf::phf_set;

/// Elements that never have children and are written without a closing tag.
static VOID_TAGS: phf::Set<&'static str> = phf_set! {
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
};

/// Check if a tag is a void element (`<input>`, `<br>`, ...)
#[inline]
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(tag)
}

/// Check if a string is usable as an element name.
///
/// Accepts ASCII alphanumerics and `-`, starting with a letter, which covers
/// both standard tags and custom elements.
pub fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_tags() {
        assert!(is_void_tag("input"));
        assert!(is_void_tag("br"));
        assert!(!is_void_tag("div"));
        assert!(!is_void_tag("details"));
    }

    #[test]
    fn test_valid_tag_name() {
        assert!(is_valid_tag_name("div"));
        assert!(is_valid_tag_name("h2"));
        assert!(is_valid_tag_name("my-element"));
        assert!(!is_valid_tag_name(""));
        assert!(!is_valid_tag_name("2div"));
        assert!(!is_valid_tag_name("div onclick"));
        assert!(!is_valid_tag_name("a>b"));
    }
}
