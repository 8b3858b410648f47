//! Filesystem-safe identifiers derived from free text.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII whitespace only; other space characters are dropped as unsafe.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?-u:\s)+").unwrap());
static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9-]+").unwrap());

/// Converts free text into a lowercase, hyphen-delimited slug.
///
/// Whitespace runs become a single hyphen, anything outside `[a-z0-9-]` is
/// dropped and the result is trimmed of hyphens. The output is a fixed point:
/// `slugify(&slugify(s)) == slugify(s)`.
pub fn slugify(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let lowered = input.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    let filtered = UNSAFE_CHARS.replace_all(&hyphenated, "");

    filtered.trim_matches('-').to_string()
}

/// Joins `parts` with hyphens and slugifies the result.
///
/// Raw and pre-slugged segments can be mixed, e.g. a padded sequence number
/// followed by a raw title.
pub fn slugify_parts<S: AsRef<str>>(parts: &[S]) -> String {
    let joined = parts
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<&str>>()
        .join("-");
    slugify(&joined)
}

/// Zero-pads `value` to `width` digits. Wider values are never truncated.
pub fn pad_value(value: u64, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Fizzy Pop"), "fizzy-pop");
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("Fizzy                 Pop"), "fizzy-pop");
        assert_eq!(slugify("Fizzy\t\n Pop"), "fizzy-pop");
    }

    #[test]
    fn test_slugify_trims() {
        assert_eq!(slugify("   Fizzy Pop   "), "fizzy-pop");
        assert_eq!(slugify("--fizzy--"), "fizzy");
    }

    #[test]
    fn test_slugify_drops_unsafe_characters() {
        assert_eq!(slugify("Fiz*zy P\\o/p"), "fizzy-pop");
        assert_eq!(slugify("0001: <title>"), "0001-title");
    }

    #[test]
    fn test_slugify_non_ascii_space_is_dropped() {
        assert_eq!(slugify("Fizzy\u{00a0}Pop"), "fizzypop");
        assert_eq!(slugify("Fizzy \u{2003} Pop"), "fizzy--pop");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_slugify_parts() {
        assert_eq!(slugify_parts(&["fizzy", "pop"]), "fizzy-pop");
        assert_eq!(slugify_parts(&["001", "fizzy", "pop"]), "001-fizzy-pop");
        assert_eq!(slugify_parts(&["001", "fizzy-pop"]), "001-fizzy-pop");
    }

    #[test]
    fn test_slugify_parts_with_empty_segments() {
        let parts = ["", "", "", "", "001", "fizzy", "pop", "", "", "", ""];
        assert_eq!(slugify_parts(&parts), "001-fizzy-pop");
    }

    #[test]
    fn test_slugify_parts_with_unsafe_segments() {
        let parts = [
            "-", "-", "//\\", "*", "001", "fizzy", "pop", "(", "#", "&", "%",
        ];
        assert_eq!(slugify_parts(&parts), "001-fizzy-pop");
    }

    #[test]
    fn test_pad_value() {
        assert_eq!(pad_value(1, 3), "001");
        assert_eq!(pad_value(11, 3), "011");
        assert_eq!(pad_value(111, 3), "111");
        assert_eq!(pad_value(1111, 3), "1111");
        assert_eq!(pad_value(7, 4), "0007");
    }

    proptest! {
        #[test]
        fn slugify_is_idempotent(s in "\\PC*") {
            let once = slugify(&s);
            prop_assert_eq!(slugify(&once), once.clone());
        }

        #[test]
        fn slug_uses_safe_charset(s in "\\PC*") {
            let slug = slugify(&s);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
        }
    }
}
