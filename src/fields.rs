//! Field-level parsing for CSV cells.
//!
//! Multi-value columns pack a list into one cell using a secondary
//! delimiter. All of them follow the same rule:
//!
//! - `"tomato | salt | water"` split on `|` → `["tomato", "salt", "water"]`
//! - `"a||b| "` split on `|` → `["a", "b"]` (empty segments dropped)
//! - `"easy, vegan, easy"` split on `,` → `["easy", "vegan", "easy"]` (no dedup)
//!
//! Segments are trimmed and kept in source order. Nothing is coerced: every
//! value stays a string.

/// Separator for ingredient and step lists.
pub const LIST_SEPARATOR: char = '|';

/// Separator for tag lists.
pub const TAG_SEPARATOR: char = ',';

/// Split a packed cell into trimmed, non-empty segments in source order.
pub fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// `None` for absent or whitespace-only values. Non-blank values are kept
/// untrimmed.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reject slugs that would escape the `recipes/` directory when used as a
/// filename stem.
///
/// Anything else is accepted as-is; the slug is never rewritten.
pub fn check_slug(slug: &str) -> Result<(), &'static str> {
    if slug.contains('/') || slug.contains('\\') {
        return Err("contains a path separator");
    }
    if slug.contains('\0') {
        return Err("contains a NUL byte");
    }
    if slug == "." || slug == ".." {
        return Err("is a relative directory name");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_pipes() {
        assert_eq!(
            split_list("tomato | salt | water", LIST_SEPARATOR),
            vec!["tomato", "salt", "water"]
        );
    }

    #[test]
    fn drops_empty_and_blank_segments() {
        assert_eq!(split_list("a|| |b|", LIST_SEPARATOR), vec!["a", "b"]);
    }

    #[test]
    fn empty_cell_is_empty_list() {
        assert!(split_list("", LIST_SEPARATOR).is_empty());
        assert!(split_list(" | \t |", LIST_SEPARATOR).is_empty());
    }

    #[test]
    fn tags_keep_duplicates_and_order() {
        assert_eq!(
            split_list("vegan, easy,vegan", TAG_SEPARATOR),
            vec!["vegan", "easy", "vegan"]
        );
    }

    #[test]
    fn commas_survive_in_pipe_lists() {
        assert_eq!(
            split_list("salt, to taste|pepper", LIST_SEPARATOR),
            vec!["salt, to taste", "pepper"]
        );
    }

    #[test]
    fn non_blank_filters_whitespace() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some(" \t".to_string())), None);
        assert_eq!(non_blank(Some(" 4 ".to_string())), Some(" 4 ".to_string()));
    }

    #[test]
    fn ordinary_slugs_pass() {
        assert!(check_slug("tomato-soup").is_ok());
        assert!(check_slug("crème.brûlée").is_ok());
        assert!(check_slug("...").is_ok());
    }

    #[test]
    fn path_like_slugs_rejected() {
        assert!(check_slug("../etc/passwd").is_err());
        assert!(check_slug("a/b").is_err());
        assert!(check_slug(r"a\b").is_err());
        assert!(check_slug("..").is_err());
        assert!(check_slug(".").is_err());
        assert!(check_slug("a\0b").is_err());
    }
}
