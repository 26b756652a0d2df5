//! Field validation shared by the settings form and the update endpoints
//!
//! The client uses these predicates to gate the save actions; the server runs
//! the same checks again and stays the final authority.

/// Upper bound, in characters, for both the workspace name and slug.
pub const MAX_FIELD_LEN: usize = 16;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// A name is valid when it has between 1 and 16 characters.
pub fn is_valid_name(name: &str) -> bool {
    let len = char_len(name);
    len > 0 && len <= MAX_FIELD_LEN
}

/// Slug grammar: lowercase ASCII letters, digits and single hyphens, with no
/// hyphen at either end.
pub fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// True when every character other than `-` is an ASCII letter or digit and
/// at least one such character exists.
pub fn is_alphanumeric_ignoring_hyphens(value: &str) -> bool {
    let mut seen = false;
    for c in value.chars().filter(|c| *c != '-') {
        if !c.is_ascii_alphanumeric() {
            return false;
        }
        seen = true;
    }
    seen
}

/// A slug is valid when it is 1-16 characters long, matches the slug grammar
/// and is alphanumeric once hyphens are stripped.
pub fn is_valid_slug(slug: &str) -> bool {
    let len = char_len(slug);
    len > 0 && len <= MAX_FIELD_LEN && is_slug(slug) && is_alphanumeric_ignoring_hyphens(slug)
}

/// Normalize user input into slug form.
///
/// Transliterates to ASCII, lowercases, and turns every run of other
/// characters into a single hyphen with none at either end. The result may
/// still be empty or too long; callers validate it afterwards.
pub fn slugify(input: &str) -> String {
    slug::slugify(input)
}

/// Append a `-N` counter to `base`, shortening `base` so the result stays
/// within `MAX_FIELD_LEN`. Returns `None` when nothing of `base` would fit.
pub fn slug_with_counter(base: &str, counter: u32) -> Option<String> {
    let suffix = format!("-{counter}");
    let room = MAX_FIELD_LEN.checked_sub(suffix.len())?;
    let head: String = base.chars().take(room).collect();
    let head = head.trim_end_matches('-');
    if head.is_empty() {
        return None;
    }
    Some(format!("{head}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_length_bounds() {
        assert!(!is_valid_name(""));
        assert!(is_valid_name("A"));
        assert!(is_valid_name("Acme"));
        assert!(is_valid_name("abcdefghijklmnop"));
        assert!(!is_valid_name("abcdefghijklmnopq"));
    }

    #[test]
    fn name_counts_characters_not_bytes() {
        // 16 two-byte characters
        assert!(is_valid_name("éééééééééééééééé"));
        assert!(!is_valid_name("ééééééééééééééééé"));
    }

    #[test]
    fn slug_grammar() {
        assert!(is_slug("acme"));
        assert!(is_slug("acme-1"));
        assert!(is_slug("a-b-c"));
        assert!(!is_slug(""));
        assert!(!is_slug("-acme"));
        assert!(!is_slug("acme-"));
        assert!(!is_slug("ac--me"));
        assert!(!is_slug("Acme"));
        assert!(!is_slug("ac me"));
        assert!(!is_slug("ac_me"));
    }

    #[test]
    fn alphanumeric_ignoring_hyphens() {
        assert!(is_alphanumeric_ignoring_hyphens("acme-1"));
        assert!(is_alphanumeric_ignoring_hyphens("ACME"));
        assert!(!is_alphanumeric_ignoring_hyphens("-"));
        assert!(!is_alphanumeric_ignoring_hyphens(""));
        assert!(!is_alphanumeric_ignoring_hyphens("acmé"));
        assert!(!is_alphanumeric_ignoring_hyphens("ac.me"));
    }

    #[test]
    fn valid_slug_combines_all_rules() {
        assert!(is_valid_slug("acme-1"));
        assert!(is_valid_slug("a"));
        assert!(is_valid_slug("abcdefghijklmnop"));
        assert!(!is_valid_slug("abcdefghijklmnopq"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("acme-"));
        assert!(!is_valid_slug("Acme"));
    }

    #[test]
    fn slugify_normalizes_input() {
        assert_eq!(slugify("  Acme Corp  "), "acme-corp");
        assert_eq!(slugify("ACME__corp--hq"), "acme-corp-hq");
        assert_eq!(slugify("-acme-"), "acme");
        assert_eq!(slugify("café!"), "cafe");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn slugify_output_matches_grammar_when_non_empty() {
        for input in ["Hello World", "a_b c-d", "  x  ", "Q1 2024 Plan", "Ünïcödé ☃ Team"] {
            let slug = slugify(input);
            assert!(is_slug(&slug), "{input:?} -> {slug:?}");
        }
    }

    #[test]
    fn counter_fits_inside_the_length_limit() {
        assert_eq!(slug_with_counter("acme", 1).as_deref(), Some("acme-1"));
        assert_eq!(
            slug_with_counter("abcdefghijklmnop", 1).as_deref(),
            Some("abcdefghijklmn-1")
        );
        assert_eq!(
            slug_with_counter("abcdefghijklmnop", 12).as_deref(),
            Some("abcdefghijklm-12")
        );
        for counter in [1, 9, 10, 99, 100] {
            let slug = slug_with_counter("abcdefghijklmnop", counter).unwrap();
            assert!(is_valid_slug(&slug), "{slug:?}");
        }
    }

    #[test]
    fn counter_does_not_leave_a_double_hyphen() {
        // cut lands right after the hyphen
        assert_eq!(
            slug_with_counter("abcdefghijklm-op", 1).as_deref(),
            Some("abcdefghijklm-1")
        );
    }
}
