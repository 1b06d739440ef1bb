use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9 -]").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static HYPHEN_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Turn a display name into the URL-safe key used under `/clients/{slug}`.
///
/// Lowercases, drops everything outside `[a-z0-9 -]`, turns whitespace runs
/// into a hyphen, collapses hyphen runs, and trims hyphens off the ends.
/// Total over any input: names with no usable characters give `""`.
///
/// ```
/// use agency_common::slugify;
///
/// assert_eq!(slugify("Acme Corp."), "acme-corp");
/// assert_eq!(slugify("  A---B  "), "a-b");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = DISALLOWED_RE.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RE.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUN_RE.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// True when `s` is already in the form `slugify` produces.
pub fn is_slug(s: &str) -> bool {
    !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        assert_eq!(slugify("Acme Corp."), "acme-corp");
    }

    #[test]
    fn collapses_hyphen_runs_and_edge_whitespace() {
        assert_eq!(slugify("  A---B  "), "a-b");
    }

    #[test]
    fn empty_input_gives_empty_slug() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn input_without_usable_characters_gives_empty_slug() {
        assert_eq!(slugify("!!! ??? ***"), "");
        assert_eq!(slugify("¡Olé!"), "ol");
    }

    #[test]
    fn tabs_and_newlines_are_dropped_before_hyphenation() {
        // Only ASCII space survives the character filter.
        assert_eq!(slugify("Blue\tSky\nLabs"), "blueskylabs");
    }

    #[test]
    fn mixed_spaces_and_hyphens_collapse() {
        assert_eq!(slugify("Smith - Jones & Co"), "smith-jones-co");
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(slugify("Studio 54"), "studio-54");
    }

    #[test]
    fn slugify_output_is_a_slug() {
        for name in ["Acme Corp.", "  A---B  ", "", "--x--", "Ünïcode Näme"] {
            let slug = slugify(name);
            assert!(is_slug(&slug), "{name:?} produced {slug:?}");
        }
    }

    #[test]
    fn is_slug_rejects_malformed_keys() {
        assert!(!is_slug("Acme"));
        assert!(!is_slug("-acme"));
        assert!(!is_slug("acme--corp"));
        assert!(is_slug("acme-corp"));
        assert!(is_slug(""));
    }
}
