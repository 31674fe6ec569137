//! URL-safe slug derivation.
//!
//! Slugs are the sole lookup key for detail routes. Two differently named
//! entities can collide on the same slug; lookups return the first match
//! in dataset order.

/// Derive a URL-safe slug from a display name.
///
/// Lowercases the input, collapses every run of non-alphanumeric
/// characters to a single hyphen, and trims leading/trailing hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Redwood Research"), "redwood-research");
        assert_eq!(slugify("AI Safety Institute (UK)"), "ai-safety-institute-uk");
    }

    #[test]
    fn test_collapses_runs_and_trims() {
        assert_eq!(slugify("  --Weird__  name!! "), "weird-name");
        assert_eq!(slugify("a---b"), "a-b");
    }

    #[test]
    fn test_idempotent() {
        for s in [
            "Chain-of-Thought Faithfulness",
            "GPQA: A Graduate-Level Benchmark",
            "  spaces  everywhere  ",
            "",
        ] {
            let once = slugify(s);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_no_leading_trailing_or_double_hyphens() {
        for s in ["!leading", "trailing?", "a  b", "émigré café"] {
            let slug = slugify(s);
            assert!(!slug.starts_with('-'), "slug {slug:?} starts with hyphen");
            assert!(!slug.ends_with('-'), "slug {slug:?} ends with hyphen");
            assert!(!slug.contains("--"), "slug {slug:?} has double hyphen");
        }
    }

    #[test]
    fn test_non_ascii_collapses() {
        // Non-ASCII letters are treated as separators, matching the
        // [^a-z0-9] behavior of the original dataset tooling.
        assert_eq!(slugify("café au lait"), "caf-au-lait");
    }
}
