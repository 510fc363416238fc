//! DEP5 `Files:` pattern matching.
//!
//! `*` matches any run of characters, path separators and leading dots
//! included. Everything else is literal; `?` has no special meaning.

use log::warn;
use regex::Regex;

#[derive(Debug, Clone)]
pub enum Wildcard {
    /// The lone `*` pattern.
    Any,
    Pattern(Regex),
    /// A pattern that could not be compiled. Never matches.
    Invalid,
}

impl Wildcard {
    pub fn new(pattern: &str) -> Self {
        if pattern == "*" {
            return Wildcard::Any;
        }

        let body = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        match Regex::new(&format!("^{body}$")) {
            Ok(regex) => Wildcard::Pattern(regex),
            Err(e) => {
                warn!("Ignoring DEP5 pattern {:?}: {}", pattern, e);
                Wildcard::Invalid
            }
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            Wildcard::Any => true,
            Wildcard::Pattern(regex) => regex.is_match(path),
            Wildcard::Invalid => false,
        }
    }
}

/// Whether `path` matches the DEP5 `pattern`.
pub fn is_match(path: &str, pattern: &str) -> bool {
    Wildcard::new(pattern).matches(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_matches_everything() {
        assert!(is_match("LICENSE", "*"));
        assert!(is_match("deeply/nested/.hidden", "*"));
        assert!(is_match("", "*"));
    }

    #[test]
    fn test_star_crosses_directories() {
        assert!(is_match("src/a/b.c", "*.c"));
        assert!(is_match("src/a/b.c", "src/*"));
        assert!(is_match(".github/workflows/ci.yml", "*.yml"));
        assert!(!is_match("src/a/b.h", "*.c"));
    }

    #[test]
    fn test_literal_patterns_are_anchored() {
        assert!(is_match("a", "a"));
        assert!(!is_match("a/b", "a"));
        assert!(!is_match("xa", "a"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        assert!(is_match("docs/index(1).md", "docs/index(1).md"));
        assert!(!is_match("docs/indexX1).md", "docs/index(1).md"));
        assert!(is_match("a+b.txt", "a+b.*"));
        assert!(!is_match("aab.txt", "a+b.*"));
    }

    #[test]
    fn test_question_mark_is_literal() {
        assert!(!is_match("file1.txt", "file?.txt"));
        assert!(is_match("file?.txt", "file?.txt"));
    }

    #[test]
    fn test_multiple_stars() {
        assert!(is_match("assets/icons/logo.svg", "assets/*/*.svg"));
        assert!(is_match("assets/a/b/c.svg", "assets/*/*.svg"));
        assert!(!is_match("assets/logo.svg", "assets/*/*.svg"));
    }
}
