use std::collections::BTreeSet;

use crate::models::NOASSERTION;

const OPERATORS: [&str; 3] = ["AND", "OR", "WITH"];

/// License and exception identifiers referenced by an SPDX expression.
///
/// Operators, parentheses and the `+` suffix are dropped. `NOASSERTION` and
/// `NONE` are not identifiers.
pub fn license_identifiers(expression: &str) -> Vec<String> {
    expression
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .map(|word| word.trim_end_matches('+'))
        .filter(|word| !word.is_empty())
        .filter(|word| {
            !OPERATORS
                .iter()
                .any(|operator| word.eq_ignore_ascii_case(operator))
        })
        .filter(|word| *word != NOASSERTION && *word != "NONE")
        .map(str::to_string)
        .collect()
}

/// Sorted, deduplicated identifiers across many expressions.
pub fn collect_license_identifiers<'a>(
    expressions: impl IntoIterator<Item = &'a String>,
) -> Vec<String> {
    expressions
        .into_iter()
        .flat_map(|expression| license_identifiers(expression))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_identifier() {
        assert_eq!(license_identifiers("MIT"), vec!["MIT"]);
    }

    #[test]
    fn test_compound_expression() {
        assert_eq!(
            license_identifiers("(MIT OR Apache-2.0) AND GPL-2.0-only WITH Classpath-exception-2.0"),
            vec!["MIT", "Apache-2.0", "GPL-2.0-only", "Classpath-exception-2.0"]
        );
    }

    #[test]
    fn test_plus_suffix_and_lowercase_operators() {
        assert_eq!(
            license_identifiers("GPL-2.0+ or LGPL-2.1+"),
            vec!["GPL-2.0", "LGPL-2.1"]
        );
    }

    #[test]
    fn test_placeholders_are_skipped() {
        assert!(license_identifiers("NOASSERTION").is_empty());
        assert!(license_identifiers("NONE").is_empty());
    }

    #[test]
    fn test_collect_is_sorted_and_unique() {
        let expressions = vec![
            "MIT".to_string(),
            "Apache-2.0 OR MIT".to_string(),
            "NOASSERTION".to_string(),
        ];
        assert_eq!(
            collect_license_identifiers(&expressions),
            vec!["Apache-2.0", "MIT"]
        );
    }
}
