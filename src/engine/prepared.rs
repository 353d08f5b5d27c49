//! Rule preparation.
//!
//! This module holds the *static* side of the engine: the ordered list of
//! compiled matchers derived from a language's rule table. Preparation runs
//! once per language (the registry memoizes it) and the result is read-only
//! afterwards.
//!
//! For every category, in declaration order:
//!
//! 1. All literal tokens become one merged matcher (if there are any).
//! 2. Each structured pattern becomes its own matcher.
//!
//! A category with no rules contributes nothing. Any malformed rule fails the
//! whole preparation, so a broken table is reported on first use of the
//! language rather than during individual scans.
//!
//! ## Invariants
//!
//! - `CompiledMatcher::seq` equals the matcher's index in `matchers`.

use super::compiler::{CompiledMatcher, compile_literals, compile_pattern};
use crate::{LanguageRules, PatternSpec, Result, RuleSpec};
use tracing::debug;

/// Compiled matchers for one language, in preparation order.
#[derive(Debug, Clone, Default)]
pub struct PreparedRules {
    matchers: Vec<CompiledMatcher>,
}

impl PreparedRules {
    /// Compile `rules` into matchers.
    pub fn prepare(rules: &LanguageRules) -> Result<Self> {
        let mut matchers = Vec::new();

        for (category, specs) in rules.entries() {
            if specs.is_empty() {
                continue;
            }

            let mut literals: Vec<&str> = Vec::new();
            let mut patterns: Vec<&PatternSpec> = Vec::new();
            for spec in specs {
                match spec {
                    RuleSpec::Literal(token) => literals.push(token.as_ref()),
                    RuleSpec::Pattern(pattern) => patterns.push(pattern),
                }
            }

            if !literals.is_empty() {
                let regex = compile_literals(category, &literals)?;
                matchers.push(CompiledMatcher::new(matchers.len(), category.clone(), regex));
            }
            for pattern in patterns {
                let regex = compile_pattern(category, pattern)?;
                matchers.push(CompiledMatcher::new(matchers.len(), category.clone(), regex));
            }
        }

        debug!(matchers = matchers.len(), "prepared rule table");
        Ok(Self { matchers })
    }

    pub fn matchers(&self) -> &[CompiledMatcher] {
        &self.matchers
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn literals_merge_and_patterns_stay_separate() {
        let rules = language! {
            "keyword" => words!["if", "else"],
            "value" => vec![pat!(r"\d+"), "true".into(), pat!(r#""[^"]*""#)],
        };
        let prepared = PreparedRules::prepare(&rules).unwrap();

        let shape: Vec<(usize, &str, &str)> =
            prepared.matchers().iter().map(|m| (m.seq(), m.category(), m.as_str())).collect();
        assert_eq!(
            shape,
            vec![
                (0, "keyword", r"\belse\b|\bif\b"),
                (1, "value", r"\btrue\b"),
                (2, "value", r"\d+"),
                (3, "value", r#""[^"]*""#),
            ]
        );
    }

    #[test]
    fn empty_categories_are_skipped() {
        let rules = language! {
            "type" => Vec::new(),
            "separator" => words![";"],
        };
        let prepared = PreparedRules::prepare(&rules).unwrap();
        assert_eq!(prepared.len(), 1);
        assert_eq!(prepared.matchers()[0].category(), "separator");
    }

    #[test]
    fn malformed_pattern_fails_the_whole_table() {
        let rules = language! {
            "keyword" => words!["if"],
            "comment" => vec![pat!("[unterminated")],
        };
        let err = PreparedRules::prepare(&rules).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref category, .. } if category == "comment"));
    }

    #[test]
    fn preparing_twice_is_identical() {
        let rules = crate::rules::c::rules();
        let a = PreparedRules::prepare(&rules).unwrap();
        let b = PreparedRules::prepare(&rules).unwrap();
        let sources = |p: &PreparedRules| p.matchers().iter().map(|m| m.as_str().to_string()).collect::<Vec<_>>();
        assert_eq!(sources(&a), sources(&b));
    }
}
