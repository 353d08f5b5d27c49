//! Pattern compilation.
//!
//! Two kinds of rule enter the engine and both leave as a [`CompiledMatcher`]
//! that can be searched repeatedly from any offset:
//!
//! - **Literal tokens** of one category are merged into a single alternation.
//!   Tokens are ordered longest first so that, with leftmost-first alternation
//!   semantics, `<<=` beats `<<` and `<` at the same start offset. Tokens made
//!   only of word characters are wrapped in `\b` so `int` never matches inside
//!   `intX`.
//! - **Structured patterns** are compiled from their source and flags. The
//!   `regex` crate searches from an explicit start offset (`find_at`), so there
//!   is no global/sticky mode to toggle: every matcher is built fresh with the
//!   requested case and multi-line semantics.
//!
//! ```text
//! ["<", "<<=", "<<", "int"]  ──▶  <<=|<<|\bint\b|<
//! ```

use crate::{CategoryName, Error, PatternFlags, PatternSpec, Result};
use regex::{Regex, RegexBuilder};

/// A compiled search procedure for one category.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    seq: usize,
    category: CategoryName,
    regex: Regex,
}

impl CompiledMatcher {
    pub(crate) fn new(seq: usize, category: CategoryName, regex: Regex) -> Self {
        Self { seq, category, regex }
    }

    /// Position of this matcher within its prepared list. Used for identity
    /// only, never for priority.
    pub fn seq(&self) -> usize {
        self.seq
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub(crate) fn category_name(&self) -> &CategoryName {
        &self.category
    }

    /// The regular expression this matcher runs.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Earliest match at or after `pos`, as `(start, len)`.
    ///
    /// `pos` past the end of `text` yields `None`. Look-behind assertions such
    /// as `\b` still see the text before `pos`.
    pub fn find_from(&self, text: &str, pos: usize) -> Option<(usize, usize)> {
        if pos > text.len() {
            return None;
        }
        self.regex.find_at(text, pos).map(|m| (m.start(), m.len()))
    }
}

/// Merge literal `tokens` into one longest-first alternation.
pub(crate) fn compile_literals(category: &str, tokens: &[&str]) -> Result<Regex> {
    if tokens.iter().any(|t| t.is_empty()) {
        return Err(Error::EmptyLiteral { category: category.to_string() });
    }

    let mut sorted = tokens.to_vec();
    // Stable: equal-length tokens keep their declaration order.
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));

    let alternation = sorted
        .iter()
        .map(|token| {
            let escaped = regex::escape(token);
            if is_word_token(token) { format!(r"\b{escaped}\b") } else { escaped }
        })
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&alternation).map_err(|err| Error::InvalidPattern {
        category: category.to_string(),
        pattern: alternation.clone(),
        message: err.to_string(),
    })
}

/// Compile a structured pattern with its flags.
pub(crate) fn compile_pattern(category: &str, spec: &PatternSpec) -> Result<Regex> {
    RegexBuilder::new(&spec.source)
        .case_insensitive(spec.flags.contains(PatternFlags::CASE_INSENSITIVE))
        .multi_line(spec.flags.contains(PatternFlags::MULTI_LINE))
        .dot_matches_new_line(spec.flags.contains(PatternFlags::DOT_MATCHES_NEW_LINE))
        .build()
        .map_err(|err| Error::InvalidPattern {
            category: category.to_string(),
            pattern: spec.source.to_string(),
            message: err.to_string(),
        })
}

fn is_word_token(token: &str) -> bool {
    token.chars().all(|c| c.is_alphanumeric() || c == '_')
}
