//! Rule-driven lexical classification.
//!
//! `lexmark` labels spans of plain text with lexical categories (keyword,
//! separator, type, value, comment, ...) by running one matcher per category
//! over the same text and resolving, at every step, which match wins under an
//! earliest-then-longest order.
//!
//! ```
//! let spans = lexmark::classify("c", "int x;").unwrap();
//! assert_eq!(spans[0].category(), "keyword");
//! assert_eq!((spans[0].start, spans[0].len), (0, 3));
//! ```

use std::borrow::Cow;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
pub mod markup;
mod registry;
mod rules;

pub use api::{ClassifiedSpan, Options, ScanReport, classify, classify_verbose, classify_with};
pub use engine::{CompiledMatcher, PreparedRules, ScanMetrics};
pub use error::{Error, Result};
pub use registry::Registry;

// --- Rule tables -------------------------------------------------------------

/// Label assigned to a matched span, e.g. `"keyword"`.
pub type CategoryName = Cow<'static, str>;

bitflags::bitflags! {
    /// Match semantics carried by a structured pattern.
    ///
    /// Searching from an arbitrary offset is intrinsic to every compiled
    /// matcher and therefore has no flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PatternFlags: u8 {
        const CASE_INSENSITIVE     = 1 << 0;
        const MULTI_LINE           = 1 << 1;
        const DOT_MATCHES_NEW_LINE = 1 << 2;
    }
}

/// A regular expression source together with its match semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternSpec {
    pub source: Cow<'static, str>,
    pub flags: PatternFlags,
}

impl PatternSpec {
    pub fn new(source: impl Into<Cow<'static, str>>) -> Self {
        Self { source: source.into(), flags: PatternFlags::empty() }
    }

    pub fn with_flags(mut self, flags: PatternFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// One entry of a category's rule list.
///
/// Literal tokens are merged into a single alternation per category; patterns
/// each become their own matcher (see `engine/compiler.rs`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuleSpec {
    /// Exact text. Word-bounded when it consists only of word characters.
    Literal(Cow<'static, str>),
    /// A structured pattern with its own case/multi-line semantics.
    Pattern(PatternSpec),
}

impl From<&'static str> for RuleSpec {
    fn from(token: &'static str) -> Self {
        RuleSpec::Literal(Cow::Borrowed(token))
    }
}

impl From<PatternSpec> for RuleSpec {
    fn from(spec: PatternSpec) -> Self {
        RuleSpec::Pattern(spec)
    }
}

/// A language's rule table: an ordered mapping of category name to rules.
///
/// Declaration order has no influence on which match wins; it only fixes the
/// sequence numbers of the prepared matchers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageRules {
    categories: Vec<(CategoryName, Vec<RuleSpec>)>,
}

impl LanguageRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`LanguageRules::push`].
    pub fn with_category(mut self, name: impl Into<CategoryName>, rules: Vec<RuleSpec>) -> Self {
        self.push(name, rules);
        self
    }

    /// Append `rules` to category `name`, creating the category if needed.
    pub fn push(&mut self, name: impl Into<CategoryName>, rules: Vec<RuleSpec>) {
        let name = name.into();
        match self.categories.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => existing.extend(rules),
            None => self.categories.push((name, rules)),
        }
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[RuleSpec])> {
        self.categories.iter().map(|(name, rules)| (&**name, rules.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|(_, rules)| rules.is_empty())
    }

    pub(crate) fn entries(&self) -> &[(CategoryName, Vec<RuleSpec>)] {
        &self.categories
    }
}
