//! Language registry and prepared-rule cache.
//!
//! A [`Registry`] maps a language identifier to its rule table. Each entry
//! carries a `OnceCell` holding the outcome of preparing that table, so:
//!
//! - preparation happens lazily, on the first scan of the language;
//! - concurrent first uses race on the cell, and exactly one result is
//!   published (the losers block and then read it);
//! - a failed preparation is cached as well and reported on every call.
//!
//! Registration takes `&mut self`, so tables cannot change while scans hold a
//! shared reference.

use crate::api::{ClassifiedSpan, Options, ScanReport};
use crate::engine::{PreparedRules, Scanner};
use crate::{LanguageRules, Result, rules};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
struct LanguageEntry {
    rules: LanguageRules,
    prepared: OnceCell<Result<Arc<PreparedRules>>>,
}

impl LanguageEntry {
    fn new(rules: LanguageRules) -> Self {
        Self { rules, prepared: OnceCell::new() }
    }
}

/// Language identifier → rule table, with memoized preparation.
#[derive(Debug, Default)]
pub struct Registry {
    languages: HashMap<String, LanguageEntry>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in `c`, `go` and `lua` tables.
    pub fn builtin() -> Self {
        Self::new()
            .with_language("c", rules::c::rules())
            .with_language("go", rules::go::rules())
            .with_language("lua", rules::lua::rules())
    }

    /// Builder form of [`Registry::register`].
    pub fn with_language(mut self, id: impl Into<String>, rules: LanguageRules) -> Self {
        self.register(id, rules);
        self
    }

    /// Add or replace the table for `id`. Replacing drops any cached
    /// preparation of the old table.
    pub fn register(&mut self, id: impl Into<String>, rules: LanguageRules) -> &mut Self {
        self.languages.insert(id.into(), LanguageEntry::new(rules));
        self
    }

    /// Registered language identifiers, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.languages.contains_key(id)
    }

    /// Prepared matchers for `id`, compiling them on first use.
    ///
    /// `Ok(None)` means the language is unknown.
    pub fn prepared(&self, id: &str) -> Result<Option<Arc<PreparedRules>>> {
        let Some(entry) = self.languages.get(id) else {
            return Ok(None);
        };
        let prepared = entry.prepared.get_or_init(|| {
            debug!(language = id, "preparing rule table");
            PreparedRules::prepare(&entry.rules).map(Arc::new)
        });
        prepared.clone().map(Some)
    }

    pub fn classify(&self, id: &str, text: &str) -> Result<Vec<ClassifiedSpan>> {
        self.classify_with(id, text, &Options::default())
    }

    pub fn classify_with(&self, id: &str, text: &str, options: &Options) -> Result<Vec<ClassifiedSpan>> {
        Ok(self.classify_verbose(id, text, options)?.spans)
    }

    pub fn classify_verbose(&self, id: &str, text: &str, options: &Options) -> Result<ScanReport> {
        match self.prepared(id)? {
            Some(prepared) => Ok(Scanner::new(&prepared, text).run(options).into()),
            None => Ok(ScanReport::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::thread;

    fn toy() -> LanguageRules {
        language! {
            "keyword" => words!["if", "else"],
            "separator" => words!["(", ")", "{", "}"],
        }
    }

    #[test]
    fn preparation_is_memoized() {
        let registry = Registry::new().with_language("toy", toy());
        let a = registry.prepared("toy").unwrap().unwrap();
        let b = registry.prepared("toy").unwrap().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn unknown_language_is_not_an_error() {
        let registry = Registry::new();
        assert!(registry.prepared("nope").unwrap().is_none());
        assert!(registry.classify("nope", "if (x) {}").unwrap().is_empty());
    }

    #[test]
    fn broken_table_fails_on_every_use() {
        let broken = language! { "value" => vec![pat!("(")] };
        let registry = Registry::new().with_language("broken", broken);
        let first = registry.classify("broken", "x").unwrap_err();
        let second = registry.classify("broken", "y").unwrap_err();
        assert_eq!(first, second);
        assert!(matches!(first, Error::InvalidPattern { .. }));
    }

    #[test]
    fn register_replaces_the_table() {
        let mut registry = Registry::new().with_language("toy", toy());
        assert_eq!(registry.classify("toy", "if").unwrap().len(), 1);

        registry.register("toy", language! { "separator" => words!["{"] });
        assert!(registry.classify("toy", "if").unwrap().is_empty());
    }

    #[test]
    fn builtin_lists_its_languages() {
        let registry = Registry::builtin();
        assert_eq!(registry.languages(), vec!["c", "go", "lua"]);
        assert!(registry.contains("lua"));
    }

    #[test]
    fn concurrent_first_use_publishes_one_table() {
        let registry = Registry::builtin();
        let prepared: Vec<Arc<PreparedRules>> = thread::scope(|scope| {
            let handles: Vec<_> =
                (0..8).map(|_| scope.spawn(|| registry.prepared("go").unwrap().unwrap())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for p in &prepared[1..] {
            assert!(Arc::ptr_eq(&prepared[0], p));
        }
    }
}
