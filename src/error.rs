//! Errors raised while preparing a language's rule table.
//!
//! Scanning itself never fails: unknown languages, empty categories, matchers
//! that never match and the iteration limit are all ordinary outcomes. Only a
//! malformed rule is an error, and it is reported when the language is first
//! prepared. Errors are `Clone` so the registry can cache a failed preparation
//! and report it identically on every later call.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A pattern (or a merged literal alternation) failed to compile.
    #[error("category '{category}': invalid pattern `{pattern}`: {message}")]
    InvalidPattern {
        /// Category owning the rule.
        category: String,
        /// Pattern source as handed to the regex compiler.
        pattern: String,
        /// Compiler diagnostic.
        message: String,
    },

    /// A literal token is the empty string, which would match everywhere.
    #[error("category '{category}': literal tokens must not be empty")]
    EmptyLiteral {
        /// Category owning the rule.
        category: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
