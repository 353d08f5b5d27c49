//! Scanning engine.
//!
//! The engine is split into focused submodules under `src/engine/`, built
//! bottom-up:
//!
//! ```text
//! LanguageRules ──┐
//!                 │  compile_literals / compile_pattern   (compiler.rs)
//!                 └─────────────┬─────────────
//!                               │
//!                     PreparedRules::prepare              (prepared.rs)
//!                       - one merged-literal matcher per category
//!                       - one matcher per structured pattern
//!                               │
//! text ─────────────────────────┼─ Scanner::run          (scanner.rs)
//!                               │   - candidate pool, one per matcher
//!                               │   - earliest-then-longest winner
//!                               │   - selective re-synchronisation
//!                               v
//!                     Vec<ClassifiedSpan> + ScanMetrics   (metrics.rs)
//! ```
//!
//! `PreparedRules` is immutable once built and is shared (behind an `Arc`)
//! between scans and threads. All mutable state is local to one
//! [`Scanner::run`] call.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events: `debug` when a language is prepared and
//! when a scan is truncated, `trace` for every emitted span and every
//! candidate dropped from the pool.

#[path = "engine/compiler.rs"]
mod compiler;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/prepared.rs"]
mod prepared;
#[path = "engine/scanner.rs"]
mod scanner;

pub use compiler::CompiledMatcher;
pub use metrics::ScanMetrics;
pub use prepared::PreparedRules;
pub(crate) use scanner::{ScanResult, Scanner};
