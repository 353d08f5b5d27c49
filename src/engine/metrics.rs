//! Scan metrics.
//!
//! A small record of what one [`Scanner::run`](super::Scanner::run) did. The
//! counters are cheap to collect, so every scan fills them in; callers that
//! only want spans simply drop them.

use std::time::Duration;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanMetrics {
    /// Matchers that found at least one match in the text.
    pub initial_candidates: usize,
    /// Loop iterations performed (emitted spans plus zero-width winners).
    pub iterations: usize,
    /// Candidates removed because their matcher ran out of matches.
    pub exhausted_candidates: usize,
    /// `true` when the iteration limit stopped the scan with candidates left.
    pub truncated: bool,
    /// Wall-clock time spent scanning.
    pub elapsed: Duration,
}
