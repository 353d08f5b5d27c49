use crate::engine::{ScanMetrics, ScanResult};
use crate::{CategoryName, Registry, Result};
use once_cell::sync::Lazy;

static BUILTIN: Lazy<Registry> = Lazy::new(Registry::builtin);

/// Options that affect a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of loop iterations per text unit. Each iteration emits
    /// at most one span, so this also bounds the span count. Text after the
    /// last emitted span is left unclassified when the limit is hit.
    pub iteration_limit: usize,
}

impl Options {
    pub const DEFAULT_ITERATION_LIMIT: usize = 11;
}

impl Default for Options {
    fn default() -> Self {
        Self { iteration_limit: Self::DEFAULT_ITERATION_LIMIT }
    }
}

/// A classified region of the scanned text.
///
/// `start`/`len` are byte offsets into the original, unsplit text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassifiedSpan {
    pub start: usize,
    pub len: usize,
    pub category: CategoryName,
}

impl ClassifiedSpan {
    /// End byte index (exclusive).
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Slice of `text` covered by this span.
    pub fn text<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end()]
    }
}

/// Spans plus the metrics of the scan that produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub spans: Vec<ClassifiedSpan>,
    pub metrics: ScanMetrics,
}

impl From<ScanResult> for ScanReport {
    fn from(result: ScanResult) -> Self {
        Self { spans: result.spans, metrics: result.metrics }
    }
}

/// Classify `text` with a built-in language (`"c"`, `"go"`, `"lua"`).
///
/// Unknown languages yield no spans.
///
/// # Example
/// ```
/// let spans = lexmark::classify("go", "var x int").unwrap();
/// let labels: Vec<_> = spans.iter().map(|s| s.category()).collect();
/// assert_eq!(labels, ["keyword", "type"]);
///
/// assert!(lexmark::classify("cobol", "MOVE A TO B").unwrap().is_empty());
/// ```
pub fn classify(language: &str, text: &str) -> Result<Vec<ClassifiedSpan>> {
    BUILTIN.classify(language, text)
}

/// Like [`classify`] with explicit [`Options`].
pub fn classify_with(language: &str, text: &str, options: &Options) -> Result<Vec<ClassifiedSpan>> {
    BUILTIN.classify_with(language, text, options)
}

/// Like [`classify_with`] but also returns [`ScanMetrics`].
pub fn classify_verbose(language: &str, text: &str, options: &Options) -> Result<ScanReport> {
    BUILTIN.classify_verbose(language, text, options)
}
