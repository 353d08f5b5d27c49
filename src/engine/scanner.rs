//! Scan-and-classify loop.
//!
//! This module is the operational core of the engine. Given the prepared
//! matchers of a language and one text unit, it produces a left-to-right,
//! non-overlapping sequence of [`ClassifiedSpan`]s.
//!
//! ## Key concepts
//!
//! - **Candidate**: the most recent match `(start, len)` of one matcher. Every
//!   matcher with a match somewhere in the text starts with one candidate.
//! - **consumed**: end of the last emitted span. Everything before it is final.
//! - **next_search**: offset from which stale candidates search again.
//!
//! ## Loop
//!
//! ```text
//! pool = first match of every matcher from offset 0
//! while pool not empty:
//!     winner = min by (start asc, len desc), first in pool order on a tie
//!     stop if iteration_limit reached
//!     len > 0  -> emit span, consumed = start + len
//!     next_search = start + len   (+1 char when len == 0)
//!     re-search the winner and every candidate starting before `consumed`
//!     from next_search; drop the ones that no longer match
//! ```
//!
//! Only candidates invalidated by the consumed text search again; candidates
//! pointing further ahead keep their match verbatim.
//!
//! ## Termination
//!
//! Every iteration either emits a non-empty span or moves the winner's search
//! position strictly forward, so the pool drains in at most
//! `O(text.len() * matchers)` iterations. The iteration limit in [`Options`]
//! caps it further.

use super::compiler::CompiledMatcher;
use super::metrics::ScanMetrics;
use super::prepared::PreparedRules;
use crate::{ClassifiedSpan, Options};
use std::cmp::Reverse;
use std::time::Instant;
use tracing::{debug, trace};

/// Live scan state of one matcher.
#[derive(Debug, Clone, Copy)]
struct Candidate<'m> {
    matcher: &'m CompiledMatcher,
    start: usize,
    len: usize,
}

/// Scanner output bundled with its metrics.
#[derive(Debug, Clone)]
pub(crate) struct ScanResult {
    pub spans: Vec<ClassifiedSpan>,
    pub metrics: ScanMetrics,
}

/// Runs prepared matchers over one text unit.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    text: &'a str,
    prepared: &'a PreparedRules,
}

impl<'a> Scanner<'a> {
    pub fn new(prepared: &'a PreparedRules, text: &'a str) -> Self {
        Self { text, prepared }
    }

    pub fn run(&self, options: &Options) -> ScanResult {
        let started = Instant::now();
        let text = self.text;
        let mut metrics = ScanMetrics::default();
        let mut spans = Vec::new();

        let mut pool: Vec<Candidate<'a>> = self
            .prepared
            .matchers()
            .iter()
            .filter_map(|matcher| matcher.find_from(text, 0).map(|(start, len)| Candidate { matcher, start, len }))
            .collect();
        metrics.initial_candidates = pool.len();

        let mut consumed = 0;

        while let Some(winner_idx) = select_winner(&pool) {
            if metrics.iterations >= options.iteration_limit {
                metrics.truncated = true;
                debug!(
                    limit = options.iteration_limit,
                    consumed,
                    remaining = pool.len(),
                    "iteration limit reached, leaving the rest of the text unclassified"
                );
                break;
            }

            let winner = pool[winner_idx];
            let next_search = if winner.len > 0 {
                let span = ClassifiedSpan {
                    start: winner.start,
                    len: winner.len,
                    category: winner.matcher.category_name().clone(),
                };
                trace!(start = span.start, len = span.len, category = span.category(), "classified span");
                spans.push(span);
                consumed = winner.start + winner.len;
                consumed
            } else {
                next_char_boundary(text, winner.start)
            };

            let mut idx = 0;
            pool.retain_mut(|candidate| {
                let is_winner = idx == winner_idx;
                idx += 1;
                if !is_winner && candidate.start >= consumed {
                    return true;
                }
                match candidate.matcher.find_from(text, next_search) {
                    Some((start, len)) => {
                        candidate.start = start;
                        candidate.len = len;
                        true
                    }
                    None => {
                        let matcher = candidate.matcher;
                        trace!(seq = matcher.seq(), category = matcher.category(), "candidate exhausted");
                        metrics.exhausted_candidates += 1;
                        false
                    }
                }
            });

            metrics.iterations += 1;
        }

        metrics.elapsed = started.elapsed();
        ScanResult { spans, metrics }
    }
}

/// Earliest start wins; on equal starts the longest match wins. Remaining
/// ties go to the candidate that comes first in the pool.
fn select_winner(pool: &[Candidate<'_>]) -> Option<usize> {
    pool.iter().enumerate().min_by_key(|(_, c)| (c.start, Reverse(c.len))).map(|(idx, _)| idx)
}

/// First char boundary strictly after `pos`; `text.len() + 1` once past the end.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return pos + 1;
    }
    let mut next = pos + 1;
    while !text.is_char_boundary(next) {
        next += 1;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LanguageRules;

    fn scan(rules: &LanguageRules, text: &str) -> ScanResult {
        let prepared = PreparedRules::prepare(rules).unwrap();
        Scanner::new(&prepared, text).run(&Options::default())
    }

    fn triples(result: &ScanResult) -> Vec<(usize, usize, String)> {
        result.spans.iter().map(|s| (s.start, s.len, s.category().to_string())).collect()
    }

    #[test]
    fn keywords_and_separators_interleave() {
        let rules = language! {
            "keyword" => words!["if", "else"],
            "separator" => words!["(", ")", "{", "}"],
        };
        let result = scan(&rules, "if(x){}else{}");
        let kw = |s: usize, l: usize| (s, l, "keyword".to_string());
        let sep = |s: usize, l: usize| (s, l, "separator".to_string());
        assert_eq!(
            triples(&result),
            vec![kw(0, 2), sep(2, 1), sep(4, 1), sep(5, 1), sep(6, 1), kw(7, 4), sep(11, 1), sep(12, 1)]
        );
        assert!(!result.metrics.truncated);
        assert_eq!(result.metrics.iterations, 8);
        assert_eq!(result.metrics.initial_candidates, 2);
        assert_eq!(result.metrics.exhausted_candidates, 2);
    }

    #[test]
    fn longest_literal_is_one_span() {
        let rules = language! { "separator" => words!["<", "<<", "<<="] };
        assert_eq!(triples(&scan(&rules, "<<=")), vec![(0, 3, "separator".to_string())]);
    }

    #[test]
    fn earliest_match_wins_regardless_of_declaration_order() {
        let rules = language! {
            "comment" => vec![pat!(r"//.*")],
            "value" => vec![pat!(r"\d+")],
        };
        let result = scan(&rules, "1 // 2");
        assert_eq!(triples(&result), vec![(0, 1, "value".to_string()), (2, 4, "comment".to_string())]);
    }

    #[test]
    fn longer_match_wins_on_equal_start() {
        let forward = language! {
            "operator" => words!["<"],
            "shift" => words!["<<"],
        };
        let backward = language! {
            "shift" => words!["<<"],
            "operator" => words!["<"],
        };
        for rules in [forward, backward] {
            assert_eq!(triples(&scan(&rules, "<<")), vec![(0, 2, "shift".to_string())]);
        }
    }

    #[test]
    fn exact_ties_go_to_the_first_matcher() {
        let rules = language! {
            "keyword" => words!["int"],
            "type" => words!["int"],
        };
        assert_eq!(triples(&scan(&rules, "int")), vec![(0, 3, "keyword".to_string())]);
    }

    #[test]
    fn overlapping_candidates_are_resynchronised() {
        // The string swallows the `//`, so the comment must search again after it.
        let rules = language! {
            "value" => vec![pat!(r#""[^"]*""#)],
            "comment" => vec![pat!(r"//.*")],
        };
        let result = scan(&rules, r#""http://x" // tail"#);
        assert_eq!(triples(&result), vec![(0, 10, "value".to_string()), (11, 7, "comment".to_string())]);
    }

    #[test]
    fn zero_width_matcher_terminates() {
        let rules = language! { "value" => vec![pat!("x*")] };
        let opts = Options { iteration_limit: usize::MAX };
        let prepared = PreparedRules::prepare(&rules).unwrap();
        let result = Scanner::new(&prepared, "ab").run(&opts);
        assert!(result.spans.is_empty());
        // Empty matches at 0, 1 and 2, then the cursor runs past the end.
        assert_eq!(result.metrics.iterations, 3);
        assert_eq!(result.metrics.exhausted_candidates, 1);
    }

    #[test]
    fn zero_width_matches_do_not_block_real_ones() {
        let rules = language! {
            "value" => vec![pat!(r"\d*")],
            "keyword" => words!["if"],
        };
        let opts = Options { iteration_limit: usize::MAX };
        let prepared = PreparedRules::prepare(&rules).unwrap();
        let result = Scanner::new(&prepared, "if 42").run(&opts);
        assert_eq!(triples(&result), vec![(0, 2, "keyword".to_string()), (3, 2, "value".to_string())]);
        assert!(!result.metrics.truncated);
    }

    #[test]
    fn zero_width_advance_respects_char_boundaries() {
        let rules = language! {
            "value" => vec![pat!("z*")],
            "keyword" => words!["fn"],
        };
        let opts = Options { iteration_limit: usize::MAX };
        let prepared = PreparedRules::prepare(&rules).unwrap();
        let result = Scanner::new(&prepared, "é fn").run(&opts);
        assert_eq!(triples(&result), vec![(3, 2, "keyword".to_string())]);
    }

    #[test]
    fn iteration_limit_truncates_silently() {
        let rules = language! { "separator" => words![";"] };
        let result = scan(&rules, &";".repeat(20));
        assert_eq!(result.spans.len(), Options::DEFAULT_ITERATION_LIMIT);
        assert!(result.metrics.truncated);
        let last = result.spans.last().unwrap();
        assert_eq!(last.end(), Options::DEFAULT_ITERATION_LIMIT);
    }

    #[test]
    fn no_matches_means_no_candidates() {
        let rules = language! { "keyword" => words!["while"] };
        let result = scan(&rules, "for x in y");
        assert!(result.spans.is_empty());
        assert_eq!(result.metrics.initial_candidates, 0);
        assert_eq!(result.metrics.iterations, 0);
    }

    #[test]
    fn spans_never_overlap() {
        let rules = crate::rules::c::rules();
        let text = "int main(void) { /* a */ return x <<= 0x1F; } // done\n\"s\\\"q\"";
        let result = scan(&rules, text);
        for pair in result.spans.windows(2) {
            assert!(pair[0].end() <= pair[1].start, "overlap: {:?}", pair);
        }
    }

    #[test]
    fn next_char_boundary_skips_multibyte_chars() {
        assert_eq!(next_char_boundary("aé", 0), 1);
        assert_eq!(next_char_boundary("é", 0), 2);
        assert_eq!(next_char_boundary("ab", 2), 3);
    }
}
