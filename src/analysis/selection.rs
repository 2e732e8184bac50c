//! Predicate-filtered maximum selection over tile candidates

use crate::io::error::{PipelineError, Result};

/// Pick the eligible candidate with the greatest key
///
/// Candidates failing `predicate` are skipped. The key may be any
/// `PartialOrd` value, so tuples give lexicographic multi-criteria ranking.
/// Ties and incomparable keys (NaN) keep the earlier candidate.
///
/// The returned error carries a placeholder selection label; callers attach
/// their own with [`crate::io::error::WithContext::with_operation`].
///
/// # Errors
///
/// Returns [`PipelineError::NoEligibleCandidate`] if no candidate passes
pub fn select_best<T, K, I, P, F>(candidates: I, mut predicate: P, mut key: F) -> Result<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    let mut considered = 0;
    let mut best: Option<(T, K)> = None;

    for candidate in candidates {
        considered += 1;
        if !predicate(&candidate) {
            continue;
        }
        let score = key(&candidate);
        let replace = best
            .as_ref()
            .is_none_or(|(_, best_score)| score > *best_score);
        if replace {
            best = Some((candidate, score));
        }
    }

    best.map(|(candidate, _)| candidate)
        .ok_or(PipelineError::NoEligibleCandidate {
            selection: "candidate",
            considered,
        })
}
