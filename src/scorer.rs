//! Overlap scoring between a query phrase sequence and a reference phrase set.

use crate::phrase::{Phrase, PhraseSet};

/// Percentage of `query` phrases present in `target`, in `[0.0, 100.0]`.
///
/// Matching counts with multiplicity on the query side: a repeated query
/// phrase counts once per occurrence, while the target contributes each
/// distinct phrase once. An empty query scores 0.0 rather than dividing
/// by zero.
///
/// No rounding is applied here; formatting is the caller's concern.
pub fn overlap_percentage(target: &PhraseSet, query: &[Phrase]) -> f64 {
    if query.is_empty() {
        return 0.0;
    }

    let matched = query
        .iter()
        .filter(|phrase| target.contains(phrase))
        .count();

    (matched as f64 / query.len() as f64) * 100.0
}
