//! Pure aggregation over collected matches.
//!
//! Overall similarity is the **maximum** across matches, not an average —
//! one strong hit is disqualifying even when every other source found
//! nothing. Ranking is a stable descending sort, so equal scores keep
//! source dispatch order and the outcome never depends on which branch
//! finished first.

use crate::types::{CheckVerdict, SourceMatch};

/// Highest similarity across `matches`, or 0 when empty.
pub fn overall_similarity(matches: &[SourceMatch]) -> f64 {
    matches.iter().map(|m| m.similarity).fold(0.0, f64::max)
}

/// Sort matches descending by similarity.
///
/// The sort is stable: ties keep their insertion order, which is the
/// source dispatch order (web, video, internal).
pub fn rank_matches(mut matches: Vec<SourceMatch>) -> Vec<SourceMatch> {
    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches
}

/// Assemble the verdict for a completed check.
///
/// `passed` is strict: a submission sitting exactly on the threshold fails.
pub fn assemble_verdict(
    submission_id: &str,
    matches: Vec<SourceMatch>,
    threshold: f64,
) -> CheckVerdict {
    let overall = overall_similarity(&matches);
    CheckVerdict {
        submission_id: submission_id.to_string(),
        overall_similarity: overall,
        matches: rank_matches(matches),
        passed: overall < threshold,
    }
}
