//! Core check orchestrator: concurrent three-way fan-out with fail-open
//! collection.
//!
//! Each check dispatches exactly three branches — web search, video search,
//! and the internal comparator — and joins them at a single point. The
//! branches share no mutable state; each produces its own private match
//! list.

use crate::archive::{self, SubmissionArchive};
use crate::cache::{self, CacheKey};
use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::source::SourceAdapter;
use crate::sources::{VideoSource, WebSource};
use crate::types::{CheckVerdict, MatchSource, SourceMatch};

use super::aggregate::assemble_verdict;

/// Run one full originality check.
///
/// # Pipeline
///
/// 1. Validate the configuration
/// 2. Fan out the web source, the video source, and the internal comparator
///    concurrently with [`futures::future::join3`]
/// 3. Collect outcomes in dispatch order, flattening per-source failures to
///    empty results at warn level
/// 4. Compute the overall similarity (maximum across matches, 0 if none)
/// 5. Rank matches descending, dispatch order breaking ties
/// 6. Gate pass/fail on `config.threshold`
///
/// Stateless across invocations: each call is independent and repeatable
/// against a fixed corpus snapshot.
///
/// # Errors
///
/// Returns [`CheckError::Config`] for an invalid configuration. Source
/// failures never surface here — a misconfigured or unreachable provider
/// degrades detection coverage, it does not block a submission.
pub async fn run_check<A: SubmissionArchive>(
    text: &str,
    submission_id: &str,
    config: &CheckConfig,
    archive: &A,
) -> Result<CheckVerdict, CheckError> {
    config.validate()?;

    let (web, video, internal) = futures::future::join3(
        query_source(MatchSource::Web, text, config),
        query_source(MatchSource::Video, text, config),
        archive::compare_internal(text, submission_id, config, archive),
    )
    .await;

    let mut matches: Vec<SourceMatch> = Vec::new();
    for (source, outcome) in [
        (MatchSource::Web, web),
        (MatchSource::Video, video),
        (MatchSource::Internal, internal),
    ] {
        match outcome {
            Ok(found) => {
                tracing::debug!(%source, count = found.len(), "source returned matches");
                matches.extend(found);
            }
            Err(err) => {
                tracing::warn!(%source, error = %err, "source failed; continuing without it");
            }
        }
    }

    let verdict = assemble_verdict(submission_id, matches, config.threshold);
    tracing::debug!(
        submission_id,
        overall = verdict.overall_similarity,
        passed = verdict.passed,
        "check complete"
    );
    Ok(verdict)
}

/// Query a single external source, consulting the result cache first.
///
/// Cached entries are keyed by (source, normalised text) and carry the
/// already-scored match list, so a hit skips the provider entirely.
async fn query_source(
    source: MatchSource,
    text: &str,
    config: &CheckConfig,
) -> Result<Vec<SourceMatch>, CheckError> {
    let cache_key = (config.cache_ttl_seconds > 0).then(|| CacheKey::new(source, text));
    if let Some(key) = &cache_key {
        if let Some(cached) = cache::get(key, config.cache_ttl_seconds).await {
            tracing::debug!(%source, count = cached.len(), "cache hit");
            return Ok(cached);
        }
    }

    let found = match source {
        MatchSource::Web => WebSource.search(text, config).await?,
        MatchSource::Video => VideoSource.search(text, config).await?,
        MatchSource::Internal => {
            return Err(CheckError::Config(
                "internal source is compared, not searched".into(),
            ))
        }
    };

    if let Some(key) = cache_key {
        cache::insert(key, found.clone(), config.cache_ttl_seconds).await;
    }
    Ok(found)
}
