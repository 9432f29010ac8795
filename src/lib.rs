//! # originality
//!
//! Concurrent multi-source originality checking for student project
//! submissions.
//!
//! Given a block of submitted text, the engine measures how much of it
//! overlaps with content found by a web search provider, a video-platform
//! search provider, and the portal's own archive of previously approved
//! submissions, then renders a single pass/fail verdict with supporting
//! evidence.
//!
//! ## Design
//!
//! - Queries all three sources concurrently and merges/ranks their matches
//! - Every source fails open: missing credentials, network failures, and
//!   malformed responses degrade coverage but never block a submission
//! - Similarity is plain token-set overlap (Jaccard) — fast, word-order
//!   insensitive, and explainable to the students who see the percentages
//! - Overall similarity is the worst case across matches: one strong hit
//!   fails the check even when every other source came back empty
//! - In-memory TTL cache for external source results
//!
//! ## Security
//!
//! - Provider credentials never appear in errors or logs
//! - Submission text is logged only at trace level
//! - No network listeners — this is a library, not a server

pub mod archive;
pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod similarity;
pub mod sink;
pub mod source;
pub mod sources;
pub mod types;

pub use archive::{ArchivedSubmission, SubmissionArchive};
pub use config::CheckConfig;
pub use error::{CheckError, Result};
pub use sink::VerdictSink;
pub use source::SourceAdapter;
pub use types::{CheckVerdict, MatchSource, SourceMatch};

use std::sync::Arc;

/// Run a full originality check for one submission.
///
/// Dispatches the web source, the video source, and the internal comparator
/// concurrently, merges whatever they found, and gates pass/fail on
/// `config.threshold`. The verdict is returned in memory; persisting it is
/// the caller's concern (or use [`spawn_check`] to run in the background
/// and hand the verdict to a [`VerdictSink`]).
///
/// # Errors
///
/// Returns [`CheckError::Config`] if `config` is invalid. Source failures
/// never surface here — each source fails open to an empty match list.
///
/// # Examples
///
/// ```no_run
/// use originality::{ArchivedSubmission, CheckConfig, SubmissionArchive};
///
/// struct PortalArchive;
///
/// impl SubmissionArchive for PortalArchive {
///     async fn approved_excluding(
///         &self,
///         _exclude_id: &str,
///     ) -> originality::Result<Vec<ArchivedSubmission>> {
///         Ok(vec![])
///     }
/// }
///
/// # async fn example() -> originality::Result<()> {
/// let config = CheckConfig::from_env();
/// let verdict =
///     originality::check("submitted abstract text", "sub-42", &config, &PortalArchive).await?;
/// if !verdict.passed {
///     println!("flagged at {:.1}%", verdict.overall_similarity);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn check<A: SubmissionArchive>(
    text: &str,
    submission_id: &str,
    config: &CheckConfig,
    archive: &A,
) -> Result<CheckVerdict> {
    orchestrator::check::run_check(text, submission_id, config, archive).await
}

/// Run a check in the background and record the verdict.
///
/// The portal triggers checks fire-and-forget after a submission is
/// recorded — the submitting request must not wait on providers. The whole
/// check runs on a spawned task; the completed verdict is handed to `sink`
/// exactly once. Check and sink failures are logged at error level and
/// never surface to the triggering caller.
///
/// The returned [`tokio::task::JoinHandle`] can be awaited in tests; the
/// portal drops it.
pub fn spawn_check<A, S>(
    text: String,
    submission_id: String,
    config: CheckConfig,
    archive: Arc<A>,
    sink: Arc<S>,
) -> tokio::task::JoinHandle<()>
where
    A: SubmissionArchive + 'static,
    S: VerdictSink + 'static,
{
    tokio::spawn(async move {
        match orchestrator::check::run_check(&text, &submission_id, &config, archive.as_ref())
            .await
        {
            Ok(verdict) => {
                if let Err(err) = sink.record(&verdict).await {
                    tracing::error!(
                        submission_id = %submission_id,
                        error = %err,
                        "failed to record verdict"
                    );
                }
            }
            Err(err) => {
                tracing::error!(
                    submission_id = %submission_id,
                    error = %err,
                    "originality check failed"
                );
            }
        }
    })
}
