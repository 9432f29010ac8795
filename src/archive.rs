//! Internal corpus comparison against previously approved submissions.
//!
//! The portal's submission store is reached through [`SubmissionArchive`],
//! keeping the engine free of any persistence dependency. Only approved
//! work is part of the comparison corpus — pending and rejected submissions
//! are never compared against.

use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::similarity;
use crate::types::{MatchSource, SourceMatch};
use serde_json::Value;

/// Maximum excerpt length carried on an internal match, in characters.
const EXCERPT_CHARS: usize = 200;

/// One previously approved submission from the portal archive.
#[derive(Debug, Clone)]
pub struct ArchivedSubmission {
    /// Submission record id.
    pub id: String,
    /// Project title, used for evidence display.
    pub title: String,
    /// The submitted form content as stored.
    pub content: Value,
}

/// Read path into the archive of prior submissions.
pub trait SubmissionArchive: Send + Sync {
    /// Returns every approved submission other than `exclude_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Archive`] if the store cannot be read. The
    /// orchestrator flattens the error to an empty result, so an archive
    /// outage degrades coverage rather than blocking the check.
    fn approved_excluding(
        &self,
        exclude_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ArchivedSubmission>, CheckError>> + Send;
}

/// Compare `text` against every approved submission in the archive.
///
/// Each candidate's stored content is rendered to text and scored with
/// [`similarity::score`]. Matches at or below `config.internal_floor` are
/// dropped — institutional submissions share boilerplate vocabulary, and
/// low-overlap internal matches add noise, not signal. Matches are
/// returned in archive order.
pub async fn compare_internal<A: SubmissionArchive>(
    text: &str,
    exclude_id: &str,
    config: &CheckConfig,
    archive: &A,
) -> Result<Vec<SourceMatch>, CheckError> {
    let candidates = archive.approved_excluding(exclude_id).await?;
    tracing::debug!(
        count = candidates.len(),
        "comparing against archived submissions"
    );

    let mut matches = Vec::new();
    for candidate in candidates {
        // A re-checked submission must never match itself, whatever the
        // archive handed back.
        if candidate.id == exclude_id {
            continue;
        }

        let content = content_text(&candidate.content);
        let score = similarity::score(text, &content);
        if score <= config.internal_floor {
            continue;
        }

        matches.push(SourceMatch {
            source: MatchSource::Internal,
            reference: format!("/admin/submissions/{}", candidate.id),
            similarity: score,
            title: candidate.title,
            excerpt: content.chars().take(EXCERPT_CHARS).collect(),
        });
    }

    tracing::debug!(count = matches.len(), "internal matches above floor");
    Ok(matches)
}

/// Render stored submission content to comparison text.
///
/// Plain string content compares as-is; structured content compares as its
/// compact JSON rendering, punctuation and all.
fn content_text(content: &Value) -> String {
    match content {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
