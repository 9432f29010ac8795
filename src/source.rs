//! Trait definition for external source backends.
//!
//! Each external corpus (web search, video search) implements
//! [`SourceAdapter`] to provide a uniform interface for querying a provider
//! and scoring its candidate matches.

use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::types::{MatchSource, SourceMatch};

/// An external source backend.
///
/// Implementors query a specific search provider's JSON API and map its
/// response items to scored [`SourceMatch`] values. Each adapter handles
/// its own:
///
/// - query truncation to the provider's length limit
/// - URL construction with query encoding and credentials
/// - JSON response decoding
/// - similarity scoring against the provider's returned snippets
///
/// Missing credentials are a valid disabled state — the adapter returns
/// `Ok(vec![])`, not an error. Network and decode failures return `Err`;
/// the orchestrator flattens them to empty match lists so that no provider
/// outage ever blocks a submission.
///
/// All implementations must be `Send + Sync` for concurrent dispatch.
pub trait SourceAdapter: Send + Sync {
    /// Query the source for content overlapping `text`.
    ///
    /// `text` is the full submission text. Implementations truncate it to
    /// their provider's query limit before dispatch, but score each
    /// returned snippet against the full text.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError`] if the HTTP request fails, the provider
    /// responds with a non-success status, or the response cannot be
    /// decoded.
    fn search(
        &self,
        text: &str,
        config: &CheckConfig,
    ) -> impl std::future::Future<Output = Result<Vec<SourceMatch>, CheckError>> + Send;

    /// Returns which [`MatchSource`] variant this adapter represents.
    fn source_type(&self) -> MatchSource;

    /// Maximum query length this adapter sends to its provider, when any.
    ///
    /// Typically delegates to [`MatchSource::query_limit()`].
    fn query_limit(&self) -> Option<usize> {
        self.source_type().query_limit()
    }
}
