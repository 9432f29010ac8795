//! Verdict persistence seam.
//!
//! The engine's contract ends at producing a [`CheckVerdict`] in memory;
//! where it lands is the portal's concern. [`VerdictSink`] is the write
//! path the background runner hands completed verdicts to.

use crate::error::CheckError;
use crate::types::CheckVerdict;

/// Write path for completed verdicts.
///
/// Each verdict is delivered at most once per check invocation. The engine
/// does not retry on failure — the background runner logs the error and
/// moves on.
pub trait VerdictSink: Send + Sync {
    /// Record the verdict for its submission.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Sink`] if the verdict could not be written.
    fn record(
        &self,
        verdict: &CheckVerdict,
    ) -> impl std::future::Future<Output = Result<(), CheckError>> + Send;
}
