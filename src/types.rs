//! Core types for originality matches and check verdicts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One origin of comparison text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    /// General web search.
    Web,
    /// Video-platform search.
    Video,
    /// The portal's archive of previously approved submissions.
    Internal,
}

impl MatchSource {
    /// Returns the identifier of this source as it appears in stored verdicts.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Video => "video",
            Self::Internal => "internal",
        }
    }

    /// Maximum query length the source's provider accepts, in characters.
    ///
    /// `None` for sources that are not queried over the network.
    pub fn query_limit(&self) -> Option<usize> {
        match self {
            Self::Web => Some(200),
            Self::Video => Some(100),
            Self::Internal => None,
        }
    }

    /// Returns all source variants in dispatch order.
    pub fn all() -> &'static [MatchSource] {
        &[Self::Web, Self::Video, Self::Internal]
    }
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single candidate overlap found against one external or internal item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMatch {
    /// Which source produced this match.
    pub source: MatchSource,
    /// Locator for evidence display — a URL for external sources, an admin
    /// record path for internal ones. Never used for scoring.
    pub reference: String,
    /// Token-overlap score between the submitted text and this match's
    /// content, in `[0, 100]`.
    pub similarity: f64,
    /// Display title of the matched item.
    pub title: String,
    /// Short excerpt of the matched content.
    pub excerpt: String,
}

/// The aggregated outcome of one full originality check.
///
/// Serializable so the caller can persist it as a JSON document alongside
/// the submission record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckVerdict {
    /// The submission that was checked.
    pub submission_id: String,
    /// Highest similarity across all collected matches; 0 when no source
    /// found anything. The worst case gates the verdict — a single strong
    /// hit is disqualifying even if every other source came back empty.
    pub overall_similarity: f64,
    /// All collected matches, sorted descending by similarity. Equal scores
    /// keep source dispatch order.
    pub matches: Vec<SourceMatch>,
    /// Whether the submission is considered original
    /// (`overall_similarity < threshold`).
    pub passed: bool,
}
