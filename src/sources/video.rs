//! Video search source — video platform Data API v3.
//!
//! Queries `search?part=snippet` and scores each video's description
//! against the submitted text. Non-video items (channels, playlists) carry
//! no video id and are skipped.

use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::http;
use crate::similarity;
use crate::source::SourceAdapter;
use crate::types::{MatchSource, SourceMatch};
use serde::Deserialize;
use url::Url;

use super::truncate_query;

/// Result-page size requested from the provider. The full page is
/// reported; the provider itself bounds it.
const PAGE_SIZE: usize = 10;

/// Video search adapter over the platform's Data API.
///
/// Requires an API key; without one the source is disabled and contributes
/// no matches.
pub struct VideoSource;

#[derive(Debug, Deserialize)]
pub(crate) struct VideoResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoItem {
    id: VideoId,
    snippet: VideoSnippet,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoId {
    /// Absent for channel and playlist results.
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoSnippet {
    title: String,
    #[serde(default)]
    description: String,
}

impl SourceAdapter for VideoSource {
    async fn search(
        &self,
        text: &str,
        config: &CheckConfig,
    ) -> Result<Vec<SourceMatch>, CheckError> {
        let Some(key) = config.video_credentials() else {
            tracing::debug!("video search not configured; source disabled");
            return Ok(vec![]);
        };

        let limit = self.query_limit().unwrap_or(usize::MAX);
        let query = truncate_query(text, limit);
        tracing::trace!(query, "video search");

        let quoted = format!("\"{query}\"");
        let page_size = PAGE_SIZE.to_string();
        let url = Url::parse_with_params(
            &config.video_endpoint,
            &[
                ("part", "snippet"),
                ("q", quoted.as_str()),
                ("key", key),
                ("maxResults", page_size.as_str()),
            ],
        )
        .map_err(|e| CheckError::Http(format!("video search URL invalid: {e}")))?;

        let client = http::build_client(config)?;
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| CheckError::Http(format!("video search request failed: {e}")))?
            .error_for_status()
            .map_err(|e| CheckError::Http(format!("video search HTTP error: {e}")))?;

        let body: VideoResponse = response
            .json()
            .await
            .map_err(|e| CheckError::Parse(format!("video search response malformed: {e}")))?;

        let matches = score_items(text, body);
        tracing::debug!(count = matches.len(), "video matches scored");
        Ok(matches)
    }

    fn source_type(&self) -> MatchSource {
        MatchSource::Video
    }
}

/// Map provider items to scored matches, skipping non-video results.
///
/// Extracted as a separate function for testability with synthetic
/// responses.
pub(crate) fn score_items(text: &str, body: VideoResponse) -> Vec<SourceMatch> {
    body.items
        .into_iter()
        .filter_map(|item| {
            let video_id = item.id.video_id?;
            let similarity = similarity::score(text, &item.snippet.description);
            Some(SourceMatch {
                source: MatchSource::Video,
                reference: format!("https://www.youtube.com/watch?v={video_id}"),
                similarity,
                title: item.snippet.title,
                excerpt: item.snippet.description,
            })
        })
        .collect()
}
