//! Web search source — Custom Search JSON API.
//!
//! Issues one credentialed `GET` per check and scores each returned snippet
//! against the submitted text. The engine never fetches the full pages
//! behind the results; the provider's snippet is the comparison body.

use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::http;
use crate::similarity;
use crate::source::SourceAdapter;
use crate::types::{MatchSource, SourceMatch};
use serde::Deserialize;
use url::Url;

use super::truncate_query;

/// Maximum number of matches reported from one web query.
const MAX_MATCHES: usize = 5;

/// Web search adapter over the Custom Search JSON API.
///
/// Requires both an API key and a search-engine id; with either missing
/// the source is disabled and contributes no matches.
pub struct WebSource;

#[derive(Debug, Deserialize)]
pub(crate) struct WebResponse {
    /// Absent entirely when the provider finds nothing.
    #[serde(default)]
    items: Vec<WebItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WebItem {
    link: String,
    title: String,
    #[serde(default)]
    snippet: String,
}

impl SourceAdapter for WebSource {
    async fn search(
        &self,
        text: &str,
        config: &CheckConfig,
    ) -> Result<Vec<SourceMatch>, CheckError> {
        let Some((key, engine_id)) = config.web_credentials() else {
            tracing::debug!("web search not configured; source disabled");
            return Ok(vec![]);
        };

        let limit = self.query_limit().unwrap_or(usize::MAX);
        let query = truncate_query(text, limit);
        tracing::trace!(query, "web search");

        // The query is sent quoted so the provider searches for the phrase
        // rather than the individual words.
        let quoted = format!("\"{query}\"");
        let url = Url::parse_with_params(
            &config.web_endpoint,
            &[("key", key), ("cx", engine_id), ("q", quoted.as_str())],
        )
        .map_err(|e| CheckError::Http(format!("web search URL invalid: {e}")))?;

        let client = http::build_client(config)?;
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| CheckError::Http(format!("web search request failed: {e}")))?
            .error_for_status()
            .map_err(|e| CheckError::Http(format!("web search HTTP error: {e}")))?;

        let body: WebResponse = response
            .json()
            .await
            .map_err(|e| CheckError::Parse(format!("web search response malformed: {e}")))?;

        let matches = score_items(text, body);
        tracing::debug!(count = matches.len(), "web matches scored");
        Ok(matches)
    }

    fn source_type(&self) -> MatchSource {
        MatchSource::Web
    }
}

/// Map provider items to scored matches, keeping the top of the page.
///
/// Extracted as a separate function for testability with synthetic
/// responses.
pub(crate) fn score_items(text: &str, body: WebResponse) -> Vec<SourceMatch> {
    body.items
        .into_iter()
        .take(MAX_MATCHES)
        .map(|item| {
            let similarity = similarity::score(text, &item.snippet);
            SourceMatch {
                source: MatchSource::Web,
                reference: item.link,
                similarity,
                title: item.title,
                excerpt: item.snippet,
            }
        })
        .collect()
}
