//! Shared HTTP client for search provider requests.
//!
//! Provides a configured [`reqwest::Client`] with the per-request timeout
//! from [`CheckConfig`]. The providers are credentialed JSON APIs, so no
//! cookie store, redirect chasing, or User-Agent rotation is needed.

use crate::config::CheckConfig;
use crate::error::CheckError;
use std::time::Duration;

/// User-Agent sent with every provider request.
const USER_AGENT: &str = concat!("portal-originality/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for querying search providers.
///
/// The client has:
/// - Timeout from config (covers connect, send, and body read)
/// - The crate's static User-Agent
/// - Gzip decompression
///
/// # Errors
///
/// Returns [`CheckError::Http`] if the client cannot be constructed.
pub fn build_client(config: &CheckConfig) -> Result<reqwest::Client, CheckError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| CheckError::Http(format!("failed to build HTTP client: {e}")))
}
