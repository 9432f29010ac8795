//! Check configuration with sensible defaults.
//!
//! [`CheckConfig`] carries the pass/fail threshold, provider credentials and
//! endpoints, timeouts, and caching behaviour. The threshold is supplied by
//! the portal's configuration and honoured exactly as given — the engine
//! never substitutes its own value.

use crate::error::CheckError;

/// Configuration for an originality check.
///
/// Use [`Default::default()`] for sensible defaults, or construct with field
/// overrides for custom behaviour. [`CheckConfig::from_env`] picks up
/// provider credentials from the portal's deployment environment.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Similarity percentage at or above which a submission fails the check.
    pub threshold: f64,
    /// API key for the web search provider. `None` disables the web source.
    pub web_api_key: Option<String>,
    /// Search-engine id for the web search provider. Required alongside
    /// `web_api_key` for the web source to be enabled.
    pub web_engine_id: Option<String>,
    /// API key for the video search provider. `None` disables the video
    /// source.
    pub video_api_key: Option<String>,
    /// Endpoint of the web search provider.
    pub web_endpoint: String,
    /// Endpoint of the video search provider.
    pub video_endpoint: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Minimum similarity an internal-archive match must exceed to be
    /// reported. Approved submissions share institutional boilerplate, so
    /// low-overlap internal matches are noise rather than signal.
    pub internal_floor: f64,
    /// How long to cache external source results in seconds. Set to 0 to
    /// disable caching.
    pub cache_ttl_seconds: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            threshold: 25.0,
            web_api_key: None,
            web_engine_id: None,
            video_api_key: None,
            web_endpoint: "https://www.googleapis.com/customsearch/v1".into(),
            video_endpoint: "https://www.googleapis.com/youtube/v3/search".into(),
            timeout_seconds: 8,
            internal_floor: 20.0,
            cache_ttl_seconds: 600,
        }
    }
}

impl CheckConfig {
    /// Build a config from the portal's deployment environment.
    ///
    /// Reads `GOOGLE_SEARCH_API_KEY`, `GOOGLE_SEARCH_ENGINE_ID`, and
    /// `YOUTUBE_API_KEY`. Unset or empty variables leave the corresponding
    /// source disabled — a valid configured state, not an error.
    pub fn from_env() -> Self {
        fn non_empty(var: &str) -> Option<String> {
            std::env::var(var).ok().filter(|v| !v.is_empty())
        }
        Self {
            web_api_key: non_empty("GOOGLE_SEARCH_API_KEY"),
            web_engine_id: non_empty("GOOGLE_SEARCH_ENGINE_ID"),
            video_api_key: non_empty("YOUTUBE_API_KEY"),
            ..Self::default()
        }
    }

    /// Web provider credentials, when the web source is fully configured.
    pub fn web_credentials(&self) -> Option<(&str, &str)> {
        match (self.web_api_key.as_deref(), self.web_engine_id.as_deref()) {
            (Some(key), Some(engine_id)) => Some((key, engine_id)),
            _ => None,
        }
    }

    /// Video provider credentials, when the video source is configured.
    pub fn video_credentials(&self) -> Option<&str> {
        self.video_api_key.as_deref()
    }

    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `threshold` must be finite and within `0..=100`
    /// - `timeout_seconds` must be greater than 0
    /// - `internal_floor` must be finite and within `0..=100`
    pub fn validate(&self) -> Result<(), CheckError> {
        if !self.threshold.is_finite() || !(0.0..=100.0).contains(&self.threshold) {
            return Err(CheckError::Config(
                "threshold must be within 0..=100".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(CheckError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if !self.internal_floor.is_finite() || !(0.0..=100.0).contains(&self.internal_floor) {
            return Err(CheckError::Config(
                "internal_floor must be within 0..=100".into(),
            ));
        }
        Ok(())
    }
}
