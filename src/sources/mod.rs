//! External source adapter implementations.
//!
//! Each module provides a struct implementing [`crate::source::SourceAdapter`]
//! that queries a specific provider's JSON API and scores the returned
//! snippets against the submitted text.

pub mod video;
pub mod web;

pub use video::VideoSource;
pub use web::WebSource;

/// Truncate `text` to at most `limit` characters on a char boundary.
///
/// Providers reject over-long queries, so each adapter trims the submission
/// text before dispatch. Scoring still uses the full text.
pub(crate) fn truncate_query(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
