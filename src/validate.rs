//! YouTube URL validation.
//!
//! Pure and synchronous; gates submission before any network call is made.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a YouTube URL")]
    Empty,
    #[error("Please enter a valid YouTube URL")]
    InvalidUrl,
}

lazy_static! {
    /// The accepted URL shapes: watch page, short link, embed.
    static ref YOUTUBE_PATTERNS: [Regex; 3] = [
        Regex::new(r"^https?://(www\.)?youtube\.com/watch\?v=[\w-]+").unwrap(),
        Regex::new(r"^https?://youtu\.be/[\w-]+").unwrap(),
        Regex::new(r"^https?://(www\.)?youtube\.com/embed/[\w-]+").unwrap(),
    ];
}

/// Validate a raw input string as a YouTube video URL.
///
/// Returns the trimmed URL on success. Empty or whitespace-only input is
/// reported separately from a non-empty string that matches no accepted
/// shape. The patterns are anchored at the start of the raw input, so
/// leading whitespace is rejected; only the accepted URL is trimmed.
/// URLs to other hosts are rejected.
pub fn validate_youtube_url(raw: &str) -> Result<&str, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    if YOUTUBE_PATTERNS.iter().any(|pattern| pattern.is_match(raw)) {
        Ok(raw.trim())
    } else {
        Err(ValidationError::InvalidUrl)
    }
}
